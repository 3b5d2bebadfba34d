use std::fmt;

use serde::{Deserialize, Serialize};

/// Short display symbol shown next to a classified field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    Email,
    Tel,
    Password,
    Url,
    Numeric,
    CreditCard,
    Date,
    Time,
    Search,
    Text,
    Unknown,
}

impl Glyph {
    /// The symbol rendered for this glyph.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Email => "📧",
            Self::Tel => "📞",
            Self::Password => "🔒",
            Self::Url => "🔗",
            Self::Numeric => "🔢",
            Self::CreditCard => "💳",
            Self::Date => "📅",
            Self::Time => "🕐",
            Self::Search => "🔍",
            Self::Text => "📝",
            Self::Unknown => "❓",
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
