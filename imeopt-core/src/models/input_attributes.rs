use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic type tag of a text-entry field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Email,
    Tel,
    Url,
    Password,
    Date,
    Time,
    Search,
    Number,
}

impl InputType {
    pub const ALL: [InputType; 9] = [
        Self::Text,
        Self::Email,
        Self::Tel,
        Self::Url,
        Self::Password,
        Self::Date,
        Self::Time,
        Self::Search,
        Self::Number,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Password => "password",
            Self::Date => "date",
            Self::Time => "time",
            Self::Search => "search",
            Self::Number => "number",
        }
    }

    /// Parse a type tag. Matching is case-insensitive; unknown tags yield `None`.
    pub fn parse_str(s: &str) -> Option<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|t| t.as_str() == lower)
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Virtual-keyboard hint for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    Text,
    Email,
    Tel,
    Url,
    Numeric,
    Decimal,
    Search,
}

impl InputMode {
    pub const ALL: [InputMode; 7] = [
        Self::Text,
        Self::Email,
        Self::Tel,
        Self::Url,
        Self::Numeric,
        Self::Decimal,
        Self::Search,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Numeric => "numeric",
            Self::Decimal => "decimal",
            Self::Search => "search",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|m| m.as_str() == lower)
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The pair of attributes a classification implies for a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputAttributes {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<InputType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputmode: Option<InputMode>,
}

impl InputAttributes {
    pub const fn new(input_type: Option<InputType>, inputmode: Option<InputMode>) -> Self {
        Self {
            input_type,
            inputmode,
        }
    }

    /// True when neither attribute is set.
    pub fn is_empty(&self) -> bool {
        self.input_type.is_none() && self.inputmode.is_none()
    }
}
