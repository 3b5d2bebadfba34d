//! Format-pattern overrides.
//!
//! A literal example value in a placeholder (a date, a time, a phone number, a
//! postal code) beats the absence of a keyword. Overrides are checked in a
//! fixed order and the first hit wins. Digits are ASCII only.

use regex::Regex;
use std::sync::LazyLock;

use crate::rules::{self, ClassificationRule, RuleCategory, POSTAL_CODE_KEYWORD};

macro_rules! format_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Date: 2024/01/01, 2024-1-1 ────────────────────────────────────────────
format_pattern!(RE_DATE, r"[0-9]{4}[/-][0-9]{1,2}[/-][0-9]{1,2}");

// ── Time: 9:30, 00:00 ─────────────────────────────────────────────────────
format_pattern!(RE_TIME, r"[0-9]{1,2}:[0-9]{2}");

// ── Phone: 090-1234-5678, 03-1234-5678 ────────────────────────────────────
format_pattern!(RE_PHONE, r"[0-9]{2,4}-[0-9]{2,4}-[0-9]{4}");

// ── Postal code: 123-4567 ─────────────────────────────────────────────────
format_pattern!(RE_POSTAL_CODE, r"[0-9]{3}-[0-9]{4}");

/// Placeholder token standing for a four-digit year.
pub const YEAR_TOKEN: &str = "yyyy";

/// Placeholder token standing for hour and minute.
pub const HOUR_MINUTE_TOKEN: &str = "hh:mm";

/// A format override that fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatOverride {
    Date,
    Time,
    Phone,
    PostalCode,
}

impl FormatOverride {
    /// Overrides in evaluation order.
    pub const ORDER: [FormatOverride; 4] = [
        Self::Date,
        Self::Time,
        Self::Phone,
        Self::PostalCode,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Time => "time",
            Self::Phone => "phone",
            Self::PostalCode => "postal-code",
        }
    }

    fn regex(&self) -> &'static LazyLock<Option<Regex>> {
        match self {
            Self::Date => &RE_DATE,
            Self::Time => &RE_TIME,
            Self::Phone => &RE_PHONE,
            Self::PostalCode => &RE_POSTAL_CODE,
        }
    }

    fn token(&self) -> Option<&'static str> {
        match self {
            Self::Date => Some(YEAR_TOKEN),
            Self::Time => Some(HOUR_MINUTE_TOKEN),
            Self::Phone | Self::PostalCode => None,
        }
    }

    /// Whether this override fires on a lower-cased search string.
    pub fn matches(&self, search_text: &str) -> bool {
        let pattern_hit = self
            .regex()
            .as_ref()
            .is_some_and(|re| re.is_match(search_text));
        pattern_hit || self.token().is_some_and(|t| search_text.contains(t))
    }

    /// The rule whose attributes this override forces.
    pub fn rule(&self) -> Option<&'static ClassificationRule> {
        match self {
            Self::Date => rules::rule_for_category(RuleCategory::Date),
            Self::Time => rules::rule_for_category(RuleCategory::Time),
            Self::Phone => rules::rule_for_category(RuleCategory::Phone),
            Self::PostalCode => rules::rule_with_keyword(POSTAL_CODE_KEYWORD),
        }
    }
}

/// First override (in evaluation order) that fires on `search_text`.
pub fn detect_format(search_text: &str) -> Option<FormatOverride> {
    FormatOverride::ORDER
        .into_iter()
        .find(|o| o.matches(search_text))
}

/// Names of override patterns whose regex failed to compile.
///
/// A failed pattern never matches; its token check (if any) still applies.
pub fn failed_patterns() -> Vec<&'static str> {
    FormatOverride::ORDER
        .into_iter()
        .filter(|o| o.regex().is_none())
        .map(|o| o.as_str())
        .collect()
}
