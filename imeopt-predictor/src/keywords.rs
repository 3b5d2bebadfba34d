//! Keyword scan over the ordered rule table.
//!
//! Each rule gets its own Aho-Corasick automaton so a rule is decided in one
//! pass over the search text, while rule order still decides precedence.

use aho_corasick::AhoCorasick;
use std::sync::LazyLock;

use crate::rules::{self, ClassificationRule};

struct RuleMatcher {
    rule: &'static ClassificationRule,
    automaton: Option<AhoCorasick>,
}

impl RuleMatcher {
    fn is_match(&self, search_text: &str) -> bool {
        match &self.automaton {
            Some(ac) => ac.is_match(search_text),
            None => self
                .rule
                .keywords
                .iter()
                .any(|k| search_text.contains(k)),
        }
    }
}

static MATCHERS: LazyLock<Vec<RuleMatcher>> = LazyLock::new(|| {
    rules::all_rules()
        .iter()
        .map(|rule| {
            let automaton = match AhoCorasick::new(rule.keywords) {
                Ok(ac) => Some(ac),
                Err(e) => {
                    tracing::warn!(
                        category = rule.category.as_str(),
                        error = %e,
                        "keyword automaton build failed, using substring scan"
                    );
                    None
                }
            };
            RuleMatcher { rule, automaton }
        })
        .collect()
});

/// First rule in precedence order with a keyword occurring in `search_text`.
///
/// `search_text` must already be lower-cased.
pub fn first_matching_rule(search_text: &str) -> Option<&'static ClassificationRule> {
    if search_text.is_empty() {
        return None;
    }
    MATCHERS
        .iter()
        .find(|m| m.is_match(search_text))
        .map(|m| m.rule)
}
