//! Ordered classification rules.
//!
//! Precedence: email, phone, password, url, postal code, credit card, numeric,
//! date, time, search, free text. The table is scanned top to bottom and the
//! first rule with a keyword hit wins, so broad free-text keywords such as
//! "name" must stay last.

use imeopt_core::models::{Glyph, InputAttributes, InputMode, InputType};

/// Category of a classification rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleCategory {
    Email,
    Phone,
    Password,
    Url,
    PostalCode,
    CreditCard,
    Numeric,
    Date,
    Time,
    Search,
    FreeText,
}

impl RuleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Password => "password",
            Self::Url => "url",
            Self::PostalCode => "postal-code",
            Self::CreditCard => "credit-card",
            Self::Numeric => "numeric",
            Self::Date => "date",
            Self::Time => "time",
            Self::Search => "search",
            Self::FreeText => "free-text",
        }
    }
}

/// A keyword rule: any keyword hit implies `attributes` with a fixed confidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationRule {
    pub category: RuleCategory,
    /// Lower-case keywords matched as substrings of the search text.
    pub keywords: &'static [&'static str],
    pub attributes: InputAttributes,
    pub glyph: Glyph,
    pub confidence: f64,
}

/// Keyword identifying the postal-code rule for the postal format override.
pub const POSTAL_CODE_KEYWORD: &str = "郵便番号";

static RULES: [ClassificationRule; 11] = [
    ClassificationRule {
        category: RuleCategory::Email,
        keywords: &["email", "mail", "メール", "e-mail", "@"],
        attributes: InputAttributes::new(Some(InputType::Email), Some(InputMode::Email)),
        glyph: Glyph::Email,
        confidence: 0.9,
    },
    ClassificationRule {
        category: RuleCategory::Phone,
        keywords: &["tel", "phone", "電話", "携帯", "mobile", "fax"],
        attributes: InputAttributes::new(Some(InputType::Tel), Some(InputMode::Tel)),
        glyph: Glyph::Tel,
        confidence: 0.9,
    },
    // Never second-guessed by callers.
    ClassificationRule {
        category: RuleCategory::Password,
        keywords: &["password", "pass", "パスワード", "暗証番号", "pin"],
        attributes: InputAttributes::new(Some(InputType::Password), None),
        glyph: Glyph::Password,
        confidence: 1.0,
    },
    ClassificationRule {
        category: RuleCategory::Url,
        keywords: &["url", "website", "ホームページ", "サイト", "link", "http"],
        attributes: InputAttributes::new(Some(InputType::Url), Some(InputMode::Url)),
        glyph: Glyph::Url,
        confidence: 0.8,
    },
    ClassificationRule {
        category: RuleCategory::PostalCode,
        keywords: &["zip", "postal", POSTAL_CODE_KEYWORD, "〒"],
        attributes: InputAttributes::new(Some(InputType::Text), Some(InputMode::Numeric)),
        glyph: Glyph::Numeric,
        confidence: 0.85,
    },
    ClassificationRule {
        category: RuleCategory::CreditCard,
        keywords: &[
            "card_number",
            "credit_card",
            "カード番号",
            "クレジットカード",
            "cc_number",
        ],
        attributes: InputAttributes::new(Some(InputType::Text), Some(InputMode::Numeric)),
        glyph: Glyph::CreditCard,
        confidence: 0.85,
    },
    ClassificationRule {
        category: RuleCategory::Numeric,
        keywords: &[
            "age", "年齢", "price", "価格", "金額", "amount", "quantity", "数量", "個数",
        ],
        attributes: InputAttributes::new(Some(InputType::Text), Some(InputMode::Numeric)),
        glyph: Glyph::Numeric,
        confidence: 0.75,
    },
    ClassificationRule {
        category: RuleCategory::Date,
        keywords: &["date", "日付", "birthday", "生年月日", "birth_date", "年月日"],
        attributes: InputAttributes::new(Some(InputType::Date), None),
        glyph: Glyph::Date,
        confidence: 0.8,
    },
    ClassificationRule {
        category: RuleCategory::Time,
        keywords: &["time", "時刻", "時間", "start_time", "end_time"],
        attributes: InputAttributes::new(Some(InputType::Time), None),
        glyph: Glyph::Time,
        confidence: 0.8,
    },
    ClassificationRule {
        category: RuleCategory::Search,
        keywords: &["search", "検索", "query", "q", "キーワード"],
        attributes: InputAttributes::new(Some(InputType::Search), Some(InputMode::Search)),
        glyph: Glyph::Search,
        confidence: 0.75,
    },
    // Must stay last: these keywords are broad and would shadow the rules above.
    ClassificationRule {
        category: RuleCategory::FreeText,
        keywords: &[
            "name", "氏名", "名前", "なまえ", "address", "住所", "company", "会社名",
            "comment", "コメント", "description", "説明", "備考", "memo", "メモ",
            "title", "タイトル", "件名", "内容",
        ],
        attributes: InputAttributes::new(Some(InputType::Text), Some(InputMode::Text)),
        glyph: Glyph::Text,
        confidence: 0.75,
    },
];

/// Declared types that short-circuit classification.
pub const DECLARABLE_TYPES: [InputType; 7] = [
    InputType::Email,
    InputType::Tel,
    InputType::Url,
    InputType::Password,
    InputType::Date,
    InputType::Time,
    InputType::Search,
];

/// All rules in precedence order.
pub fn all_rules() -> &'static [ClassificationRule] {
    &RULES
}

/// First rule (in precedence order) implying the given type.
pub fn rule_for_type(input_type: InputType) -> Option<&'static ClassificationRule> {
    RULES
        .iter()
        .find(|r| r.attributes.input_type == Some(input_type))
}

/// First rule whose keyword set contains `keyword` verbatim.
pub fn rule_with_keyword(keyword: &str) -> Option<&'static ClassificationRule> {
    RULES.iter().find(|r| r.keywords.contains(&keyword))
}

/// The rule for a category.
pub fn rule_for_category(category: RuleCategory) -> Option<&'static ClassificationRule> {
    RULES.iter().find(|r| r.category == category)
}

/// Rule a recognized declared type short-circuits to, if any.
///
/// Only [`DECLARABLE_TYPES`] qualify; `text`, `number` and unknown tags fall
/// through to text matching.
pub fn rule_for_declared_type(declared: &str) -> Option<&'static ClassificationRule> {
    let input_type = InputType::parse_str(declared)?;
    if !DECLARABLE_TYPES.contains(&input_type) {
        return None;
    }
    rule_for_type(input_type)
}
