//! Japanese script predicates.
//!
//! Range bounds are inclusive on both ends.

use std::ops::RangeInclusive;

pub const HIRAGANA: RangeInclusive<char> = '\u{3040}'..='\u{309F}';
pub const KATAKANA: RangeInclusive<char> = '\u{30A0}'..='\u{30FF}';
pub const KANJI: RangeInclusive<char> = '\u{4E00}'..='\u{9FAF}';

pub fn is_hiragana(c: char) -> bool {
    HIRAGANA.contains(&c)
}

pub fn is_katakana(c: char) -> bool {
    KATAKANA.contains(&c)
}

pub fn is_kanji(c: char) -> bool {
    KANJI.contains(&c)
}

/// Hiragana, katakana or kanji.
pub fn is_japanese_char(c: char) -> bool {
    is_hiragana(c) || is_katakana(c) || is_kanji(c)
}

const BYTE_ORDER_MARK: char = '\u{FEFF}';
const NEXT_LINE: char = '\u{0085}';

/// Characters skipped when counting: Unicode white space plus the byte order
/// mark, with NEL counted as content.
pub fn is_blank(c: char) -> bool {
    c == BYTE_ORDER_MARK || (c.is_whitespace() && c != NEXT_LINE)
}

/// `(japanese, total)` counts over the non-blank characters of `text`.
pub fn script_counts(text: &str) -> (usize, usize) {
    text.chars()
        .filter(|c| !is_blank(*c))
        .fold((0, 0), |(japanese, total), c| {
            (japanese + usize::from(is_japanese_char(c)), total + 1)
        })
}
