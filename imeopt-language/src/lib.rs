//! # imeopt-language
//!
//! Decides whether content is predominantly Japanese.
//!
//! Three entry points: a declared language tag, the script composition of
//! free text, and a whole document (declared tag, then a sample of title,
//! headings and leading paragraphs).

pub mod detector;
pub mod sampling;
pub mod script;

pub use detector::JapaneseDetector;
pub use sampling::document_sample;
pub use script::{is_hiragana, is_japanese_char, is_kanji, is_katakana};
