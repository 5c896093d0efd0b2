//! Character-set detection for SMS text.
//!
//! A message is sent in the standard 7-bit alphabet when every character in it
//! belongs to that alphabet. A single character outside of it (an emoji, a
//! Cyrillic letter, a curly quote) forces the whole message into the extended
//! 16-bit encoding, which roughly halves the per-segment capacity.

use serde::{Deserialize, Serialize};

/// Character encoding a message has to be sent in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encoding {
    /// 7-bit default alphabet.
    Standard,
    /// 16-bit encoding, needed as soon as one character is outside the standard set.
    Extended,
}

impl Encoding {
    pub fn is_standard(self) -> bool {
        self == Self::Standard
    }
}

/// Non-ASCII characters accepted by the standard alphabet.
///
/// Latin and Greek letters of the default alphabet, plus the euro sign.
const STANDARD_NON_ASCII: &[char] = &[
    '£', '¥', 'è', 'é', 'ù', 'ì', 'ò', 'Ç', 'Ø', 'ø', 'Å', 'å', 'Δ', 'Φ', 'Γ', 'Λ', 'Ω', 'Π', 'Ψ',
    'Σ', 'Θ', 'Ξ', 'Æ', 'æ', 'ß', 'É', '¤', '¡', 'Ä', 'Ö', 'Ñ', 'Ü', '§', '¿', 'ä', 'ö', 'ñ', 'ü',
    'à', '€',
];

/// Check if a character can be sent in the standard encoding.
#[inline]
pub fn is_standard_char(c: char) -> bool {
    c.is_ascii() || STANDARD_NON_ASCII.contains(&c)
}

/// Classify `text`. Empty text is [`Encoding::Standard`].
pub fn detect_encoding(text: &str) -> Encoding {
    let encoding = if text.chars().all(is_standard_char) {
        Encoding::Standard
    } else {
        Encoding::Extended
    };
    log::trace!("detected {encoding:?} encoding for {} bytes of text", text.len());
    encoding
}

/// Distinct characters that force `text` into the extended encoding, in order of
/// first appearance.
pub fn non_standard_chars(text: &str) -> Vec<char> {
    let mut found: Vec<char> = Vec::new();
    for c in text.chars().filter(|&c| !is_standard_char(c)) {
        if !found.contains(&c) {
            found.push(c);
        }
    }
    found
}
