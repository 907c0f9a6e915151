use std::fmt::Display;

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Canonical lookup key derived from a raw movie title
///
/// Only ever produced by [`normalize`], so two keys compare equal exactly when
/// their source titles differ only in case, accents or punctuation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedTitle(String);

impl NormalizedTitle {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// True when `needle` occurs anywhere inside this key
    pub fn contains(&self, needle: &NormalizedTitle) -> bool {
        self.0.contains(needle.as_str())
    }
}

impl Display for NormalizedTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NormalizedTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalizes a title for matching
///
/// NFKD-decomposes the input, lowercases it, drops everything that is not a
/// word character, whitespace or `-`, then trims. Combining marks produced by
/// the decomposition are not word characters, which is what strips accents;
/// this includes marks Unicode also classes as alphabetic (U+0345, Indic
/// vowel signs).
pub fn normalize(title: &str) -> NormalizedTitle {
    let lowered = title.nfkd().collect::<String>().to_lowercase();

    let kept: String = lowered
        .chars()
        .filter(|ch| {
            let word = (ch.is_alphanumeric() || *ch == '_') && !is_combining_mark(*ch);
            word || *ch == '-' || ch.is_whitespace()
        })
        .collect();

    NormalizedTitle(kept.trim().to_string())
}
