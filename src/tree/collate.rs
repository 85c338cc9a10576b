//! Locale-aware string ordering for directory listings.
//!
//! Names are compared the way a reader expects them in a listing rather than
//! by raw bytes: base letters first (accents stripped, case folded), then
//! accents, then case with lower case first. Raw code points break any
//! remaining tie so the order stays total.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Primary weight class. Variant order is the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum CharClass {
    Separator,
    Digit,
    Letter,
}

fn classify(c: char) -> CharClass {
    if c.is_numeric() {
        CharClass::Digit
    } else if c.is_alphabetic() {
        CharClass::Letter
    } else {
        CharClass::Separator
    }
}

/// Precomputed multi-level sort key for one string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CollationKey {
    primary: Vec<(CharClass, char)>,
    secondary: Vec<char>,
    tertiary: Vec<bool>,
    raw: String,
}

impl CollationKey {
    pub fn new(s: &str) -> Self {
        let mut primary = Vec::with_capacity(s.len());
        let mut secondary = Vec::with_capacity(s.len());
        let mut tertiary = Vec::with_capacity(s.len());

        for c in s.nfd() {
            let lower: Vec<char> = c.to_lowercase().collect();
            secondary.extend(lower.iter().copied());
            if is_combining_mark(c) {
                continue;
            }
            tertiary.push(c.is_uppercase());
            for l in lower {
                primary.push((classify(l), l));
            }
        }

        Self {
            primary,
            secondary,
            tertiary,
            raw: s.to_string(),
        }
    }
}

/// Compare two strings with the listing collation.
pub fn compare(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

/// Sort items in place by a string field using the listing collation.
pub fn sort_by_name<T, F>(items: &mut [T], name: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by_cached_key(|item| CollationKey::new(name(item)));
}
