//! Display-name resolution.

use super::{Mapping, SidecarRecord};

/// Human-readable label for `key`.
///
/// Uses the mapped display name when it is present and non-empty, otherwise
/// the record type's fallback. Total: unknown keys always get a label.
pub fn display_name<R: SidecarRecord>(key: &str, mapping: &Mapping<R>) -> String {
    mapping
        .get(key)
        .and_then(|record| record.display_name())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| R::fallback_name(key))
}

/// Derive a label from a raw key: underscores become spaces and the first
/// letter of each whitespace-delimited word is upper-cased. The rest of each
/// word is left as is.
pub fn humanize_key(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut out = String::with_capacity(spaced.len());
    let mut at_word_start = true;
    for c in spaced.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            at_word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}
