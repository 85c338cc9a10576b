//! Fail-soft sidecar loading.

use super::{Mapping, SidecarRecord};
use serde_json::{Map, Value};
use std::path::Path;

/// Load the sidecar mapping for `R` from `scope_dir`.
///
/// A missing document is an empty mapping. An unreadable or unparsable
/// document is logged and treated as an empty mapping.
pub fn load_mapping<R: SidecarRecord>(scope_dir: &Path) -> Mapping<R> {
    let path = scope_dir.join(R::FILE_NAME);
    if !path.exists() {
        return Mapping::new();
    }

    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to read {}: {}", path.display(), e);
            return Mapping::new();
        }
    };

    parse_mapping(&content, &path)
}

/// Parse a sidecar document.
///
/// The top level must be a JSON object. Entries that do not fit the record
/// shape are skipped with a warning; the remaining entries still load.
pub fn parse_mapping<R: SidecarRecord>(content: &str, source: &Path) -> Mapping<R> {
    let raw: Map<String, Value> = match serde_json::from_str(content) {
        Ok(map) => map,
        Err(e) => {
            tracing::error!("Failed to parse {}: {}", source.display(), e);
            return Mapping::new();
        }
    };

    let mut mapping = Mapping::new();
    for (key, value) in raw {
        match serde_json::from_value::<R>(value) {
            Ok(record) => {
                mapping.insert(key, record);
            }
            Err(e) => {
                tracing::warn!(
                    "Skipping malformed entry {:?} in {}: {}",
                    key,
                    source.display(),
                    e
                );
            }
        }
    }
    mapping
}
