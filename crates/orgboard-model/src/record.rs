//! Record metadata as read from the external store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parsed frontmatter of one record.
pub type Frontmatter = BTreeMap<String, Value>;

/// Metadata snapshot of one record.
///
/// Owned by the external store; the engine only ever reads snapshots and
/// requests field updates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMeta {
    #[serde(default)]
    pub frontmatter: Frontmatter,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl RecordMeta {
    pub fn with_frontmatter(frontmatter: Frontmatter) -> Self {
        Self {
            frontmatter,
            tags: Vec::new(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.frontmatter.get(name)
    }
}

/// File name of a record path, without directory or extension.
pub fn record_basename(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rfind('.') {
        Some(dot) if dot > 0 => &name[..dot],
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::record_basename;

    #[test]
    fn basename_strips_directory_and_extension() {
        assert_eq!(record_basename("recipes/pasta.md"), "pasta");
        assert_eq!(record_basename("pasta.md"), "pasta");
        assert_eq!(record_basename("recipes/pasta"), "pasta");
        assert_eq!(record_basename(".hidden"), ".hidden");
    }
}
