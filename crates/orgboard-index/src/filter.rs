//! Structural record selection.

use orgboard_model::{Frontmatter, RecordMeta};
use regex::Regex;

type CustomPredicate = Box<dyn Fn(&str, &Frontmatter) -> bool>;

/// Decides which records are candidates for the board, independent of and
/// prior to column classification. All configured criteria are ANDed.
#[derive(Default)]
pub struct RecordFilter {
    path_pattern: Option<Regex>,
    required_tags: Vec<String>,
    required_fields: Vec<String>,
    custom: Option<CustomPredicate>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record path must match `pattern`.
    pub fn with_path_pattern(mut self, pattern: Regex) -> Self {
        self.path_pattern = Some(pattern);
        self
    }

    /// Record must carry at least one of `tags`.
    pub fn with_required_tags(mut self, tags: Vec<String>) -> Self {
        self.required_tags = tags;
        self
    }

    /// Record's frontmatter must define every one of `fields`.
    pub fn with_required_fields(mut self, fields: Vec<String>) -> Self {
        self.required_fields = fields;
        self
    }

    pub fn with_custom(
        mut self,
        predicate: impl Fn(&str, &Frontmatter) -> bool + 'static,
    ) -> Self {
        self.custom = Some(Box::new(predicate));
        self
    }

    pub fn matches(&self, path: &str, meta: &RecordMeta) -> bool {
        if let Some(pattern) = &self.path_pattern
            && !pattern.is_match(path)
        {
            return false;
        }
        if !self.required_tags.is_empty() {
            let has_tag = self
                .required_tags
                .iter()
                .any(|tag| meta.tags.iter().any(|candidate| candidate == tag));
            if !has_tag {
                return false;
            }
        }
        if !self
            .required_fields
            .iter()
            .all(|field| meta.frontmatter.contains_key(field))
        {
            return false;
        }
        if let Some(custom) = &self.custom
            && !custom(path, &meta.frontmatter)
        {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn meta(tags: &[&str], fields: &[&str]) -> RecordMeta {
        RecordMeta {
            frontmatter: fields
                .iter()
                .map(|field| ((*field).to_string(), json!("x")))
                .collect(),
            tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(RecordFilter::new().matches("any/path.md", &meta(&[], &[])));
    }

    #[test]
    fn criteria_are_anded() {
        let filter = RecordFilter::new()
            .with_path_pattern(Regex::new("^recipes/").expect("valid pattern"))
            .with_required_tags(vec!["#meal".to_string(), "#food".to_string()])
            .with_required_fields(vec!["title".to_string()]);

        assert!(filter.matches("recipes/pasta.md", &meta(&["#meal"], &["title"])));
        assert!(!filter.matches("tasks/pasta.md", &meta(&["#meal"], &["title"])));
        assert!(!filter.matches("recipes/pasta.md", &meta(&["#other"], &["title"])));
        assert!(!filter.matches("recipes/pasta.md", &meta(&["#food"], &[])));
    }

    #[test]
    fn custom_predicate_sees_path_and_frontmatter() {
        let filter = RecordFilter::new()
            .with_custom(|path, fm| path.ends_with(".md") && fm.contains_key("type"));
        assert!(filter.matches("a.md", &meta(&[], &["type"])));
        assert!(!filter.matches("a.md", &meta(&[], &[])));
        assert!(!filter.matches("a.txt", &meta(&[], &["type"])));
    }
}
