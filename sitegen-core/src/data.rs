//! Loading the topic list.
//!
//! The data file must be a JSON array of topic objects. Anything else
//! (missing file, syntax error, top-level object, missing required field)
//! is a [`DataError`].

use std::path::Path;

use crate::error::DataError;
use crate::types::Topic;

/// Parse a topic list from JSON text. `path` is only used for error context.
pub fn parse_topics(json: &str, path: &Path) -> Result<Vec<Topic>, DataError> {
    serde_json::from_str(json).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse the topic list at `path`.
pub fn load_topics_at(path: &Path) -> Result<Vec<Topic>, DataError> {
    let json = std::fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_topics(&json, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn keeps_file_order() {
        let json = r#"[
            {"title": "first", "description": "1"},
            {"title": "second", "description": "2", "hidden": true},
            {"title": "third", "description": "3"}
        ]"#;
        let topics = parse_topics(json, Path::new("topics.json")).unwrap();
        let titles: Vec<_> = topics.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn empty_list_is_valid() {
        let topics = parse_topics("[]", Path::new("topics.json")).unwrap();
        assert!(topics.is_empty());
    }

    #[test]
    fn missing_file_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("topics.json");
        let err = load_topics_at(&path).unwrap_err();
        match err {
            DataError::Read { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected Read, got {other:?}"),
        }
    }

    #[test]
    fn parse_error_names_the_file() {
        let err = parse_topics("{", &PathBuf::from("/site/topics.json")).unwrap_err();
        assert!(err.to_string().contains("/site/topics.json"), "{err}");
    }

    #[test]
    fn loads_from_disk() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("topics.json");
        std::fs::write(&path, r#"[{"title":"A","description":"d","date":"Jan 2025"}]"#).unwrap();
        let topics = load_topics_at(&path).unwrap();
        assert_eq!(topics[0].date.as_deref(), Some("Jan 2025"));
    }
}
