//! Note and index record types

use serde::{Deserialize, Serialize};

/// Metadata carried in a note's header block.
///
/// This is also the shape of one record in the index snapshot; field order
/// here is the key order in the JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteHeader {
    pub id: String,
    pub title: String,
    /// Comma-split `TAGS:` value. An empty value reads back as `[""]`.
    pub tags: Vec<String>,
}

impl NoteHeader {
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags,
        }
    }
}

/// A full note: header plus the opaque body that follows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub header: NoteHeader,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_key_order() {
        let header = NoteHeader::new("abc", "Hello", vec!["x".into(), "y".into()]);
        let json = serde_json::to_string(&header).unwrap();
        assert_eq!(json, r#"{"id":"abc","title":"Hello","tags":["x","y"]}"#);
    }
}
