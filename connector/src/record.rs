//! Decoded record types.

use crate::FileName;
use serde::Serialize;

/// Content of one decoded record.
///
/// The engine prints record bodies as JSON, but a body is never assumed to be
/// well formed. A body that parses lands in [`Content::Json`]; anything else
/// is kept verbatim in [`Content::Raw`], so no engine output is ever lost.
/// Consumers must branch on the variant they received.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Content {
    /// The body parsed as a JSON document.
    Json(serde_json::Value),
    /// The body as printed, when it is not valid JSON.
    Raw(String),
}

impl Content {
    /// Best-effort constructor: JSON when the text parses, raw text otherwise.
    pub fn parse(text: impl Into<String>) -> Self {
        let text = text.into();
        match serde_json::from_str(&text) {
            Ok(value) => Content::Json(value),
            Err(_) => Content::Raw(text),
        }
    }

    /// Check whether the body parsed as JSON.
    pub fn is_json(&self) -> bool {
        matches!(self, Content::Json(_))
    }

    /// Get the parsed JSON document, if there is one.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Content::Json(value) => Some(value),
            Content::Raw(_) => None,
        }
    }

    /// Get the raw text, if the body did not parse.
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Content::Json(_) => None,
            Content::Raw(text) => Some(text),
        }
    }
}

/// One decoded record from a `select` listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// File name the engine stored this record under, never empty
    pub filename: FileName,
    /// The record body
    pub content: Content,
}

impl Record {
    /// Create a new record.
    pub fn new(filename: impl Into<FileName>, content: Content) -> Self {
        Self {
            filename: filename.into(),
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_valid_json() {
        let content = Content::parse(r#"{"name":"Alice","age":30}"#);
        assert!(content.is_json());
        assert_eq!(content.as_json(), Some(&json!({"name": "Alice", "age": 30})));
        assert_eq!(content.as_raw(), None);
    }

    #[test]
    fn parse_invalid_json_keeps_raw_text() {
        let content = Content::parse("not json at all");
        assert!(!content.is_json());
        assert_eq!(content.as_raw(), Some("not json at all"));
        assert_eq!(content.as_json(), None);
    }

    #[test]
    fn parse_multiline_body() {
        let content = Content::parse("{\n\"name\": \"Alice\"\n}");
        assert_eq!(content.as_json(), Some(&json!({"name": "Alice"})));
    }

    #[test]
    fn record_serializes_content_untagged() {
        let record = Record::new("record_1.json", Content::Json(json!({"a": 1})));
        let rendered = serde_json::to_string(&record).unwrap();
        assert_eq!(
            rendered,
            r#"{"filename":"record_1.json","content":{"a":1}}"#
        );

        let record = Record::new("record_2.json", Content::Raw("oops".into()));
        let rendered = serde_json::to_string(&record).unwrap();
        assert_eq!(rendered, r#"{"filename":"record_2.json","content":"oops"}"#);
    }
}
