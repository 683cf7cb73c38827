//! Decoder for the engine's `select` console output.
//!
//! The engine lists a collection as a sequence of text blocks:
//!
//! ```text
//! File: record_1706745600.json
//! Content:
//! {"name":"Borja","age":28}
//!
//! ```
//!
//! [`decode`] walks that text once, line by line, and rebuilds one [`Record`]
//! per block, in listing order. This module is the single source of truth for
//! the block grammar; no other component reinterprets engine output.

use crate::record::{Content, Record};

const FILE_PREFIX: &str = "File: ";
const CONTENT_PREFIX: &str = "Content:";

/// Decoder state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Scanning for the next `File:` marker.
    AwaitingBlock,
    /// Marker seen; waiting for a `Content:` header before collecting lines.
    /// Also re-entered on the blank line that ends a content run, since the
    /// pending identifier survives until the next marker or end of input.
    HeaderSeen,
    /// Collecting non-blank lines into the content buffer.
    AccumulatingContent,
}

/// The block being assembled: its identifier and the lines collected so far.
#[derive(Debug, Default)]
struct PendingBlock {
    filename: Option<String>,
    lines: Vec<String>,
}

impl PendingBlock {
    fn start(&mut self, filename: &str) {
        self.filename = Some(filename.to_string());
        self.lines.clear();
    }

    /// Close the block, emitting a record only when it has both an identifier
    /// and at least one content line. A marker with no collected content is
    /// dropped, not emitted: every known engine build prints a body for every
    /// marker, so a bare marker is treated as noise.
    fn finalize(&mut self) -> Option<Record> {
        let filename = self.filename.take()?;
        let lines = std::mem::take(&mut self.lines);
        if lines.is_empty() {
            return None;
        }
        Some(Record::new(filename, Content::parse(lines.join("\n"))))
    }
}

/// Decode a `select` listing into records, preserving listing order.
///
/// Decoding is total: a block whose body is not valid JSON degrades to
/// [`Content::Raw`] rather than failing the pass, and empty input decodes to
/// an empty vector. The same text always decodes to the same records.
///
/// ```rust
/// use minidb_connector::{decode, Content};
///
/// let listing = "File: record_1.json\nContent:\n{\"name\":\"Alice\"}\n\n";
/// let records = decode(listing);
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].filename, "record_1.json");
/// assert!(records[0].content.is_json());
/// ```
pub fn decode(text: &str) -> Vec<Record> {
    let mut records = Vec::new();
    let mut state = State::AwaitingBlock;
    let mut pending = PendingBlock::default();

    for raw_line in text.lines() {
        let line = raw_line.trim();

        if let Some(rest) = line.strip_prefix(FILE_PREFIX) {
            // A new marker closes whatever came before it.
            records.extend(pending.finalize());
            pending.start(rest.trim());
            state = State::HeaderSeen;
        } else {
            match state {
                State::AwaitingBlock => {
                    // Stray text between blocks, ignored.
                }
                State::HeaderSeen => {
                    // Trailing characters after `Content:` are ignored.
                    if line.starts_with(CONTENT_PREFIX) {
                        state = State::AccumulatingContent;
                    }
                }
                State::AccumulatingContent => {
                    if line.is_empty() {
                        state = State::HeaderSeen;
                    } else {
                        pending.lines.push(line.to_string());
                    }
                }
            }
        }
    }

    // End of input closes the last block the same way a marker would.
    records.extend(pending.finalize());
    records
}

/// Render one `File:`/`Content:` block exactly as the engine prints it.
///
/// This is the inverse of [`decode`] for well-formed values: a block encoded
/// here decodes back to a single [`Content::Json`] record.
pub fn encode(filename: &str, value: &serde_json::Value) -> String {
    format!("File: {filename}\nContent:\n{value}\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_input_decodes_to_nothing() {
        assert_eq!(decode(""), vec![]);
    }

    #[test]
    fn single_block() {
        let records = decode("File: a.json\nContent:\n{\"x\":1}\n\n");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].filename, "a.json");
        assert_eq!(records[0].content, Content::Json(json!({"x": 1})));
    }

    #[test]
    fn blocks_decode_in_listing_order() {
        let listing = "\
File: first.json
Content:
{\"n\":1}

File: second.json
Content:
{\"n\":2}

File: third.json
Content:
{\"n\":3}

";
        let records = decode(listing);

        let filenames: Vec<&str> = records.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(filenames, vec!["first.json", "second.json", "third.json"]);
    }

    #[test]
    fn multiline_body_joined_with_newlines() {
        let listing = "File: a.json\nContent:\n{\n\"name\": \"Alice\",\n\"age\": 30\n}\n\n";
        let records = decode(listing);

        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].content,
            Content::Json(json!({"name": "Alice", "age": 30}))
        );
    }

    #[test]
    fn malformed_body_degrades_to_raw() {
        let records = decode("File: x\nContent:\nnot json\n\n");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].filename, "x");
        assert_eq!(records[0].content, Content::Raw("not json".into()));
    }

    #[test]
    fn marker_without_content_is_dropped() {
        let records = decode("File: a\nContent:\n\nFile: b\nContent:\nfoo\n\n");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].filename, "b");
        assert_eq!(records[0].content, Content::Raw("foo".into()));
    }

    #[test]
    fn trailing_block_without_blank_line_still_finalizes() {
        let records = decode("File: a.json\nContent:\n{\"x\":1}");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].content, Content::Json(json!({"x": 1})));
    }

    #[test]
    fn body_lines_before_content_header_are_ignored() {
        // Only lines after the `Content:` header belong to the body.
        let records = decode("File: a.json\nstray\nContent:\n{\"x\":1}\n\n");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].content, Content::Json(json!({"x": 1})));
    }

    #[test]
    fn text_outside_any_block_is_ignored() {
        let records = decode("noise\n\nFile: a.json\nContent:\n{\"x\":1}\n\nmore noise\n");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].filename, "a.json");
    }

    #[test]
    fn content_header_with_trailing_text() {
        let records = decode("File: a.json\nContent: ignored trailer\n{\"x\":1}\n\n");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].content, Content::Json(json!({"x": 1})));
    }

    #[test]
    fn blank_line_pauses_accumulation_without_dropping_the_block() {
        // The blank line ends the content run; the identifier survives and a
        // second `Content:` header resumes collecting into the same block.
        let listing = "File: a.json\nContent:\nline one\n\nContent:\nline two\n\n";
        let records = decode(listing);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].content, Content::Raw("line one\nline two".into()));
    }

    #[test]
    fn marker_name_is_trimmed() {
        let records = decode("File:   spaced.json  \nContent:\n{}\n\n");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].filename, "spaced.json");
    }

    #[test]
    fn decode_is_idempotent() {
        let listing = "File: a.json\nContent:\n{\"x\":1}\n\nFile: b.json\nContent:\nraw stuff\n\n";
        assert_eq!(decode(listing), decode(listing));
    }

    #[test]
    fn encode_decode_roundtrip() {
        let value = json!({"name": "Borja", "age": 28, "tags": ["a", "b"]});
        let records = decode(&encode("record_1.json", &value));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].filename, "record_1.json");
        assert_eq!(records[0].content, Content::Json(value));
    }

    #[test]
    fn mixed_good_and_bad_blocks() {
        let listing = "\
File: good.json
Content:
{\"ok\":true}

File: bad.json
Content:
{broken

File: also_good.json
Content:
[1,2,3]

";
        let records = decode(listing);

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].content, Content::Json(json!({"ok": true})));
        assert_eq!(records[1].content, Content::Raw("{broken".into()));
        assert_eq!(records[2].content, Content::Json(json!([1, 2, 3])));
    }
}
