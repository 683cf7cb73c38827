//! # minidb connector
//!
//! A client-side adapter for the minidb engine, a small file-per-record JSON
//! store that is driven entirely through its command line.
//!
//! The engine is an opaque collaborator: this crate spawns it as a child
//! process, captures its console output, and reconstructs that output into
//! typed records. Storage, indexing, and consistency are the engine's
//! business; this crate never reimplements them.
//!
//! ## Design Principles
//!
//! - **One spawn per request**: every operation is an independent child
//!   process with its own captured output; no shared state between calls
//! - **Total decoding**: a malformed record body degrades to raw text
//!   instead of failing the batch
//! - **Explicit failure kinds**: a missing engine binary and an engine that
//!   ran but refused are different errors, never a silent empty result
//!
//! ## Core Concepts
//!
//! ### Requests
//!
//! A [`Request`] pairs a collection name with an [`Action`] (`insert` or
//! `select`) and, for inserts, a pre-serialized payload. [`Invoker`] turns a
//! request into one engine invocation and captures the [`Outcome`].
//!
//! ### The listing grammar
//!
//! `select` output is a sequence of `File:`/`Content:` blocks. [`decode`]
//! owns that grammar and rebuilds one [`Record`] per block, in listing
//! order. Each record's [`Content`] is either parsed JSON or, when the body
//! is malformed, the raw text verbatim.
//!
//! ## Quick Start
//!
//! ```rust
//! use minidb_connector::{decode, Content};
//!
//! // Captured `select` output from the engine:
//! let listing = "\
//! File: record_1706745600.json
//! Content:
//! {\"name\":\"Borja\",\"age\":28}
//!
//! ";
//!
//! let records = decode(listing);
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].filename, "record_1706745600.json");
//!
//! match &records[0].content {
//!     Content::Json(value) => assert_eq!(value["name"], "Borja"),
//!     Content::Raw(text) => panic!("body did not parse: {text}"),
//! }
//! ```
//!
//! Against a live engine, [`Connector`] wraps the whole flow:
//!
//! ```rust,no_run
//! use minidb_connector::Connector;
//! use serde_json::json;
//!
//! # fn main() -> minidb_connector::error::Result<()> {
//! let db = Connector::new("/usr/local/bin/minidb.out", "clientes");
//! db.insert(&json!({"name": "Borja", "age": 28}))?;
//!
//! for record in db.select()? {
//!     println!("{}: {:?}", record.filename, record.content);
//! }
//! # Ok(())
//! # }
//! ```

pub mod connector;
pub mod decode;
pub mod error;
pub mod invoker;
pub mod operation;
pub mod record;

// Re-export main types at crate root
pub use connector::Connector;
pub use decode::{decode, encode};
pub use error::Error;
pub use invoker::{Invoker, Outcome};
pub use operation::{Action, Request};
pub use record::{Content, Record};

/// Type aliases for clarity
pub type CollectionName = String;
pub type FileName = String;
