//! Request types for driving the engine.
//!
//! The engine exposes a fixed argv contract: `<engine> <collection> <action>
//! [<payload>]`. A [`Request`] captures one such call before it is spawned,
//! and [`Request::to_args`] is the only place that argv is assembled.

use crate::error::{Error, Result};
use crate::CollectionName;
use serde::{Deserialize, Serialize};

/// An engine verb.
///
/// The set is closed: a verb the engine might grow later becomes a new
/// variant, not a free-form string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Store one serialized document in the collection.
    Insert,
    /// List every record in the collection.
    Select,
}

impl Action {
    /// The verb exactly as the engine expects it on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Insert => "insert",
            Action::Select => "select",
        }
    }

    /// Whether this verb takes a payload argument.
    pub fn requires_payload(self) -> bool {
        matches!(self, Action::Insert)
    }
}

/// One request against one collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Target collection, opaque to the connector
    pub collection: CollectionName,
    /// Verb to run
    pub action: Action,
    /// Pre-serialized document, present only for payload-carrying verbs
    pub payload: Option<String>,
}

impl Request {
    /// Build an insert request, serializing the value for the caller.
    pub fn insert(collection: impl Into<CollectionName>, value: &serde_json::Value) -> Result<Self> {
        Ok(Self::insert_raw(collection, serde_json::to_string(value)?))
    }

    /// Build an insert request from an already-serialized document.
    ///
    /// The payload is passed through untouched; the connector does not
    /// re-validate its structure.
    pub fn insert_raw(collection: impl Into<CollectionName>, payload: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            action: Action::Insert,
            payload: Some(payload.into()),
        }
    }

    /// Build a select request.
    pub fn select(collection: impl Into<CollectionName>) -> Self {
        Self {
            collection: collection.into(),
            action: Action::Select,
            payload: None,
        }
    }

    /// Check that this request is representable on the engine's command line.
    pub fn validate(&self) -> Result<()> {
        if self.collection.is_empty() {
            return Err(Error::InvalidRequest(
                "collection name must not be empty".into(),
            ));
        }
        if self.action.requires_payload() && self.payload.is_none() {
            return Err(Error::InvalidRequest(format!(
                "action '{}' requires a payload",
                self.action.as_str()
            )));
        }
        if !self.action.requires_payload() && self.payload.is_some() {
            return Err(Error::InvalidRequest(format!(
                "action '{}' does not take a payload",
                self.action.as_str()
            )));
        }
        if let Some(payload) = &self.payload {
            // NUL cannot cross an argv boundary
            if payload.contains('\0') {
                return Err(Error::InvalidRequest(
                    "payload must not contain NUL bytes".into(),
                ));
            }
        }
        Ok(())
    }

    /// Assemble the argument list, engine path excluded.
    ///
    /// The payload stays one argument and is omitted entirely when absent,
    /// never passed as an empty string.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![self.collection.clone(), self.action.as_str().to_string()];
        if let Some(payload) = &self.payload {
            args.push(payload.clone());
        }
        args
    }
}
