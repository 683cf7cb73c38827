//! High-level client bound to one engine binary and one database.

use crate::decode;
use crate::error::Result;
use crate::invoker::Invoker;
use crate::operation::Request;
use crate::record::Record;
use crate::CollectionName;
use std::path::PathBuf;

/// Client for one database managed by the engine.
///
/// Binds an engine executable and a database name once, so call sites issue
/// plain `insert`/`select` calls. Convenience methods treat a non-zero engine
/// exit as [`crate::Error::EngineRejected`]; callers that want to inspect the
/// raw exit status can go through [`Connector::invoker`] directly.
#[derive(Debug, Clone)]
pub struct Connector {
    invoker: Invoker,
    database: CollectionName,
}

impl Connector {
    /// Create a connector for the given engine executable and database.
    pub fn new(engine_path: impl Into<PathBuf>, database: impl Into<CollectionName>) -> Self {
        Self {
            invoker: Invoker::new(engine_path),
            database: database.into(),
        }
    }

    /// The database this connector targets.
    pub fn database(&self) -> &str {
        &self.database
    }

    /// The underlying invoker, for callers that need raw outcomes.
    pub fn invoker(&self) -> &Invoker {
        &self.invoker
    }

    /// Insert a value, returning the engine's acknowledgement line.
    pub fn insert(&self, value: &serde_json::Value) -> Result<String> {
        let request = Request::insert(self.database.clone(), value)?;
        self.run_for_stdout(&request)
    }

    /// Insert an already-serialized document.
    pub fn insert_raw(&self, payload: impl Into<String>) -> Result<String> {
        let request = Request::insert_raw(self.database.clone(), payload);
        self.run_for_stdout(&request)
    }

    /// Return the raw `select` console output, undecoded.
    pub fn select_raw(&self) -> Result<String> {
        let request = Request::select(self.database.clone());
        let outcome = self.invoker.invoke(&request)?.require_success()?;
        Ok(outcome.stdout)
    }

    /// List the database as decoded records, in listing order.
    pub fn select(&self) -> Result<Vec<Record>> {
        Ok(decode::decode(&self.select_raw()?))
    }

    fn run_for_stdout(&self, request: &Request) -> Result<String> {
        let outcome = self.invoker.invoke(request)?.require_success()?;
        Ok(outcome.stdout.trim().to_string())
    }
}
