//! Engine invocation.
//!
//! The engine is a separate pre-built executable; every operation is one
//! spawn of `<engine> <collection> <action> [<payload>]` with both output
//! streams captured. Invocations are independent: one request, one child
//! process, no retries.

use crate::error::{Error, Result};
use crate::operation::Request;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs engine requests as child processes.
///
/// The engine path is injected at construction so the invoker can be pointed
/// at a stub executable in tests.
#[derive(Debug, Clone)]
pub struct Invoker {
    engine_path: PathBuf,
}

/// Captured result of one engine invocation.
///
/// An outcome exists for every invocation that managed to start, whatever
/// the exit status; classifying a failure is the caller's decision.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Exit code, `None` when the process was killed by a signal
    pub code: Option<i32>,
    /// Whether the exit status was zero
    pub success: bool,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

impl Outcome {
    /// Turn a failed invocation into [`Error::EngineRejected`], keeping the
    /// engine's diagnostic text verbatim.
    pub fn require_success(self) -> Result<Outcome> {
        if self.success {
            Ok(self)
        } else {
            Err(Error::EngineRejected {
                code: self.code,
                stderr: self.stderr,
            })
        }
    }
}

impl Invoker {
    /// Create an invoker for the engine at the given path.
    pub fn new(engine_path: impl Into<PathBuf>) -> Self {
        Self {
            engine_path: engine_path.into(),
        }
    }

    /// The engine executable this invoker spawns.
    pub fn engine_path(&self) -> &Path {
        &self.engine_path
    }

    /// Run one request to completion and capture what the engine said.
    ///
    /// Blocks until the child exits. A non-zero exit is not an error at this
    /// layer: the outcome carries the status and both streams, and the caller
    /// inspects them (or uses [`Outcome::require_success`]). The only failure
    /// here is not being able to start the engine at all, reported as
    /// [`Error::EngineNotFound`].
    pub fn invoke(&self, request: &Request) -> Result<Outcome> {
        request.validate()?;

        tracing::debug!(
            engine = %self.engine_path.display(),
            collection = %request.collection,
            action = request.action.as_str(),
            "invoking engine"
        );

        let output = Command::new(&self.engine_path)
            .args(request.to_args())
            .output()
            .map_err(|source| Error::EngineNotFound {
                path: self.engine_path.clone(),
                source,
            })?;

        let outcome = Outcome {
            code: output.status.code(),
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        if !outcome.success {
            tracing::warn!(code = ?outcome.code, "engine exited with failure status");
        }

        Ok(outcome)
    }
}
