use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::IngestError;

/// Severity classification used for observer callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IngestSeverity {
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (operation failed).
    Error,
    /// Critical error (typically I/O or other infrastructure failures).
    Critical,
}

/// Context about an ingestion attempt.
#[derive(Debug, Clone)]
pub struct IngestContext {
    /// The input path used for ingestion.
    pub path: PathBuf,
}

impl IngestContext {
    pub(crate) fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

/// Minimal stats reported on successful ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestStats {
    /// Number of ingested rows.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
}

/// Observer interface for ingestion outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait IngestObserver: Send + Sync {
    /// Called when ingestion succeeds.
    fn on_success(&self, _ctx: &IngestContext, _stats: IngestStats) {}

    /// Called when ingestion fails.
    fn on_failure(&self, _ctx: &IngestContext, _severity: IngestSeverity, _error: &IngestError) {}
}

/// Logs ingestion events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl IngestObserver for StdErrObserver {
    fn on_success(&self, ctx: &IngestContext, stats: IngestStats) {
        eprintln!(
            "[ingest][ok] path={} rows={} columns={}",
            ctx.path.display(),
            stats.rows,
            stats.columns
        );
    }

    fn on_failure(&self, ctx: &IngestContext, severity: IngestSeverity, error: &IngestError) {
        eprintln!(
            "[ingest][{:?}] path={} err={}",
            severity,
            ctx.path.display(),
            error
        );
    }
}

/// Options controlling observed ingestion.
///
/// Use [`Default`] for common cases.
#[derive(Clone, Default)]
pub struct IngestOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestObserver>>,
}

impl std::fmt::Debug for IngestOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IngestOptions")
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

pub(crate) fn severity_for_error(e: &IngestError) -> IngestSeverity {
    match e {
        IngestError::Io(_) => IngestSeverity::Critical,
        IngestError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => IngestSeverity::Critical,
            _ => IngestSeverity::Error,
        },
        IngestError::DuplicateHeader { .. } | IngestError::EmptyInput => IngestSeverity::Error,
    }
}
