//! Non-fatal pipeline diagnostics.

use std::sync::{Arc, Mutex, PoisonError};

use git_cl_commit::Commit;
use tracing::{debug, warn};

/// A condition that skipped input without failing the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A line did not match the subject format.
    SkippedLine {
        /// One-based line number in the source.
        line_number: usize,
        /// The line without its terminator.
        line: String,
    },

    /// A parsed commit has a type without a group.
    UnclassifiedCommit {
        /// The dropped commit.
        commit: Commit,
    },
}

/// Receives diagnostics emitted while grouping commits.
pub trait DiagnosticSink: Send + Sync {
    /// Records a diagnostic.
    fn report(&self, diagnostic: Diagnostic);
}

/// Sink forwarding diagnostics to `tracing`.
///
/// Skipped lines are logged at debug level, unclassified commits at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::SkippedLine { line_number, line } => {
                debug!(line_number, %line, "skipping line without a commit prefix");
            }
            Diagnostic::UnclassifiedCommit { commit } => {
                warn!(%commit, "omitting commit, type has no group");
            }
        }
    }
}

/// Sink keeping diagnostics in memory.
///
/// Clones share the same storage, so a clone can be handed to a generator and
/// inspected afterwards.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<Diagnostic>>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the diagnostics recorded so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns only the commits dropped for lack of a group.
    pub fn unclassified(&self) -> Vec<Commit> {
        self.diagnostics()
            .into_iter()
            .filter_map(|d| match d {
                Diagnostic::UnclassifiedCommit { commit } => Some(commit),
                Diagnostic::SkippedLine { .. } => None,
            })
            .collect()
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, diagnostic: Diagnostic) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_in_order() {
        let sink = MemorySink::new();
        sink.report(Diagnostic::SkippedLine {
            line_number: 1,
            line: "Merge branch 'x'".to_string(),
        });
        sink.report(Diagnostic::UnclassifiedCommit {
            commit: Commit::new("fix", "a"),
        });

        let records = sink.diagnostics();
        assert_eq!(records.len(), 2);
        assert!(matches!(records[0], Diagnostic::SkippedLine { line_number: 1, .. }));
        assert_eq!(sink.unclassified(), vec![Commit::new("fix", "a")]);
    }

    #[test]
    fn test_memory_sink_clones_share_storage() {
        let sink = MemorySink::new();
        let handle = sink.clone();

        sink.report(Diagnostic::UnclassifiedCommit {
            commit: Commit::new("perf", "b"),
        });

        assert_eq!(handle.diagnostics().len(), 1);
    }

    #[test]
    fn test_tracing_sink_accepts_all_diagnostics() {
        let sink = TracingSink;
        sink.report(Diagnostic::SkippedLine {
            line_number: 3,
            line: String::new(),
        });
        sink.report(Diagnostic::UnclassifiedCommit {
            commit: Commit::new("feat", "c"),
        });
    }
}
