//! Commit subject parsing.

use std::sync::LazyLock;

use git_cl_commit::Commit;
use regex::Regex;

use crate::reader::trim_line_terminator;

/// Commit types recognized in a subject prefix.
pub const COMMIT_TYPES: [&str; 9] = [
    "feat", "fix", "doc", "chore", "refactor", "test", "style", "perf", "other",
];

static SUBJECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    let types = COMMIT_TYPES.join("|");
    Regex::new(&format!(
        r"^(?P<type>{types})(?:\((?P<scope>[^)]+)\))?: (?P<message>.*)$"
    ))
    .expect("invalid regex")
});

/// Turns one raw subject line into a [`Commit`].
pub trait CommitParser: Send + Sync {
    /// Parses a raw line.
    ///
    /// Returns `None` if the line doesn't follow the expected format; this is not
    /// an error, logs routinely contain merge commits and blank lines.
    fn parse(&self, line: &str) -> Option<Commit>;
}

/// Parser for `type(scope): message` subject lines.
///
/// The type must be one of [`COMMIT_TYPES`] (case-sensitive). The message runs to
/// the end of the line, so a later `: ` stays part of it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubjectParser;

impl SubjectParser {
    /// Creates a new subject parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CommitParser for SubjectParser {
    fn parse(&self, line: &str) -> Option<Commit> {
        let line = trim_line_terminator(line);
        let captures = SUBJECT_RE.captures(line)?;

        let commit_type = captures.name("type")?.as_str();
        let message = captures.name("message")?.as_str();
        let scope = captures.name("scope").map_or("", |m| m.as_str());

        Some(Commit::new(commit_type, message).with_scope(scope))
    }
}
