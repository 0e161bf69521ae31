//! Commit parsed from a single subject line.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A commit subject split into its conventional-commit parts.
///
/// Built once by the subject parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// The commit type (feat, fix, doc, etc.).
    pub r#type: String,

    /// The optional scope, commonly an issue reference.
    pub scope: Option<String>,

    /// The subject text following the `type(scope): ` prefix.
    pub subject: String,
}

impl Commit {
    /// Creates a commit without a scope.
    #[must_use]
    pub fn new(r#type: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            r#type: r#type.into(),
            scope: None,
            subject: subject.into(),
        }
    }

    /// Sets the scope. An empty scope is stored as `None`.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        let scope = scope.into();
        self.scope = if scope.is_empty() { None } else { Some(scope) };
        self
    }

    /// Returns the scope, or an empty string when there is none.
    #[must_use]
    pub fn scope_or_empty(&self) -> &str {
        self.scope.as_deref().unwrap_or("")
    }
}

impl fmt::Display for Commit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "type := {} scope := {} subject := {}",
            self.r#type,
            self.scope_or_empty(),
            self.subject
        )
    }
}
