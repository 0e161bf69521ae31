//! Core error types.

use std::fmt;

use thiserror::Error;

/// Identifies which of the two templates failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// The user-configurable template rendering the grouped commits.
    Body,
    /// The fixed template wrapping header, body and footer.
    Document,
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Body => f.write_str("body"),
            Self::Document => f.write_str("document"),
        }
    }
}

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Reading the subject lines failed before end of stream.
    #[error("failed to read subject lines: {0}")]
    SourceRead(#[from] std::io::Error),

    /// A template has invalid syntax.
    #[error("failed to compile {template} template: {source}")]
    TemplateCompile {
        /// The template that failed.
        template: TemplateKind,
        /// The template engine error.
        source: minijinja::Error,
    },

    /// A template compiled but failed while rendering.
    #[error("failed to render {template} template: {source}")]
    TemplateRender {
        /// The template that failed.
        template: TemplateKind,
        /// The template engine error.
        source: minijinja::Error,
    },
}

impl CoreError {
    /// Returns true if this is a template compilation error.
    #[must_use]
    pub fn is_compile_error(&self) -> bool {
        matches!(self, Self::TemplateCompile { .. })
    }

    /// Returns true if this is a template rendering error.
    #[must_use]
    pub fn is_render_error(&self) -> bool {
        matches!(self, Self::TemplateRender { .. })
    }
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_kind_display() {
        assert_eq!(TemplateKind::Body.to_string(), "body");
        assert_eq!(TemplateKind::Document.to_string(), "document");
    }

    #[test]
    fn test_source_read_display() {
        let err = CoreError::from(std::io::Error::other("disk on fire"));
        assert_eq!(err.to_string(), "failed to read subject lines: disk on fire");
        assert!(!err.is_compile_error());
    }

    #[test]
    fn test_compile_error_display() {
        let source = minijinja::Error::new(minijinja::ErrorKind::SyntaxError, "unexpected end");
        let err = CoreError::TemplateCompile {
            template: TemplateKind::Body,
            source,
        };

        assert!(err.is_compile_error());
        assert!(!err.is_render_error());
        assert!(err.to_string().starts_with("failed to compile body template: "));
    }
}
