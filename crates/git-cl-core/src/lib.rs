//! Core library for git-cl.
//!
//! This crate turns a stream of commit subject lines into a changelog document:
//!
//! ```text
//! reader -> parser -> group table -> aggregation -> body template -> document template
//! ```
//!
//! [`ChangelogGenerator`] wires the stages together.

mod aggregate;
mod diagnostics;
mod error;
mod generator;
mod groups;
mod parser;
mod reader;
mod render;

pub use aggregate::{CommitGroup, GroupedCommits, group_commits};
pub use diagnostics::{Diagnostic, DiagnosticSink, MemorySink, TracingSink};
pub use error::{CoreError, CoreResult, TemplateKind};
pub use generator::{ChangelogGenerator, GeneratorOption};
pub use groups::GroupTable;
pub use parser::{COMMIT_TYPES, CommitParser, SubjectParser};
pub use reader::read_lines;
pub use render::{BodyRenderer, DOCUMENT_TEMPLATE, DocumentRenderer};
