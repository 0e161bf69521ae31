//! Commit types for git-cl.
//!
//! This crate provides the commit value produced from a single subject line:
//! - [`Commit`]: The type, optional scope and subject of a conventional commit subject

mod commit;

pub use commit::Commit;
