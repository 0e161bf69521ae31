//! Configuration management for git-cl.
//!
//! This crate holds the generator configuration (header, footer, body template and
//! type-to-group mapping) together with its defaults, and loads it from a JSON file.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::load_config;
pub use schema::{
    Config, DEFAULT_BODY_TEMPLATE, DEFAULT_FOOTER, DEFAULT_HEADER, default_groups,
};
