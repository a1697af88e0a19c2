//! Infrastructure layer: fixture ingestion and runtime configuration.

pub mod config;
pub mod fixtures;

pub use config::Config;
pub use fixtures::{IngestError, load_page, parse_page};
