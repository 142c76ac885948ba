//! Configuration system for the Geode sphere mesher.
//!
//! Settings persist to disk as a RON file. CLI flags (via clap) override the
//! loaded values, and unknown or missing fields fall back to defaults so old
//! and new config files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, MeshConfig, config_path, default_config_dir};
pub use error::ConfigError;
