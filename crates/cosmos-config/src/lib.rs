//! Configuration for the planet renderer.
//!
//! Settings persist to disk as `config.ron` and can be overridden from the
//! command line. Missing fields fall back to their defaults and unknown
//! fields are ignored, so older and newer files both load.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CONFIG_FILE, Config, DebugConfig, GenerationConfig, OutputConfig};
pub use error::ConfigError;
