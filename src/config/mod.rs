//! Configuration module for Reliefdesk
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (RELIEF_*)
//! 3. `reliefdesk.toml` in the working directory
//! 4. User config (`<config dir>/reliefdesk/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{
    load_or_default, load_with_warnings, with_env_overrides, ConfigError, ConfigWarning,
    PROJECT_CONFIG_FILE,
};
pub use types::{Config, LogConfig, OutputConfig, OutputFormat, StorageConfig};
