//! Configuration file loading for pluggable
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PLUGGABLE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./pluggable.toml` or `./.pluggable.toml`
//! 4. Global: `$XDG_CONFIG_HOME/pluggable/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    AmountSetting, ConfigValidationError, FileConfig, FileNotificationsConfig, FileOutputConfig,
    FilePaymentConfig, FileReportConfig,
};
pub use loader::{ConfigLoader, ConfigSource};
