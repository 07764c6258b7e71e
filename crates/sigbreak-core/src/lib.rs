//! # sigbreak-core
//!
//! Shared configuration and logging setup for sigbreak.
//!
//! ## Modules
//!
//! - `config`: `.sigbreak.toml` loading and exclusion settings
//! - `logging`: tracing subscriber initialisation

pub mod config;
pub mod error;
pub mod logging;

pub use config::{
    get_config_home, load_configuration, Config, ExcludedConfig, CURRENT_CONFIG_VERSION,
    DEFAULT_CONFIG_FILENAME,
};
pub use error::{CoreError, CoreResult};
pub use logging::init_logging;
