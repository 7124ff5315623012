pub mod app_config;
pub mod config;
pub mod deal;
pub mod selectors;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use deal::{Category, DealRecord, RecordError, ValidityWindow, DEFAULT_SIZE};
pub use selectors::{load_selector_table, SelectorTable};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read selectors file {path}: {source}")]
    SelectorsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse selectors file: {0}")]
    SelectorsFileParse(#[from] serde_yaml::Error),

    #[error("selector table validation failed: {0}")]
    Validation(String),
}
