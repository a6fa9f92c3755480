use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod retailers;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use retailers::{load_retailers, RetailerConfig, RetailersFile, Selectors};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read retailers file {path}: {source}")]
    RetailersFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse retailers file: {0}")]
    RetailersFileParse(#[from] serde_yaml::Error),

    #[error("retailers file validation failed: {0}")]
    Validation(String),
}
