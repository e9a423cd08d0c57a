pub mod app_config;
pub mod config;
pub mod plan;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use plan::{load_plan, Area, SearchPlan, DEFAULT_CATEGORIES};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read search plan {path}: {source}")]
    PlanFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse search plan: {0}")]
    PlanFileParse(#[source] serde_yaml::Error),

    #[error("search plan validation failed: {0}")]
    Validation(String),
}
