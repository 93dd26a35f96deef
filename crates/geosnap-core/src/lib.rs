use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod geo;
pub mod scoring;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use geo::haversine_km;
pub use scoring::{score, score_guess, score_with_perfect_radius, GuessOutcome};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
