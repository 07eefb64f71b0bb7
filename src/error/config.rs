use thiserror::Error;

use crate::{
    error::UnexpectedError,
    model::notice::{IntoNotice, Notice},
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

impl IntoNotice for ConfigError {
    fn into_notice(self) -> Notice {
        UnexpectedError(self, "The application is misconfigured.").into_notice()
    }
}
