use thiserror::Error;

use crate::token::TokenConfig;

/// Shared application state containing all dependencies
#[derive(Clone, Debug)]
pub struct AppState {
    pub token_config: TokenConfig,
}

impl AppState {
    pub fn new(token_config: TokenConfig) -> Self {
        Self { token_config }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("JWT error: {0}")]
    Jwt(String),

    #[error("JWT_SECRET environment variable is not set")]
    MissingSecret,
}
