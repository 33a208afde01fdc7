use std::fmt;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, instrument};

use super::claims::TokenClaims;
use crate::shared::AppError;

/// Configuration for JWT token operations
///
/// Holds the HMAC-SHA256 secret shared by issuance and validation. Built once
/// at process start and injected into both sides; the secret itself is never
/// readable from outside this module and is excluded from Debug output.
#[derive(Clone)]
pub struct TokenConfig {
    secret: String,
}

impl TokenConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Reads the signing secret from the `JWT_SECRET` environment variable.
    /// An unset or empty variable is a startup error, not a default.
    pub fn from_env() -> Result<Self, AppError> {
        match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => Ok(Self::new(secret)),
            _ => Err(AppError::MissingSecret),
        }
    }

    /// Signs the claims into a compact HS256 JWT
    #[instrument(skip(self, claims))]
    pub fn sign(&self, claims: &TokenClaims) -> Result<String, AppError> {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(self.secret.as_ref()),
        )
        .map_err(|e| {
            debug!(error = %e, "Failed to encode JWT token");
            AppError::Jwt(e.to_string())
        })
    }

    /// Verifies signature, `exp` and `nbf`, returning the claims if valid.
    ///
    /// jsonwebtoken defaults to a 60 second leeway and skips `nbf` entirely;
    /// a 3 second validity window needs exact bounds on both.
    #[instrument(skip(self, token))]
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_nbf = true;

        decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_ref()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| {
            debug!(error = %e, "Failed to decode JWT token");
            AppError::Jwt(e.to_string())
        })
    }
}

impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig").finish_non_exhaustive()
    }
}
