use serde_json::Value;
use tracing::{debug, instrument};

use super::config::TokenConfig;
use crate::gateway::{Headers, Response};

/// Validates a bearer token and echoes back the payload it wraps.
///
/// GET /
/// 200 with the JSON-encoded `data` claim on success. 403 for a missing or
/// malformed Authorization header, 401 for any token that fails
/// verification. Expired, not-yet-valid and forged tokens are deliberately
/// indistinguishable in the response.
#[instrument(name = "validate_token", skip(config, headers))]
pub fn validate(config: &TokenConfig, headers: &Headers) -> Response {
    let authorization = match headers.get("authorization") {
        Some(value) => value,
        None => {
            debug!("Missing Authorization header");
            return Response::empty(403);
        }
    };

    // Exactly two whitespace-separated words, the first the literal "Bearer"
    let words: Vec<&str> = authorization.split_whitespace().collect();
    let token = match words.as_slice() {
        ["Bearer", token] => *token,
        _ => {
            debug!("Authorization header is not a Bearer credential");
            return Response::empty(403);
        }
    };

    match config.verify(token) {
        Ok(claims) => Response::json(200, &Value::String(claims.data)),
        Err(_) => Response::empty(401),
    }
}
