use serde_json::{json, Value};
use tracing::{debug, instrument, warn};

use super::claims::TokenClaims;
use super::config::TokenConfig;
use crate::gateway::{Headers, Response};

/// Mints a short-lived signed token wrapping the raw request body.
///
/// POST /auth/token
/// 201 with `{"token": "..."}` on success. 422 for a missing or malformed
/// JSON body, 415 for a content type other than application/json. The body
/// check runs first: a malformed body answers 422 even when the content type
/// is also wrong.
#[instrument(name = "issue_token", skip(config, headers, body))]
pub fn issue(config: &TokenConfig, headers: &Headers, body: Option<&str>) -> Response {
    let body = match body {
        // Strict parse for well-formedness only; the parsed value is discarded
        Some(raw) => match serde_json::from_str::<Value>(raw) {
            Ok(_) => raw,
            Err(_) => {
                debug!("Request body is not valid JSON");
                return Response::empty(422);
            }
        },
        None => {
            debug!("Request body is absent");
            return Response::empty(422);
        }
    };

    if headers.get("content-type") != Some("application/json") {
        debug!("Unsupported or missing content type");
        return Response::empty(415);
    }

    let claims = TokenClaims::issue_now(body.to_string());
    match config.sign(&claims) {
        Ok(token) => {
            debug!(exp = claims.exp, nbf = claims.nbf, "Issued token");
            Response::json(201, &json!({ "token": token }))
        }
        Err(error) => {
            warn!(%error, "Token signing failed");
            Response::empty(500)
        }
    }
}
