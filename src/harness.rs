use axum::{
    body::Body,
    extract::{Request as HttpRequest, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::gateway::{Headers, Request};
use crate::router;
use crate::shared::AppState;

const BODY_LIMIT: usize = 1024 * 1024;

/// Builds the local test server. Every path and method funnels through a
/// single fallback that adapts real HTTP traffic onto the invocation
/// contract and hands it to the core router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .fallback(invoke)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn invoke(State(state): State<AppState>, req: HttpRequest) -> impl IntoResponse {
    let (parts, body) = req.into_parts();

    let body = match axum::body::to_bytes(body, BODY_LIMIT).await {
        Ok(bytes) if bytes.is_empty() => None,
        Ok(bytes) => match String::from_utf8(bytes.to_vec()) {
            Ok(text) => Some(text),
            Err(_) => {
                warn!("Request body is not valid UTF-8");
                return (StatusCode::BAD_REQUEST, String::new());
            }
        },
        Err(error) => {
            warn!(%error, "Failed to read request body");
            return (StatusCode::BAD_REQUEST, String::new());
        }
    };

    let request = Request {
        path: parts.uri.path().to_string(),
        http_method: parts.method.to_string(),
        headers: convert_headers(&parts.headers),
        body,
    };

    let response = router::handle(&state, &request);
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, response.body)
}

fn convert_headers(map: &HeaderMap) -> Headers {
    let mut headers = Headers::new();
    for (name, value) in map {
        if let Ok(value) = value.to_str() {
            headers.insert_first_wins(name.as_str(), value);
        }
    }
    headers
}
