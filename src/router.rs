use tracing::instrument;

use crate::gateway::{Request, Response};
use crate::shared::AppState;
use crate::token;

/// Dispatches one invocation to the matching operation.
///
/// POST /auth/token issues a token, GET / validates one. A known path with
/// the wrong method answers 405, anything else 404. Pure dispatch, no side
/// effects of its own.
#[instrument(skip(state, request), fields(path = %request.path, method = %request.http_method))]
pub fn handle(state: &AppState, request: &Request) -> Response {
    match (request.path.as_str(), request.http_method.as_str()) {
        ("/auth/token", "POST") => {
            token::issue(&state.token_config, &request.headers, request.body.as_deref())
        }
        ("/auth/token", _) => Response::empty(405),
        ("/", "GET") => token::validate(&state.token_config, &request.headers),
        ("/", _) => Response::empty(405),
        _ => Response::empty(404),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::Headers;
    use crate::token::TokenConfig;
    use rstest::rstest;

    fn state() -> AppState {
        AppState::new(TokenConfig::new("test-secret"))
    }

    fn request(method: &str, path: &str) -> Request {
        Request {
            path: path.to_string(),
            http_method: method.to_string(),
            headers: Headers::new(),
            body: None,
        }
    }

    #[rstest]
    #[case("GET", "/auth/token", 405)]
    #[case("PUT", "/auth/token", 405)]
    #[case("DELETE", "/auth/token", 405)]
    #[case("POST", "/", 405)]
    #[case("DELETE", "/", 405)]
    fn test_known_paths_reject_wrong_methods(
        #[case] method: &str,
        #[case] path: &str,
        #[case] expected: u16,
    ) {
        let response = handle(&state(), &request(method, path));
        assert_eq!(response, Response::empty(expected));
    }

    #[rstest]
    #[case("GET", "/auth")]
    #[case("POST", "/auth/token/")]
    #[case("GET", "/anything")]
    #[case("PATCH", "/nope")]
    fn test_unknown_paths_are_not_found(#[case] method: &str, #[case] path: &str) {
        let response = handle(&state(), &request(method, path));
        assert_eq!(response, Response::empty(404));
    }

    #[test]
    fn test_post_auth_token_reaches_issuer() {
        // No body: the issuer answers, not the router
        let response = handle(&state(), &request("POST", "/auth/token"));
        assert_eq!(response, Response::empty(422));
    }

    #[test]
    fn test_get_root_reaches_validator() {
        // No Authorization header: the validator answers, not the router
        let response = handle(&state(), &request("GET", "/"));
        assert_eq!(response, Response::empty(403));
    }
}
