use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Header map with case-insensitive lookup.
///
/// Keys are lower-cased once at construction so every lookup afterwards is a
/// plain map access. When two inbound keys differ only in case, the first one
/// in document order wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Headers(HashMap<String, String>);

impl Headers {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Looks up a header value by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    /// Adds a header, keeping any value already stored under the same
    /// lower-cased name.
    pub fn insert_first_wins(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0
            .entry(name.into().to_ascii_lowercase())
            .or_insert_with(|| value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Deserialized entry by entry, in document order, so the first of several
// case-duplicate names is the one that survives.
impl<'de> Deserialize<'de> for Headers {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct HeadersVisitor;

        impl<'de> Visitor<'de> for HeadersVisitor {
            type Value = Headers;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of header names to values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Headers, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut headers = Headers::new();
                while let Some((name, value)) = access.next_entry::<String, String>()? {
                    headers.insert_first_wins(name, value);
                }
                Ok(headers)
            }
        }

        deserializer.deserialize_map(HeadersVisitor)
    }
}

impl FromIterator<(String, String)> for Headers {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.insert_first_wins(name, value);
        }
        headers
    }
}

/// Inbound invocation event supplied by the hosting platform.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub path: String,
    pub http_method: String,
    #[serde(default)]
    pub headers: Headers,
    #[serde(default)]
    pub body: Option<String>,
}

/// Outbound result consumed by the hosting platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub body: String,
}

impl Response {
    /// Status-only response with an empty body.
    pub fn empty(status_code: u16) -> Self {
        Self {
            status_code,
            body: String::new(),
        }
    }

    /// JSON response: the value rendered compactly, plus a trailing newline.
    pub fn json(status_code: u16, body: &Value) -> Self {
        Self {
            status_code,
            body: format!("{body}\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("Content-Type")]
    #[case("content-type")]
    #[case("CONTENT-TYPE")]
    #[case("CoNtEnT-tYpE")]
    fn test_header_lookup_ignores_case(#[case] inbound: &str) {
        let mut headers = Headers::new();
        headers.insert_first_wins(inbound, "application/json");

        assert_eq!(headers.get("content-type"), Some("application/json"));
        assert_eq!(headers.get("Content-Type"), Some("application/json"));
        assert_eq!(headers.get("authorization"), None);
    }

    #[test]
    fn test_first_header_wins_for_case_duplicates() {
        let mut headers = Headers::new();
        headers.insert_first_wins("Authorization", "Bearer first");
        headers.insert_first_wins("AUTHORIZATION", "Bearer second");

        assert_eq!(headers.get("authorization"), Some("Bearer first"));
    }

    #[test]
    fn test_duplicate_header_tiebreak_follows_document_order() {
        // Raw JSON keeps the duplicate keys; json! would collapse them
        let event = r#"{
            "path": "/",
            "httpMethod": "GET",
            "headers": {
                "Authorization": "Bearer first",
                "AUTHORIZATION": "Bearer second",
                "authorization": "Bearer third",
                "AuThOrIzAtIoN": "Bearer fourth",
                "aUTHORIZATION": "Bearer fifth"
            }
        }"#;

        for _ in 0..64 {
            let request: Request = serde_json::from_str(event).unwrap();
            assert_eq!(request.headers.get("authorization"), Some("Bearer first"));
        }
    }

    #[test]
    fn test_request_deserializes_from_wire_shape() {
        let event = json!({
            "path": "/auth/token",
            "httpMethod": "POST",
            "headers": { "Content-Type": "application/json" },
            "body": "{\"name\": \"bboe\"}"
        });

        let request: Request = serde_json::from_value(event).unwrap();
        assert_eq!(request.path, "/auth/token");
        assert_eq!(request.http_method, "POST");
        assert_eq!(request.headers.get("content-type"), Some("application/json"));
        assert_eq!(request.body.as_deref(), Some("{\"name\": \"bboe\"}"));
    }

    #[test]
    fn test_request_accepts_null_body_and_missing_headers() {
        let event = json!({
            "path": "/",
            "httpMethod": "GET",
            "body": null
        });

        let request: Request = serde_json::from_value(event).unwrap();
        assert!(request.headers.is_empty());
        assert_eq!(request.body, None);
    }

    #[test]
    fn test_response_serializes_with_wire_field_names() {
        let response = Response::empty(404);

        let wire = serde_json::to_value(&response).unwrap();
        assert_eq!(wire, json!({ "statusCode": 404, "body": "" }));
    }

    #[test]
    fn test_json_response_appends_trailing_newline() {
        let response = Response::json(200, &json!({ "token": "abc" }));

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "{\"token\":\"abc\"}\n");
    }

    #[test]
    fn test_json_response_encodes_bare_strings() {
        let response = Response::json(200, &Value::String("{\"a\": 1}".to_string()));

        assert_eq!(response.body, "\"{\\\"a\\\": 1}\"\n");
    }
}
