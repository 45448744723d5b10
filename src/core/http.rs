//! Request executor.
//!
//! Performs one authenticated GET against the Config Lake API and maps the
//! HTTP outcome onto [`Error`]. No retries, no pooling: a fresh blocking
//! client is built for each call and dropped with it.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::constants::{REQUEST_TIMEOUT, USER_AGENT};
use crate::core::domain::Connection;
use crate::error::{Error, Result};

/// Decoded JSON body of a successful response.
pub type Payload = Map<String, Value>;

/// GET `path` relative to the connection's base URL.
///
/// # Errors
///
/// - `Error::Authentication`, `Error::Authorization`, `Error::NotFound` for
///   401, 403 and 404
/// - `Error::Request` for any other non-200 status
/// - `Error::Transport` if the request never completes (including timeout)
/// - `Error::InvalidResponse` if a 200 body is not JSON
pub fn get(conn: &Connection, path: &str) -> Result<Payload> {
    let url = conn.url(path);
    debug!(method = "GET", url = %url, "sending request");

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    let response = client.get(&url).bearer_auth(conn.token()).send()?;

    let status = response.status();
    let body = response.text()?;
    debug!(status = status.as_u16(), body_len = body.len(), "received response");

    check_status(status, body).and_then(|body| parse_payload(&body))
}

/// Map a status code onto the error taxonomy, passing 200 bodies through.
fn check_status(status: StatusCode, body: String) -> Result<String> {
    match status {
        StatusCode::OK => Ok(body),
        StatusCode::UNAUTHORIZED => Err(Error::Authentication),
        StatusCode::FORBIDDEN => Err(Error::Authorization),
        StatusCode::NOT_FOUND => Err(Error::NotFound),
        other => Err(Error::Request {
            status: other.as_u16(),
            body,
        }),
    }
}

/// Decode a 200 body. JSON that is not an object decodes as an empty
/// payload so that field lookups fall back to their defaults.
fn parse_payload(body: &str) -> Result<Payload> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| Error::InvalidResponse(format!("response is not JSON: {}", e)))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => {
            debug!("response body is not a JSON object; treating as empty");
            Ok(Payload::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_timeout_is_thirty_seconds() {
        assert_eq!(REQUEST_TIMEOUT, std::time::Duration::from_secs(30));
    }

    #[test]
    fn test_ok_passes_body_through() {
        let body = check_status(StatusCode::OK, "{}".to_string()).unwrap();
        assert_eq!(body, "{}");
    }

    #[test]
    fn test_auth_statuses() {
        assert!(matches!(
            check_status(StatusCode::UNAUTHORIZED, String::new()),
            Err(Error::Authentication)
        ));
        assert!(matches!(
            check_status(StatusCode::FORBIDDEN, String::new()),
            Err(Error::Authorization)
        ));
        assert!(matches!(
            check_status(StatusCode::NOT_FOUND, String::new()),
            Err(Error::NotFound)
        ));
    }

    #[test]
    fn test_other_statuses_carry_body() {
        match check_status(StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string()) {
            Err(Error::Request { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected request error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_200_success_is_still_an_error() {
        // Only a literal 200 counts as success.
        assert!(matches!(
            check_status(StatusCode::NO_CONTENT, String::new()),
            Err(Error::Request { status: 204, .. })
        ));
        assert!(matches!(
            check_status(StatusCode::CREATED, String::new()),
            Err(Error::Request { status: 201, .. })
        ));
    }

    #[test]
    fn test_parse_object() {
        let payload = parse_payload(r#"{"configs": {"A": "1"}}"#).unwrap();
        assert_eq!(payload["configs"]["A"], "1");
    }

    #[test]
    fn test_parse_non_object_is_empty() {
        assert!(parse_payload("[1, 2, 3]").unwrap().is_empty());
        assert!(parse_payload("\"text\"").unwrap().is_empty());
        assert!(parse_payload("null").unwrap().is_empty());
    }

    #[test]
    fn test_parse_garbage_is_invalid_response() {
        assert!(matches!(
            parse_payload("<html>oops</html>"),
            Err(Error::InvalidResponse(_))
        ));
    }
}
