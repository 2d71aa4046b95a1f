//! Shared HTTP response helpers for resource modules.
//!
//! Centralizes status-code branching (400/401/404/422/5xx) and response
//! envelope decoding so resource modules stay focused on paths and types.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// The back office answers either with the bare document or wrapped as
/// `{ "data": ... }` (optionally next to `message`, `total`, ...).
#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}

/// Check an HTTP response for error statuses.
///
/// Returns the response unchanged on success, otherwise maps the status to
/// the matching [`ApiError`] variant with the server's message.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = extract_message(&body)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
    let code = status.as_u16();
    tracing::debug!(status = code, %message, "API returned an error status");

    Err(match code {
        400 => ApiError::BadRequest { message },
        401 => ApiError::Unauthorized { message },
        404 => ApiError::NotFound { message },
        422 => ApiError::Unprocessable { message },
        500..=599 => ApiError::Server {
            status: code,
            message,
        },
        _ => ApiError::Api {
            status: code,
            message,
        },
    })
}

/// Check the status, then decode the (possibly enveloped) JSON body.
pub async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let resp = check_response(resp).await?;
    let body = resp.text().await?;
    parse_body(&body)
}

pub fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str::<Envelope<T>>(body)
        .map(Envelope::into_inner)
        .map_err(|e| ApiError::Parse(format!("{e}: {}", snippet(body))))
}

/// Pull a human-readable message out of an error body.
///
/// Looks at `message`, then `error`, then a non-JSON body as plain text.
fn extract_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(value) => ["message", "error"]
            .iter()
            .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
            .map(str::to_string),
        Err(_) => Some(snippet(trimmed)),
    }
}

fn snippet(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() <= MAX {
        body.to_string()
    } else {
        let cut: String = body.chars().take(MAX).collect();
        format!("{cut}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "{}");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn maps_400_with_message() {
        let resp = mock_response(400, r#"{"message":"Order already manifested"}"#);
        let err = check_response(resp).await.unwrap_err();
        assert!(
            matches!(err, ApiError::BadRequest { ref message } if message == "Order already manifested")
        );
    }

    #[tokio::test]
    async fn maps_401() {
        let err = check_response(mock_response(401, r#"{"error":"jwt expired"}"#))
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "unauthorized: jwt expired");
    }

    #[tokio::test]
    async fn maps_404_with_reason_when_body_empty() {
        let err = check_response(mock_response(404, "")).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound { ref message } if message == "Not Found"));
    }

    #[tokio::test]
    async fn maps_422() {
        let err = check_response(mock_response(422, r#"{"message":"phone is invalid"}"#))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(422));
    }

    #[tokio::test]
    async fn maps_5xx_to_server() {
        let err = check_response(mock_response(503, "upstream down"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Server { status: 503, ref message } if message == "upstream down"));
    }

    #[tokio::test]
    async fn maps_other_status_to_api() {
        let err = check_response(mock_response(409, "{}")).await.unwrap_err();
        assert!(matches!(err, ApiError::Api { status: 409, .. }));
    }

    #[test]
    fn parse_body_accepts_envelope_and_bare() {
        let wrapped: Vec<u32> = parse_body(r#"{"data":[1,2,3],"total":3}"#).unwrap();
        assert_eq!(wrapped, vec![1, 2, 3]);
        let bare: Vec<u32> = parse_body("[4,5]").unwrap();
        assert_eq!(bare, vec![4, 5]);
    }

    #[test]
    fn parse_body_reports_snippet() {
        let err = parse_body::<Vec<u32>>("<html>oops</html>").unwrap_err();
        assert!(err.to_string().contains("<html>oops</html>"));
    }
}
