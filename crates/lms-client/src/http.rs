//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks so individual resource modules stay
//! focused on request construction and response mapping.

use reqwest::StatusCode;

use crate::error::ClientError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. Otherwise reads the body and
/// returns [`ClientError::Api`] with the most specific message available.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = error_message(status, &body);
    tracing::debug!(status = status.as_u16(), %message, "backend rejected request");
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Pick the error message for a failed response.
///
/// A JSON body yields its `message` field (a string, or an array of strings
/// joined with `"; "`), else `HTTP error! status: N`. Only a body that is
/// not JSON falls back to the canonical status reason.
pub fn error_message(status: StatusCode, body: &str) -> String {
    let generic = || format!("HTTP error! status: {}", status.as_u16());
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return status
            .canonical_reason()
            .map_or_else(generic, str::to_string);
    };

    let from_body = match value.get("message") {
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        Some(serde_json::Value::Array(items)) => {
            let parts = items
                .iter()
                .filter_map(serde_json::Value::as_str)
                .collect::<Vec<_>>();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        _ => None,
    };
    from_body.unwrap_or_else(generic)
}
