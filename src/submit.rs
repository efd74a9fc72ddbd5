//! HTTP submission of player statistics records.

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use stats_generator::PlayerStatRecord;
use thiserror::Error;

/// Body of an HTTP response, parsed as JSON when possible.
///
/// The statistics API is expected to answer with JSON, but error pages and
/// proxies may not; those fall back to the raw text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Json(Value),
    Raw(String),
}

impl ResponseBody {
    /// Parse a response body, falling back to raw text for invalid JSON.
    pub fn parse(text: &str) -> Self {
        match serde_json::from_str(text) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Raw(text.to_string()),
        }
    }

    /// Human-readable rendering: pretty-printed JSON or the raw text.
    pub fn render(&self) -> String {
        match self {
            ResponseBody::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            ResponseBody::Raw(text) => text.clone(),
        }
    }
}

/// Errors from submitting a single record.
///
/// `Transport` means the request never produced a response (connection
/// refused, timeout, DNS failure), so no status code or body exists for it.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The request failed before any response was received.
    #[error("no response received: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("server rejected stats with status {status}")]
    Status { status: u16, body: ResponseBody },
}

/// POST a single record as JSON to the statistics endpoint.
///
/// Returns the status code and parsed body on 2xx; any other status is a
/// `SubmitError::Status`.
pub async fn submit_stats(
    client: &Client,
    url: &str,
    record: &PlayerStatRecord,
) -> Result<(u16, ResponseBody), SubmitError> {
    let response = client.post(url).json(record).send().await?;

    let status = response.status();
    let text = response.text().await?;
    let body = ResponseBody::parse(&text);

    if status.is_success() {
        Ok((status.as_u16(), body))
    } else {
        Err(SubmitError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_json_body() {
        let body = ResponseBody::parse(r#"{"status":"ok"}"#);
        assert_eq!(body, ResponseBody::Json(serde_json::json!({"status": "ok"})));
    }

    #[test]
    fn test_parse_invalid_json_falls_back_to_raw() {
        let body = ResponseBody::parse("internal error");
        assert_eq!(body, ResponseBody::Raw("internal error".to_string()));
    }

    #[test]
    fn test_render_pretty_prints_json() {
        let body = ResponseBody::parse(r#"{"status":"ok"}"#);
        let rendered = body.render();
        assert!(rendered.contains("\"status\": \"ok\""));
    }

    #[test]
    fn test_render_passes_raw_text_through() {
        let body = ResponseBody::parse("internal error");
        assert_eq!(body.render(), "internal error");
    }

    #[test]
    fn test_status_error_message_names_the_code() {
        let err = SubmitError::Status {
            status: 500,
            body: ResponseBody::Raw("internal error".to_string()),
        };
        assert_eq!(err.to_string(), "server rejected stats with status 500");
    }

    #[test]
    fn test_body_serializes_untagged() {
        let json = ResponseBody::Json(serde_json::json!({"status": "ok"}));
        assert_eq!(
            serde_json::to_value(&json).unwrap(),
            serde_json::json!({"status": "ok"})
        );

        let raw = ResponseBody::Raw("internal error".to_string());
        assert_eq!(
            serde_json::to_value(&raw).unwrap(),
            serde_json::json!("internal error")
        );
    }
}
