/*
 * Responsibility
 * - Structured failure (RestErr) shared by the interceptor and the HTTP layer
 * - Same shape as the error bodies returned by the oauth service, so it is
 *   both decoded from upstream and rendered back to clients
 * - IntoResponse (HTTP status / JSON error body)
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{status} {error}: {message}")]
pub struct RestErr {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    pub status: u16,
    #[serde(default, deserialize_with = "null_as_default")]
    pub error: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub causes: Vec<serde_json::Value>,
}

/// Upstream services send `null` for empty fields (e.g. `"causes": null`).
fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

impl RestErr {
    pub fn new(status: StatusCode, error: &str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: status.as_u16(),
            error: error.to_string(),
            causes: Vec::new(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "bad_request", message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "unauthorized", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "not_found", message)
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_server_error",
            message,
        )
    }

    pub fn with_cause(mut self, cause: impl Into<serde_json::Value>) -> Self {
        self.causes.push(cause.into());
        self
    }

    /// Status as an `http::StatusCode`. Codes outside 100..=999 map to 500.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND.as_u16()
    }
}

impl IntoResponse for RestErr {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_upstream_error_without_optional_fields() {
        let err: RestErr = serde_json::from_str(r#"{"status":404,"message":"not found"}"#)
            .expect("decode");

        assert!(err.is_not_found());
        assert_eq!(err.message, "not found");
        assert!(err.error.is_empty());
        assert!(err.causes.is_empty());
    }

    #[test]
    fn decodes_upstream_error_with_null_fields() {
        let err: RestErr = serde_json::from_str(
            r#"{"message":"no access token found with given id","status":404,"error":null,"causes":null}"#,
        )
        .expect("decode");

        assert!(err.is_not_found());
        assert!(err.error.is_empty());
        assert!(err.causes.is_empty());
    }

    #[test]
    fn status_is_the_only_required_field() {
        let err: RestErr = serde_json::from_str(r#"{"status":404}"#).expect("decode");
        assert!(err.is_not_found());
        assert!(err.message.is_empty());

        let err: RestErr =
            serde_json::from_str(r#"{"status":404,"message":null,"extra":true}"#).expect("decode");
        assert!(err.is_not_found());
    }

    #[test]
    fn rejects_error_body_without_status() {
        let res = serde_json::from_str::<RestErr>(r#"{"message":"boom"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn unknown_status_renders_as_internal_error() {
        let err = RestErr {
            message: "weird".into(),
            status: 42,
            error: String::new(),
            causes: Vec::new(),
        };

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn internal_server_error_carries_code_and_status() {
        let err = RestErr::internal_server_error("boom").with_cause("io");

        assert_eq!(err.status, 500);
        assert_eq!(err.error, "internal_server_error");
        assert_eq!(err.causes, vec![serde_json::Value::from("io")]);
        assert_eq!(err.to_string(), "500 internal_server_error: boom");
    }
}
