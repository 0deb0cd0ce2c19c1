//! Failures a request can end in, and the JSON envelope they're reported with.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
impl Envelope {
    pub const fn success(url: String) -> Self {
        Self {
            success: true,
            url: Some(url),
            error: None,
        }
    }

    pub const fn failure(error: String) -> Self {
        Self {
            success: false,
            url: None,
            error: Some(error),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    MethodNotAllowed,
    InvalidSecret,
    MissingUrl,
    Extract(twitchvod_gql::Error),
    Resolve(twitchvod_gql::Error),
}
impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidSecret => StatusCode::UNAUTHORIZED,
            Self::MissingUrl | Self::Extract(_) => StatusCode::BAD_REQUEST,
            Self::Resolve(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::MethodNotAllowed => "Method not allowed".to_string(),
            Self::InvalidSecret => "Invalid secret".to_string(),
            Self::MissingUrl => "URL parameter is required".to_string(),
            Self::Extract(e) => format!("Error extracting video ID: {e}"),
            Self::Resolve(e) => format!("Error getting video info: {e}"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!(name = "RequestFailed", status = %status, error = message);
        } else {
            tracing::warn!(name = "RequestRejected", status = %status, error = message);
        }

        (status, Json(Envelope::failure(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_url_is_400() {
        let err = ApiError::Extract(twitchvod_gql::Error::InvalidUrlFormat);

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.message(),
            "Error extracting video ID: invalid Twitch video URL format"
        );
    }

    #[test]
    fn resolve_failure_is_500() {
        let err = ApiError::Resolve(twitchvod_gql::Error::ManifestNotFound);

        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn envelope_omits_absent_fields() {
        assert_eq!(
            serde_json::to_string(&Envelope::failure("Invalid secret".into())).unwrap(),
            r#"{"success":false,"error":"Invalid secret"}"#
        );
        assert_eq!(
            serde_json::to_string(&Envelope::success("https://a/b.m3u8".into())).unwrap(),
            r#"{"success":true,"url":"https://a/b.m3u8"}"#
        );
    }
}
