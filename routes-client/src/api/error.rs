//! Routing service error types.

/// Errors from the routing service HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api {
        status: u16,
        /// Raw response body.
        message: String,
        /// Server-supplied human-readable detail, when the body carried one.
        detail: Option<String>,
    },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

impl ApiError {
    /// User-facing description of the failure.
    ///
    /// Prefers the server-supplied `detail` field; falls back to the
    /// generic transport description.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Api {
                detail: Some(detail),
                ..
            } => detail.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_and_body() {
        let err = ApiError::Api {
            status: 500,
            message: "Internal Server Error".into(),
            detail: None,
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");
    }

    #[test]
    fn user_message_prefers_detail() {
        let err = ApiError::Api {
            status: 503,
            message: r#"{"detail": "routing graph not ready"}"#.into(),
            detail: Some("routing graph not ready".into()),
        };
        assert_eq!(err.user_message(), "routing graph not ready");
    }

    #[test]
    fn user_message_falls_back_without_detail() {
        let err = ApiError::Api {
            status: 502,
            message: "Bad Gateway".into(),
            detail: None,
        };
        assert_eq!(err.user_message(), "API error 502: Bad Gateway");

        let err = ApiError::Json {
            message: "expected value".into(),
        };
        assert_eq!(err.user_message(), "JSON parse error: expected value");
    }
}
