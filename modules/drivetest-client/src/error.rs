use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error! status: {status}, message: {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl ClientError {
    /// Error text supplied by the backend, when the response body carried a
    /// JSON `detail` or `message` field.
    pub fn backend_detail(&self) -> Option<String> {
        let ClientError::Api { message, .. } = self else {
            return None;
        };
        let body: serde_json::Value = serde_json::from_str(message).ok()?;
        body.get("detail")
            .or_else(|| body.get("message"))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_carries_status_and_body() {
        let err = ClientError::Api {
            status: 422,
            message: r#"{"detail":"pass_value must be numeric"}"#.to_string(),
        };
        let text = err.to_string();
        assert!(text.starts_with("HTTP error! status: 422"));
        assert!(text.contains("pass_value must be numeric"));
    }

    #[test]
    fn backend_detail_prefers_detail_field() {
        let err = ClientError::Api {
            status: 422,
            message: r#"{"detail":"pass_value must be numeric","message":"other"}"#.to_string(),
        };
        assert_eq!(
            err.backend_detail().as_deref(),
            Some("pass_value must be numeric")
        );
    }

    #[test]
    fn backend_detail_falls_back_to_message_field() {
        let err = ClientError::Api {
            status: 400,
            message: r#"{"message":"Only CSV files are allowed"}"#.to_string(),
        };
        assert_eq!(
            err.backend_detail().as_deref(),
            Some("Only CSV files are allowed")
        );
    }

    #[test]
    fn backend_detail_is_none_for_non_json_bodies() {
        let err = ClientError::Api {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        assert!(err.backend_detail().is_none());
    }

    #[test]
    fn backend_detail_is_none_for_network_errors() {
        let err = ClientError::Network("connection refused".to_string());
        assert!(err.backend_detail().is_none());
    }
}
