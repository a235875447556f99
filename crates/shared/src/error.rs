//! Errors raised while fetching dashboard metrics.

use thiserror::Error;

/// Result type alias using `FetchError`.
pub type FetchResult<T> = Result<T, FetchError>;

/// Failure of the single dashboard metrics request.
///
/// This is the only error kind the dashboard can observe. It is absorbed
/// at the shell boundary and never shown to the end user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The configured API base URL could not be used.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Connection could not be established or was dropped.
    #[error("Network error: {0}")]
    Network(String),

    /// The request did not settle within the configured timeout.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The server answered with a non-success status.
    #[error("Server responded with {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body or reason phrase.
        message: String,
    },

    /// The response body was not a dashboard summary.
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl FetchError {
    /// Returns the HTTP status code, if the server answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the stable error code used in logs.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidUrl(_) => "INVALID_URL",
            Self::Network(_) => "NETWORK_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::Status { status: 401 | 403, .. } => "UNAUTHORIZED",
            Self::Status { status: 404, .. } => "NOT_FOUND",
            Self::Status { .. } => "SERVER_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn status(status: u16) -> FetchError {
        FetchError::Status {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn test_status_only_for_server_answers() {
        assert_eq!(status(502).status(), Some(502));
        assert_eq!(FetchError::Network(String::new()).status(), None);
        assert_eq!(FetchError::Timeout(String::new()).status(), None);
        assert_eq!(FetchError::Decode(String::new()).status(), None);
    }

    #[rstest]
    #[case(FetchError::InvalidUrl(String::new()), "INVALID_URL")]
    #[case(FetchError::Network(String::new()), "NETWORK_ERROR")]
    #[case(FetchError::Timeout(String::new()), "TIMEOUT")]
    #[case(status(401), "UNAUTHORIZED")]
    #[case(status(403), "UNAUTHORIZED")]
    #[case(status(404), "NOT_FOUND")]
    #[case(status(500), "SERVER_ERROR")]
    #[case(FetchError::Decode(String::new()), "DECODE_ERROR")]
    fn test_error_codes(#[case] error: FetchError, #[case] expected: &str) {
        assert_eq!(error.error_code(), expected);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            FetchError::Network("connection refused".into()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(
            FetchError::Timeout("msg".into()).to_string(),
            "Request timed out: msg"
        );
        assert_eq!(
            FetchError::Status {
                status: 500,
                message: "boom".into()
            }
            .to_string(),
            "Server responded with 500: boom"
        );
        assert_eq!(
            FetchError::Decode("msg".into()).to_string(),
            "Invalid response body: msg"
        );
    }
}
