/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! Error types for the Ze client
//!
//! Every operation is all-or-nothing: it either yields its documented success
//! value or fails with one of the variants below. Failures carry the raw
//! status code and response body text verbatim for diagnostics; the backend's
//! error schema is never parsed or classified here.

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The ZeAuth login endpoint returned a non-200 status
    AuthFailed {
        /// HTTP status returned by the login endpoint
        status: StatusCode,
        /// Raw response body text
        body: String,
    },
    /// A data or file operation returned a status other than the one it expects
    RequestFailed {
        /// HTTP status returned by the service
        status: StatusCode,
        /// Raw response body text
        body: String,
    },
    /// A local file could not be read (upload source missing or unreadable)
    Io(std::io::Error),
    /// Transport-level failure from the HTTP client
    Http(reqwest::Error),
    /// Response body could not be parsed as the expected JSON shape
    Json(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::AuthFailed { status, body } => {
                write!(f, "authentication failed with status {status}: {body}")
            }
            AppError::RequestFailed { status, body } => {
                write!(f, "request failed with status {status}: {body}")
            }
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Http(e) => write!(f, "http error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            AppError::Http(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Http(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_auth_failed() {
        let error = AppError::AuthFailed {
            status: StatusCode::UNAUTHORIZED,
            body: "bad credentials".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "authentication failed with status 401 Unauthorized: bad credentials"
        );
    }

    #[test]
    fn display_request_failed() {
        let error = AppError::RequestFailed {
            status: StatusCode::BAD_REQUEST,
            body: "{\"detail\":\"nope\"}".to_string(),
        };
        assert!(error.to_string().contains("400"));
        assert!(error.to_string().contains("nope"));
    }

    #[test]
    fn from_io() {
        let io_error = std::io::Error::other("test");
        let app_error: AppError = io_error.into();
        match app_error {
            AppError::Io(_) => (),
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn from_serde() {
        let json = r#"{"invalid": json}"#;
        let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
        let app_error: AppError = serde_error.into();
        match app_error {
            AppError::Json(_) => (),
            _ => panic!("Expected Json error"),
        }
    }
}
