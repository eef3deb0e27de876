//! Client error types.

use std::fmt;

use reqwest::StatusCode;

use crate::context::CancelReason;
use crate::response::Response;

/// Result alias used throughout the client.
pub type Result<T> = std::result::Result<T, Error>;

/// A non-2xx reply from the API.
///
/// Carries the full buffered response so callers can inspect status, headers
/// and body, plus the `message` from the error body when it could be parsed.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// The response that was classified as a failure.
    pub response: Response,
    /// `message` field of the error body, if present.
    pub message: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {}",
            self.response.method,
            self.response.url,
            self.response.status.as_u16()
        )?;
        if let Some(message) = &self.message {
            write!(f, " {message}")?;
        }
        Ok(())
    }
}

/// Errors that can occur when calling the Paystack API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Client settings are unusable (base URL, header values, HTTP client).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A caller-supplied argument failed a precondition; nothing was sent.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The request body or query options could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// Network, DNS or TLS failure.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The context was cancelled or its deadline passed.
    #[error("request aborted: {0}")]
    Cancelled(CancelReason),

    /// 401.
    #[error("unauthorized: {0}")]
    Unauthorized(Box<ApiError>),

    /// 400.
    #[error("bad request: {0}")]
    BadRequest(Box<ApiError>),

    /// 404.
    #[error("not found: {0}")]
    NotFound(Box<ApiError>),

    /// 500 through 504.
    #[error("server error: {0}")]
    Server(Box<ApiError>),

    /// Any other non-2xx status.
    #[error("API error: {0}")]
    Http(Box<ApiError>),

    /// A 2xx body was not valid JSON or did not fit the target record.
    #[error("failed to decode response from {} {}: {source}", .response.method, .response.url)]
    Decode {
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
        /// The response whose body failed to decode.
        response: Box<Response>,
    },

    /// Writing the body to a caller-supplied sink failed.
    #[error("failed to write response body: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The API error, for HTTP-classified failures.
    #[must_use]
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Unauthorized(err)
            | Self::BadRequest(err)
            | Self::NotFound(err)
            | Self::Server(err)
            | Self::Http(err) => Some(&**err),
            _ => None,
        }
    }

    /// The response, whenever one was received.
    #[must_use]
    pub fn response(&self) -> Option<&Response> {
        match self {
            Self::Decode { response, .. } => Some(&**response),
            other => other.api_error().map(|err| &err.response),
        }
    }

    /// HTTP status of the response, whenever one was received.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        self.response().map(|response| response.status)
    }

    /// Message parsed from the error body.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.api_error().and_then(|err| err.message.as_deref())
    }

    /// Whether the call was stopped by its context.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use reqwest::header::HeaderMap;
    use reqwest::Method;

    use super::*;
    use crate::response::Pagination;

    fn response(status: u16) -> Response {
        Response {
            method: Method::GET,
            url: "https://api.paystack.co/customer/42".parse().unwrap(),
            status: StatusCode::from_u16(status).unwrap(),
            headers: HeaderMap::new(),
            body: Bytes::from_static(br#"{"message":"Customer not found"}"#),
            pagination: Pagination::default(),
        }
    }

    #[test]
    fn api_error_display_includes_request_and_message() {
        let err = Error::NotFound(Box::new(ApiError {
            response: response(404),
            message: Some("Customer not found".into()),
        }));
        assert_eq!(
            err.to_string(),
            "not found: GET https://api.paystack.co/customer/42: 404 Customer not found"
        );
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(err.message(), Some("Customer not found"));
    }

    #[test]
    fn api_error_display_without_message() {
        let err = ApiError {
            response: response(502),
            message: None,
        };
        assert_eq!(err.to_string(), "GET https://api.paystack.co/customer/42: 502");
    }

    #[test]
    fn non_http_errors_have_no_response() {
        let err = Error::Cancelled(CancelReason::DeadlineExceeded);
        assert!(err.response().is_none());
        assert!(err.is_cancelled());
        assert_eq!(err.to_string(), "request aborted: context deadline exceeded");
    }
}
