//! Application-level error type.
//!
//! Transport agnostic: the HTTP adapter maps these errors onto rendered
//! pages, status codes, and headers. Nothing in this module knows about
//! actix.

use super::request_id::RequestId;

/// Stable machine-readable code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The requested resource does not exist.
    NotFound,
    /// An unexpected failure inside the application.
    InternalError,
}

impl ErrorCode {
    /// Stable snake_case identifier used in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::NotFound => "not_found",
            Self::InternalError => "internal_error",
        }
    }
}

/// Application error payload.
///
/// Captures the identifier of the request being served at construction time
/// so rendered error pages and log events correlate with the request trace.
///
/// # Examples
/// ```
/// use contactbook::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("no such contact");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.message(), "no such contact");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    request_id: Option<String>,
}

impl Error {
    /// Create a new error with the given code and message.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            request_id: RequestId::current().map(|id| id.to_string()),
        }
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message shown on the rendered error page.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Identifier of the request that produced this error, when known.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ErrorCode::InvalidRequest, "invalid_request")]
    #[case(ErrorCode::NotFound, "not_found")]
    #[case(ErrorCode::InternalError, "internal_error")]
    fn codes_have_stable_identifiers(#[case] code: ErrorCode, #[case] expected: &str) {
        assert_eq!(code.as_str(), expected);
    }

    #[tokio::test]
    async fn errors_capture_the_request_in_scope() {
        let id: RequestId = "00000000-0000-0000-0000-000000000000"
            .parse()
            .expect("valid UUID");
        let err = RequestId::scope(id, async { Error::internal("boom") }).await;
        assert_eq!(err.request_id(), Some(id.to_string().as_str()));
    }

    #[test]
    fn errors_outside_a_request_have_no_id() {
        let err = Error::not_found("missing");
        assert_eq!(err.request_id(), None);
    }
}
