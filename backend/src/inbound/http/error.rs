//! HTTP rendering for domain errors.
//!
//! Handlers return [`ApiResult`]; failures render as full HTML pages so the
//! browser always receives a navigable document rather than a bare status
//! line. Internal details are logged at the conversion site and redacted
//! before anything reaches the page.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::ports::StorageError;
use crate::domain::{Error, ErrorCode, REQUEST_ID_HEADER};
use crate::inbound::http::respond::HTML_CONTENT_TYPE;
use crate::inbound::http::views;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redacted_message(error: &Error) -> &str {
    if matches!(error.code(), ErrorCode::InternalError) {
        "Something went wrong on our side. Please try again."
    } else {
        error.message()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self.code() {
            ErrorCode::NotFound => views::not_found_page(),
            _ => views::error_page(redacted_message(self), self.request_id()),
        };
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(request_id) = self.request_id() {
            builder.insert_header((REQUEST_ID_HEADER, request_id));
        }
        builder.content_type(HTML_CONTENT_TYPE).body(body)
    }
}

impl From<StorageError> for Error {
    fn from(storage_error: StorageError) -> Self {
        // Log the path-bearing detail here; the page only sees a generic notice.
        error!(error = %storage_error, "contact storage failed");
        Self::internal(storage_error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use rstest::rstest;

    use super::*;
    use crate::domain::RequestId;

    #[rstest]
    #[case(Error::invalid_request("bad form"), StatusCode::BAD_REQUEST)]
    #[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn domain_codes_map_onto_http_statuses(#[case] error: Error, #[case] expected: StatusCode) {
        assert_eq!(error.status_code(), expected);
    }

    #[actix_web::test]
    async fn internal_details_are_redacted_from_the_page() {
        let error = Error::internal("storage read failed at ./data/contacts.json");
        let response = error.error_response();
        let body = to_bytes(response.into_body())
            .await
            .expect("body should collect");
        let page = String::from_utf8_lossy(&body);
        assert!(!page.contains("contacts.json"));
        assert!(page.contains("Something went wrong"));
    }

    #[actix_web::test]
    async fn a_missing_contact_renders_the_not_found_page() {
        let response = Error::not_found("no contact named \"Zed\"").error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body())
            .await
            .expect("body should collect");
        assert!(String::from_utf8_lossy(&body).contains("Page not found"));
    }

    #[actix_web::test]
    async fn the_request_id_header_is_echoed_when_present() {
        let id: RequestId = "00000000-0000-0000-0000-000000000000"
            .parse()
            .expect("nil uuid should parse");
        let error = RequestId::scope(id, async { Error::internal("boom") }).await;

        let response = error.error_response();
        let echoed = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok());
        assert_eq!(echoed, Some("00000000-0000-0000-0000-000000000000"));
    }

    #[actix_web::test]
    async fn storage_failures_convert_to_redacted_internal_errors() {
        let error = Error::from(StorageError::read("./data/contacts.json", "disk fell over"));
        assert_eq!(error.code(), ErrorCode::InternalError);

        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body())
            .await
            .expect("body should collect");
        assert!(!String::from_utf8_lossy(&body).contains("disk fell over"));
    }
}
