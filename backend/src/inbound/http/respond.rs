//! Small response builders shared by the page handlers.

use actix_web::HttpResponse;
use actix_web::http::header;

/// Content type for every rendered page.
pub(crate) const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Build a `200 OK` response around a rendered page.
pub(crate) fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(HTML_CONTENT_TYPE)
        .body(body)
}

/// Build the `303 See Other` redirect every mutation answers with.
pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
