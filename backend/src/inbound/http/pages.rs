//! Static page handlers: home, about, and the not-found fallback.

use actix_web::{HttpResponse, get};

use crate::inbound::http::respond::{HTML_CONTENT_TYPE, html};
use crate::inbound::http::views;

const MAINTAINERS: &[(&str, &str)] = &[
    ("Ridwan", "ridwan@example.com"),
    ("Felix", "felix@example.com"),
    ("Ruby", "ruby@example.com"),
];

/// `GET /`: landing page.
#[get("/")]
pub async fn home() -> HttpResponse {
    html(views::home_page(MAINTAINERS))
}

/// `GET /about`: a short description of the application.
#[get("/about")]
pub async fn about() -> HttpResponse {
    html(views::about_page())
}

/// Fallback handler for paths no route matched.
///
/// Wired as the default service so unknown URLs render the same not-found
/// page a missing contact does.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type(HTML_CONTENT_TYPE)
        .body(views::not_found_page())
}
