//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use contactbook::Trace;
use contactbook::domain::ContactStore;
use contactbook::inbound::http::contacts::{
    add_contact_form, contact_detail, create_contact, delete_contact, edit_contact_form,
    list_contacts, update_contact,
};
use contactbook::inbound::http::health::{HealthState, live, ready};
use contactbook::inbound::http::pages::{about, home, not_found};

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    store: web::Data<ContactStore>,
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        store,
        key,
        cookie_secure,
        same_site,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .session_lifecycle(
            PersistentSession::default().session_ttl(actix_web::cookie::time::Duration::hours(2)),
        )
        .build();

    // Static contact routes are registered before `/contact/{name}` so they
    // win the match; anything unmatched falls through to the not-found page.
    let pages = web::scope("")
        .wrap(session)
        .service(home)
        .service(about)
        .service(list_contacts)
        .service(add_contact_form)
        .service(create_contact)
        .service(delete_contact)
        .service(edit_contact_form)
        .service(update_contact)
        .service(contact_detail)
        .default_service(web::route().to(not_found));

    App::new()
        .app_data(health_state)
        .app_data(store)
        .wrap(Trace)
        .service(ready)
        .service(live)
        .service(pages)
}

/// Construct an Actix HTTP server over the shared contact store.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    store: web::Data<ContactStore>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let ServerConfig {
        key,
        cookie_secure,
        same_site,
        bind_addr,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            store: store.clone(),
            key: key.clone(),
            cookie_secure,
            same_site,
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
