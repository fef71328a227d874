//! One-shot flash notices carried in the cookie session.
//!
//! Mutating handlers store a notice just before redirecting, and the contact
//! list takes it on the next render. Taking a notice removes it from the
//! session, so refreshing the list shows a plain page again.

use actix_session::Session;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::Error;

const FLASH_KEY: &str = "flash";

/// Extractor wrapping the cookie [`Session`] with one-shot notice semantics.
#[derive(Clone)]
pub struct Flash(Session);

impl Flash {
    fn new(session: Session) -> Self {
        Self(session)
    }

    /// Store `notice` for the next rendered page.
    ///
    /// # Errors
    /// Returns an internal error when the session state cannot be updated.
    pub fn set(&self, notice: &str) -> Result<(), Error> {
        self.0
            .insert(FLASH_KEY, notice)
            .map_err(|error| Error::internal(format!("failed to persist flash notice: {error}")))
    }

    /// Take the pending notice, leaving nothing behind for later reads.
    ///
    /// An unreadable stored value is discarded with a warning rather than
    /// surfaced, so a corrupted cookie cannot wedge the contact list.
    #[must_use]
    pub fn take(&self) -> Option<String> {
        match self.0.get::<String>(FLASH_KEY) {
            Ok(Some(notice)) => {
                self.0.remove(FLASH_KEY);
                Some(notice)
            }
            Ok(None) => None,
            Err(error) => {
                warn!(%error, "discarding an unreadable flash notice");
                self.0.remove(FLASH_KEY);
                None
            }
        }
    }
}

impl FromRequest for Flash {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(Self::new) })
    }
}
