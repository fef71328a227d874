//! Contact page handlers.
//!
//! Every mutation follows the same shape: validate, mutate the store, set a
//! flash notice, redirect to the list with `303 See Other`. Validation
//! failures re-render the form with the submitted values so nothing typed is
//! lost.

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use tracing::info;

use crate::domain::{Contact, ContactStore, Error, FieldError, validate_contact};
use crate::inbound::http::error::ApiResult;
use crate::inbound::http::flash::Flash;
use crate::inbound::http::respond::{html, see_other};
use crate::inbound::http::views;

/// Form payload for creating a contact.
///
/// The legacy `nama` and `nohp` field names are accepted as aliases so forms
/// and scripts written against the old data format keep working.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(alias = "nama")]
    name: String,
    email: String,
    #[serde(alias = "nohp")]
    phone: String,
}

impl ContactForm {
    fn into_contact(self) -> Contact {
        Contact::new(self.name, self.email, self.phone)
    }
}

/// Form payload for replacing the contact stored as `old_name`.
#[derive(Debug, Deserialize)]
pub struct UpdateContactForm {
    #[serde(alias = "oldNama")]
    old_name: String,
    #[serde(alias = "nama")]
    name: String,
    email: String,
    #[serde(alias = "nohp")]
    phone: String,
}

/// `GET /contact`: the contact list with any pending flash notice.
#[get("/contact")]
pub async fn list_contacts(
    store: web::Data<ContactStore>,
    flash: Flash,
) -> ApiResult<HttpResponse> {
    let contacts = store.load_all().await?;
    let notice = flash.take();
    Ok(html(views::contact_list_page(&contacts, notice.as_deref())))
}

/// `GET /contact/add`: blank form for a new contact.
#[get("/contact/add")]
pub async fn add_contact_form() -> HttpResponse {
    html(views::add_contact_page(&Contact::new("", "", ""), &[]))
}

/// `POST /contact`: validate and append a new contact.
#[post("/contact")]
pub async fn create_contact(
    store: web::Data<ContactStore>,
    flash: Flash,
    form: web::Form<ContactForm>,
) -> ApiResult<HttpResponse> {
    let candidate = form.into_inner().into_contact();
    let mut errors = validate_contact(&candidate);
    if store.exists_by_name(&candidate.name).await? {
        errors.push(FieldError::duplicate_name(&candidate.name));
    }
    if !errors.is_empty() {
        return Ok(html(views::add_contact_page(&candidate, &errors)));
    }

    let name = candidate.name.clone();
    store.add(candidate).await?;
    info!(%name, "contact added");
    flash.set("Contact added successfully.")?;
    Ok(see_other("/contact"))
}

/// `GET /contact/delete/{name}`: remove a contact and bounce back to the list.
#[get("/contact/delete/{name}")]
pub async fn delete_contact(
    store: web::Data<ContactStore>,
    flash: Flash,
    name: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let name = name.into_inner();
    if store.find_by_name(&name).await?.is_none() {
        return Err(Error::not_found(format!("no contact named \"{name}\"")));
    }

    // The removal matches exactly even though the lookup above does not, so a
    // case-mismatched link can pass the check yet remove nothing.
    store.delete(&name).await?;
    info!(%name, "contact deleted");
    flash.set("Contact deleted successfully.")?;
    Ok(see_other("/contact"))
}

/// `GET /contact/edit/{name}`: form prefilled with the stored contact.
#[get("/contact/edit/{name}")]
pub async fn edit_contact_form(
    store: web::Data<ContactStore>,
    name: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let name = name.into_inner();
    let contact = store
        .find_by_name(&name)
        .await?
        .ok_or_else(|| Error::not_found(format!("no contact named \"{name}\"")))?;
    Ok(html(views::edit_contact_page(&contact.name, &contact, &[])))
}

/// `POST /contact/update`: replace the contact stored as `old_name`.
#[post("/contact/update")]
pub async fn update_contact(
    store: web::Data<ContactStore>,
    flash: Flash,
    form: web::Form<UpdateContactForm>,
) -> ApiResult<HttpResponse> {
    let UpdateContactForm {
        old_name,
        name,
        email,
        phone,
    } = form.into_inner();
    let candidate = Contact::new(name, email, phone);
    let mut errors = validate_contact(&candidate);
    if candidate.name != old_name && store.exists_by_name(&candidate.name).await? {
        errors.push(FieldError::duplicate_name(&candidate.name));
    }
    if !errors.is_empty() {
        return Ok(html(views::edit_contact_page(&old_name, &candidate, &errors)));
    }

    let name = candidate.name.clone();
    store.update(&old_name, candidate).await?;
    info!(%old_name, %name, "contact updated");
    flash.set("Contact updated successfully.")?;
    Ok(see_other("/contact"))
}

/// `GET /contact/{name}`: a single contact's detail page.
///
/// Registered after the static `/contact/...` routes so those keep winning
/// the match.
#[get("/contact/{name}")]
pub async fn contact_detail(
    store: web::Data<ContactStore>,
    name: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let name = name.into_inner();
    let contact = store
        .find_by_name(&name)
        .await?
        .ok_or_else(|| Error::not_found(format!("no contact named \"{name}\"")))?;
    Ok(html(views::contact_detail_page(&contact)))
}
