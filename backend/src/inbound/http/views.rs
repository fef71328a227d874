//! Server-rendered HTML pages.
//!
//! Pages are assembled by plain functions returning the complete document as
//! a `String`; there is no template engine. Every piece of user-supplied text
//! passes through `escape_html` before interpolation, so stored contact data
//! can never inject markup.

use crate::domain::{Contact, FieldError};

const STYLE: &str = "\
body{font-family:sans-serif;max-width:44rem;margin:2rem auto;padding:0 1rem;color:#222}\
nav a{margin-right:1rem}\
table{border-collapse:collapse;width:100%}\
td,th{border-bottom:1px solid #ddd;padding:.4rem;text-align:left}\
.notice{background:#e6f4ea;border:1px solid #b7dfc0;padding:.5rem .8rem}\
.errors{background:#fdecea;border:1px solid #f5c6cb;padding:.5rem 2rem}\
label{display:block;margin-top:.6rem}\
input{padding:.3rem;width:100%;max-width:24rem}\
button{margin-top:.8rem;padding:.4rem 1rem}\
";

/// Wrap `body` in the shared document shell.
///
/// `title` must already be escaped when it carries user-supplied text.
fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title} | Contact Book</title>\n\
         <style>{STYLE}</style>\n\
         </head>\n\
         <body>\n\
         <nav><a href=\"/\">Home</a><a href=\"/contact\">Contacts</a><a href=\"/about\">About</a></nav>\n\
         {body}\n\
         </body>\n\
         </html>\n"
    )
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render the landing page with the list of maintainers.
pub fn home_page(maintainers: &[(&str, &str)]) -> String {
    let items: String = maintainers
        .iter()
        .map(|(name, email)| {
            format!(
                "<li>{} (<a href=\"mailto:{email}\">{email}</a>)</li>\n",
                escape_html(name),
                email = escape_html(email),
            )
        })
        .collect();
    let body = format!(
        "<h1>Contact Book</h1>\n\
         <p>A small address book kept in a single JSON file. Browse the\n\
         <a href=\"/contact\">contact list</a> to add, edit, or remove entries.</p>\n\
         <h2>Maintainers</h2>\n<ul>\n{items}</ul>"
    );
    layout("Home", &body)
}

/// Render the about page.
pub fn about_page() -> String {
    let body = "<h1>About</h1>\n\
         <p>Contact Book stores its entire collection in one JSON file on\n\
         disk. Every change rewrites the file, so the copy on disk is always\n\
         complete and portable.</p>\n\
         <p>There is no account system and no database. Copy the data file\n\
         and you have copied the application state.</p>";
    layout("About", body)
}

/// Render the contact list, with an optional one-shot notice at the top.
pub fn contact_list_page(contacts: &[Contact], notice: Option<&str>) -> String {
    let banner = notice
        .map(|text| format!("<p class=\"notice\">{}</p>\n", escape_html(text)))
        .unwrap_or_default();
    let body = if contacts.is_empty() {
        format!(
            "{banner}<h1>Contacts</h1>\n\
             <p>No contacts yet.</p>\n\
             <p><a href=\"/contact/add\">Add a contact</a></p>"
        )
    } else {
        let rows: String = contacts.iter().map(contact_row).collect();
        format!(
            "{banner}<h1>Contacts</h1>\n\
             <p><a href=\"/contact/add\">Add a contact</a></p>\n\
             <table>\n\
             <thead><tr><th>Name</th><th>Email</th><th>Phone</th><th>Actions</th></tr></thead>\n\
             <tbody>\n{rows}</tbody>\n</table>"
        )
    };
    layout("Contacts", &body)
}

fn contact_row(contact: &Contact) -> String {
    let name = escape_html(&contact.name);
    format!(
        "<tr><td><a href=\"/contact/{name}\">{name}</a></td>\
         <td>{}</td><td>{}</td>\
         <td><a href=\"/contact/edit/{name}\">Edit</a> \
         <a href=\"/contact/delete/{name}\">Delete</a></td></tr>\n",
        escape_html(&contact.email),
        escape_html(&contact.phone),
    )
}

/// Render the add form, keeping submitted `values` and listing any
/// validation failures.
pub fn add_contact_page(values: &Contact, errors: &[FieldError]) -> String {
    layout(
        "Add contact",
        &contact_form("Add contact", "/contact", None, values, errors),
    )
}

/// Render the edit form for the contact currently stored as `old_name`.
pub fn edit_contact_page(old_name: &str, values: &Contact, errors: &[FieldError]) -> String {
    layout(
        "Edit contact",
        &contact_form(
            "Edit contact",
            "/contact/update",
            Some(old_name),
            values,
            errors,
        ),
    )
}

fn contact_form(
    heading: &str,
    action: &str,
    old_name: Option<&str>,
    values: &Contact,
    errors: &[FieldError],
) -> String {
    let error_block = if errors.is_empty() {
        String::new()
    } else {
        let items: String = errors
            .iter()
            .map(|error| format!("<li>{}</li>\n", escape_html(&error.message)))
            .collect();
        format!("<ul class=\"errors\">\n{items}</ul>\n")
    };
    let hidden = old_name
        .map(|name| {
            format!(
                "<input type=\"hidden\" name=\"old_name\" value=\"{}\">\n",
                escape_html(name)
            )
        })
        .unwrap_or_default();
    format!(
        "<h1>{heading}</h1>\n\
         {error_block}\
         <form method=\"post\" action=\"{action}\">\n\
         {hidden}\
         <label for=\"name\">Name</label>\n\
         <input type=\"text\" id=\"name\" name=\"name\" value=\"{}\">\n\
         <label for=\"email\">Email</label>\n\
         <input type=\"text\" id=\"email\" name=\"email\" value=\"{}\">\n\
         <label for=\"phone\">Phone</label>\n\
         <input type=\"text\" id=\"phone\" name=\"phone\" value=\"{}\">\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n\
         <p><a href=\"/contact\">Back to contacts</a></p>",
        escape_html(&values.name),
        escape_html(&values.email),
        escape_html(&values.phone),
    )
}

/// Render a single contact's detail page.
pub fn contact_detail_page(contact: &Contact) -> String {
    let name = escape_html(&contact.name);
    let body = format!(
        "<h1>{name}</h1>\n\
         <dl>\n\
         <dt>Email</dt><dd>{}</dd>\n\
         <dt>Phone</dt><dd>{}</dd>\n\
         </dl>\n\
         <p><a href=\"/contact/edit/{name}\">Edit</a> \
         <a href=\"/contact\">Back to contacts</a></p>",
        escape_html(&contact.email),
        escape_html(&contact.phone),
    );
    layout(&name, &body)
}

/// Render the 404 page used for unknown routes and missing contacts.
pub fn not_found_page() -> String {
    layout(
        "Page not found",
        "<h1>Page not found</h1>\n\
         <p>The page you are looking for does not exist.</p>\n\
         <p><a href=\"/\">Back to the home page</a></p>",
    )
}

/// Render the generic error page. `message` must already be safe to show;
/// internal details are redacted before reaching this function.
pub fn error_page(message: &str, request_id: Option<&str>) -> String {
    let reference = request_id
        .map(|id| format!("<p class=\"request-id\">Request ID: {}</p>\n", escape_html(id)))
        .unwrap_or_default();
    let body = format!(
        "<h1>Error</h1>\n\
         <p>{}</p>\n\
         {reference}\
         <p><a href=\"/\">Back to the home page</a></p>",
        escape_html(message)
    );
    layout("Error", &body)
}
