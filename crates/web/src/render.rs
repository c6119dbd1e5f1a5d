//! Server-side HTML rendering.
//!
//! Views are plain functions returning [`Html<String>`]; there is no
//! template engine. All dynamic text passes through [`escape`] before it
//! reaches the page.

use std::fmt::Write;

use armory_db::models::weapon::Weapon;
use axum::response::Html;

use crate::flash::{Flash, FlashKind};

/// Escape text for interpolation into HTML body or attribute positions.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = "\
body{font-family:sans-serif;max-width:60rem;margin:2rem auto;padding:0 1rem}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #ccc;padding:.4rem .6rem;text-align:left}\
form.inline{display:inline}\
label{display:block;margin-top:.6rem}\
.flash{padding:.6rem;margin:1rem 0;border:1px solid}\
.flash.success{background:#e6f4e6;border-color:#2e7d32}\
.flash.error{background:#fbe9e9;border-color:#c62828}";

/// Shared page chrome: title, nav, and the one-shot flash if present.
fn layout(title: &str, flash: Option<&Flash>, body: &str) -> Html<String> {
    let flash_html = match flash {
        Some(f) => {
            let class = match f.kind {
                FlashKind::Success => "success",
                FlashKind::Error => "error",
            };
            format!(
                "<div class=\"flash {class}\">{}</div>\n",
                escape(&f.message)
            )
        }
        None => String::new(),
    };

    Html(format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} - Armory</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <nav><a href=\"/weapons\">Weapons</a> | <a href=\"/add\">Add weapon</a></nav>\n\
         <h1>{title}</h1>\n{flash_html}{body}</body>\n</html>\n",
        title = escape(title),
    ))
}

/// The weapon list table.
pub fn weapons_page(weapons: &[Weapon], flash: Option<&Flash>) -> Html<String> {
    if weapons.is_empty() {
        return layout("Weapons", flash, "<p>No weapons recorded yet.</p>\n");
    }

    let mut body = String::from(
        "<table>\n<tr><th>Name</th><th>Type</th><th>Manufacturer</th>\
         <th>Year</th><th>Status</th><th>Actions</th></tr>\n",
    );
    for w in weapons {
        // write! into a String cannot fail.
        let _ = write!(
            body,
            "<tr><td>{name}</td><td>{kind}</td><td>{manufacturer}</td>\
             <td>{year}</td><td>{status}</td>\
             <td><a href=\"/edit/{id}\">Edit</a> \
             <form class=\"inline\" method=\"post\" action=\"/delete/{id}\">\
             <button type=\"submit\">Delete</button></form></td></tr>\n",
            name = escape(&w.name),
            kind = escape(&w.kind),
            manufacturer = escape(&w.manufacturer),
            year = w.year,
            status = escape(&w.status),
            id = w.id,
        );
    }
    body.push_str("</table>\n");
    layout("Weapons", flash, &body)
}

fn weapon_form(action: &str, values: Option<&Weapon>) -> String {
    let text_field = |label: &str, field: &str, value: &str| {
        format!(
            "<label>{label}<br>\
             <input type=\"text\" name=\"{field}\" value=\"{}\"></label>\n",
            escape(value)
        )
    };

    let (name, kind, manufacturer, year, status) = match values {
        Some(w) => (
            w.name.as_str(),
            w.kind.as_str(),
            w.manufacturer.as_str(),
            w.year.to_string(),
            w.status.as_str(),
        ),
        None => ("", "", "", String::new(), ""),
    };

    format!(
        "<form method=\"post\" action=\"{action}\">\n{}{}{}{}{}\
         <p><button type=\"submit\">Save</button></p>\n</form>\n",
        text_field("Name", "name", name),
        text_field("Type", "type", kind),
        text_field("Manufacturer", "manufacturer", manufacturer),
        text_field("Year", "year", &year),
        text_field("Status", "status", status),
    )
}

/// The empty add form, with an error flash when redirected back from a
/// failed validation.
pub fn add_form_page(flash: Option<&Flash>) -> Html<String> {
    layout("Add weapon", flash, &weapon_form("/add", None))
}

/// The edit form, pre-filled with the record's current values.
pub fn edit_form_page(weapon: &Weapon) -> Html<String> {
    layout(
        "Edit weapon",
        None,
        &weapon_form(&format!("/edit/{}", weapon.id), Some(weapon)),
    )
}

pub fn not_found_page() -> Html<String> {
    layout("Not found", None, "<p>No such record.</p>\n")
}

pub fn bad_request_page(message: &str) -> Html<String> {
    layout(
        "Bad request",
        None,
        &format!("<p>{}</p>\n", escape(message)),
    )
}

pub fn internal_error_page() -> Html<String> {
    layout("Server error", None, "<p>Something went wrong.</p>\n")
}
