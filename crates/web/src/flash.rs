//! One-shot status messages.
//!
//! Rather than keeping flash messages in signed session state, the message
//! is an explicit value carried on the redirect itself (as query
//! parameters) and consumed by exactly the next render: no session store,
//! no signing secret, nothing persisted.

use axum::response::Redirect;
use serde::{Deserialize, Serialize};

/// Whether a flash reports success or a rejected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Error,
}

/// A one-shot status message displayed on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    #[serde(rename = "flash")]
    pub message: String,
    pub kind: FlashKind,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: FlashKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: FlashKind::Error,
        }
    }

    /// Build a 303 redirect to `path` carrying this flash in the query
    /// string. If encoding fails (it cannot for these string/enum fields),
    /// the redirect is issued without the message rather than failing the
    /// request.
    pub fn redirect(&self, path: &str) -> Redirect {
        match serde_urlencoded::to_string(self) {
            Ok(query) => Redirect::to(&format!("{path}?{query}")),
            Err(_) => Redirect::to(path),
        }
    }
}

/// Query-string side of the flash handoff. All fields are optional so that
/// plain navigation (no flash) deserializes cleanly.
#[derive(Debug, Default, Deserialize)]
pub struct FlashParams {
    flash: Option<String>,
    kind: Option<FlashKind>,
}

impl FlashParams {
    /// Consume the params, yielding the flash if one was queued. A message
    /// without an explicit kind renders as a success, matching how the
    /// add/edit/delete handlers queue their confirmations.
    pub fn into_flash(self) -> Option<Flash> {
        let message = self.flash?;
        Some(Flash {
            message,
            kind: self.kind.unwrap_or(FlashKind::Success),
        })
    }
}
