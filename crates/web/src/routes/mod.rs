pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::weapons;
use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// GET  /              -> redirect to /weapons
/// GET  /weapons       -> list all records
/// GET  /add           -> empty add form
/// POST /add           -> validate + create
/// GET  /edit/{id}     -> pre-filled edit form (404 if absent)
/// POST /edit/{id}     -> unconditional overwrite (404 if absent)
/// POST /delete/{id}   -> delete (404 if absent)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(weapons::home))
        .route("/weapons", get(weapons::list))
        .route("/add", get(weapons::add_form).post(weapons::add_submit))
        .route(
            "/edit/{id}",
            get(weapons::edit_form).post(weapons::edit_submit),
        )
        .route("/delete/{id}", post(weapons::delete))
}
