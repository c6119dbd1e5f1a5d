//! Handlers for the weapon CRUD routes.

use armory_core::error::CoreError;
use armory_core::types::DbId;
use armory_core::weapon::{parse_year, MSG_FIELDS_REQUIRED, MSG_YEAR_INVALID};
use armory_db::models::weapon::NewWeapon;
use armory_db::repositories::WeaponRepo;
use axum::extract::{Path, Query, State};
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::flash::{Flash, FlashParams};
use crate::render;
use crate::state::AppState;

const MSG_ADDED: &str = "Weapon added successfully!";
const MSG_UPDATED: &str = "Weapon updated successfully!";
const MSG_DELETED: &str = "Weapon deleted successfully!";

/// The five fields of the add/edit forms. `year` stays a string here: the
/// add handler validates it, the edit handler does not.
#[derive(Debug, Deserialize)]
pub struct WeaponForm {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub manufacturer: String,
    pub year: String,
    pub status: String,
}

/// GET / -- redirect to the weapon list.
pub async fn home() -> Redirect {
    Redirect::to("/weapons")
}

/// GET /weapons -- render all records plus any queued flash.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<FlashParams>,
) -> AppResult<Html<String>> {
    let weapons = WeaponRepo::list_all(&state.pool).await?;
    Ok(render::weapons_page(&weapons, params.into_flash().as_ref()))
}

/// GET /add -- render the empty add form (plus the error flash when
/// redirected back from a failed validation).
pub async fn add_form(Query(params): Query<FlashParams>) -> Html<String> {
    render::add_form_page(params.into_flash().as_ref())
}

/// POST /add -- validate and create.
///
/// Rejections redirect back to the form with an error flash and leave the
/// store untouched; success redirects to the list.
pub async fn add_submit(
    State(state): State<AppState>,
    Form(form): Form<WeaponForm>,
) -> AppResult<Redirect> {
    let filled = [
        &form.name,
        &form.kind,
        &form.manufacturer,
        &form.year,
        &form.status,
    ]
    .iter()
    .all(|field| !field.is_empty());
    if !filled {
        return Ok(Flash::error(MSG_FIELDS_REQUIRED).redirect("/add"));
    }

    // Non-digit strings and out-of-range years get the same rejection.
    let Some(year) = parse_year(&form.year) else {
        return Ok(Flash::error(MSG_YEAR_INVALID).redirect("/add"));
    };

    let input = NewWeapon {
        name: form.name,
        kind: form.kind,
        manufacturer: form.manufacturer,
        year,
        status: form.status,
    };
    let created = WeaponRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, name = %created.name, "weapon added");

    Ok(Flash::success(MSG_ADDED).redirect("/weapons"))
}

/// GET /edit/{id} -- render the form pre-filled with current values, or
/// 404 when the id is absent.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let weapon = WeaponRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Weapon",
            id,
        }))?;
    Ok(render::edit_form_page(&weapon))
}

/// POST /edit/{id} -- full overwrite of all fields.
///
/// No validation is re-applied on edit: empty fields and out-of-range
/// years are stored silently. That asymmetry with the add form is
/// long-standing documented behaviour, kept on purpose. The one thing the
/// INTEGER column cannot absorb is a year that is not a number at all;
/// that is rejected as a 400.
pub async fn edit_submit(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(form): Form<WeaponForm>,
) -> AppResult<Redirect> {
    let year: i64 = form
        .year
        .parse()
        .map_err(|_| AppError::BadRequest("year must be an integer".into()))?;

    let input = NewWeapon {
        name: form.name,
        kind: form.kind,
        manufacturer: form.manufacturer,
        year,
        status: form.status,
    };
    WeaponRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Weapon",
            id,
        }))?;
    tracing::info!(id, "weapon updated");

    Ok(Flash::success(MSG_UPDATED).redirect("/weapons"))
}

/// POST /delete/{id} -- remove the record, or 404 when the id is absent.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Redirect> {
    let deleted = WeaponRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Weapon",
            id,
        }));
    }
    tracing::info!(id, "weapon deleted");

    Ok(Flash::success(MSG_DELETED).redirect("/weapons"))
}
