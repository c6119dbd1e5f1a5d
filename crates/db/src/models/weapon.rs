//! Weapon entity model and DTO.

use armory_core::types::DbId;
use sqlx::FromRow;

/// A row from the `weapons` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Weapon {
    pub id: DbId,
    pub name: String,
    /// Maps to the `type` column; `type` is a Rust keyword.
    #[sqlx(rename = "type")]
    pub kind: String,
    pub manufacturer: String,
    pub year: i64,
    pub status: String,
}

/// The five mutable fields of a weapon record.
///
/// Used both for insertion and for updates: edits are a full overwrite of
/// every field, never a partial patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWeapon {
    pub name: String,
    pub kind: String,
    pub manufacturer: String,
    pub year: i64,
    pub status: String,
}
