//! Repository for the `weapons` table.

use armory_core::types::DbId;

use crate::models::weapon::{NewWeapon, Weapon};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, type, manufacturer, year, status";

/// Provides CRUD operations for weapon records.
pub struct WeaponRepo;

impl WeaponRepo {
    /// Insert a new weapon, returning the created row with its generated id.
    pub async fn create(
        pool: &crate::DbPool,
        input: &NewWeapon,
    ) -> Result<Weapon, sqlx::Error> {
        let query = format!(
            "INSERT INTO weapons (name, type, manufacturer, year, status)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Weapon>(&query)
            .bind(&input.name)
            .bind(&input.kind)
            .bind(&input.manufacturer)
            .bind(input.year)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// List every weapon in insertion order (ascending id).
    pub async fn list_all(pool: &crate::DbPool) -> Result<Vec<Weapon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM weapons ORDER BY id");
        sqlx::query_as::<_, Weapon>(&query).fetch_all(pool).await
    }

    /// Find a weapon by its id. Returns `None` if no such row exists.
    pub async fn find_by_id(
        pool: &crate::DbPool,
        id: DbId,
    ) -> Result<Option<Weapon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM weapons WHERE id = ?");
        sqlx::query_as::<_, Weapon>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite all mutable fields of a weapon. This is a full overwrite,
    /// not a patch: every column is set from `input`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &crate::DbPool,
        id: DbId,
        input: &NewWeapon,
    ) -> Result<Option<Weapon>, sqlx::Error> {
        let query = format!(
            "UPDATE weapons
             SET name = ?, type = ?, manufacturer = ?, year = ?, status = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Weapon>(&query)
            .bind(&input.name)
            .bind(&input.kind)
            .bind(&input.manufacturer)
            .bind(input.year)
            .bind(&input.status)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a weapon by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &crate::DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM weapons WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
