/// All database primary keys are SQLite INTEGER (i64) rowid-backed keys.
pub type DbId = i64;
