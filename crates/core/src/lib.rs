//! Domain types and rules for the armory record manager.
//!
//! This crate is free of I/O: it holds the shared ID/error types and the
//! add-time validation rules that the web layer applies before touching
//! the store.

pub mod error;
pub mod types;
pub mod weapon;
