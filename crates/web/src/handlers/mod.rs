//! Request handlers.
//!
//! One async function per route/method pair. Handlers validate input,
//! delegate to the repositories in `armory_db`, and decide the next view
//! or redirect; errors map to HTML responses via
//! [`AppError`](crate::error::AppError).

pub mod weapons;
