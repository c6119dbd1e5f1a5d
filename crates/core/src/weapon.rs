//! Add-time validation rules for weapon records.
//!
//! These rules apply only when a record is first created. Edits overwrite
//! all fields without re-validation; that asymmetry is deliberate and is
//! exercised explicitly by the integration tests.

/// Earliest accepted manufacture year.
pub const YEAR_MIN: i64 = 1800;
/// Latest accepted manufacture year.
pub const YEAR_MAX: i64 = 2030;

/// Flash message shown when any form field is left empty.
pub const MSG_FIELDS_REQUIRED: &str = "All fields are required!";
/// Flash message shown when the year is non-numeric or out of range.
pub const MSG_YEAR_INVALID: &str =
    "Year must be a valid number between 1800 and 2030!";

/// Parse a year string as submitted on the add form.
///
/// Accepts only non-negative digit strings (a leading `-` or `+` is
/// rejected, matching the digits-only rule), then range-checks against
/// [`YEAR_MIN`]..=[`YEAR_MAX`]. Returns `None` for anything else; the
/// caller cannot distinguish a malformed string from an out-of-range one,
/// and the user-facing message is the same for both.
pub fn parse_year(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i64 = raw.parse().ok()?;
    if (YEAR_MIN..=YEAR_MAX).contains(&year) {
        Some(year)
    } else {
        None
    }
}
