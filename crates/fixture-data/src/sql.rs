//! SQL literal formatting helpers.
//!
//! All values are generator-controlled, so formatting is limited to the
//! literal shapes the downstream replay expects: single-quoted strings with
//! embedded quotes doubled, booleans as 0/1 integers, and bare NULL.

use uuid::Uuid;

/// The NULL literal.
pub(crate) const NULL: &str = "NULL";

/// Formats a string value as a single-quoted SQL literal.
///
/// Embedded single quotes are doubled; no other escaping is performed.
pub(crate) fn text(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Formats an identifier as a single-quoted SQL literal.
pub(crate) fn id(value: &Uuid) -> String {
    format!("'{value}'")
}

/// Formats a boolean as the 0/1 integer literal the schema uses.
pub(crate) const fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}
