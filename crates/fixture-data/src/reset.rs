//! Reset script assembly.
//!
//! The reset script wipes all fixture tables child-first, reinstates the
//! static seed rows (categories and demo accounts), then sources the
//! generated per-entity artifacts in parent-before-child order.

use std::fmt::Write as _;

use crate::artifact::Artifact;
use crate::seed_data::SeedData;
use crate::sql;

/// File name of the emitted reset script.
pub const RESET_FILE_NAME: &str = "reset.sql";

/// Tables deleted by the reset script, children before parents.
///
/// Rows referencing other rows must be removed first, otherwise the
/// deletes trip foreign-key constraints on replay.
pub const DELETE_ORDER: [&str; 11] = [
    "COMMENT",
    "NOTICE",
    "NOTIFICATION",
    "BOOKMARK",
    "STUDY_USER",
    "STUDY",
    "USER_PROFILE",
    "USER_INTEREST_CATEGORY",
    "USER_METOO_COMMENT",
    "USER",
    "CATEGORY",
];

/// Assembles the full reset script for the given seed data.
///
/// The script has three sections in order: child-first DELETEs, static
/// inserts for categories and demo accounts, and `source` directives for
/// each generated artifact.
#[must_use]
pub fn reset_script(seed_data: &SeedData) -> String {
    let mut script = String::new();

    for table in DELETE_ORDER {
        // Infallible for String targets.
        drop(writeln!(script, "DELETE FROM {table};"));
    }
    script.push('\n');

    if let Some(insert) = category_insert(seed_data) {
        script.push_str(&insert);
        script.push('\n');
    }
    if let Some(insert) = demo_account_insert(seed_data) {
        script.push_str(&insert);
        script.push('\n');
    }

    for artifact in Artifact::LOAD_ORDER {
        drop(writeln!(script, "source {};", artifact.file_name()));
    }

    script
}

/// Renders the multi-row CATEGORY insert, or `None` when no categories
/// are seeded.
fn category_insert(seed_data: &SeedData) -> Option<String> {
    let categories = seed_data.categories();
    if categories.is_empty() {
        return None;
    }

    let rows: Vec<String> = categories
        .iter()
        .map(|category| {
            format!(
                "({}, {}, {})",
                category.code(),
                sql::text(category.main()),
                sql::text(category.sub()),
            )
        })
        .collect();

    Some(format!(
        "INSERT INTO CATEGORY(CODE, MAIN, SUB) VALUES {};\n",
        rows.join(", ")
    ))
}

/// Renders the multi-row USER insert for demo accounts, or `None` when
/// no demo accounts are seeded.
fn demo_account_insert(seed_data: &SeedData) -> Option<String> {
    let accounts = seed_data.demo_accounts();
    if accounts.is_empty() {
        return None;
    }

    let rows: Vec<String> = accounts
        .iter()
        .map(|account| {
            format!(
                "({}, {}, {}, 0, '', {})",
                sql::id(&account.id()),
                sql::text(account.email()),
                sql::text(account.password_hash()),
                sql::text(account.role().as_str()),
            )
        })
        .collect();

    Some(format!(
        "INSERT INTO USER(ID, EMAIL, PASSWORD, IS_LOGOUT, TOKEN, ROLE) VALUES {};\n",
        rows.join(", ")
    ))
}
