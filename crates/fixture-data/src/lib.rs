//! Deterministic SQL fixture generation for the study platform database.
//!
//! This crate produces the `.sql` fixture artifacts used to seed a
//! development or test database: one artifact of INSERT statements per
//! entity type (users, profiles, studies, memberships, bookmarks, comments,
//! notifications, notices, interest-category links, and comment reactions)
//! plus a reset script that clears every table and reloads the artifacts in
//! dependency order.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Deterministic generation from a seeded RNG (identical output for the
//!   same seed and configuration)
//! - Explicit per-entity foreign-key selection strategies, validated up
//!   front so positional derivation can never index past an identifier pool
//! - Externally supplied seed data (category rows and demo accounts) loaded
//!   from a versioned JSON document
//! - Atomic artifact writes so a failed run never leaves a partial file
//!
//! # Example
//!
//! ```
//! use fixture_data::{FixtureConfig, SeedData, generate_fixtures};
//!
//! let config = FixtureConfig::default();
//! let seed_data = SeedData::builtin();
//! let fixtures = generate_fixtures(&config, &seed_data).expect("generation succeeds");
//!
//! assert_eq!(fixtures.users().len(), config.user_count);
//! assert_eq!(fixtures.studies().len(), config.study_count);
//! ```

mod artifact;
mod catalog;
mod config;
mod emit;
mod error;
pub mod gen_cli;
mod generator;
mod pool;
mod reset;
mod rows;
mod seed_data;
mod sql;
mod validation;

pub use artifact::Artifact;
pub use catalog::{FREQUENCIES, LOCATIONS, NOTIFICATION_TYPES, WEEKDAYS};
pub use config::{FixtureConfig, FkPlan, FkStrategy};
pub use emit::write_fixture_set;
pub use error::{ConfigError, EmitError, GenerationError, SeedDataError};
pub use generator::{FixtureSet, generate_fixtures};
pub use pool::IdPool;
pub use reset::{DELETE_ORDER, RESET_FILE_NAME, reset_script};
pub use rows::{
    BookmarkRow, CommentRow, InterestCategoryRow, MembershipRow, NoticeRow, NotificationRow,
    ProfileRow, ReactionRow, StudyRow, UserRow,
};
pub use seed_data::{CategoryRow, DemoAccount, DemoRole, SeedData};
pub use validation::{PROFILE_NAME_MAX, PROFILE_NAME_MIN, is_valid_profile_name};
