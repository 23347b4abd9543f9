//! Generation configuration: row counts and foreign-key selection plans.
//!
//! The original generator scripts mixed two foreign-key selection styles
//! (positional derivation and uniform random sampling) implicitly per
//! entity. Here the choice is an explicit [`FkStrategy`] per reference,
//! derived from the configured counts unless a plan is supplied, and
//! [`FixtureConfig::validate`] rejects count combinations whose positional
//! derivation would index past an identifier pool before any row is
//! generated.

use crate::error::ConfigError;

/// Default number of user rows.
pub const DEFAULT_USER_COUNT: usize = 100;
/// Default number of study rows.
pub const DEFAULT_STUDY_COUNT: usize = 10;
/// Default number of comment rows.
pub const DEFAULT_COMMENT_COUNT: usize = 100;
/// Default number of notification rows.
pub const DEFAULT_NOTIFICATION_COUNT: usize = 20;
/// Default number of notice rows.
pub const DEFAULT_NOTICE_COUNT: usize = 10;
/// Default number of membership rows.
pub const DEFAULT_MEMBERSHIP_COUNT: usize = 300;
/// Default number of bookmark rows.
pub const DEFAULT_BOOKMARK_COUNT: usize = 50;
/// Default number of comment reaction rows.
pub const DEFAULT_REACTION_COUNT: usize = 20;
/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 2026;

/// How a foreign-key reference is drawn from an identifier pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FkStrategy {
    /// Row `i` references pool slot `i / group_size`, so consecutive rows
    /// share a parent.
    Positional {
        /// Number of consecutive rows mapped onto one pool slot.
        group_size: usize,
    },
    /// Each row references a pool slot sampled uniformly with replacement.
    UniformRandom,
}

/// Rows per user/study slot in the notification derivation.
const NOTIFICATION_GROUP: usize = 5;

/// Per-entity foreign-key selection plan.
///
/// [`FkPlan::for_counts`] reproduces the shape of the original fixture
/// scripts: positional derivation for study hosts, comments, notifications,
/// notices, and reactions; uniform random sampling for memberships and
/// bookmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FkPlan {
    /// Study host drawn from the user pool.
    pub study_host: FkStrategy,
    /// Membership user reference.
    pub membership_user: FkStrategy,
    /// Membership study reference.
    pub membership_study: FkStrategy,
    /// Bookmark user reference.
    pub bookmark_user: FkStrategy,
    /// Bookmark study reference.
    pub bookmark_study: FkStrategy,
    /// Comment author drawn from the user pool.
    pub comment_user: FkStrategy,
    /// Comment parent study reference.
    pub comment_study: FkStrategy,
    /// Notification recipient drawn from the user pool.
    pub notification_user: FkStrategy,
    /// Notification study reference.
    pub notification_study: FkStrategy,
    /// Notice host drawn from the user pool.
    pub notice_host: FkStrategy,
    /// Reaction user reference.
    pub reaction_user: FkStrategy,
    /// Reaction comment reference.
    pub reaction_comment: FkStrategy,
}

impl FkPlan {
    /// Derives the plan for the given configuration's counts.
    ///
    /// Positional group sizes scale with the counts they partition, so
    /// the relation "row `i` references slot `i / group_size`" holds for
    /// any count combination that passes validation: comment and study
    /// host groups track `study_count`, notice hosts track `notice_count`,
    /// and the reaction user stride is `user_count / comment_count`.
    /// A reaction stride of zero (more comments than users) is rejected
    /// by [`FixtureConfig::validate`].
    #[must_use]
    #[expect(
        clippy::integer_division,
        reason = "the reaction stride partitions the user pool across comments"
    )]
    pub fn for_counts(config: &FixtureConfig) -> Self {
        Self {
            study_host: FkStrategy::Positional {
                group_size: config.study_count,
            },
            membership_user: FkStrategy::UniformRandom,
            membership_study: FkStrategy::UniformRandom,
            bookmark_user: FkStrategy::UniformRandom,
            bookmark_study: FkStrategy::UniformRandom,
            comment_user: FkStrategy::Positional { group_size: 1 },
            comment_study: FkStrategy::Positional {
                group_size: config.study_count,
            },
            notification_user: FkStrategy::Positional {
                group_size: NOTIFICATION_GROUP,
            },
            notification_study: FkStrategy::Positional {
                group_size: NOTIFICATION_GROUP,
            },
            notice_host: FkStrategy::Positional {
                group_size: config.notice_count,
            },
            reaction_user: FkStrategy::Positional {
                group_size: config.user_count / config.comment_count.max(1),
            },
            reaction_comment: FkStrategy::Positional { group_size: 1 },
        }
    }
}

/// Row counts, RNG seed, and foreign-key plan for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureConfig {
    /// Number of user rows (and 1:1 profile rows).
    pub user_count: usize,
    /// Number of study rows.
    pub study_count: usize,
    /// Number of comment rows.
    pub comment_count: usize,
    /// Number of notification rows.
    pub notification_count: usize,
    /// Number of notice rows.
    pub notice_count: usize,
    /// Number of membership rows.
    pub membership_count: usize,
    /// Number of bookmark rows.
    pub bookmark_count: usize,
    /// Number of comment reaction rows.
    pub reaction_count: usize,
    /// Seed for the deterministic RNG.
    pub seed: u64,
    /// Explicit foreign-key plan. When `None`, the plan is derived from
    /// the configured counts via [`FkPlan::for_counts`].
    pub fk: Option<FkPlan>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            user_count: DEFAULT_USER_COUNT,
            study_count: DEFAULT_STUDY_COUNT,
            comment_count: DEFAULT_COMMENT_COUNT,
            notification_count: DEFAULT_NOTIFICATION_COUNT,
            notice_count: DEFAULT_NOTICE_COUNT,
            membership_count: DEFAULT_MEMBERSHIP_COUNT,
            bookmark_count: DEFAULT_BOOKMARK_COUNT,
            reaction_count: DEFAULT_REACTION_COUNT,
            seed: DEFAULT_SEED,
            fk: None,
        }
    }
}

/// Minimum user count required by the interest-category link pattern.
const INTEREST_LINK_MIN_USERS: usize = 3;

impl FixtureConfig {
    /// Validates the configuration before generation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - Any row count is zero
    /// - A positional strategy has a zero group size
    /// - A positional derivation would index past the referenced pool
    /// - Fewer than three users are configured (the interest-category link
    ///   pattern references the first three)
    ///
    /// # Example
    ///
    /// ```
    /// use fixture_data::FixtureConfig;
    ///
    /// let config = FixtureConfig::default();
    /// assert!(config.validate().is_ok());
    ///
    /// let mut broken = config;
    /// broken.notification_count = 200;
    /// assert!(broken.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check_counts()?;

        if self.user_count < INTEREST_LINK_MIN_USERS {
            return Err(ConfigError::InsufficientUsers {
                required: INTEREST_LINK_MIN_USERS,
                actual: self.user_count,
            });
        }

        let fk = self.plan();
        let references = [
            ("study", "host", self.study_count, fk.study_host, self.user_count),
            ("membership", "user", self.membership_count, fk.membership_user, self.user_count),
            ("membership", "study", self.membership_count, fk.membership_study, self.study_count),
            ("bookmark", "user", self.bookmark_count, fk.bookmark_user, self.user_count),
            ("bookmark", "study", self.bookmark_count, fk.bookmark_study, self.study_count),
            ("comment", "user", self.comment_count, fk.comment_user, self.user_count),
            ("comment", "study", self.comment_count, fk.comment_study, self.study_count),
            ("notification", "user", self.notification_count, fk.notification_user, self.user_count),
            ("notification", "study", self.notification_count, fk.notification_study, self.study_count),
            ("notice", "host", self.notice_count, fk.notice_host, self.user_count),
            ("reaction", "user", self.reaction_count, fk.reaction_user, self.user_count),
            ("reaction", "comment", self.reaction_count, fk.reaction_comment, self.comment_count),
        ];

        for (entity, reference, rows, strategy, pool_len) in references {
            check_reference(entity, reference, rows, strategy, pool_len)?;
        }

        Ok(())
    }

    /// Returns the foreign-key plan in effect: the explicit plan when one
    /// is set, otherwise one derived from the configured counts.
    #[must_use]
    pub fn plan(&self) -> FkPlan {
        self.fk.unwrap_or_else(|| FkPlan::for_counts(self))
    }

    fn check_counts(&self) -> Result<(), ConfigError> {
        let counts = [
            ("user", self.user_count),
            ("study", self.study_count),
            ("comment", self.comment_count),
            ("notification", self.notification_count),
            ("notice", self.notice_count),
            ("membership", self.membership_count),
            ("bookmark", self.bookmark_count),
            ("reaction", self.reaction_count),
        ];
        for (entity, count) in counts {
            if count == 0 {
                return Err(ConfigError::ZeroRowCount { entity });
            }
        }
        Ok(())
    }
}

#[expect(
    clippy::integer_division,
    reason = "positional derivation maps consecutive rows onto one pool slot"
)]
fn check_reference(
    entity: &'static str,
    reference: &'static str,
    rows: usize,
    strategy: FkStrategy,
    pool_len: usize,
) -> Result<(), ConfigError> {
    let FkStrategy::Positional { group_size } = strategy else {
        return Ok(());
    };
    if group_size == 0 {
        return Err(ConfigError::ZeroGroupSize { entity, reference });
    }
    let Some(last_row) = rows.checked_sub(1) else {
        return Ok(());
    };
    let last_index = last_row / group_size;
    if last_index >= pool_len {
        return Err(ConfigError::PositionalOutOfRange {
            entity,
            reference,
            last_index,
            pool_len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn config() -> FixtureConfig {
        FixtureConfig::default()
    }

    #[rstest]
    fn default_configuration_validates(config: FixtureConfig) {
        assert_eq!(config.validate(), Ok(()));
    }

    #[rstest]
    fn rejects_zero_user_count(mut config: FixtureConfig) {
        config.user_count = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroRowCount { entity: "user" })
        );
    }

    #[rstest]
    fn rejects_positional_overrun(mut config: FixtureConfig) {
        // 200 notifications in groups of 5 reach study index 39, past the
        // default pool of 10.
        config.notification_count = 200;
        assert_eq!(
            config.validate(),
            Err(ConfigError::PositionalOutOfRange {
                entity: "notification",
                reference: "study",
                last_index: 39,
                pool_len: 10,
            })
        );
    }

    #[rstest]
    fn rejects_zero_group_size(mut config: FixtureConfig) {
        let mut plan = config.plan();
        plan.comment_study = FkStrategy::Positional { group_size: 0 };
        config.fk = Some(plan);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroGroupSize {
                entity: "comment",
                reference: "study",
            })
        );
    }

    #[rstest]
    fn derived_plan_tracks_configured_counts(config: FixtureConfig) {
        let scaled = FixtureConfig {
            study_count: 20,
            notice_count: 25,
            ..config
        };

        let plan = scaled.plan();
        assert_eq!(plan.study_host, FkStrategy::Positional { group_size: 20 });
        assert_eq!(plan.comment_study, FkStrategy::Positional { group_size: 20 });
        assert_eq!(plan.notice_host, FkStrategy::Positional { group_size: 25 });
        assert_eq!(plan.reaction_user, FkStrategy::Positional { group_size: 1 });
        assert_eq!(scaled.validate(), Ok(()));
    }

    #[rstest]
    fn explicit_plan_overrides_the_derived_one(mut config: FixtureConfig) {
        let mut plan = config.plan();
        plan.comment_study = FkStrategy::UniformRandom;
        config.fk = Some(plan);

        assert_eq!(config.plan(), plan);
        assert_eq!(config.validate(), Ok(()));
    }

    #[rstest]
    fn more_comments_than_users_fails_validation(config: FixtureConfig) {
        // The derived reaction stride collapses to zero and the comment
        // author derivation overruns the user pool.
        let scaled = FixtureConfig {
            user_count: 50,
            comment_count: 200,
            ..config
        };

        let plan = scaled.plan();
        assert_eq!(plan.reaction_user, FkStrategy::Positional { group_size: 0 });
        assert!(scaled.validate().is_err());
    }

    #[rstest]
    fn rejects_too_few_users_for_interest_links(mut config: FixtureConfig) {
        config.user_count = 2;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InsufficientUsers {
                required: 3,
                actual: 2,
            })
        );
    }

    #[rstest]
    fn uniform_random_ignores_pool_sizing(mut config: FixtureConfig) {
        // Uniform sampling never derives an index, so large counts are fine.
        config.membership_count = 100_000;
        assert_eq!(config.validate(), Ok(()));
    }
}
