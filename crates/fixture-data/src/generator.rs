//! Deterministic fixture generation.
//!
//! This module builds the full [`FixtureSet`] from a validated
//! configuration and a seed-data document. The RNG is seeded from the
//! configuration, so the same seed always produces identical rows;
//! regenerating with a different seed keeps the structural shape (row
//! counts, schema) while the content changes.

use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::artifact::Artifact;
use crate::catalog;
use crate::config::{FixtureConfig, FkPlan};
use crate::error::GenerationError;
use crate::pool::IdPool;
use crate::rows::{
    BookmarkRow, CommentRow, InterestCategoryRow, MembershipRow, NoticeRow, NotificationRow,
    ProfileRow, ReactionRow, StudyRow, UserRow,
};
use crate::seed_data::SeedData;
use crate::validation::{PROFILE_NAME_MAX, is_valid_profile_name, sanitize_profile_name};

/// Maximum number of attempts to generate a valid profile name.
const MAX_NAME_ATTEMPTS: usize = 100;

/// The (user index, category index) pairs the interest-category links use.
const INTEREST_LINK_PATTERN: &[(usize, usize)] = &[(0, 0), (0, 1), (1, 0), (2, 2)];

/// A complete, self-consistent set of generated rows.
///
/// Rows are held in generation order; foreign keys always reference
/// identifiers present in the corresponding row vectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureSet {
    users: Vec<UserRow>,
    profiles: Vec<ProfileRow>,
    studies: Vec<StudyRow>,
    memberships: Vec<MembershipRow>,
    bookmarks: Vec<BookmarkRow>,
    comments: Vec<CommentRow>,
    notifications: Vec<NotificationRow>,
    notices: Vec<NoticeRow>,
    interest_links: Vec<InterestCategoryRow>,
    reactions: Vec<ReactionRow>,
}

impl FixtureSet {
    /// Returns the generated user rows.
    #[must_use]
    pub fn users(&self) -> &[UserRow] {
        &self.users
    }

    /// Returns the generated profile rows.
    #[must_use]
    pub fn profiles(&self) -> &[ProfileRow] {
        &self.profiles
    }

    /// Returns the generated study rows.
    #[must_use]
    pub fn studies(&self) -> &[StudyRow] {
        &self.studies
    }

    /// Returns the generated membership rows.
    #[must_use]
    pub fn memberships(&self) -> &[MembershipRow] {
        &self.memberships
    }

    /// Returns the generated bookmark rows.
    #[must_use]
    pub fn bookmarks(&self) -> &[BookmarkRow] {
        &self.bookmarks
    }

    /// Returns the generated comment rows.
    #[must_use]
    pub fn comments(&self) -> &[CommentRow] {
        &self.comments
    }

    /// Returns the generated notification rows.
    #[must_use]
    pub fn notifications(&self) -> &[NotificationRow] {
        &self.notifications
    }

    /// Returns the generated notice rows.
    #[must_use]
    pub fn notices(&self) -> &[NoticeRow] {
        &self.notices
    }

    /// Returns the generated interest-category link rows.
    #[must_use]
    pub fn interest_links(&self) -> &[InterestCategoryRow] {
        &self.interest_links
    }

    /// Returns the generated reaction rows.
    #[must_use]
    pub fn reactions(&self) -> &[ReactionRow] {
        &self.reactions
    }

    /// Returns the total number of generated rows across all entities.
    #[must_use]
    pub fn row_total(&self) -> usize {
        self.users.len()
            + self.profiles.len()
            + self.studies.len()
            + self.memberships.len()
            + self.bookmarks.len()
            + self.comments.len()
            + self.notifications.len()
            + self.notices.len()
            + self.interest_links.len()
            + self.reactions.len()
    }

    /// Renders the INSERT statements for one data artifact, one per row.
    #[must_use]
    pub fn statements(&self, artifact: Artifact) -> Vec<String> {
        match artifact {
            Artifact::Users => self.users.iter().map(UserRow::insert_statement).collect(),
            Artifact::Profiles => self
                .profiles
                .iter()
                .map(ProfileRow::insert_statement)
                .collect(),
            Artifact::Studies => self
                .studies
                .iter()
                .map(StudyRow::insert_statement)
                .collect(),
            Artifact::Memberships => self
                .memberships
                .iter()
                .map(MembershipRow::insert_statement)
                .collect(),
            Artifact::Bookmarks => self
                .bookmarks
                .iter()
                .map(BookmarkRow::insert_statement)
                .collect(),
            Artifact::Comments => self
                .comments
                .iter()
                .map(CommentRow::insert_statement)
                .collect(),
            Artifact::Notifications => self
                .notifications
                .iter()
                .map(NotificationRow::insert_statement)
                .collect(),
            Artifact::Notices => self
                .notices
                .iter()
                .map(NoticeRow::insert_statement)
                .collect(),
            Artifact::InterestCategories => self
                .interest_links
                .iter()
                .map(InterestCategoryRow::insert_statement)
                .collect(),
            Artifact::Reactions => self
                .reactions
                .iter()
                .map(ReactionRow::insert_statement)
                .collect(),
        }
    }
}

/// Generates a complete fixture set from the configuration and seed data.
///
/// The configuration is validated first; generation itself draws every
/// foreign key from a pre-generated identifier pool, so the emitted rows
/// are referentially consistent.
///
/// # Errors
///
/// Returns [`GenerationError`] if the configuration fails validation, a
/// selection indexes past a pool, or profile name generation exhausts its
/// retries.
///
/// # Example
///
/// ```
/// use fixture_data::{FixtureConfig, SeedData, generate_fixtures};
///
/// let config = FixtureConfig::default();
/// let seed_data = SeedData::builtin();
///
/// let fixtures = generate_fixtures(&config, &seed_data).expect("generation succeeds");
/// let identical = generate_fixtures(&config, &seed_data).expect("generation succeeds");
///
/// assert_eq!(fixtures, identical);
/// ```
pub fn generate_fixtures(
    config: &FixtureConfig,
    seed_data: &SeedData,
) -> Result<FixtureSet, GenerationError> {
    config.validate()?;

    let fk = config.plan();
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    let user_ids = IdPool::generate("user", config.user_count, &mut rng);
    let study_ids = IdPool::generate("study", config.study_count, &mut rng);
    let comment_ids = IdPool::generate("comment", config.comment_count, &mut rng);
    let notification_ids = IdPool::generate("notification", config.notification_count, &mut rng);
    let notice_ids = IdPool::generate("notice", config.notice_count, &mut rng);

    let users = build_users(&user_ids);
    let profiles = build_profiles(&mut rng, &user_ids, seed_data)?;
    let studies = build_studies(&mut rng, &fk, &study_ids, &user_ids, seed_data)?;
    let memberships =
        build_memberships(&mut rng, config.membership_count, &fk, &user_ids, &study_ids)?;
    let bookmarks = build_bookmarks(&mut rng, config.bookmark_count, &fk, &user_ids, &study_ids)?;
    let comments = build_comments(&mut rng, &fk, &comment_ids, &user_ids, &study_ids)?;
    let notifications =
        build_notifications(&mut rng, &fk, &notification_ids, &user_ids, &study_ids)?;
    let notices = build_notices(&mut rng, &fk, &notice_ids, &user_ids)?;
    let interest_links = build_interest_links(&user_ids, seed_data)?;
    let reactions = build_reactions(&mut rng, config.reaction_count, &fk, &user_ids, &comment_ids)?;

    Ok(FixtureSet {
        users,
        profiles,
        studies,
        memberships,
        bookmarks,
        comments,
        notifications,
        notices,
        interest_links,
        reactions,
    })
}

fn build_users(user_ids: &IdPool) -> Vec<UserRow> {
    user_ids
        .ids()
        .iter()
        .enumerate()
        .map(|(i, id)| UserRow {
            id: *id,
            email: format!("user{i}@test.com"),
            password_hash: format!("password{i}"),
            is_logout: false,
            token: format!("token{i}"),
            role: "GUEST".to_owned(),
        })
        .collect()
}

fn build_profiles(
    rng: &mut ChaCha8Rng,
    user_ids: &IdPool,
    seed_data: &SeedData,
) -> Result<Vec<ProfileRow>, GenerationError> {
    let interest_categories = seed_data
        .category_codes()
        .iter()
        .take(2)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let mut profiles = Vec::with_capacity(user_ids.len());
    for (i, id) in user_ids.ids().iter().enumerate() {
        profiles.push(ProfileRow {
            user_id: *id,
            user_name: generate_profile_name(rng)?,
            dept: "dept".to_owned(),
            grade: rng.random_range(1..=5),
            bio: format!("user{i} bio"),
            user_about: format!("user{i} about"),
            show_dept: rng.random_ratio(9, 10),
            show_grade: rng.random_ratio(9, 10),
            on_break: rng.random_ratio(1, 20),
            link1: "link1".to_owned(),
            link2: "link2".to_owned(),
            short_user_about: "short about".to_owned(),
            interest_categories: interest_categories.clone(),
        });
    }
    Ok(profiles)
}

/// Generates a valid profile name, retrying on validation failure.
///
/// Names are a fake first and last name joined by a space, sanitized and
/// truncated to the platform maximum.
fn generate_profile_name(rng: &mut ChaCha8Rng) -> Result<String, GenerationError> {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let first: String = FirstName(EN).fake_with_rng(rng);
        let last: String = LastName(EN).fake_with_rng(rng);

        let sanitized = sanitize_profile_name(&format!("{first} {last}"));
        let truncated: String = sanitized.chars().take(PROFILE_NAME_MAX).collect();

        if is_valid_profile_name(&truncated) {
            return Ok(truncated);
        }
    }

    Err(GenerationError::ProfileNameGenerationFailed {
        max_attempts: MAX_NAME_ATTEMPTS,
    })
}

fn build_studies(
    rng: &mut ChaCha8Rng,
    fk: &FkPlan,
    study_ids: &IdPool,
    user_ids: &IdPool,
    seed_data: &SeedData,
) -> Result<Vec<StudyRow>, GenerationError> {
    let category_codes = seed_data.category_codes();

    let mut studies = Vec::with_capacity(study_ids.len());
    for (i, id) in study_ids.ids().iter().enumerate() {
        // Capacity first, members bounded by it, vacancy as the remainder.
        // This ordering keeps vacancy non-negative by construction.
        let capacity = rng.random_range(4..=10);
        let members_count = rng.random_range(1..=capacity);
        let vacancy = capacity - members_count;

        studies.push(StudyRow {
            id: *id,
            title: format!("study{i}"),
            study_about: format!("study{i}s content"),
            weekday: pick(rng, catalog::WEEKDAYS, "weekday")?.to_owned(),
            frequency: pick(rng, catalog::FREQUENCIES, "frequency")?.to_owned(),
            location: pick(rng, catalog::LOCATIONS, "location")?.to_owned(),
            capacity,
            members_count,
            vacancy,
            is_open: rng.random_ratio(3, 4),
            category_code: pick(rng, &category_codes, "category")?,
            views: rng.random_range(0..=200),
            host_id: user_ids.select(fk.study_host, i, rng)?,
        });
    }
    Ok(studies)
}

fn build_memberships(
    rng: &mut ChaCha8Rng,
    count: usize,
    fk: &FkPlan,
    user_ids: &IdPool,
    study_ids: &IdPool,
) -> Result<Vec<MembershipRow>, GenerationError> {
    let mut memberships = Vec::with_capacity(count);
    for i in 0..count {
        let user_id = user_ids.select(fk.membership_user, i, rng)?;
        let study_id = study_ids.select(fk.membership_study, i, rng)?;
        memberships.push(MembershipRow {
            user_id,
            study_id,
            is_accepted: rng.random_ratio(7, 10),
            temp_bio: format!("temp bio for user {user_id}"),
        });
    }
    Ok(memberships)
}

fn build_bookmarks(
    rng: &mut ChaCha8Rng,
    count: usize,
    fk: &FkPlan,
    user_ids: &IdPool,
    study_ids: &IdPool,
) -> Result<Vec<BookmarkRow>, GenerationError> {
    let mut bookmarks = Vec::with_capacity(count);
    for i in 0..count {
        bookmarks.push(BookmarkRow {
            user_id: user_ids.select(fk.bookmark_user, i, rng)?,
            study_id: study_ids.select(fk.bookmark_study, i, rng)?,
        });
    }
    Ok(bookmarks)
}

fn build_comments(
    rng: &mut ChaCha8Rng,
    fk: &FkPlan,
    comment_ids: &IdPool,
    user_ids: &IdPool,
    study_ids: &IdPool,
) -> Result<Vec<CommentRow>, GenerationError> {
    let mut comments = Vec::with_capacity(comment_ids.len());
    for (i, id) in comment_ids.ids().iter().enumerate() {
        comments.push(CommentRow {
            id: *id,
            user_id: user_ids.select(fk.comment_user, i, rng)?,
            study_id: study_ids.select(fk.comment_study, i, rng)?,
            content: format!("comment content {i}"),
        });
    }
    Ok(comments)
}

fn build_notifications(
    rng: &mut ChaCha8Rng,
    fk: &FkPlan,
    notification_ids: &IdPool,
    user_ids: &IdPool,
    study_ids: &IdPool,
) -> Result<Vec<NotificationRow>, GenerationError> {
    let mut notifications = Vec::with_capacity(notification_ids.len());
    for (i, id) in notification_ids.ids().iter().enumerate() {
        notifications.push(NotificationRow {
            id: *id,
            user_id: user_ids.select(fk.notification_user, i, rng)?,
            study_id: study_ids.select(fk.notification_study, i, rng)?,
            kind: pick(rng, catalog::NOTIFICATION_TYPES, "notification type")?,
            read: false,
        });
    }
    Ok(notifications)
}

fn build_notices(
    rng: &mut ChaCha8Rng,
    fk: &FkPlan,
    notice_ids: &IdPool,
    user_ids: &IdPool,
) -> Result<Vec<NoticeRow>, GenerationError> {
    let mut notices = Vec::with_capacity(notice_ids.len());
    for (i, id) in notice_ids.ids().iter().enumerate() {
        notices.push(NoticeRow {
            id: *id,
            title: format!("NOTICE_TITLE {i}"),
            about: format!("NOTICE_ABOUT {i}"),
            views: rng.random_range(0..=100),
            host_id: user_ids.select(fk.notice_host, i, rng)?,
        });
    }
    Ok(notices)
}

fn build_interest_links(
    user_ids: &IdPool,
    seed_data: &SeedData,
) -> Result<Vec<InterestCategoryRow>, GenerationError> {
    let categories = seed_data.categories();

    let mut links = Vec::with_capacity(INTEREST_LINK_PATTERN.len());
    for (user_index, category_index) in INTEREST_LINK_PATTERN {
        let category =
            categories
                .get(*category_index)
                .ok_or(GenerationError::MissingCategory {
                    index: *category_index,
                    available: categories.len(),
                })?;
        links.push(InterestCategoryRow {
            user_id: user_ids.get(*user_index)?,
            category_code: category.code(),
        });
    }
    Ok(links)
}

fn build_reactions(
    rng: &mut ChaCha8Rng,
    count: usize,
    fk: &FkPlan,
    user_ids: &IdPool,
    comment_ids: &IdPool,
) -> Result<Vec<ReactionRow>, GenerationError> {
    let mut reactions = Vec::with_capacity(count);
    for i in 0..count {
        reactions.push(ReactionRow {
            user_id: user_ids.select(fk.reaction_user, i, rng)?,
            comment_id: comment_ids.select(fk.reaction_comment, i, rng)?,
        });
    }
    Ok(reactions)
}

fn pick<T: Copy>(
    rng: &mut ChaCha8Rng,
    values: &[T],
    name: &'static str,
) -> Result<T, GenerationError> {
    catalog::sample(rng, values).ok_or(GenerationError::EmptyEnumeration { name })
}
