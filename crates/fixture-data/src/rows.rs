//! Row types and INSERT statement builders, one per entity.
//!
//! Each row is a flat record of the scalar fields the consuming schema
//! defines. `insert_statement` is a pure formatting function; no row is
//! retained or mutated after it is rendered.

use uuid::Uuid;

use crate::sql;

/// A USER row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    /// Unique user identifier.
    pub id: Uuid,
    /// Login email.
    pub email: String,
    /// Stored password hash.
    pub password_hash: String,
    /// Whether the user is logged out.
    pub is_logout: bool,
    /// Session token.
    pub token: String,
    /// Role name (ADMIN, USER, or GUEST).
    pub role: String,
}

impl UserRow {
    /// Renders the INSERT statement for this row.
    #[must_use]
    pub fn insert_statement(&self) -> String {
        format!(
            "INSERT INTO USER(ID, EMAIL, PASSWORD, IS_LOGOUT, TOKEN, ROLE) \
             VALUES ({}, {}, {}, {}, {}, {});",
            sql::id(&self.id),
            sql::text(&self.email),
            sql::text(&self.password_hash),
            sql::flag(self.is_logout),
            sql::text(&self.token),
            sql::text(&self.role),
        )
    }
}

/// A USER_PROFILE row, 1:1 with a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRow {
    /// Owning user identifier.
    pub user_id: Uuid,
    /// Display name.
    pub user_name: String,
    /// Department.
    pub dept: String,
    /// School grade.
    pub grade: u8,
    /// Short bio line.
    pub bio: String,
    /// Longer about text.
    pub user_about: String,
    /// Whether the department is shown publicly.
    pub show_dept: bool,
    /// Whether the grade is shown publicly.
    pub show_grade: bool,
    /// Whether the user is on academic break.
    pub on_break: bool,
    /// First external link.
    pub link1: String,
    /// Second external link.
    pub link2: String,
    /// Short about text.
    pub short_user_about: String,
    /// Comma-separated interest category codes.
    pub interest_categories: String,
}

impl ProfileRow {
    /// Renders the INSERT statement for this row.
    #[must_use]
    pub fn insert_statement(&self) -> String {
        format!(
            "INSERT INTO USER_PROFILE(USER_ID, USER_NAME, DEPT, GRADE, BIO, USER_ABOUT, \
             SHOW_DEPT, SHOW_GRADE, ON_BREAK, LINK1, LINK2, SHORT_USER_ABOUT, \
             USER_INTEREST_CATEGORY) VALUES ({}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {});",
            sql::id(&self.user_id),
            sql::text(&self.user_name),
            sql::text(&self.dept),
            self.grade,
            sql::text(&self.bio),
            sql::text(&self.user_about),
            sql::flag(self.show_dept),
            sql::flag(self.show_grade),
            sql::flag(self.on_break),
            sql::text(&self.link1),
            sql::text(&self.link2),
            sql::text(&self.short_user_about),
            sql::text(&self.interest_categories),
        )
    }
}

/// A STUDY row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyRow {
    /// Unique study identifier.
    pub id: Uuid,
    /// Study title.
    pub title: String,
    /// Study description.
    pub study_about: String,
    /// Meeting weekday.
    pub weekday: String,
    /// Meeting frequency.
    pub frequency: String,
    /// Meeting location.
    pub location: String,
    /// Maximum member capacity.
    pub capacity: u32,
    /// Current member count, never above `capacity`.
    pub members_count: u32,
    /// Remaining capacity, `capacity - members_count`.
    pub vacancy: u32,
    /// Whether the study accepts applications.
    pub is_open: bool,
    /// Interest category code.
    pub category_code: u32,
    /// View counter.
    pub views: u32,
    /// Hosting user identifier.
    pub host_id: Uuid,
}

impl StudyRow {
    /// Renders the INSERT statement for this row.
    #[must_use]
    pub fn insert_statement(&self) -> String {
        format!(
            "INSERT INTO STUDY(ID, TITLE, STUDY_ABOUT, WEEKDAY, FREQUENCY, LOCATION, CAPACITY, \
             MEMBERS_COUNT, VACANCY, IS_OPEN, CATEGORY_CODE, VIEWS, HOST_ID) \
             VALUES ({}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {});",
            sql::id(&self.id),
            sql::text(&self.title),
            sql::text(&self.study_about),
            sql::text(&self.weekday),
            sql::text(&self.frequency),
            sql::text(&self.location),
            self.capacity,
            self.members_count,
            self.vacancy,
            sql::flag(self.is_open),
            self.category_code,
            self.views,
            sql::id(&self.host_id),
        )
    }
}

/// A STUDY_USER membership row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipRow {
    /// Member user identifier.
    pub user_id: Uuid,
    /// Joined study identifier.
    pub study_id: Uuid,
    /// Whether the application was accepted.
    pub is_accepted: bool,
    /// Application bio text.
    pub temp_bio: String,
}

impl MembershipRow {
    /// Renders the INSERT statement for this row.
    #[must_use]
    pub fn insert_statement(&self) -> String {
        format!(
            "INSERT INTO STUDY_USER(USER_ID, STUDY_ID, IS_ACCEPTED, TEMP_BIO) \
             VALUES ({}, {}, {}, {});",
            sql::id(&self.user_id),
            sql::id(&self.study_id),
            sql::flag(self.is_accepted),
            sql::text(&self.temp_bio),
        )
    }
}

/// A BOOKMARK row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkRow {
    /// Bookmarking user identifier.
    pub user_id: Uuid,
    /// Bookmarked study identifier.
    pub study_id: Uuid,
}

impl BookmarkRow {
    /// Renders the INSERT statement for this row.
    #[must_use]
    pub fn insert_statement(&self) -> String {
        format!(
            "INSERT INTO BOOKMARK(USER_ID, STUDY_ID) VALUES ({}, {});",
            sql::id(&self.user_id),
            sql::id(&self.study_id),
        )
    }
}

/// A COMMENT row. The parent-comment reference is always NULL here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRow {
    /// Unique comment identifier.
    pub id: Uuid,
    /// Authoring user identifier.
    pub user_id: Uuid,
    /// Commented study identifier.
    pub study_id: Uuid,
    /// Comment body.
    pub content: String,
}

impl CommentRow {
    /// Renders the INSERT statement for this row.
    #[must_use]
    pub fn insert_statement(&self) -> String {
        format!(
            "INSERT INTO COMMENT(ID, NESTED_COMMENT_ID, USER_ID, STUDY_ID, IS_NESTED, CONTENT) \
             VALUES ({}, {}, {}, {}, 0, {});",
            sql::id(&self.id),
            sql::NULL,
            sql::id(&self.user_id),
            sql::id(&self.study_id),
            sql::text(&self.content),
        )
    }
}

/// A NOTIFICATION row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRow {
    /// Unique notification identifier.
    pub id: Uuid,
    /// Recipient user identifier.
    pub user_id: Uuid,
    /// Related study identifier.
    pub study_id: Uuid,
    /// Notification type code.
    pub kind: u32,
    /// Whether the notification was read.
    pub read: bool,
}

impl NotificationRow {
    /// Renders the INSERT statement for this row.
    ///
    /// READ is a reserved word in the consuming database, hence the
    /// backticks.
    #[must_use]
    pub fn insert_statement(&self) -> String {
        format!(
            "INSERT INTO NOTIFICATION(ID, USER_ID, STUDY_ID, TYPE, `READ`) \
             VALUES ({}, {}, {}, {}, {});",
            sql::id(&self.id),
            sql::id(&self.user_id),
            sql::id(&self.study_id),
            self.kind,
            sql::flag(self.read),
        )
    }
}

/// A NOTICE row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeRow {
    /// Unique notice identifier.
    pub id: Uuid,
    /// Notice title.
    pub title: String,
    /// Notice body.
    pub about: String,
    /// View counter.
    pub views: u32,
    /// Publishing user identifier.
    pub host_id: Uuid,
}

impl NoticeRow {
    /// Renders the INSERT statement for this row.
    #[must_use]
    pub fn insert_statement(&self) -> String {
        format!(
            "INSERT INTO NOTICE(ID, TITLE, ABOUT, VIEWS, HOST_ID) VALUES ({}, {}, {}, {}, {});",
            sql::id(&self.id),
            sql::text(&self.title),
            sql::text(&self.about),
            self.views,
            sql::id(&self.host_id),
        )
    }
}

/// A USER_INTEREST_CATEGORY link row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterestCategoryRow {
    /// Linked user identifier.
    pub user_id: Uuid,
    /// Linked category code.
    pub category_code: u32,
}

impl InterestCategoryRow {
    /// Renders the INSERT statement for this row.
    #[must_use]
    pub fn insert_statement(&self) -> String {
        format!(
            "INSERT INTO USER_INTEREST_CATEGORY(USER_ID, CATEGORY_CODE) VALUES ({}, {});",
            sql::id(&self.user_id),
            self.category_code,
        )
    }
}

/// A USER_METOO_COMMENT reaction row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionRow {
    /// Reacting user identifier.
    pub user_id: Uuid,
    /// Reacted comment identifier.
    pub comment_id: Uuid,
}

impl ReactionRow {
    /// Renders the INSERT statement for this row.
    #[must_use]
    pub fn insert_statement(&self) -> String {
        format!(
            "INSERT INTO USER_METOO_COMMENT(USER_ID, COMMENT_ID) VALUES ({}, {});",
            sql::id(&self.user_id),
            sql::id(&self.comment_id),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NIL: &str = "'00000000-0000-0000-0000-000000000000'";

    #[test]
    fn user_row_renders_full_statement() {
        let row = UserRow {
            id: Uuid::nil(),
            email: "user0@test.com".to_owned(),
            password_hash: "password0".to_owned(),
            is_logout: false,
            token: "token0".to_owned(),
            role: "GUEST".to_owned(),
        };

        assert_eq!(
            row.insert_statement(),
            format!(
                "INSERT INTO USER(ID, EMAIL, PASSWORD, IS_LOGOUT, TOKEN, ROLE) \
                 VALUES ({NIL}, 'user0@test.com', 'password0', 0, 'token0', 'GUEST');"
            )
        );
    }

    #[test]
    fn comment_row_keeps_parent_reference_null() {
        let row = CommentRow {
            id: Uuid::nil(),
            user_id: Uuid::nil(),
            study_id: Uuid::nil(),
            content: "comment content 0".to_owned(),
        };

        let statement = row.insert_statement();
        assert!(statement.contains("VALUES ("));
        assert!(statement.contains(", NULL, "));
        assert!(statement.contains(", 0, 'comment content 0');"));
    }

    #[test]
    fn notification_row_backticks_read_column() {
        let row = NotificationRow {
            id: Uuid::nil(),
            user_id: Uuid::nil(),
            study_id: Uuid::nil(),
            kind: 101,
            read: false,
        };

        let statement = row.insert_statement();
        assert!(statement.contains("`READ`"));
        assert!(statement.ends_with("101, 0);"));
    }

    #[test]
    fn study_row_renders_numbers_unquoted() {
        let row = StudyRow {
            id: Uuid::nil(),
            title: "study0".to_owned(),
            study_about: "study0s content".to_owned(),
            weekday: "월".to_owned(),
            frequency: "1회".to_owned(),
            location: "비대면".to_owned(),
            capacity: 8,
            members_count: 3,
            vacancy: 5,
            is_open: true,
            category_code: 101,
            views: 12,
            host_id: Uuid::nil(),
        };

        let statement = row.insert_statement();
        assert!(statement.contains(", 8, 3, 5, 1, 101, 12, "));
    }

    #[test]
    fn membership_row_escapes_quotes_in_bio() {
        let row = MembershipRow {
            user_id: Uuid::nil(),
            study_id: Uuid::nil(),
            is_accepted: true,
            temp_bio: "it's me".to_owned(),
        };

        assert!(row.insert_statement().contains("'it''s me'"));
    }

    #[test]
    fn link_rows_render_pairs() {
        let bookmark = BookmarkRow {
            user_id: Uuid::nil(),
            study_id: Uuid::nil(),
        };
        let link = InterestCategoryRow {
            user_id: Uuid::nil(),
            category_code: 100,
        };
        let reaction = ReactionRow {
            user_id: Uuid::nil(),
            comment_id: Uuid::nil(),
        };

        assert_eq!(
            bookmark.insert_statement(),
            format!("INSERT INTO BOOKMARK(USER_ID, STUDY_ID) VALUES ({NIL}, {NIL});")
        );
        assert_eq!(
            link.insert_statement(),
            format!("INSERT INTO USER_INTEREST_CATEGORY(USER_ID, CATEGORY_CODE) VALUES ({NIL}, 100);")
        );
        assert_eq!(
            reaction.insert_statement(),
            format!("INSERT INTO USER_METOO_COMMENT(USER_ID, COMMENT_ID) VALUES ({NIL}, {NIL});")
        );
    }
}
