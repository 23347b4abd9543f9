//! Externally supplied seed data: category rows and demo accounts.
//!
//! The original scripts inlined demo credentials and category rows in the
//! reset script. Here they come from a versioned JSON document so
//! deployments can supply their own without touching the generator. A
//! built-in document reproduces the original rows for local use.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use uuid::{Uuid, uuid};

use crate::error::SeedDataError;

/// Current supported seed-data document version.
const SUPPORTED_VERSION: u32 = 1;

/// A static interest-category row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    code: u32,
    main: String,
    sub: String,
}

impl CategoryRow {
    /// Returns the category code.
    #[must_use]
    pub const fn code(&self) -> u32 {
        self.code
    }

    /// Returns the main category label.
    #[must_use]
    pub fn main(&self) -> &str {
        &self.main
    }

    /// Returns the sub-category label.
    #[must_use]
    pub fn sub(&self) -> &str {
        &self.sub
    }
}

/// Role of a demo account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DemoRole {
    /// Administrator account.
    Admin,
    /// Regular user account.
    User,
    /// Guest account.
    Guest,
}

impl DemoRole {
    /// Returns the role name as stored in the USER table.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::User => "USER",
            Self::Guest => "GUEST",
        }
    }
}

/// A fixed demo account inserted by the reset script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoAccount {
    id: Uuid,
    email: String,
    password_hash: String,
    role: DemoRole,
}

impl DemoAccount {
    /// Returns the account identifier.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the account email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the stored password hash.
    #[must_use]
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Returns the account role.
    #[must_use]
    pub const fn role(&self) -> DemoRole {
        self.role
    }
}

/// Seed data consumed by the reset script and the generator.
///
/// # Example
///
/// ```
/// use fixture_data::SeedData;
///
/// let json = r#"{
///     "version": 1,
///     "categories": [{"code": 100, "main": "programming", "sub": "rust"}],
///     "demoAccounts": []
/// }"#;
///
/// let seed_data = SeedData::from_json(json).expect("valid seed data");
/// assert_eq!(seed_data.categories().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedData {
    version: u32,
    categories: Vec<CategoryRow>,
    demo_accounts: Vec<DemoAccount>,
}

impl SeedData {
    /// Parses a seed-data document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SeedDataError`] if:
    /// - The JSON is malformed
    /// - The version is unsupported
    /// - A demo account ID is not a valid UUID
    /// - The categories array is empty
    pub fn from_json(json: &str) -> Result<Self, SeedDataError> {
        let raw: RawSeedData =
            serde_json::from_str(json).map_err(|e| SeedDataError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a seed-data document from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SeedDataError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, SeedDataError> {
        let contents = fs::read_to_string(path).map_err(|e| SeedDataError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    /// Returns the built-in seed data matching the original fixture rows.
    #[must_use]
    pub fn builtin() -> Self {
        let categories = [
            (100, "프로그래밍", "c/c++"),
            (101, "프로그래밍", "자바스크립트"),
            (200, "어학", "토익"),
            (201, "어학", "토플"),
        ]
        .into_iter()
        .map(|(code, main, sub)| CategoryRow {
            code,
            main: main.to_owned(),
            sub: sub.to_owned(),
        })
        .collect();

        let demo_accounts = [
            (
                uuid!("28464dc7-7537-4b91-9d52-764b6de32122"),
                "testadmin1@cau.ac.kr",
                "$2b$10$18n8DFDZ1QUrhBlf9CDr6O8LiN7cjIRAFX37HfK.SpnyJg1y7c.5K",
                DemoRole::Admin,
            ),
            (
                uuid!("9b083624-9475-4ad2-b5c0-eb40c98411c2"),
                "testuser1@cau.ac.kr",
                "$2b$10$xtp6zwK8.0FqRrq4okZRXOcTkH9oCXhA8X02NJaAXgPockMw9ZFWi",
                DemoRole::User,
            ),
            (
                uuid!("cd915b33-d4c3-4379-b5c1-fe8d389b0de7"),
                "testguest1@cau.ac.kr",
                "$2b$10$f69XmMM3DPKDs91.6qgmOebP/bfrdKcCQNQG/ldl71GXet3BYBjEq",
                DemoRole::Guest,
            ),
            (
                uuid!("dea61890-363d-4574-8ad1-ef1fa6fe66db"),
                "testadmin2@cau.ac.kr",
                "$2b$10$jsUh3x5kvMfBECfEoiq15.hRnhtrVLRCid2d2r8tMQTtCa6ILNr/u",
                DemoRole::Admin,
            ),
            (
                uuid!("ec7283be-d2e5-4b39-b723-1cfa000a9303"),
                "testuser2@cau.ac.kr",
                "$2b$10$Ls2oCM/bHbss5S18VyWgB.R2jet9xdATWFU8ZdNXZ3JR7PjAoXdwy",
                DemoRole::User,
            ),
            (
                uuid!("492a437d-14ca-4e15-9347-0748ba14e269"),
                "testguest2@cau.ac.kr",
                "$2b$10$sGJji6iVcZc/JJTq/cpFcukB3YXwUSbsygBFmKVJvw6QRmhpVPV0m",
                DemoRole::Guest,
            ),
        ]
        .into_iter()
        .map(|(id, email, password_hash, role)| DemoAccount {
            id,
            email: email.to_owned(),
            password_hash: password_hash.to_owned(),
            role,
        })
        .collect();

        Self {
            version: SUPPORTED_VERSION,
            categories,
            demo_accounts,
        }
    }

    fn from_raw(raw: RawSeedData) -> Result<Self, SeedDataError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(SeedDataError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        if raw.categories.is_empty() {
            return Err(SeedDataError::EmptyCategories);
        }

        let categories = raw
            .categories
            .into_iter()
            .map(|c| CategoryRow {
                code: c.code,
                main: c.main,
                sub: c.sub,
            })
            .collect();

        let demo_accounts = raw
            .demo_accounts
            .into_iter()
            .enumerate()
            .map(|(index, account)| {
                let id = Uuid::parse_str(&account.id).map_err(|_| {
                    SeedDataError::InvalidAccountId {
                        index,
                        value: account.id.clone(),
                    }
                })?;
                Ok(DemoAccount {
                    id,
                    email: account.email,
                    password_hash: account.password_hash,
                    role: account.role,
                })
            })
            .collect::<Result<Vec<_>, SeedDataError>>()?;

        Ok(Self {
            version: raw.version,
            categories,
            demo_accounts,
        })
    }

    /// Returns the document version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the category rows.
    #[must_use]
    pub fn categories(&self) -> &[CategoryRow] {
        &self.categories
    }

    /// Returns the demo accounts.
    #[must_use]
    pub fn demo_accounts(&self) -> &[DemoAccount] {
        &self.demo_accounts
    }

    /// Returns the category codes in document order.
    #[must_use]
    pub fn category_codes(&self) -> Vec<u32> {
        self.categories.iter().map(CategoryRow::code).collect()
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedData {
    version: u32,
    categories: Vec<RawCategory>,
    demo_accounts: Vec<RawDemoAccount>,
}

/// Raw JSON representation of a category row.
#[derive(Debug, Deserialize)]
struct RawCategory {
    code: u32,
    main: String,
    sub: String,
}

/// Raw JSON representation of a demo account.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDemoAccount {
    id: String,
    email: String,
    password_hash: String,
    role: DemoRole,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const VALID_JSON: &str = r#"{
        "version": 1,
        "categories": [
            {"code": 100, "main": "programming", "sub": "rust"},
            {"code": 200, "main": "languages", "sub": "toefl"}
        ],
        "demoAccounts": [
            {
                "id": "28464dc7-7537-4b91-9d52-764b6de32122",
                "email": "admin@test.com",
                "passwordHash": "$2b$10$hash",
                "role": "ADMIN"
            }
        ]
    }"#;

    #[test]
    fn parses_valid_seed_data() {
        let seed_data = SeedData::from_json(VALID_JSON).expect("valid seed data");

        assert_eq!(seed_data.version(), 1);
        assert_eq!(seed_data.categories().len(), 2);
        assert_eq!(seed_data.demo_accounts().len(), 1);
        assert_eq!(seed_data.category_codes(), vec![100, 200]);
    }

    #[test]
    fn parses_demo_account_fields() {
        let seed_data = SeedData::from_json(VALID_JSON).expect("valid seed data");
        let account = seed_data.demo_accounts().first().expect("one account");

        assert_eq!(account.email(), "admin@test.com");
        assert_eq!(account.role(), DemoRole::Admin);
        assert_eq!(account.role().as_str(), "ADMIN");
    }

    #[test]
    fn loads_seed_data_from_a_file() {
        let dir = std::env::temp_dir().join(format!(
            "fixture-data-seed-{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("create temp dir");
        let path = dir.join("seed.json");
        fs::write(&path, VALID_JSON).expect("write seed file");

        let from_file = SeedData::from_file(&path).expect("file loads");
        let from_json = SeedData::from_json(VALID_JSON).expect("valid seed data");
        assert_eq!(from_file, from_json);

        fs::remove_dir_all(&dir).expect("remove temp dir");
    }

    #[test]
    fn from_file_reports_a_missing_path() {
        let path = Path::new("does-not-exist/seed.json");

        let result = SeedData::from_file(path);
        assert!(matches!(result, Err(SeedDataError::IoError { .. })));
    }

    #[rstest]
    #[case::malformed_json("not valid json")]
    #[case::missing_version(r#"{"categories": [], "demoAccounts": []}"#)]
    fn rejects_json_with_parse_error(#[case] json: &str) {
        let result = SeedData::from_json(json);
        assert!(matches!(result, Err(SeedDataError::ParseError { .. })));
    }

    #[rstest]
    #[case::unsupported_version(
        r#"{"version": 9, "categories": [{"code": 1, "main": "a", "sub": "b"}], "demoAccounts": []}"#,
        SeedDataError::UnsupportedVersion { expected: 1, actual: 9 }
    )]
    #[case::empty_categories(
        r#"{"version": 1, "categories": [], "demoAccounts": []}"#,
        SeedDataError::EmptyCategories
    )]
    #[case::invalid_account_id(
        r#"{"version": 1, "categories": [{"code": 1, "main": "a", "sub": "b"}], "demoAccounts": [{"id": "bad", "email": "a@b.c", "passwordHash": "h", "role": "USER"}]}"#,
        SeedDataError::InvalidAccountId { index: 0, value: "bad".to_owned() }
    )]
    fn rejects_invalid_seed_data(#[case] json: &str, #[case] expected: SeedDataError) {
        let result = SeedData::from_json(json);
        assert_eq!(result, Err(expected));
    }

    #[test]
    fn builtin_matches_original_rows() {
        let seed_data = SeedData::builtin();

        assert_eq!(seed_data.version(), 1);
        assert_eq!(seed_data.category_codes(), vec![100, 101, 200, 201]);
        assert_eq!(seed_data.demo_accounts().len(), 6);

        let roles: Vec<_> = seed_data
            .demo_accounts()
            .iter()
            .map(|account| account.role())
            .collect();
        assert_eq!(
            roles,
            vec![
                DemoRole::Admin,
                DemoRole::User,
                DemoRole::Guest,
                DemoRole::Admin,
                DemoRole::User,
                DemoRole::Guest,
            ]
        );
    }
}
