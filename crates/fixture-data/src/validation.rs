//! Profile name validation.
//!
//! The `USER_PROFILE.USER_NAME` column holds the nickname a member picks
//! at sign-up. Generated names must satisfy the same shape the platform
//! accepts, so seeded rows replay cleanly: nicknames mix Hangul and Latin
//! script, and the demo accounts carry `#`-suffixed handles such as
//! `username#3`.
//!
//! # Validation Rules
//!
//! - Between 2 and 30 characters
//! - Letters and digits from any script, plus space, `_`, `#`, `.`, `-`
//! - No leading or trailing whitespace

/// Minimum allowed length for a profile name, in characters.
pub const PROFILE_NAME_MIN: usize = 2;

/// Maximum allowed length for a profile name, in characters.
pub const PROFILE_NAME_MAX: usize = 30;

/// Validates a profile name against the nickname column's constraints.
///
/// # Examples
///
/// ```
/// use fixture_data::is_valid_profile_name;
///
/// assert!(is_valid_profile_name("홍길동"));
/// assert!(is_valid_profile_name("username#3"));
/// assert!(is_valid_profile_name("Marie-Claire"));
/// assert!(!is_valid_profile_name("a"));            // Too short
/// assert!(!is_valid_profile_name(" padded"));      // Leading whitespace
/// ```
#[must_use]
pub fn is_valid_profile_name(name: &str) -> bool {
    let length = name.chars().count();
    if !(PROFILE_NAME_MIN..=PROFILE_NAME_MAX).contains(&length) {
        return false;
    }
    if name.trim() != name {
        return false;
    }
    name.chars().all(is_valid_profile_name_char)
}

/// Returns `true` if the character is allowed in a profile name.
#[must_use]
fn is_valid_profile_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, ' ' | '_' | '#' | '.' | '-')
}

/// Normalizes a candidate into the accepted character set.
///
/// Surrounding whitespace is stripped and disallowed characters become
/// underscores. Length constraints are not enforced here; callers
/// truncate separately.
#[must_use]
pub(crate) fn sanitize_profile_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| {
            if is_valid_profile_name_char(c) {
                c
            } else {
                '_'
            }
        })
        .collect()
}
