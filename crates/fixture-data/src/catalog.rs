//! Fixed enumerated value tables for categorical fields.
//!
//! These lists mirror the consuming schema's enum contract, Korean literals
//! included, and are sampled uniformly at random during generation.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Study meeting weekdays.
pub const WEEKDAYS: &[&str] = &["월", "화", "수", "목", "금", "토", "일"];

/// Study meeting frequencies.
pub const FREQUENCIES: &[&str] = &["1회", "주 2-4회", "주 5회 이상"];

/// Study meeting locations.
pub const LOCATIONS: &[&str] = &[
    "비대면",
    "학교 스터디룸",
    "중앙도서관",
    "스터디카페",
    "일반카페",
    "흑석, 상도",
    "서울대입구, 낙성대",
    "기타",
];

/// Notification type codes.
pub const NOTIFICATION_TYPES: &[u32] = &[101, 102];

/// Samples one value uniformly at random from a table.
///
/// Returns `None` if the table is empty.
#[must_use]
pub fn sample<T: Copy>(rng: &mut ChaCha8Rng, values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    values.get(rng.random_range(0..values.len())).copied()
}
