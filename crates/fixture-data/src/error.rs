//! Error types for the fixture-data crate.
//!
//! This module defines semantic error enums for configuration validation,
//! seed-data parsing, fixture generation, and artifact emission, following
//! the project's error handling conventions with `thiserror`.

use std::path::PathBuf;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised by configuration validation.
///
/// These cover inconsistent row counts and positional foreign-key
/// derivations that would index past an identifier pool. They are checked
/// before any row is generated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A row count is zero, so no rows could be generated for the entity.
    #[error("row count for {entity} must be greater than zero")]
    ZeroRowCount {
        /// Entity whose configured count was zero.
        entity: &'static str,
    },

    /// A positional strategy was configured with a zero group size.
    #[error("positional group size for {entity}.{reference} must be greater than zero")]
    ZeroGroupSize {
        /// Entity owning the foreign key.
        entity: &'static str,
        /// Referenced pool the group size applies to.
        reference: &'static str,
    },

    /// Positional derivation would index past the referenced pool.
    #[error(
        "positional derivation for {entity}.{reference} reaches index {last_index} \
         but the pool only holds {pool_len} identifiers"
    )]
    PositionalOutOfRange {
        /// Entity owning the foreign key.
        entity: &'static str,
        /// Referenced pool that would be overrun.
        reference: &'static str,
        /// Highest pool index the derivation produces.
        last_index: usize,
        /// Number of identifiers in the referenced pool.
        pool_len: usize,
    },

    /// Too few users are configured for the interest-category link pattern.
    #[error("interest-category links need at least {required} users, configured {actual}")]
    InsufficientUsers {
        /// Minimum user count the link pattern references.
        required: usize,
        /// Configured user count.
        actual: usize,
    },
}

/// Errors that can occur when loading or validating a seed-data document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedDataError {
    /// The seed-data file could not be read.
    #[error("failed to read seed data file at '{path}': {message}")]
    IoError {
        /// Path to the seed-data file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The seed-data JSON is malformed or missing required fields.
    #[error("invalid seed data JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The document version is not supported.
    #[error("unsupported seed data version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the document.
        actual: u32,
    },

    /// A demo account ID is not a valid UUID.
    #[error("invalid demo account UUID at index {index}: {value}")]
    InvalidAccountId {
        /// Index of the invalid account in the array.
        index: usize,
        /// The invalid UUID string.
        value: String,
    },

    /// The document contains no category rows.
    #[error("seed data contains no category rows")]
    EmptyCategories,
}

/// Errors that can occur during fixture generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The configuration failed validation.
    #[error("invalid configuration: {source}")]
    Config {
        /// Underlying configuration error.
        #[from]
        #[source]
        source: ConfigError,
    },

    /// An identifier pool was indexed past its end.
    #[error("{entity} pool index {index} out of range (pool holds {pool_len})")]
    PoolIndexOutOfRange {
        /// Entity the pool belongs to.
        entity: &'static str,
        /// Requested index.
        index: usize,
        /// Number of identifiers in the pool.
        pool_len: usize,
    },

    /// A uniform-random selection was attempted on an empty pool.
    #[error("{entity} pool is empty")]
    EmptyPool {
        /// Entity the pool belongs to.
        entity: &'static str,
    },

    /// A positional selection was attempted with a zero group size.
    #[error("{entity} pool selection used a zero group size")]
    ZeroGroupSize {
        /// Entity the pool belongs to.
        entity: &'static str,
    },

    /// A categorical value table was empty.
    #[error("enumeration '{name}' has no values to sample")]
    EmptyEnumeration {
        /// Name of the empty enumeration.
        name: &'static str,
    },

    /// The seed data holds too few categories for the link pattern.
    #[error("interest-category link needs category index {index}, seed data holds {available}")]
    MissingCategory {
        /// Category index the link pattern requires.
        index: usize,
        /// Number of categories in the seed data.
        available: usize,
    },

    /// Failed to generate a valid profile name after maximum retries.
    #[error("failed to generate valid profile name after {max_attempts} attempts")]
    ProfileNameGenerationFailed {
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },
}

/// Errors raised while writing artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    /// An artifact could not be written.
    #[error("failed to write artifact '{path}': {message}")]
    WriteError {
        /// Path of the artifact that failed to write.
        path: Utf8PathBuf,
        /// Description of the write failure.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_zero_row_count_formats_correctly() {
        let err = ConfigError::ZeroRowCount { entity: "study" };
        assert_eq!(
            err.to_string(),
            "row count for study must be greater than zero"
        );
    }

    #[test]
    fn config_error_positional_out_of_range_formats_correctly() {
        let err = ConfigError::PositionalOutOfRange {
            entity: "notification",
            reference: "study",
            last_index: 39,
            pool_len: 10,
        };
        assert_eq!(
            err.to_string(),
            "positional derivation for notification.study reaches index 39 \
             but the pool only holds 10 identifiers"
        );
    }

    #[test]
    fn seed_data_error_version_formats_correctly() {
        let err = SeedDataError::UnsupportedVersion {
            expected: 1,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "unsupported seed data version: expected 1, found 3"
        );
    }

    #[test]
    fn seed_data_error_invalid_account_formats_correctly() {
        let err = SeedDataError::InvalidAccountId {
            index: 2,
            value: "not-a-uuid".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid demo account UUID at index 2: not-a-uuid"
        );
    }

    #[test]
    fn generation_error_pool_index_formats_correctly() {
        let err = GenerationError::PoolIndexOutOfRange {
            entity: "user",
            index: 120,
            pool_len: 100,
        };
        assert_eq!(
            err.to_string(),
            "user pool index 120 out of range (pool holds 100)"
        );
    }

    #[test]
    fn generation_error_wraps_config_error() {
        let err = GenerationError::from(ConfigError::ZeroRowCount { entity: "user" });
        assert_eq!(
            err.to_string(),
            "invalid configuration: row count for user must be greater than zero"
        );
    }

    #[test]
    fn emit_error_write_formats_correctly() {
        let err = EmitError::WriteError {
            path: Utf8PathBuf::from("userdata.sql"),
            message: "disk full".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to write artifact 'userdata.sql': disk full"
        );
    }
}
