//! Error types for the menu-store crate.
//!
//! Store operations fail in two ways: a draft breaks a dish invariant, or an
//! identifier does not name a stored dish. Seed menus add their own loading
//! errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::dish::{DishId, DishValidationError};

/// Errors returned by [`MenuStore`](crate::MenuStore) mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// The supplied draft failed validation; the store is unchanged.
    #[error("invalid dish: {0}")]
    Validation(#[from] DishValidationError),
    /// No dish with the identifier exists.
    #[error("dish {id} not found")]
    NotFound {
        /// Identifier that was looked up.
        id: DishId,
    },
}

impl MenuError {
    /// Returns `true` for [`MenuError::NotFound`].
    ///
    /// Callers that retry deletes treat this as an already-applied removal.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Errors that can occur when loading a seed menu.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed menu at '{path}': {message}")]
    Io {
        /// Path to the seed file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The seed JSON is malformed or missing required fields.
    #[error("invalid seed menu JSON: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
    },

    /// The seed version is not supported.
    #[error("unsupported seed menu version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the file.
        actual: u32,
    },

    /// A listed dish failed validation.
    #[error("invalid dish at index {index}: {source}")]
    InvalidDish {
        /// Index of the dish in the seed's `dishes` array.
        index: usize,
        /// Validation failure for that dish.
        #[source]
        source: DishValidationError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_formats_with_id() {
        let id: DishId = "3fa85f64-5717-4562-b3fc-2c963f66afa6"
            .parse()
            .expect("valid id");
        let err = MenuError::NotFound { id };
        assert_eq!(
            err.to_string(),
            "dish 3fa85f64-5717-4562-b3fc-2c963f66afa6 not found"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn validation_wraps_dish_error() {
        let err = MenuError::from(DishValidationError::EmptyName);
        assert_eq!(err.to_string(), "invalid dish: dish name must not be empty");
        assert!(!err.is_not_found());
    }

    #[test]
    fn seed_version_formats_correctly() {
        let err = SeedError::UnsupportedVersion {
            expected: 1,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "unsupported seed menu version: expected 1, found 3"
        );
    }

    #[test]
    fn seed_invalid_dish_formats_correctly() {
        let err = SeedError::InvalidDish {
            index: 2,
            source: DishValidationError::EmptyName,
        };
        assert_eq!(
            err.to_string(),
            "invalid dish at index 2: dish name must not be empty"
        );
    }
}
