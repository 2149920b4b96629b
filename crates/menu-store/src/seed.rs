//! Seed menus: an optional starting set of dishes read from JSON.
//!
//! A seed menu lists dish drafts in the order they should appear. Every draft
//! is validated when the seed is loaded, so building a store from a parsed
//! seed cannot fail. Nothing is ever written back to the seed file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::dish::{DishDraft, DishFields};
use crate::error::SeedError;

/// Current supported seed version.
const SUPPORTED_VERSION: u32 = 1;

/// A validated list of starting dishes.
///
/// # Example
///
/// ```
/// use menu_store::{MenuStore, SeedMenu};
///
/// let json = r#"{
///     "version": 1,
///     "dishes": [
///         {"name": "Tomato Soup", "price": "45", "course": "starters"},
///         {"name": "Bobotie", "description": "Spiced mince bake", "price": "85", "course": "mains"}
///     ]
/// }"#;
///
/// let seed = SeedMenu::from_json(json).expect("valid seed");
/// let store = MenuStore::from_seed(&seed);
///
/// assert_eq!(store.list()[0].name().as_ref(), "Tomato Soup");
/// assert_eq!(store.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedMenu {
    dishes: Vec<DishFields>,
}

impl SeedMenu {
    /// Parses a seed menu from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if:
    /// - The JSON is malformed or misses required fields
    /// - The version is unsupported
    /// - Any listed dish fails validation
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let raw: RawSeedMenu = serde_json::from_str(json).map_err(|e| SeedError::Parse {
            message: e.to_string(),
        })?;

        Self::from_raw(raw)
    }

    /// Loads a seed menu from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, SeedError> {
        let contents = fs::read_to_string(path).map_err(|e| SeedError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawSeedMenu) -> Result<Self, SeedError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(SeedError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        let dishes = raw
            .dishes
            .iter()
            .enumerate()
            .map(|(index, draft)| {
                draft
                    .validate()
                    .map_err(|source| SeedError::InvalidDish { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { dishes })
    }

    /// Validated dishes in file order.
    #[must_use]
    pub fn dishes(&self) -> &[DishFields] {
        &self.dishes
    }
}

/// Raw JSON structure for deserialisation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSeedMenu {
    version: u32,
    #[serde(default)]
    dishes: Vec<DishDraft>,
}
