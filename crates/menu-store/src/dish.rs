//! Dish entity, its identifier, and the unvalidated draft it is built from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::course::{Course, ParseCourseError};
use crate::price::{Price, PriceError};

/// Validation errors returned when a [`DishDraft`] is checked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DishValidationError {
    /// The name is empty once trimmed.
    #[error("dish name must not be empty")]
    EmptyName,
    /// The price is not a positive number.
    #[error(transparent)]
    Price(#[from] PriceError),
    /// The course is not one of the known courses.
    #[error(transparent)]
    Course(#[from] ParseCourseError),
}

/// Stable dish identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DishId(Uuid);

impl DishId {
    /// Generate a new random [`DishId`].
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for DishId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for DishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Parse error for [`DishId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("dish id must be a valid UUID (got '{input}')")]
pub struct ParseDishIdError {
    /// Raw value that failed to parse.
    pub input: String,
}

impl FromStr for DishId {
    type Err = ParseDishIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|_| ParseDishIdError {
                input: value.to_owned(),
            })
    }
}

/// Dish name, trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DishName(String);

impl DishName {
    /// Validate and construct a [`DishName`], trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`DishValidationError::EmptyName`] when nothing remains after
    /// trimming.
    pub fn new(name: impl AsRef<str>) -> Result<Self, DishValidationError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DishValidationError::EmptyName);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for DishName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DishName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<DishName> for String {
    fn from(value: DishName) -> Self {
        value.0
    }
}

impl TryFrom<String> for DishName {
    type Error = DishValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Unvalidated dish fields as entered on a form.
///
/// # Examples
///
/// ```
/// use menu_store::{Course, DishDraft};
///
/// let fields = DishDraft::new("Tomato Soup", "45", "starters")
///     .with_description("Roasted tomatoes, basil oil")
///     .validate()
///     .expect("draft is valid");
///
/// assert_eq!(fields.course(), Course::Starters);
/// assert_eq!(fields.price().to_string(), "45.00");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishDraft {
    /// Dish name; surrounding whitespace is dropped.
    pub name: String,
    /// Optional description; blank text is treated as absent.
    #[serde(default)]
    pub description: Option<String>,
    /// Price text, parsed as a decimal number.
    pub price: String,
    /// Course name.
    pub course: String,
    /// Optional image reference; blank text is treated as absent.
    #[serde(default)]
    pub image: Option<String>,
}

impl DishDraft {
    /// Build a draft from the required fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        course: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            price: price.into(),
            course: course.into(),
            image: None,
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach an image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Check the draft, checking name, then price, then course.
    ///
    /// # Errors
    ///
    /// Returns the first [`DishValidationError`] encountered.
    pub fn validate(&self) -> Result<DishFields, DishValidationError> {
        let name = DishName::new(&self.name)?;
        let price = Price::parse_positive(&self.price)?;
        let course = self.course.parse::<Course>()?;
        Ok(DishFields {
            name,
            description: non_blank(self.description.as_deref()),
            price,
            course,
            image: non_blank(self.image.as_deref()),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}

/// Validated dish fields, ready to be stored under an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishFields {
    name: DishName,
    description: Option<String>,
    price: Price,
    course: Course,
    image: Option<String>,
}

impl DishFields {
    /// Validated name.
    #[must_use]
    pub const fn name(&self) -> &DishName {
        &self.name
    }

    /// Price rounded to cents.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Course the dish belongs to.
    #[must_use]
    pub const fn course(&self) -> Course {
        self.course
    }
}

/// A menu entry.
///
/// ## Invariants
/// - `name` is non-empty once trimmed.
/// - `price` was strictly positive when entered and is held in cents.
/// - `course` is one of [`Course::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    id: DishId,
    name: DishName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    price: Price,
    course: Course,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
}

impl Dish {
    /// Attach an identifier to validated fields.
    #[must_use]
    pub fn new(id: DishId, fields: DishFields) -> Self {
        let DishFields {
            name,
            description,
            price,
            course,
            image,
        } = fields;
        Self {
            id,
            name,
            description,
            price,
            course,
            image,
        }
    }

    /// Stable identifier.
    #[must_use]
    pub const fn id(&self) -> DishId {
        self.id
    }

    /// Dish name.
    #[must_use]
    pub const fn name(&self) -> &DishName {
        &self.name
    }

    /// Description, when one was given.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Price in cents.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Course the dish belongs to.
    #[must_use]
    pub const fn course(&self) -> Course {
        self.course
    }

    /// Image reference, when one was given.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Draft prefilled with this dish's values, as an edit form would show.
    #[must_use]
    pub fn to_draft(&self) -> DishDraft {
        DishDraft {
            name: self.name.to_string(),
            description: self.description.clone(),
            price: self.price.to_string(),
            course: self.course.to_string(),
            image: self.image.clone(),
        }
    }
}
