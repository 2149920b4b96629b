//! Course enumeration and the course filter used by menu views.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Menu course a dish belongs to.
///
/// Variants are declared in serving order, which is also the iteration order
/// of every course-keyed map produced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Course {
    /// Small plates served first.
    Starters,
    /// Main dishes.
    Mains,
    /// Sweet plates served last.
    Desserts,
}

impl Course {
    /// Every course in serving order.
    pub const ALL: [Self; 3] = [Self::Starters, Self::Mains, Self::Desserts];

    /// Lowercase identifier used in drafts and serialised output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Starters => "starters",
            Self::Mains => "mains",
            Self::Desserts => "desserts",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Parse error for [`Course`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown course: '{input}' (expected starters, mains, or desserts)")]
pub struct ParseCourseError {
    /// Raw value that failed to parse.
    pub input: String,
}

impl FromStr for Course {
    type Err = ParseCourseError;

    /// Parses a course name, ignoring surrounding whitespace and ASCII case.
    ///
    /// # Examples
    ///
    /// ```
    /// use menu_store::Course;
    ///
    /// assert_eq!(" Mains ".parse::<Course>(), Ok(Course::Mains));
    /// assert!("soups".parse::<Course>().is_err());
    /// ```
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|course| course.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseCourseError {
                input: value.to_owned(),
            })
    }
}

/// Selection applied when listing dishes by course.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CourseFilter {
    /// Keep every dish.
    #[default]
    All,
    /// Keep dishes from one course only.
    Only(Course),
}

impl CourseFilter {
    /// Returns `true` when `course` passes the filter.
    #[must_use]
    pub fn matches(self, course: Course) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == course,
        }
    }
}

impl From<Course> for CourseFilter {
    fn from(value: Course) -> Self {
        Self::Only(value)
    }
}

impl From<Option<Course>> for CourseFilter {
    fn from(value: Option<Course>) -> Self {
        value.map_or(Self::All, Self::Only)
    }
}

impl fmt::Display for CourseFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.pad("all"),
            Self::Only(course) => course.fmt(f),
        }
    }
}

/// Parse error for [`CourseFilter`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown course filter: '{input}' (expected all, starters, mains, or desserts)")]
pub struct ParseCourseFilterError {
    /// Raw value that failed to parse.
    pub input: String,
}

impl FromStr for CourseFilter {
    type Err = ParseCourseFilterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        value
            .parse::<Course>()
            .map(Self::Only)
            .map_err(|err| ParseCourseFilterError { input: err.input })
    }
}
