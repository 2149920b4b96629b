//! In-memory menu of dishes for a single session.
//!
//! This crate owns the menu data model and every operation the screens of a
//! menu-management app need: listing, filtering by course, grouping by
//! course, price aggregates, and validated add, edit, and delete. Nothing is
//! persisted; a store lives as long as its owner.
//!
//! # Overview
//!
//! - [`DishDraft`] holds raw form input; [`DishDraft::validate`] checks it.
//! - [`MenuStore`] owns the dishes and assigns each a unique [`DishId`].
//! - [`group_by_course`] and [`aggregate`] derive views over any selection.
//! - [`SeedMenu`] optionally provides the starting dishes.
//!
//! # Example
//!
//! ```
//! use menu_store::{Course, DishDraft, MenuError, MenuStore, Price};
//!
//! let mut store = MenuStore::new();
//! let soup = store
//!     .add(&DishDraft::new("Tomato Soup", "45", "starters"))
//!     .expect("valid dish");
//! store
//!     .add(&DishDraft::new("Bobotie", "85", "mains"))
//!     .expect("valid dish");
//!
//! let summary = store.summary();
//! assert_eq!(summary.total_value, Price::from_cents(13000));
//! assert_eq!(summary.average_by_course[&Course::Desserts], Price::ZERO);
//!
//! store.remove(soup.id()).expect("dish exists");
//! assert!(matches!(store.remove(soup.id()), Err(MenuError::NotFound { .. })));
//! ```

mod course;
mod dish;
mod error;
mod price;
mod seed;
mod store;
mod summary;

pub use course::{Course, CourseFilter, ParseCourseError, ParseCourseFilterError};
pub use dish::{Dish, DishDraft, DishFields, DishId, DishName, DishValidationError, ParseDishIdError};
pub use error::{MenuError, SeedError};
pub use price::{Price, PriceError};
pub use seed::SeedMenu;
pub use store::MenuStore;
pub use summary::{MenuSummary, aggregate, group_by_course};
