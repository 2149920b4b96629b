//! The in-memory menu aggregate.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::course::{Course, CourseFilter};
use crate::dish::{Dish, DishDraft, DishFields, DishId};
use crate::error::MenuError;
use crate::seed::SeedMenu;
use crate::summary::{MenuSummary, aggregate, group_by_course};

/// Owner of the dish collection for one session.
///
/// Dishes keep the order they were added in, newest first. Reads borrow the
/// store; writes take `&mut self`, so a single owner passes the store by
/// reference to whatever renders or edits it.
///
/// # Examples
///
/// ```
/// use menu_store::{Course, DishDraft, MenuStore};
///
/// let mut store = MenuStore::new();
/// let soup = store
///     .add(&DishDraft::new("Tomato Soup", "45", "starters"))
///     .expect("valid dish");
///
/// assert_eq!(store.len(), 1);
/// assert_eq!(store.filter_by_course(Course::Starters), vec![&soup]);
/// assert!(store.filter_by_course(Course::Mains).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuStore {
    dishes: Vec<Dish>,
}

impl MenuStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { dishes: Vec::new() }
    }

    /// Create a store holding the dishes of a seed menu, in file order.
    #[must_use]
    pub fn from_seed(seed: &SeedMenu) -> Self {
        let mut store = Self::new();
        for fields in seed.dishes().iter().rev() {
            store.insert_front(fields.clone());
        }
        info!(dish_count = store.len(), "seed menu loaded");
        store
    }

    /// All dishes in store order.
    #[must_use]
    pub const fn list(&self) -> &[Dish] {
        self.dishes.as_slice()
    }

    /// Number of stored dishes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.dishes.len()
    }

    /// Returns `true` when no dishes are stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// Look up a dish by identifier.
    #[must_use]
    pub fn get(&self, id: DishId) -> Option<&Dish> {
        self.dishes.iter().find(|dish| dish.id() == id)
    }

    /// Dishes passing `selection`, in store order.
    ///
    /// Accepts a [`CourseFilter`], a [`Course`], or an `Option<Course>` where
    /// `None` keeps every dish.
    #[must_use]
    pub fn filter_by_course(&self, selection: impl Into<CourseFilter>) -> Vec<&Dish> {
        let filter: CourseFilter = selection.into();
        self.dishes
            .iter()
            .filter(|dish| filter.matches(dish.course()))
            .collect()
    }

    /// Every stored dish grouped by course; see [`group_by_course`].
    #[must_use]
    pub fn group_by_course(&self) -> BTreeMap<Course, Vec<&Dish>> {
        group_by_course(&self.dishes)
    }

    /// Aggregates over every stored dish; see [`aggregate`].
    #[must_use]
    pub fn summary(&self) -> MenuSummary {
        aggregate(&self.dishes)
    }

    /// Validate `draft` and store it as a new dish at the front of the menu.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Validation`] when the draft is invalid; the store
    /// is left unchanged.
    pub fn add(&mut self, draft: &DishDraft) -> Result<Dish, MenuError> {
        let fields = draft.validate()?;
        let dish = self.insert_front(fields);
        debug!(dish_id = %dish.id(), course = %dish.course(), "dish added");
        Ok(dish)
    }

    /// Replace the dish identified by `id` with `draft`, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::NotFound`] when `id` is not stored, otherwise
    /// [`MenuError::Validation`] when the draft is invalid. The store is left
    /// unchanged on error.
    pub fn update(&mut self, id: DishId, draft: &DishDraft) -> Result<Dish, MenuError> {
        let slot = self
            .dishes
            .iter_mut()
            .find(|dish| dish.id() == id)
            .ok_or(MenuError::NotFound { id })?;
        let fields = draft.validate()?;
        *slot = Dish::new(id, fields);
        debug!(dish_id = %id, course = %slot.course(), "dish updated");
        Ok(slot.clone())
    }

    /// Delete the dish identified by `id`, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::NotFound`] when `id` is not stored, including when
    /// it was already removed.
    pub fn remove(&mut self, id: DishId) -> Result<Dish, MenuError> {
        let index = self
            .dishes
            .iter()
            .position(|dish| dish.id() == id)
            .ok_or(MenuError::NotFound { id })?;
        let removed = self.dishes.remove(index);
        debug!(dish_id = %id, course = %removed.course(), "dish removed");
        Ok(removed)
    }

    fn insert_front(&mut self, fields: DishFields) -> Dish {
        let dish = Dish::new(self.fresh_id(), fields);
        self.dishes.insert(0, dish.clone());
        dish
    }

    fn fresh_id(&self) -> DishId {
        loop {
            let candidate = DishId::random();
            if self.get(candidate).is_none() {
                return candidate;
            }
        }
    }
}
