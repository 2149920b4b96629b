//! Derived menu views: grouping by course and price aggregates.
//!
//! Both functions take any sequence of borrowed dishes, so they apply equally
//! to the whole store and to a filtered selection.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::course::Course;
use crate::dish::Dish;
use crate::price::Price;

/// Partition `dishes` by course, keeping their relative order.
///
/// Courses without dishes are absent from the result. Keys iterate in
/// serving order.
///
/// # Examples
///
/// ```
/// use menu_store::{Course, DishDraft, MenuStore, group_by_course};
///
/// let mut store = MenuStore::new();
/// store.add(&DishDraft::new("Bobotie", "85", "mains")).expect("valid");
///
/// let groups = group_by_course(store.list());
/// assert_eq!(groups.keys().copied().collect::<Vec<_>>(), [Course::Mains]);
/// ```
pub fn group_by_course<'a, I>(dishes: I) -> BTreeMap<Course, Vec<&'a Dish>>
where
    I: IntoIterator<Item = &'a Dish>,
{
    let mut groups: BTreeMap<Course, Vec<&'a Dish>> = BTreeMap::new();
    for dish in dishes {
        groups.entry(dish.course()).or_default().push(dish);
    }
    groups
}

/// Count, total, and average price of a selection of dishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSummary {
    /// Number of dishes aggregated.
    pub count: usize,
    /// Sum of all prices.
    pub total_value: Price,
    /// Mean price, or zero when there are no dishes.
    pub average_value: Price,
    /// Mean price per course. Every course is present; a course without
    /// dishes averages to zero.
    pub average_by_course: BTreeMap<Course, Price>,
}

/// Aggregate prices over `dishes`.
///
/// Averages are rounded half up to the cent.
///
/// # Examples
///
/// ```
/// use menu_store::{Course, MenuStore, Price, aggregate};
///
/// let summary = aggregate(MenuStore::new().list());
/// assert_eq!(summary.count, 0);
/// assert_eq!(summary.average_value, Price::ZERO);
/// assert_eq!(summary.average_by_course[&Course::Mains], Price::ZERO);
/// ```
pub fn aggregate<'a, I>(dishes: I) -> MenuSummary
where
    I: IntoIterator<Item = &'a Dish>,
{
    let mut course_totals: BTreeMap<Course, (Price, usize)> = Course::ALL
        .into_iter()
        .map(|course| (course, (Price::ZERO, 0)))
        .collect();
    for dish in dishes {
        let (total, count) = course_totals
            .entry(dish.course())
            .or_insert((Price::ZERO, 0));
        *total = total.saturating_add(dish.price());
        *count += 1;
    }

    let count: usize = course_totals.values().map(|(_, count)| count).sum();
    let total_value: Price = course_totals.values().map(|(total, _)| total).sum();
    let average_by_course = course_totals
        .into_iter()
        .map(|(course, (course_total, course_count))| {
            (course, Price::average(course_total, course_count))
        })
        .collect();

    MenuSummary {
        count,
        total_value,
        average_value: Price::average(total_value, count),
        average_by_course,
    }
}
