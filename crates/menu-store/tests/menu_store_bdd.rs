//! Behavioural tests for the menu store.
//!
//! These scenarios exercise the store the way a menu screen would: adding
//! dishes from form input, filtering and aggregating for display, and
//! editing or deleting by identifier.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use menu_store::{
    Course, CourseFilter, Dish, DishDraft, DishId, MenuError, MenuStore, MenuSummary,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

/// Test world holding the store and the outcome of the last step.
#[derive(Default, ScenarioState)]
struct World {
    store: Slot<MenuStore>,
    snapshot: Slot<MenuStore>,
    last_result: Slot<Result<Dish, MenuError>>,
    target_id: Slot<DishId>,
    summary: Slot<MenuSummary>,
    listed: Slot<Vec<String>>,
}

impl World {
    fn store(&self) -> MenuStore {
        self.store.get().expect("store should be set")
    }

    fn last_result(&self) -> Result<Dish, MenuError> {
        self.last_result.get().expect("a change should have been attempted")
    }

    fn summary(&self) -> MenuSummary {
        self.summary.get().expect("summary should be computed")
    }

    /// Applies `change` to the store and records its outcome.
    fn change(&self, change: impl FnOnce(&mut MenuStore) -> Result<Dish, MenuError>) {
        let mut store = self.store();
        let result = change(&mut store);
        self.store.set(store);
        self.last_result.set(result);
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("an empty menu")]
fn an_empty_menu(world: &World) {
    world.store.set(MenuStore::new());
}

#[given("the sample menu")]
fn the_sample_menu(world: &World) {
    let mut store = MenuStore::new();
    for draft in [
        DishDraft::new("Tomato Soup", "45", "starters"),
        DishDraft::new("Bobotie", "85", "mains"),
        DishDraft::new("Malva Pudding", "35", "desserts"),
    ] {
        store.add(&draft).expect("sample dish is valid");
    }
    world.snapshot.set(store.clone());
    world.store.set(store);
}

// ============================================================================
// When steps
// ============================================================================

#[when("the dish \"{name}\" priced \"{price}\" is added to \"{course}\"")]
fn the_dish_is_added(world: &World, name: String, price: String, course: String) {
    world.change(|store| store.add(&DishDraft::new(name, price, course)));
}

#[when("a dish without a name is added to \"{course}\"")]
fn a_dish_without_a_name_is_added(world: &World, course: String) {
    world.change(|store| store.add(&DishDraft::new("", "10", course)));
}

#[when("the menu is aggregated")]
fn the_menu_is_aggregated(world: &World) {
    world.summary.set(world.store().summary());
}

#[when("the menu is filtered by \"{filter}\"")]
fn the_menu_is_filtered_by(world: &World, filter: String) {
    let selection: CourseFilter = filter.parse().expect("filter should parse");
    let listed = world
        .store()
        .filter_by_course(selection)
        .into_iter()
        .map(|dish| dish.name().to_string())
        .collect();
    world.listed.set(listed);
}

#[when("the \"{course}\" dish is removed")]
fn the_course_dish_is_removed(world: &World, course: String) {
    let selected: Course = course.parse().expect("course should parse");
    let target = world
        .store()
        .filter_by_course(selected)
        .first()
        .map(|dish| dish.id())
        .expect("sample menu has a dish for the course");
    world.target_id.set(target);
    world.change(|store| store.remove(target));
}

#[when("the same dish is removed again")]
fn the_same_dish_is_removed_again(world: &World) {
    let target = world.target_id.get().expect("a dish should have been removed");
    world.change(|store| store.remove(target));
}

#[when("an unknown dish is updated")]
fn an_unknown_dish_is_updated(world: &World) {
    let draft = DishDraft::new("Ghost Pepper Wings", "70", "starters");
    world.change(|store| store.update(DishId::random(), &draft));
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the last change succeeds")]
fn the_last_change_succeeds(world: &World) {
    let result = world.last_result();
    assert!(result.is_ok(), "expected success: {result:?}");
}

#[then("the last change fails validation")]
fn the_last_change_fails_validation(world: &World) {
    match world.last_result() {
        Err(MenuError::Validation(_)) => {}
        other => panic!("expected a validation error, got: {other:?}"),
    }
}

#[then("the last change reports not found")]
fn the_last_change_reports_not_found(world: &World) {
    match world.last_result() {
        Err(MenuError::NotFound { .. }) => {}
        other => panic!("expected not found, got: {other:?}"),
    }
}

#[then("the dish count is {count:usize}")]
fn the_dish_count_is(world: &World, count: usize) {
    assert_eq!(world.store().len(), count);
}

#[then("the last dish costs \"{price}\" in \"{course}\"")]
fn the_last_dish_costs(world: &World, price: String, course: String) {
    let dish = world.last_result().expect("last change should succeed");
    assert_eq!(dish.price().to_string(), price);
    assert_eq!(dish.course().to_string(), course);
}

#[then("the total value is \"{value}\"")]
fn the_total_value_is(world: &World, value: String) {
    assert_eq!(world.summary().total_value.to_string(), value);
}

#[then("the average value is \"{value}\"")]
fn the_average_value_is(world: &World, value: String) {
    assert_eq!(world.summary().average_value.to_string(), value);
}

#[then("the average for \"{course}\" is \"{value}\"")]
fn the_average_for_course_is(world: &World, course: String, value: String) {
    let selected: Course = course.parse().expect("course should parse");
    let summary = world.summary();
    let average = summary
        .average_by_course
        .get(&selected)
        .expect("every course has an average");
    assert_eq!(average.to_string(), value);
}

#[then("the listed dishes are \"{names}\"")]
fn the_listed_dishes_are(world: &World, names: String) {
    let listed = world.listed.get().expect("a filter should have been applied");
    let expected: Vec<String> = names.split(", ").map(str::to_owned).collect();
    assert_eq!(listed, expected);
}

#[then("the menu is unchanged")]
fn the_menu_is_unchanged(world: &World) {
    let snapshot = world.snapshot.get().expect("snapshot should be taken");
    assert_eq!(world.store(), snapshot);
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(path = "tests/features/menu_store.feature", name = "Adding a valid dish")]
fn adding_a_valid_dish(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/menu_store.feature",
    name = "Adding a dish without a name"
)]
fn adding_a_dish_without_a_name(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/menu_store.feature",
    name = "Adding a dish with an unparsable price"
)]
fn adding_a_dish_with_an_unparsable_price(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/menu_store.feature",
    name = "Aggregating the sample menu"
)]
fn aggregating_the_sample_menu(world: World) {
    let _ = world;
}

#[scenario(path = "tests/features/menu_store.feature", name = "Filtering by course")]
fn filtering_by_course(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/menu_store.feature",
    name = "Filtering by all courses"
)]
fn filtering_by_all_courses(world: World) {
    let _ = world;
}

#[scenario(path = "tests/features/menu_store.feature", name = "Removing a dish twice")]
fn removing_a_dish_twice(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/menu_store.feature",
    name = "Updating a dish that does not exist"
)]
fn updating_a_dish_that_does_not_exist(world: World) {
    let _ = world;
}
