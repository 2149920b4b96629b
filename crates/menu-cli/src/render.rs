//! Plain text rendering of dishes and summaries.

use std::collections::BTreeMap;
use std::io::{self, Write};

use menu_store::{Course, Dish, MenuSummary};

/// Write one dish as `<id>  <course>  <price>  <name>`, followed by indented
/// description and image lines when present.
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn write_dish(out: &mut impl Write, dish: &Dish) -> io::Result<()> {
    writeln!(
        out,
        "{}  {:<8}  {:>9}  {}",
        dish.id(),
        dish.course(),
        dish.price().to_string(),
        dish.name()
    )?;
    if let Some(description) = dish.description() {
        writeln!(out, "    {description}")?;
    }
    if let Some(image) = dish.image() {
        writeln!(out, "    image: {image}")?;
    }
    Ok(())
}

/// Write each dish in order, or `No dishes` for an empty selection.
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn write_dishes(out: &mut impl Write, dishes: &[&Dish]) -> io::Result<()> {
    if dishes.is_empty() {
        return writeln!(out, "No dishes");
    }
    for dish in dishes {
        write_dish(out, dish)?;
    }
    Ok(())
}

/// Write each non-empty course with a heading and its dishes.
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn write_groups(out: &mut impl Write, groups: &BTreeMap<Course, Vec<&Dish>>) -> io::Result<()> {
    if groups.is_empty() {
        return writeln!(out, "No dishes");
    }
    for (course, dishes) in groups {
        writeln!(out, "{course} ({})", dishes.len())?;
        for dish in dishes {
            write!(out, "  ")?;
            write_dish(out, dish)?;
        }
    }
    Ok(())
}

/// Write the count, total, overall average, and per-course averages.
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn write_summary(out: &mut impl Write, summary: &MenuSummary) -> io::Result<()> {
    writeln!(out, "dishes:  {}", summary.count)?;
    writeln!(out, "total:   {}", summary.total_value)?;
    writeln!(out, "average: {}", summary.average_value)?;
    for (course, average) in &summary.average_by_course {
        writeln!(out, "  {course:<8}  {average}")?;
    }
    Ok(())
}
