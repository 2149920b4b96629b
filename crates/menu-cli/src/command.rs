//! Command grammar of the session shell.

use clap::{Args, Parser, Subcommand};
use menu_store::{CourseFilter, Dish, DishDraft, DishId};

use crate::error::ShellError;
use crate::words::split_words;

/// One line of shell input.
#[derive(Debug, Parser)]
#[command(
    name = "menu",
    no_binary_name = true,
    disable_version_flag = true,
    about = "Manage the dishes of this session's menu"
)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List dishes, newest first.
    #[command(visible_alias = "ls")]
    List {
        /// Course to show: all, starters, mains, or desserts.
        #[arg(long, default_value = "all")]
        course: CourseFilter,
        /// Print dishes as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Add a dish.
    Add(DraftArgs),
    /// Replace fields of an existing dish; omitted fields keep their values.
    Edit {
        /// Identifier of the dish to edit.
        id: DishId,
        /// Fields to change.
        #[command(flatten)]
        changes: EditArgs,
    },
    /// Delete a dish.
    #[command(visible_alias = "rm")]
    Remove {
        /// Identifier of the dish to delete.
        id: DishId,
    },
    /// List dishes grouped by course.
    Groups,
    /// Show the dish count with total and average prices.
    Summary {
        /// Course to aggregate: all, starters, mains, or desserts.
        #[arg(long, default_value = "all")]
        course: CourseFilter,
        /// Print the summary as JSON.
        #[arg(long)]
        json: bool,
    },
    /// End the session.
    #[command(visible_alias = "exit")]
    Quit,
}

/// Fields of a new dish.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct DraftArgs {
    /// Dish name.
    #[arg(long)]
    pub name: String,
    /// Price, e.g. 60.00.
    #[arg(long, allow_hyphen_values = true)]
    pub price: String,
    /// Course: starters, mains, or desserts.
    #[arg(long)]
    pub course: String,
    /// Optional description.
    #[arg(long)]
    pub description: Option<String>,
    /// Optional image reference.
    #[arg(long)]
    pub image: Option<String>,
}

impl From<DraftArgs> for DishDraft {
    fn from(value: DraftArgs) -> Self {
        let DraftArgs {
            name,
            price,
            course,
            description,
            image,
        } = value;
        Self {
            name,
            description,
            price,
            course,
            image,
        }
    }
}

/// Field changes for an existing dish. An empty description or image clears
/// it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct EditArgs {
    /// New name.
    #[arg(long)]
    pub name: Option<String>,
    /// New price.
    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<String>,
    /// New course.
    #[arg(long)]
    pub course: Option<String>,
    /// New description.
    #[arg(long)]
    pub description: Option<String>,
    /// New image reference.
    #[arg(long)]
    pub image: Option<String>,
}

impl EditArgs {
    /// Draft holding `dish`'s current values overlaid with these changes.
    #[must_use]
    pub fn apply_to(self, dish: &Dish) -> DishDraft {
        let current = dish.to_draft();
        DishDraft {
            name: self.name.unwrap_or(current.name),
            description: self.description.or(current.description),
            price: self.price.unwrap_or(current.price),
            course: self.course.unwrap_or(current.course),
            image: self.image.or(current.image),
        }
    }
}

/// Parse one input line. Blank lines yield `None`.
///
/// # Errors
///
/// Returns [`ShellError::Words`] for malformed quoting and
/// [`ShellError::Usage`] when clap rejects the words or help was requested.
///
/// # Examples
///
/// ```
/// use menu_cli::command::{Command, parse_line};
/// use menu_store::{Course, CourseFilter};
///
/// let command = parse_line("list --course mains").expect("valid line");
/// assert_eq!(
///     command,
///     Some(Command::List { course: CourseFilter::Only(Course::Mains), json: false })
/// );
/// assert_eq!(parse_line("   ").expect("blank line"), None);
/// ```
pub fn parse_line(line: &str) -> Result<Option<Command>, ShellError> {
    let words = split_words(line)?;
    if words.is_empty() {
        return Ok(None);
    }
    let parsed = Line::try_parse_from(words)?;
    Ok(Some(parsed.command))
}
