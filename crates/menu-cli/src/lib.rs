//! Interactive shell over an in-memory [`menu_store::MenuStore`].
//!
//! The `menu` binary reads one command per line, runs it against the
//! session's store, and prints the result. Everything here is usable without
//! spawning a process: [`session::Session::run`] takes any reader and writers.
//!
//! ```
//! use std::io::Cursor;
//!
//! use menu_cli::session::Session;
//! use menu_store::MenuStore;
//!
//! let mut session = Session::new(MenuStore::new());
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! session
//!     .run(
//!         Cursor::new("add --name Bobotie --price 85 --course mains\n"),
//!         &mut out,
//!         &mut err,
//!         "",
//!     )
//!     .expect("in-memory streams do not fail");
//! assert_eq!(session.store().len(), 1);
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod render;
pub mod session;
pub mod words;

pub use command::{Command, parse_line};
pub use config::ShellSettings;
pub use error::{ShellError, WordsError};
pub use session::{Flow, Session, load_store};
