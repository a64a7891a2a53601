//! CLI command handlers.
//!
//! Headless, scriptable access to the catalog for automation and
//! testing: the same filter pipeline the TUI runs, printed to stdout.

pub mod categories;
pub mod common;
pub mod list;

// Re-export types used by main.rs and tests
pub use categories::CategoriesArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use list::ListArgs;
