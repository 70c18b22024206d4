//! Presentation layer for eduquiz
//!
//! This crate contains CLI definitions, output formatters, the query
//! progress spinner, and the console navigator.

pub mod cli;
pub mod nav;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use nav::ConsoleNavigator;
pub use output::console::ConsoleFormatter;
pub use progress::QueryProgress;
