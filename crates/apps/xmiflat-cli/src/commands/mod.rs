//! CLI command implementations.

pub mod batch;
pub mod columns;
pub mod completions;
pub mod parse;

// Re-export command handlers
pub use batch::batch;
pub use columns::columns;
pub use completions::{completions, write_completions};
pub use parse::parse;
