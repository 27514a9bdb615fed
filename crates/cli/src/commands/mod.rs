//! Command implementations.
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod columns;
mod table;

pub use columns::Columns;
pub use table::Table;
