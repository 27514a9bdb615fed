//! Generic table plumbing: row addressing, sources, the shared sort and the
//! in-battle category views.
//!
//! ```text
//! Catalog slice ──> TableSource ──filter(setting)──> rows ──sort(setting, column)──> rows
//!                       │
//!                       └── headers (column id, StatType, label)
//! ```

pub mod row;
pub mod sort;
pub mod source;
pub mod variants;

pub use row::{Column, RowId, StatColumns, TableRow};
pub use sort::{compare_keys, sort_rows};
pub use source::{Header, TableSource};
pub use variants::{BuffCategory, InBattleBuffVariants};
