//! Column values: derivation, display and sort projections.
//!
//! ```text
//! Setting ─> StatRoot<T>::calculate ─> Option<T> ─┬─> display item / text
//!                                                  ├─> color
//!                                                  └─> sort key
//! ```
//!
//! [`Stat`] erases `T` so a row can hand out any of its columns as `&dyn Stat`.

pub mod format;
pub mod root;
pub mod stat_type;
pub mod value;

pub use format::{format_delta, format_multiplier, format_signed};
pub use root::{Stat, StatRoot};
pub use stat_type::{Align, ColumnStyle, StatType};
pub use value::{DisplayItem, SortKey, StatColor, StatValue};
