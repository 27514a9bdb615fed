//! Unit stat derivation.
//!
//! Every derived unit stat goes through one layered bonus order:
//!
//! ```text
//! UnitBaseStats ─┐
//!                ├─> BonusStack (Flat → %Inc → More → Clamp) ─> UnitStats
//! Setting ───────┘
//! ```
//!
//! Subskill and beast effects are static tables keyed by closed enums.

pub mod bonus;
pub mod effects;
pub mod unit;

pub use bonus::{Bonus, BonusStack, StatBounds, StatLayer};
pub use effects::{Beast, StatEffect, Subskill};
pub use unit::{UnitBaseStats, UnitBonuses, UnitStats};
