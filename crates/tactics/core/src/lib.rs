//! Stat derivation and table sourcing for a tactics unit database.
//!
//! `tactics-core` turns static unit data into a read-only [`Catalog`] of rows
//! (units, formation buffs, in-battle buffs, situations). Every displayed value
//! is a pure function of the user-editable [`Setting`]: nothing is cached, and
//! a new setting is produced by [`Setting::apply`] rather than mutated.
//! Presentation code only supplies a `Setting` and consumes [`TableSource`]s.
pub mod catalog;
pub mod column;
pub mod config;
pub mod entity;
pub mod error;
pub mod setting;
pub mod stats;
pub mod table;

pub use catalog::{BuffRef, Catalog, CatalogInput, UnitEntry};
pub use column::{
    Align, ColumnStyle, DisplayItem, SortKey, Stat, StatColor, StatRoot, StatType, StatValue,
    format_delta, format_multiplier,
};
pub use config::DatabaseConfig;
pub use entity::{
    BaseClass, BuffDuration, BuffTarget, ConditionKind, Element, FormationBuff,
    FormationBuffColumn, FormationBuffDef, FormationEffect, InBattleBuff, InBattleBuffColumn,
    InBattleBuffDef, InBattleEffect, Placement, Rarity, Requirement, Situation, SituationColumn,
    SituationDef, SituationEffect, SkillType, Species, StatusEffect, Unit, UnitColumn, UnitData,
    WeaponType, Weather,
};
pub use error::{CatalogError, DatabaseError, ErrorSeverity};
pub use setting::{
    BaseStat, BaseStatTable, FilterCategory, FilterItem, FilterSelection, ParseFilterError,
    SearchQuery, Setting, SettingPatch,
};
pub use stats::{Beast, Subskill, UnitBaseStats, UnitStats};
pub use table::{
    BuffCategory, Column, Header, InBattleBuffVariants, RowId, TableRow, TableSource, sort_rows,
};
