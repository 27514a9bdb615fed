//! The user-editable context every derived value is computed from.
//!
//! A [`Setting`] is an immutable snapshot. Editing produces a new value via
//! [`Setting::apply`]; nothing in the catalog keeps a reference to a specific
//! instance, every column receives the current one as a parameter.

pub mod filter;
pub mod patch;
pub mod search;

pub use filter::{FilterCategory, FilterItem, FilterSelection, ParseFilterError};
pub use patch::SettingPatch;
pub use search::{SearchQuery, normalize};

use crate::config::DatabaseConfig;
use crate::stats::{Beast, Subskill};

/// The four base stats shared by units, formation buffs and battle buffs.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BaseStat {
    Hp,
    Attack,
    Defense,
    Resist,
}

/// One value per [`BaseStat`].
///
/// Deserialization requires every field; a partially specified multiplier
/// table would otherwise silently zero the missing stats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStatTable<T> {
    pub hp: T,
    pub attack: T,
    pub defense: T,
    pub resist: T,
}

impl<T> BaseStatTable<T> {
    /// Builds a table by evaluating `f` once per stat.
    pub fn from_fn(mut f: impl FnMut(BaseStat) -> T) -> Self {
        Self {
            hp: f(BaseStat::Hp),
            attack: f(BaseStat::Attack),
            defense: f(BaseStat::Defense),
            resist: f(BaseStat::Resist),
        }
    }

    pub fn get_ref(&self, stat: BaseStat) -> &T {
        match stat {
            BaseStat::Hp => &self.hp,
            BaseStat::Attack => &self.attack,
            BaseStat::Defense => &self.defense,
            BaseStat::Resist => &self.resist,
        }
    }

}

impl<T: Copy> BaseStatTable<T> {
    /// Table with the same value for every stat.
    pub const fn splat(value: T) -> Self {
        Self {
            hp: value,
            attack: value,
            defense: value,
            resist: value,
        }
    }

    pub fn get(&self, stat: BaseStat) -> T {
        match stat {
            BaseStat::Hp => self.hp,
            BaseStat::Attack => self.attack,
            BaseStat::Defense => self.defense,
            BaseStat::Resist => self.resist,
        }
    }

    /// Returns a copy with one stat replaced.
    pub fn with(mut self, stat: BaseStat, value: T) -> Self {
        match stat {
            BaseStat::Hp => self.hp = value,
            BaseStat::Attack => self.attack = value,
            BaseStat::Defense => self.defense = value,
            BaseStat::Resist => self.resist = value,
        }
        self
    }

    pub fn map<U>(self, mut f: impl FnMut(BaseStat, T) -> U) -> BaseStatTable<U> {
        BaseStatTable {
            hp: f(BaseStat::Hp, self.hp),
            attack: f(BaseStat::Attack, self.attack),
            defense: f(BaseStat::Defense, self.defense),
            resist: f(BaseStat::Resist, self.resist),
        }
    }
}

impl std::ops::Add for BaseStatTable<i32> {
    type Output = Self;

    /// Element-wise sum.
    fn add(self, other: Self) -> Self {
        self.map(|stat, value| value + other.get(stat))
    }
}

/// Snapshot of user-chosen battle parameters and table filters.
///
/// Multipliers are integer percentages (`100` = unchanged); formation values
/// and additions are deltas (`0` = unchanged).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Setting {
    /// Apply potential (awakening) bonuses and unlock potential-gated buffs.
    pub potential: bool,

    /// Apply exclusive-weapon bonuses and unlock weapon-gated buffs.
    pub weapon: bool,

    /// In-battle multiplier per base stat, percent.
    pub battle_multiplier: BaseStatTable<i32>,

    /// Flat in-battle addition per base stat.
    pub battle_addition: BaseStatTable<i32>,

    /// Formation buff percentage per base stat.
    pub formation: BaseStatTable<i32>,

    /// Equipped subskills, at most [`DatabaseConfig::MAX_SUBSKILLS`].
    pub subskills: Vec<Subskill>,

    /// Selected beast, if any.
    pub beast: Option<Beast>,

    /// Free-text search.
    pub search: String,

    /// Checkbox filter selections.
    pub filter: FilterSelection,
}

impl Default for Setting {
    fn default() -> Self {
        Self {
            potential: false,
            weapon: false,
            battle_multiplier: BaseStatTable::splat(DatabaseConfig::NEUTRAL_MULTIPLIER),
            battle_addition: BaseStatTable::splat(0),
            formation: BaseStatTable::splat(0),
            subskills: Vec::new(),
            beast: None,
            search: String::new(),
            filter: FilterSelection::default(),
        }
    }
}

impl Setting {
    /// Default setting with potential and weapon enabled.
    pub fn maxed() -> Self {
        Self {
            potential: true,
            weapon: true,
            ..Self::default()
        }
    }

    /// Subskills that are actually in effect (extra entries beyond the slot
    /// count are ignored).
    pub fn active_subskills(&self) -> impl Iterator<Item = Subskill> + '_ {
        self.subskills
            .iter()
            .copied()
            .take(DatabaseConfig::MAX_SUBSKILLS)
    }

    /// Parsed search query for the current search text.
    pub fn search_query(&self) -> SearchQuery {
        SearchQuery::new(&self.search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_multipliers_are_neutral() {
        let setting = Setting::default();
        assert_eq!(setting.battle_multiplier.get(BaseStat::Attack), 100);
        assert_eq!(setting.formation.get(BaseStat::Hp), 0);
        assert!(!setting.potential);
    }

    #[test]
    fn extra_subskills_are_ignored() {
        let setting = Setting {
            subskills: vec![Subskill::AttackUp, Subskill::HpUp, Subskill::CostDown],
            ..Setting::default()
        };
        let active: Vec<_> = setting.active_subskills().collect();
        assert_eq!(active, vec![Subskill::AttackUp, Subskill::HpUp]);
    }

    #[test]
    fn stat_table_with_replaces_single_entry() {
        let table = BaseStatTable::splat(0).with(BaseStat::Defense, 15);
        assert_eq!(table, BaseStatTable { hp: 0, attack: 0, defense: 15, resist: 0 });
        assert_eq!((table + BaseStatTable::splat(1)).defense, 16);
    }
}
