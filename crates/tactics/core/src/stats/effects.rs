//! Static effect tables for subskills and beasts.
//!
//! Both are closed enums so the Setting can name them directly; their
//! effects are fixed game data and live in exhaustive `match` tables.

use crate::setting::BaseStatTable;

/// Stat effect granted by an equipped subskill or a selected beast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatEffect {
    /// Flat additions per base stat.
    pub flat: BaseStatTable<i32>,
    /// Percentage increases per base stat.
    pub percent: BaseStatTable<i32>,
    /// Deployment cost reduction.
    pub cost_reduction: i32,
}

impl StatEffect {
    const NONE: Self = Self {
        flat: BaseStatTable::splat(0),
        percent: BaseStatTable::splat(0),
        cost_reduction: 0,
    };

    const fn percent(hp: i32, attack: i32, defense: i32, resist: i32) -> Self {
        Self {
            percent: BaseStatTable {
                hp,
                attack,
                defense,
                resist,
            },
            ..Self::NONE
        }
    }

    const fn flat(hp: i32, attack: i32, defense: i32, resist: i32) -> Self {
        Self {
            flat: BaseStatTable {
                hp,
                attack,
                defense,
                resist,
            },
            ..Self::NONE
        }
    }

    /// Sums two effects.
    pub fn combine(self, other: Self) -> Self {
        Self {
            flat: self.flat + other.flat,
            percent: self.percent + other.percent,
            cost_reduction: self.cost_reduction + other.cost_reduction,
        }
    }
}

/// Equippable subskill.
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
pub enum Subskill {
    HpUp,
    AttackUp,
    DefenseUp,
    ResistUp,
    CostDown,
    Vanguard,
}

impl Subskill {
    pub const fn effect(self) -> StatEffect {
        match self {
            Self::HpUp => StatEffect::percent(15, 0, 0, 0),
            Self::AttackUp => StatEffect::percent(0, 15, 0, 0),
            Self::DefenseUp => StatEffect::percent(0, 0, 15, 0),
            Self::ResistUp => StatEffect::flat(0, 0, 0, 10),
            Self::CostDown => StatEffect {
                cost_reduction: 2,
                ..StatEffect::NONE
            },
            Self::Vanguard => StatEffect {
                cost_reduction: 1,
                ..StatEffect::percent(10, 0, 10, 0)
            },
        }
    }
}

/// Beast companion; at most one is selected.
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
pub enum Beast {
    Phoenix,
    Behemoth,
    Leviathan,
    Griffin,
}

impl Beast {
    pub const fn effect(self) -> StatEffect {
        match self {
            Self::Phoenix => StatEffect::percent(10, 10, 0, 0),
            Self::Behemoth => StatEffect::flat(300, 0, 50, 0),
            Self::Leviathan => StatEffect::percent(0, 0, 0, 20),
            Self::Griffin => StatEffect {
                cost_reduction: 3,
                ..StatEffect::NONE
            },
        }
    }
}
