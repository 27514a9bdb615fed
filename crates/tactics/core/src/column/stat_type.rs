//! Closed column identifiers and their presentation metadata.
//!
//! `label` and `style` are exhaustive matches: a new [`StatType`] variant does
//! not compile until both tables cover it.

/// Stable identifier of a column concept, shared with presentation.
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
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatType {
    // ===== unit identity and base stats =====
    Name,
    Rarity,
    Element,
    BaseClass,
    ClassName,
    Weapon,
    Species,
    Placement,
    Cost,
    Hp,
    Attack,
    Defense,
    Resist,
    Interval,
    Range,
    Dps,

    // ===== buff metadata =====
    BuffTarget,
    SkillType,
    Duration,
    Requirement,
    Supplement,

    // ===== formation buffs =====
    FormationHp,
    FormationAttack,
    FormationDefense,
    FormationResist,
    FormationCost,
    FormationCriticalRate,

    // ===== in-battle buffs =====
    BuffHp,
    BuffAttack,
    BuffDefense,
    BuffResist,
    DamageDealt,
    CriticalRate,
    CriticalDamage,
    Penetration,
    DamageTaken,
    Evasion,
    AttackSpeed,
    Delay,
    MoveSpeed,
    RedeployTime,
    BuffCost,
    Field,
    StatusImmunity,
    Weather,

    // ===== situations =====
    Condition,
    SituationAttack,
    SituationDamage,
    SituationDefense,
}

/// Horizontal alignment of a column's cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Static presentation hints for a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnStyle {
    pub align: Align,
    pub sortable: bool,
}

impl ColumnStyle {
    const TEXT: Self = Self {
        align: Align::Left,
        sortable: true,
    };
    const NUMBER: Self = Self {
        align: Align::Right,
        sortable: true,
    };
    const TAG: Self = Self {
        align: Align::Center,
        sortable: true,
    };
    const NOTE: Self = Self {
        align: Align::Left,
        sortable: false,
    };
}

impl StatType {
    /// Header text.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Rarity => "Rarity",
            Self::Element => "Element",
            Self::BaseClass => "Class",
            Self::ClassName => "Class Name",
            Self::Weapon => "Weapon",
            Self::Species => "Species",
            Self::Placement => "Placement",
            Self::Cost => "Cost",
            Self::Hp => "HP",
            Self::Attack => "ATK",
            Self::Defense => "DEF",
            Self::Resist => "RES",
            Self::Interval => "Interval",
            Self::Range => "Range",
            Self::Dps => "DPS",
            Self::BuffTarget => "Target",
            Self::SkillType => "Type",
            Self::Duration => "Duration",
            Self::Requirement => "Requires",
            Self::Supplement => "Notes",
            Self::FormationHp => "HP",
            Self::FormationAttack => "ATK",
            Self::FormationDefense => "DEF",
            Self::FormationResist => "RES",
            Self::FormationCost => "Cost",
            Self::FormationCriticalRate => "Crit Rate",
            Self::BuffHp => "HP",
            Self::BuffAttack => "ATK",
            Self::BuffDefense => "DEF",
            Self::BuffResist => "RES",
            Self::DamageDealt => "Damage",
            Self::CriticalRate => "Crit Rate",
            Self::CriticalDamage => "Crit Damage",
            Self::Penetration => "Penetration",
            Self::DamageTaken => "Damage Taken",
            Self::Evasion => "Evasion",
            Self::AttackSpeed => "Attack Speed",
            Self::Delay => "Delay",
            Self::MoveSpeed => "Move Speed",
            Self::RedeployTime => "Redeploy",
            Self::BuffCost => "Cost",
            Self::Field => "Field",
            Self::StatusImmunity => "Immunity",
            Self::Weather => "Weather",
            Self::Condition => "Condition",
            Self::SituationAttack => "ATK",
            Self::SituationDamage => "Damage",
            Self::SituationDefense => "DEF",
        }
    }

    pub const fn style(self) -> ColumnStyle {
        match self {
            Self::Name | Self::ClassName | Self::BuffTarget | Self::Requirement => {
                ColumnStyle::TEXT
            }
            Self::Species | Self::StatusImmunity | Self::Condition => ColumnStyle::TEXT,
            Self::Rarity
            | Self::Element
            | Self::BaseClass
            | Self::Weapon
            | Self::Placement
            | Self::SkillType
            | Self::Field
            | Self::Weather => ColumnStyle::TAG,
            Self::Cost
            | Self::Hp
            | Self::Attack
            | Self::Defense
            | Self::Resist
            | Self::Interval
            | Self::Range
            | Self::Dps
            | Self::Duration => ColumnStyle::NUMBER,
            Self::FormationHp
            | Self::FormationAttack
            | Self::FormationDefense
            | Self::FormationResist
            | Self::FormationCost
            | Self::FormationCriticalRate => ColumnStyle::NUMBER,
            Self::BuffHp
            | Self::BuffAttack
            | Self::BuffDefense
            | Self::BuffResist
            | Self::DamageDealt
            | Self::CriticalRate
            | Self::CriticalDamage
            | Self::Penetration
            | Self::DamageTaken
            | Self::Evasion
            | Self::AttackSpeed
            | Self::Delay
            | Self::MoveSpeed
            | Self::RedeployTime
            | Self::BuffCost => ColumnStyle::NUMBER,
            Self::SituationAttack | Self::SituationDamage | Self::SituationDefense => {
                ColumnStyle::NUMBER
            }
            Self::Supplement => ColumnStyle::NOTE,
        }
    }
}
