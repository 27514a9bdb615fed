//! Closed enumerations describing units and buffs.
//!
//! Declaration order is significant: it is the canonical ordering used for
//! sorting and for the target-specificity comparer in [`super::target`].
//! Every enum parses case-insensitively from its snake_case label.

/// Unit rarity, from lowest to highest.
///
/// Parses from either its label or its star level (`"legendary"` or `"5"`).
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
#[strum(ascii_case_insensitive)]
pub enum Rarity {
    #[strum(to_string = "common", serialize = "1")]
    Common,
    #[strum(to_string = "uncommon", serialize = "2")]
    Uncommon,
    #[strum(to_string = "rare", serialize = "3")]
    Rare,
    #[strum(to_string = "epic", serialize = "4")]
    Epic,
    #[strum(to_string = "legendary", serialize = "5")]
    Legendary,
    #[strum(to_string = "mythic", serialize = "6")]
    Mythic,
}

impl Rarity {
    /// Star level (1..=6).
    pub const fn level(self) -> u8 {
        self as u8 + 1
    }
}

/// Elemental affinity.
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
pub enum Element {
    Fire,
    Water,
    Wind,
    Earth,
    Light,
    Dark,
}

/// Base class family; individual class names are free text on the unit.
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
pub enum BaseClass {
    Soldier,
    Guardian,
    Archer,
    Mage,
    Healer,
    Tactician,
}

/// Weapon category.
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
pub enum WeaponType {
    Sword,
    Spear,
    Axe,
    Bow,
    Gun,
    Staff,
    Fist,
}

/// Species tag. A unit may carry several.
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
pub enum Species {
    Human,
    Elf,
    Dwarf,
    Beastfolk,
    Dragon,
    Spirit,
    Undead,
}

/// Where on the field a unit can be deployed.
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
pub enum Placement {
    Melee,
    Ranged,
    Both,
}

/// Situational condition under which a unit's kit changes.
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
pub enum ConditionKind {
    VsFlying,
    VsArmored,
    WhileBlocking,
    LowHp,
    FullHp,
    Night,
}

/// Status ailments a buff can grant immunity against.
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
pub enum StatusEffect {
    Poison,
    Burn,
    Freeze,
    Stun,
    Silence,
    Slow,
}

/// Weather a buff can summon.
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
pub enum Weather {
    Clear,
    Rain,
    Snow,
    Fog,
    Sandstorm,
}

/// How an in-battle buff is triggered.
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
pub enum SkillType {
    Skill,
    Ability,
    Passive,
}

/// Precondition attached to a buff or situation.
///
/// `Potential` and `Weapon` are evaluated against the current setting and
/// disable the row's values when unmet. The others are informational.
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
pub enum Requirement {
    Potential,
    Weapon,
    SkillActive,
    Deployed,
    FirstDeploy,
}

impl Requirement {
    /// Whether this requirement holds under the given toggles.
    pub const fn is_met(self, potential: bool, weapon: bool) -> bool {
        match self {
            Self::Potential => potential,
            Self::Weapon => weapon,
            Self::SkillActive | Self::Deployed | Self::FirstDeploy => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rarity_parses_label_and_level() {
        assert_eq!("legendary".parse::<Rarity>(), Ok(Rarity::Legendary));
        assert_eq!("5".parse::<Rarity>(), Ok(Rarity::Legendary));
        assert_eq!("Mythic".parse::<Rarity>(), Ok(Rarity::Mythic));
        assert_eq!(Rarity::Legendary.to_string(), "legendary");
        assert_eq!(Rarity::Legendary.level(), 5);
    }

    #[test]
    fn snake_case_labels_round_trip() {
        assert_eq!(ConditionKind::VsFlying.as_ref(), "vs_flying");
        assert_eq!("VS_FLYING".parse::<ConditionKind>(), Ok(ConditionKind::VsFlying));
        assert!("lava".parse::<Element>().is_err());
    }

    #[test]
    fn informational_requirements_always_hold() {
        assert!(Requirement::SkillActive.is_met(false, false));
        assert!(!Requirement::Potential.is_met(false, true));
        assert!(Requirement::Weapon.is_met(false, true));
    }
}
