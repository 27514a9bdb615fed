//! Checkbox filter selections grouped by category.
//!
//! An empty category imposes no constraint; a non-empty category requires the
//! row's owning unit to match at least one selected value. Categories are
//! combined with AND.

use std::collections::BTreeSet;
use std::str::FromStr;

use crate::entity::{BaseClass, ConditionKind, Element, Placement, Rarity, Species, WeaponType};

/// Filter category identifiers.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FilterCategory {
    Rarity,
    Element,
    #[strum(to_string = "base_class", serialize = "class")]
    BaseClass,
    Weapon,
    Species,
    Placement,
    #[strum(to_string = "condition", serialize = "situation")]
    Condition,
}

/// A single checkbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterItem {
    Rarity(Rarity),
    Element(Element),
    BaseClass(BaseClass),
    Weapon(WeaponType),
    Species(Species),
    Placement(Placement),
    Condition(ConditionKind),
}

impl FilterItem {
    pub fn category(&self) -> FilterCategory {
        match self {
            Self::Rarity(_) => FilterCategory::Rarity,
            Self::Element(_) => FilterCategory::Element,
            Self::BaseClass(_) => FilterCategory::BaseClass,
            Self::Weapon(_) => FilterCategory::Weapon,
            Self::Species(_) => FilterCategory::Species,
            Self::Placement(_) => FilterCategory::Placement,
            Self::Condition(_) => FilterCategory::Condition,
        }
    }

    /// Parses a `category=value` pair, e.g. `element=fire` or `rarity=5`.
    pub fn parse_pair(category: FilterCategory, value: &str) -> Result<Self, ParseFilterError> {
        let invalid = || ParseFilterError::UnknownValue {
            category,
            value: value.to_string(),
        };
        let value = value.trim();
        Ok(match category {
            FilterCategory::Rarity => Self::Rarity(value.parse().map_err(|_| invalid())?),
            FilterCategory::Element => Self::Element(value.parse().map_err(|_| invalid())?),
            FilterCategory::BaseClass => Self::BaseClass(value.parse().map_err(|_| invalid())?),
            FilterCategory::Weapon => Self::Weapon(value.parse().map_err(|_| invalid())?),
            FilterCategory::Species => Self::Species(value.parse().map_err(|_| invalid())?),
            FilterCategory::Placement => Self::Placement(value.parse().map_err(|_| invalid())?),
            FilterCategory::Condition => Self::Condition(value.parse().map_err(|_| invalid())?),
        })
    }
}

impl FromStr for FilterItem {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, value) = s
            .split_once('=')
            .ok_or_else(|| ParseFilterError::MissingSeparator(s.to_string()))?;
        let category = category
            .trim()
            .parse::<FilterCategory>()
            .map_err(|_| ParseFilterError::UnknownCategory(category.trim().to_string()))?;
        Self::parse_pair(category, value)
    }
}

/// Errors produced when parsing a textual filter item.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseFilterError {
    #[error("expected `category=value`, got '{0}'")]
    MissingSeparator(String),

    #[error("unknown filter category '{0}'")]
    UnknownCategory(String),

    #[error("unknown {category} value '{value}'")]
    UnknownValue {
        category: FilterCategory,
        value: String,
    },
}

/// All checkbox selections.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FilterSelection {
    pub rarity: BTreeSet<Rarity>,
    pub element: BTreeSet<Element>,
    pub base_class: BTreeSet<BaseClass>,
    pub weapon: BTreeSet<WeaponType>,
    pub species: BTreeSet<Species>,
    pub placement: BTreeSet<Placement>,
    pub condition: BTreeSet<ConditionKind>,
}

impl FilterSelection {
    /// True when no checkbox is selected in any category.
    pub fn is_empty(&self) -> bool {
        self.rarity.is_empty()
            && self.element.is_empty()
            && self.base_class.is_empty()
            && self.weapon.is_empty()
            && self.species.is_empty()
            && self.placement.is_empty()
            && self.condition.is_empty()
    }

    pub fn contains(&self, item: FilterItem) -> bool {
        match item {
            FilterItem::Rarity(v) => self.rarity.contains(&v),
            FilterItem::Element(v) => self.element.contains(&v),
            FilterItem::BaseClass(v) => self.base_class.contains(&v),
            FilterItem::Weapon(v) => self.weapon.contains(&v),
            FilterItem::Species(v) => self.species.contains(&v),
            FilterItem::Placement(v) => self.placement.contains(&v),
            FilterItem::Condition(v) => self.condition.contains(&v),
        }
    }

    /// Selects the item if absent, deselects it otherwise.
    pub fn toggle(&mut self, item: FilterItem) {
        fn flip<T: Ord>(set: &mut BTreeSet<T>, value: T) {
            if !set.remove(&value) {
                set.insert(value);
            }
        }
        match item {
            FilterItem::Rarity(v) => flip(&mut self.rarity, v),
            FilterItem::Element(v) => flip(&mut self.element, v),
            FilterItem::BaseClass(v) => flip(&mut self.base_class, v),
            FilterItem::Weapon(v) => flip(&mut self.weapon, v),
            FilterItem::Species(v) => flip(&mut self.species, v),
            FilterItem::Placement(v) => flip(&mut self.placement, v),
            FilterItem::Condition(v) => flip(&mut self.condition, v),
        }
    }

    /// Selects the item (idempotent).
    pub fn select(&mut self, item: FilterItem) {
        if !self.contains(item) {
            self.toggle(item);
        }
    }
}

/// An empty selection admits everything; otherwise the value must be selected.
pub(crate) fn admits<T: Ord>(selected: &BTreeSet<T>, value: &T) -> bool {
    selected.is_empty() || selected.contains(value)
}

/// Like [`admits`] for multi-valued facets: any one selected value suffices.
pub(crate) fn admits_any<'a, T: Ord + 'a>(
    selected: &BTreeSet<T>,
    mut values: impl Iterator<Item = &'a T>,
) -> bool {
    selected.is_empty() || values.any(|v| selected.contains(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_category_value_pairs() {
        assert_eq!(
            "element=fire".parse::<FilterItem>(),
            Ok(FilterItem::Element(Element::Fire))
        );
        assert_eq!(
            "rarity=5".parse::<FilterItem>(),
            Ok(FilterItem::Rarity(Rarity::Legendary))
        );
        assert_eq!(
            "class = mage".parse::<FilterItem>(),
            Ok(FilterItem::BaseClass(BaseClass::Mage))
        );
        assert!(matches!(
            "element".parse::<FilterItem>(),
            Err(ParseFilterError::MissingSeparator(_))
        ));
        assert!(matches!(
            "color=red".parse::<FilterItem>(),
            Err(ParseFilterError::UnknownCategory(_))
        ));
        assert!(matches!(
            "element=lava".parse::<FilterItem>(),
            Err(ParseFilterError::UnknownValue { .. })
        ));
    }

    #[test]
    fn toggle_flips_membership() {
        let mut selection = FilterSelection::default();
        let item = FilterItem::Species(Species::Elf);
        selection.toggle(item);
        assert!(selection.contains(item));
        assert_eq!(item.category(), FilterCategory::Species);
        selection.toggle(item);
        assert!(selection.is_empty());
    }

    #[test]
    fn empty_category_admits_everything() {
        let empty = BTreeSet::new();
        assert!(admits(&empty, &Element::Dark));
        let fire: BTreeSet<_> = [Element::Fire].into();
        assert!(admits(&fire, &Element::Fire));
        assert!(!admits(&fire, &Element::Dark));
        assert!(admits_any(&fire, [Element::Dark, Element::Fire].iter()));
        assert!(!admits_any(&fire, std::iter::empty()));
    }
}
