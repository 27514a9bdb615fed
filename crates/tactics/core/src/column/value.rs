//! Display and sort projections shared by every column value type.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use crate::entity::{
    BaseClass, ConditionKind, Element, Placement, Rarity, Requirement, SkillType, Species,
    StatusEffect, WeaponType, Weather,
};

/// Semantic color tag. Absence means neutral.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatColor {
    Negative,
    Positive,
}

/// What a cell shows.
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayItem {
    Text(String),
    Number(f64),
    /// Presence marker for boolean columns.
    Check,
    List(Vec<String>),
}

impl DisplayItem {
    pub const CHECK_MARK: &'static str = "✓";
    pub const LIST_SEPARATOR: &'static str = ", ";
}

impl fmt::Display for DisplayItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(n) if n.fract() == 0.0 => write!(f, "{n}"),
            Self::Number(n) => write!(f, "{n:.1}"),
            Self::Check => f.write_str(Self::CHECK_MARK),
            Self::List(items) => f.write_str(&items.join(Self::LIST_SEPARATOR)),
        }
    }
}

/// Sort key of a defined value.
///
/// Numbers compare with `f64::total_cmp` and order before text, so a column
/// mixing both still has a total order.
#[derive(Clone, Debug)]
pub enum SortKey {
    Number(f64),
    Text(String),
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

/// Default projections for a value computed by a column.
///
/// A column may override any of these with its own projection.
pub trait StatValue: Send + Sync + 'static {
    fn display_item(&self) -> Option<DisplayItem>;

    fn display_text(&self) -> Option<String> {
        self.display_item().map(|item| item.to_string())
    }

    fn sort_key(&self) -> Option<SortKey>;
}

macro_rules! impl_number_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl StatValue for $ty {
                fn display_item(&self) -> Option<DisplayItem> {
                    Some(DisplayItem::Number(f64::from(*self)))
                }

                fn sort_key(&self) -> Option<SortKey> {
                    Some(SortKey::Number(f64::from(*self)))
                }
            }
        )*
    };
}

impl_number_value!(i32, u32, f64);

impl StatValue for bool {
    fn display_item(&self) -> Option<DisplayItem> {
        self.then_some(DisplayItem::Check)
    }

    fn sort_key(&self) -> Option<SortKey> {
        Some(SortKey::Number(if *self { 1.0 } else { 0.0 }))
    }
}

impl StatValue for String {
    fn display_item(&self) -> Option<DisplayItem> {
        Some(DisplayItem::Text(self.clone()))
    }

    fn sort_key(&self) -> Option<SortKey> {
        Some(SortKey::Text(self.clone()))
    }
}

fn list_item<'a, T: fmt::Display + 'a>(values: impl Iterator<Item = &'a T>) -> Option<DisplayItem> {
    let items: Vec<String> = values.map(ToString::to_string).collect();
    (!items.is_empty()).then_some(DisplayItem::List(items))
}

impl<T: fmt::Display + Send + Sync + 'static> StatValue for Vec<T> {
    fn display_item(&self) -> Option<DisplayItem> {
        list_item(self.iter())
    }

    fn sort_key(&self) -> Option<SortKey> {
        self.display_text().map(SortKey::Text)
    }
}

impl<T: fmt::Display + Send + Sync + 'static> StatValue for BTreeSet<T> {
    fn display_item(&self) -> Option<DisplayItem> {
        list_item(self.iter())
    }

    fn sort_key(&self) -> Option<SortKey> {
        self.display_text().map(SortKey::Text)
    }
}

/// Enums show their label and sort by declaration order.
macro_rules! impl_enum_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl StatValue for $ty {
                fn display_item(&self) -> Option<DisplayItem> {
                    Some(DisplayItem::Text(self.to_string()))
                }

                fn sort_key(&self) -> Option<SortKey> {
                    Some(SortKey::Number(f64::from(*self as u8)))
                }
            }
        )*
    };
}

impl_enum_value!(
    Rarity,
    Element,
    BaseClass,
    WeaponType,
    Species,
    Placement,
    ConditionKind,
    StatusEffect,
    Weather,
    SkillType,
    Requirement,
);
