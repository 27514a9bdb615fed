//! Buff targets and their specificity ordering.
//!
//! Sorting a target column puts the broadest buffs first: `All` before any
//! element, elements before base classes, base classes before species, and
//! self-only buffs last.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::kinds::{BaseClass, Element, Species};

/// Who a buff applies to.
///
/// Textual form: `all`, `self`, `element:fire`, `class:soldier`, `species:elf`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum BuffTarget {
    All,
    Element(Element),
    BaseClass(BaseClass),
    Species(Species),
    /// The buff owner only.
    Own,
}

impl BuffTarget {
    const ELEMENT_WEIGHT: f64 = 1000.0;
    const BASE_CLASS_WEIGHT: f64 = 800.0;
    const SPECIES_WEIGHT: f64 = 400.0;

    /// Breadth of the target; earlier enum variants weigh slightly more.
    pub fn weight(self) -> f64 {
        match self {
            Self::All => f64::INFINITY,
            Self::Element(e) => Self::ELEMENT_WEIGHT - f64::from(e as u8),
            Self::BaseClass(c) => Self::BASE_CLASS_WEIGHT - f64::from(c as u8),
            Self::Species(s) => Self::SPECIES_WEIGHT - f64::from(s as u8),
            Self::Own => 0.0,
        }
    }
}

/// Ascending sort key of a target set: the negated sum of weights.
pub fn target_sort_key(targets: &BTreeSet<BuffTarget>) -> f64 {
    -targets.iter().map(|target| target.weight()).sum::<f64>()
}

impl fmt::Display for BuffTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Element(e) => write!(f, "element:{e}"),
            Self::BaseClass(c) => write!(f, "class:{c}"),
            Self::Species(s) => write!(f, "species:{s}"),
            Self::Own => f.write_str("self"),
        }
    }
}

/// Error returned for malformed target strings.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid buff target '{0}' (expected all, self, element:<e>, class:<c> or species:<s>)")]
pub struct ParseTargetError(pub String);

impl FromStr for BuffTarget {
    type Err = ParseTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseTargetError(s.to_string());
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        if trimmed.eq_ignore_ascii_case("self") {
            return Ok(Self::Own);
        }
        let (kind, value) = trimmed.split_once(':').ok_or_else(invalid)?;
        let value = value.trim();
        match kind.trim().to_ascii_lowercase().as_str() {
            "element" => value.parse().map(Self::Element).map_err(|_| invalid()),
            "class" => value.parse().map(Self::BaseClass).map_err(|_| invalid()),
            "species" => value.parse().map(Self::Species).map_err(|_| invalid()),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for BuffTarget {
    type Error = ParseTargetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BuffTarget> for String {
    fn from(target: BuffTarget) -> Self {
        target.to_string()
    }
}
