//! Error infrastructure for catalog construction.
//!
//! Derivation itself never fails: a column that does not apply to a row under
//! the current [`Setting`](crate::Setting) yields `None`. The only failures in
//! this crate are data-integrity errors detected while building a
//! [`Catalog`](crate::Catalog), and those are fatal. No partial catalogs.

use crate::entity::ConditionKind;

/// Severity level of an error, used for categorization by callers.
///
/// - **Validation**: static data is malformed and must be fixed at the source
/// - **Fatal**: the engine cannot produce a consistent catalog at all
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid static data (bad numbers, duplicated names).
    Validation,

    /// Broken references between data sets.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait for errors raised by `tactics-core`.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by where the fix belongs, not by impact
pub trait DatabaseError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// Errors detected while flattening unit data into a catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// A unit refers to a buff template that was never declared.
    #[error("unit '{unit}' references unknown {kind} buff template '{template}'")]
    UnresolvedBuff {
        unit: String,
        kind: &'static str,
        template: String,
    },

    /// Two units share the same name, which breaks search and identity.
    #[error("duplicate unit name '{0}'")]
    DuplicateUnit(String),

    /// A unit's attack interval must be positive for DPS derivation.
    #[error("unit '{unit}' has non-positive attack interval {interval}")]
    InvalidInterval { unit: String, interval: i32 },

    /// A unit declares the same situational condition twice.
    #[error("unit '{unit}' declares situation {condition} more than once")]
    DuplicateSituation {
        unit: String,
        condition: ConditionKind,
    },

    /// The catalog would exceed the row id space.
    #[error("catalog exceeds {max} rows")]
    TooManyRows { max: usize },
}

impl DatabaseError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnresolvedBuff { .. } | Self::TooManyRows { .. } => ErrorSeverity::Fatal,
            Self::DuplicateUnit(_)
            | Self::InvalidInterval { .. }
            | Self::DuplicateSituation { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnresolvedBuff { .. } => "CATALOG_UNRESOLVED_BUFF",
            Self::DuplicateUnit(_) => "CATALOG_DUPLICATE_UNIT",
            Self::InvalidInterval { .. } => "CATALOG_INVALID_INTERVAL",
            Self::DuplicateSituation { .. } => "CATALOG_DUPLICATE_SITUATION",
            Self::TooManyRows { .. } => "CATALOG_TOO_MANY_ROWS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_reference_is_fatal() {
        let err = CatalogError::UnresolvedBuff {
            unit: "Aria".into(),
            kind: "in-battle",
            template: "war_cry".into(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
        assert_eq!(err.error_code(), "CATALOG_UNRESOLVED_BUFF");
        assert_eq!(
            err.to_string(),
            "unit 'Aria' references unknown in-battle buff template 'war_cry'"
        );
    }

    #[test]
    fn data_errors_are_validation() {
        let err = CatalogError::InvalidInterval {
            unit: "Bram".into(),
            interval: 0,
        };
        assert_eq!(err.severity().as_str(), "validation");
    }
}
