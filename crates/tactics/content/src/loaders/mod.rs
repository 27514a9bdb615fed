//! Content loaders for reading unit data from files.
//!
//! Each loader reads one file format and returns `tactics-core` types;
//! [`ContentFactory`] ties them to a data directory.

pub mod buffs;
pub mod config;
pub mod factory;
pub mod setting;
pub mod units;

pub use buffs::{BuffTemplateLoader, BuffTemplates};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use setting::SettingLoader;
pub use units::UnitLoader;

use std::path::Path;
use std::str::FromStr;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Parses an enumerated key such as `"fire"` or `"class:soldier"`.
pub(crate) fn parse_key<T>(value: &str, what: &str) -> LoadResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("Unknown {} '{}': {}", what, value, e))
}

/// Parses every key in `values`.
pub(crate) fn parse_keys<T, C>(values: &[String], what: &str) -> LoadResult<C>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    C: FromIterator<T>,
{
    values.iter().map(|value| parse_key(value, what)).collect()
}
