//! User setting loader.

use std::path::Path;

use strum::IntoEnumIterator;
use tactics_core::{BaseStat, DatabaseConfig, Setting};
use tracing::warn;

use crate::loaders::{LoadResult, read_file};

/// Loader for a [`Setting`] snapshot from TOML files.
pub struct SettingLoader;

impl SettingLoader {
    /// Load a setting from a TOML file. Omitted keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<Setting> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load setting from {}: {}", path.display(), e))
    }

    /// Parse a setting from TOML.
    ///
    /// Battle multipliers must be non-negative, matching what
    /// [`Setting::apply`] accepts. Other values are unbounded; derived stats
    /// clamp them.
    pub fn parse(content: &str) -> LoadResult<Setting> {
        let setting: Setting = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse setting TOML: {}", e))?;

        for stat in BaseStat::iter() {
            let multiplier = setting.battle_multiplier.get(stat);
            if multiplier < 0 {
                anyhow::bail!(
                    "battle_multiplier.{} must be non-negative, got {}",
                    stat,
                    multiplier
                );
            }
        }

        if setting.subskills.len() > DatabaseConfig::MAX_SUBSKILLS {
            warn!(
                equipped = setting.subskills.len(),
                max = DatabaseConfig::MAX_SUBSKILLS,
                "extra subskills are ignored"
            );
        }
        Ok(setting)
    }
}
