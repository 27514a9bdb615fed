//! Database configuration loader.

use std::path::Path;

use tactics_core::DatabaseConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for database configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`DatabaseConfig::default`].
    pub fn load(path: &Path) -> LoadResult<DatabaseConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<DatabaseConfig> {
        let config: DatabaseConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.stat_cap <= 0 {
            anyhow::bail!("stat_cap must be positive, got {}", config.stat_cap);
        }
        if config.frames_per_second <= 0 {
            anyhow::bail!(
                "frames_per_second must be positive, got {}",
                config.frames_per_second
            );
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let config = ConfigLoader::parse("stat_cap = 9999").unwrap();
        assert_eq!(config.stat_cap, 9999);
        assert_eq!(
            config.frames_per_second,
            DatabaseConfig::DEFAULT_FRAMES_PER_SECOND
        );
        assert_eq!(ConfigLoader::parse("").unwrap(), DatabaseConfig::default());
    }

    #[test]
    fn rejects_non_positive_values() {
        assert!(ConfigLoader::parse("frames_per_second = 0").is_err());
        assert!(ConfigLoader::parse("stat_cap = -1").is_err());
    }
}
