//! Content factory for building a catalog from data files.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tactics_core::{BuffRef, Catalog, CatalogInput, DatabaseConfig, Setting, UnitEntry};
use tracing::{info, warn};

use crate::loaders::{
    BuffTemplateLoader, BuffTemplates, ConfigLoader, LoadResult, SettingLoader, UnitLoader,
};

/// Content factory that loads all unit content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml    (optional)
/// ├── setting.toml   (optional)
/// ├── units.ron
/// └── buffs.ron      (optional)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const SETTING_FILE: &'static str = "setting.toml";
    pub const UNITS_FILE: &'static str = "units.ron";
    pub const BUFFS_FILE: &'static str = "buffs.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load database configuration from `config.toml`, or defaults when absent.
    pub fn load_config(&self) -> LoadResult<DatabaseConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            return Ok(DatabaseConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the default setting from `setting.toml`, or defaults when absent.
    pub fn load_setting(&self) -> LoadResult<Setting> {
        let path = self.data_dir.join(Self::SETTING_FILE);
        if !path.exists() {
            return Ok(Setting::default());
        }
        SettingLoader::load(&path)
    }

    /// Load units from `units.ron`.
    pub fn load_units(&self) -> LoadResult<Vec<UnitEntry>> {
        let path = self.data_dir.join(Self::UNITS_FILE);
        UnitLoader::load(&path)
    }

    /// Load buff templates from `buffs.ron`, or none when absent.
    pub fn load_templates(&self) -> LoadResult<BuffTemplates> {
        let path = self.data_dir.join(Self::BUFFS_FILE);
        if !path.exists() {
            return Ok(BuffTemplates::default());
        }
        BuffTemplateLoader::load(&path)
    }

    /// Load everything a catalog is built from.
    pub fn load_input(&self) -> LoadResult<CatalogInput> {
        let units = self.load_units()?;
        let templates = self.load_templates()?;
        warn_unused_templates(&units, &templates);

        info!(
            units = units.len(),
            templates = templates.len(),
            dir = %self.data_dir.display(),
            "loaded unit content"
        );

        Ok(CatalogInput {
            units,
            formation_templates: templates.formation,
            in_battle_templates: templates.in_battle,
        })
    }

    /// Load and build the catalog.
    pub fn build_catalog(&self) -> LoadResult<Catalog> {
        let config = self.load_config()?;
        let input = self.load_input()?;
        Catalog::build(input, &config).context("Failed to build catalog")
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

fn warn_unused_templates(units: &[UnitEntry], templates: &BuffTemplates) {
    fn template_name<D>(reference: &BuffRef<D>) -> Option<&str> {
        match reference {
            BuffRef::Template(name) => Some(name.as_str()),
            BuffRef::Inline(_) => None,
        }
    }

    let formation: BTreeSet<&str> = units
        .iter()
        .flat_map(|unit| unit.formation_buffs.iter().filter_map(template_name))
        .collect();
    let in_battle: BTreeSet<&str> = units
        .iter()
        .flat_map(|unit| unit.in_battle_buffs.iter().filter_map(template_name))
        .collect();

    for name in templates.formation.keys() {
        if !formation.contains(name.as_str()) {
            warn!(template = %name, "formation buff template is never used");
        }
    }
    for name in templates.in_battle.keys() {
        if !in_battle.contains(name.as_str()) {
            warn!(template = %name, "in-battle buff template is never used");
        }
    }
}
