//! Unit catalog loader.
//!
//! Loads units, with their inline or template-referenced buffs, from RON files.

use std::path::Path;

use serde::Deserialize;
use tactics_core::{UnitBaseStats, UnitData, UnitEntry};
use tracing::warn;

use crate::loaders::buffs::{BuffRefSpec, FormationBuffSpec, InBattleBuffSpec, SituationSpec};
use crate::loaders::{LoadResult, parse_key, parse_keys, read_file};

/// One unit record as written in the data file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitSpec {
    pub name: String,
    pub class_name: String,
    pub rarity: String,
    pub element: String,
    pub base_class: String,
    pub weapon: String,
    pub species: Vec<String>,
    pub placement: String,
    pub base: UnitBaseStats,
    pub interval: i32,
    pub range: i32,
    #[serde(default)]
    pub formation_buffs: Vec<BuffRefSpec<FormationBuffSpec>>,
    #[serde(default)]
    pub in_battle_buffs: Vec<BuffRefSpec<InBattleBuffSpec>>,
    #[serde(default)]
    pub situations: Vec<SituationSpec>,
}

impl UnitSpec {
    pub fn into_entry(self) -> LoadResult<UnitEntry> {
        if self.species.is_empty() {
            warn!(unit = %self.name, "unit has no species tag");
        }
        let data = UnitData {
            rarity: parse_key(&self.rarity, "rarity")?,
            element: parse_key(&self.element, "element")?,
            base_class: parse_key(&self.base_class, "base class")?,
            weapon: parse_key(&self.weapon, "weapon")?,
            species: parse_keys(&self.species, "species")?,
            placement: parse_key(&self.placement, "placement")?,
            name: self.name,
            class_name: self.class_name,
            base: self.base,
            interval: self.interval,
            range: self.range,
        };

        let mut entry = UnitEntry::new(data);
        for buff in self.formation_buffs {
            entry
                .formation_buffs
                .push(buff.resolve(FormationBuffSpec::into_def)?);
        }
        for buff in self.in_battle_buffs {
            entry
                .in_battle_buffs
                .push(buff.resolve(InBattleBuffSpec::into_def)?);
        }
        for situation in self.situations {
            entry.situations.push(situation.into_def()?);
        }
        Ok(entry)
    }
}

/// Unit catalog structure for RON files.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitCatalog {
    pub units: Vec<UnitSpec>,
}

/// Loader for unit catalogs from RON files.
pub struct UnitLoader;

impl UnitLoader {
    /// Load units from a RON file, in file order.
    pub fn load(path: &Path) -> LoadResult<Vec<UnitEntry>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load units from {}: {}", path.display(), e))
    }

    /// Parse units from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<UnitEntry>> {
        let catalog: UnitCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse unit catalog RON: {}", e))?;

        catalog
            .units
            .into_iter()
            .map(|spec| {
                let name = spec.name.clone();
                spec.into_entry()
                    .map_err(|e| anyhow::anyhow!("Invalid unit '{}': {}", name, e))
            })
            .collect()
    }
}
