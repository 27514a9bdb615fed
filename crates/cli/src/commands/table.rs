//! Print one table view.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use tactics_content::{ContentFactory, SettingLoader};
use tactics_core::{
    BuffCategory, FilterItem, Setting, SettingPatch, StatType, TableRow, TableSource,
};
use tracing::debug;

use crate::config::CliConfig;
use crate::render::render;

/// Print a filtered and sorted table
#[derive(Parser)]
pub struct Table {
    /// Which table to show
    #[arg(short, long, value_enum, default_value = "units")]
    view: View,

    /// In-battle buff category view (e.g. damage, defense, speed)
    #[arg(short, long, value_name = "CATEGORY")]
    category: Option<BuffCategory>,

    /// Column to sort by (see `tactics columns`)
    #[arg(short, long, value_name = "COLUMN")]
    sort: Option<StatType>,

    /// Reverse the column's natural sort direction
    #[arg(short, long)]
    reverse: bool,

    /// Free-text search over unit names and class names
    #[arg(long, value_name = "TEXT")]
    search: Option<String>,

    /// Checkbox filter as `category=value`, repeatable (e.g. `rarity=5`)
    #[arg(short, long = "filter", value_name = "KEY=VALUE")]
    filters: Vec<FilterItem>,

    /// Apply potential bonuses and potential-gated buffs
    #[arg(long)]
    potential: bool,

    /// Apply exclusive-weapon bonuses and weapon-gated buffs
    #[arg(long)]
    weapon: bool,

    /// Setting file (defaults to `setting.toml` in the data directory)
    #[arg(long, value_name = "FILE")]
    setting: Option<PathBuf>,

    /// Data directory (defaults to $TACTICS_DATA_DIR or `data`)
    #[arg(short, long, value_name = "DIR")]
    data: Option<PathBuf>,

    /// Print at most this many rows
    #[arg(short, long, value_name = "N")]
    limit: Option<usize>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum View {
    /// Units with derived stats
    Units,
    /// Formation buffs
    Formation,
    /// In-battle buffs
    InBattle,
    /// Situational bonuses
    Situation,
}

impl Table {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let data_dir = self.data.clone().unwrap_or_else(|| config.data_dir.clone());
        let factory = ContentFactory::new(&data_dir);

        let catalog = factory
            .build_catalog()
            .with_context(|| format!("Failed to load data from {}", data_dir.display()))?;
        let setting = self.setting(&factory)?;
        debug!(?setting, "effective setting");

        if self.category.is_some() && !matches!(self.view, View::InBattle) {
            anyhow::bail!("--category only applies to the in-battle view");
        }

        match self.view {
            View::Units => self.print(&catalog.unit_table(), &setting, config),
            View::Formation => self.print(&catalog.formation_table(), &setting, config),
            View::InBattle => {
                let variants = catalog.in_battle_variants();
                let source = match self.category {
                    Some(category) => variants.category(category),
                    None => variants.full(),
                };
                self.print(&source, &setting, config)
            }
            View::Situation => self.print(&catalog.situation_table(), &setting, config),
        }
    }

    /// Base setting from file, then command-line overrides as patches.
    fn setting(&self, factory: &ContentFactory) -> Result<Setting> {
        let base = match &self.setting {
            Some(path) => SettingLoader::load(path)?,
            None => factory.load_setting()?,
        };

        let mut patches = Vec::new();
        if self.potential {
            patches.push(SettingPatch::SetPotential(true));
        }
        if self.weapon {
            patches.push(SettingPatch::SetWeapon(true));
        }
        if let Some(text) = &self.search {
            patches.push(SettingPatch::SetSearch(text.clone()));
        }
        patches.extend(self.filters.iter().copied().map(SettingPatch::SelectFilter));
        Ok(base.apply_all(patches))
    }

    fn print<R: TableRow>(
        &self,
        source: &TableSource<'_, R>,
        setting: &Setting,
        config: &CliConfig,
    ) -> Result<()> {
        let mut rows = source.filter(setting);
        if let Some(stat_type) = self.sort {
            let column = source.column(stat_type).with_context(|| {
                format!("This view has no '{}' column", stat_type.as_ref())
            })?;
            if !stat_type.style().sortable {
                eprintln!(
                    "{}",
                    style(format!("'{}' is not sortable; order unchanged", stat_type)).yellow()
                );
            }
            rows = source.sort(setting, rows, column, self.reverse);
        }

        let total = rows.len();
        if let Some(limit) = self.limit {
            rows.truncate(limit);
        }

        for line in render(source, &rows, setting, config.plain) {
            println!("{line}");
        }
        eprintln!(
            "{}",
            style(format!("{} of {} rows", rows.len(), total)).dim()
        );
        Ok(())
    }
}
