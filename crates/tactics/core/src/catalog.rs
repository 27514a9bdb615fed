//! One-time catalog construction.
//!
//! Units get ids `0..n` in input order. Formation buffs, in-battle buffs and
//! situations are flattened into their own arrays, each numbered in unit order
//! then declaration order. The catalog is read-only afterwards and hands out
//! rows by reference.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::Arc;

use tracing::debug;

use crate::config::DatabaseConfig;
use crate::entity::{
    FormationBuff, FormationBuffDef, InBattleBuff, InBattleBuffDef, Situation, SituationDef, Unit,
    UnitData,
};
use crate::error::CatalogError;
use crate::table::{InBattleBuffVariants, RowId, TableSource};

/// A buff given inline or by template name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuffRef<D> {
    Inline(D),
    Template(String),
}

/// One unit with its buffs and situations, before flattening.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitEntry {
    pub unit: UnitData,
    pub formation_buffs: Vec<BuffRef<FormationBuffDef>>,
    pub in_battle_buffs: Vec<BuffRef<InBattleBuffDef>>,
    pub situations: Vec<SituationDef>,
}

impl UnitEntry {
    pub fn new(unit: UnitData) -> Self {
        Self {
            unit,
            formation_buffs: Vec::new(),
            in_battle_buffs: Vec::new(),
            situations: Vec::new(),
        }
    }
}

/// Everything a catalog is built from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogInput {
    pub units: Vec<UnitEntry>,
    pub formation_templates: BTreeMap<String, FormationBuffDef>,
    pub in_battle_templates: BTreeMap<String, InBattleBuffDef>,
}

/// The static, once-built list of domain entities.
pub struct Catalog {
    units: Vec<Arc<Unit>>,
    formation_buffs: Vec<FormationBuff>,
    in_battle_buffs: Vec<InBattleBuff>,
    situations: Vec<Situation>,
}

/// Sequential row ids for one table.
struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    fn new() -> Self {
        Self { next: 0 }
    }

    fn allocate(&mut self) -> Result<RowId, CatalogError> {
        let id = RowId(self.next);
        self.next = self
            .next
            .checked_add(1)
            .ok_or(CatalogError::TooManyRows {
                max: DatabaseConfig::MAX_ROWS,
            })?;
        Ok(id)
    }
}

fn resolve<D: Clone>(
    reference: BuffRef<D>,
    templates: &BTreeMap<String, D>,
    unit: &str,
    kind: &'static str,
) -> Result<D, CatalogError> {
    match reference {
        BuffRef::Inline(def) => Ok(def),
        BuffRef::Template(name) => {
            templates
                .get(&name)
                .cloned()
                .ok_or_else(|| CatalogError::UnresolvedBuff {
                    unit: unit.to_string(),
                    kind,
                    template: name,
                })
        }
    }
}

impl Catalog {
    /// Validates and flattens `input`. Fails on the first inconsistency; no
    /// partial catalog is ever returned.
    pub fn build(input: CatalogInput, config: &DatabaseConfig) -> Result<Self, CatalogError> {
        let CatalogInput {
            units: entries,
            formation_templates,
            in_battle_templates,
        } = input;

        let mut names = HashSet::with_capacity(entries.len());
        let mut unit_ids = IdAllocator::new();
        let mut formation_ids = IdAllocator::new();
        let mut in_battle_ids = IdAllocator::new();
        let mut situation_ids = IdAllocator::new();

        let mut units = Vec::with_capacity(entries.len());
        let mut formation_buffs = Vec::new();
        let mut in_battle_buffs = Vec::new();
        let mut situations = Vec::new();

        for entry in entries {
            let UnitEntry {
                unit: data,
                formation_buffs: formation_refs,
                in_battle_buffs: in_battle_refs,
                situations: situation_defs,
            } = entry;
            let name = data.name.clone();

            if !names.insert(name.clone()) {
                return Err(CatalogError::DuplicateUnit(name));
            }
            if data.interval <= 0 {
                return Err(CatalogError::InvalidInterval {
                    unit: name,
                    interval: data.interval,
                });
            }

            let mut conditions = BTreeSet::new();
            for situation in &situation_defs {
                if !conditions.insert(situation.condition) {
                    return Err(CatalogError::DuplicateSituation {
                        unit: name,
                        condition: situation.condition,
                    });
                }
            }

            let unit = Arc::new(Unit::new(unit_ids.allocate()?, data, conditions, *config));

            for reference in formation_refs {
                let def = resolve(reference, &formation_templates, &name, "formation")?;
                formation_buffs.push(FormationBuff::new(
                    formation_ids.allocate()?,
                    Arc::clone(&unit),
                    def,
                ));
            }
            for reference in in_battle_refs {
                let def = resolve(reference, &in_battle_templates, &name, "in-battle")?;
                in_battle_buffs.push(InBattleBuff::new(
                    in_battle_ids.allocate()?,
                    Arc::clone(&unit),
                    def,
                ));
            }
            for def in situation_defs {
                situations.push(Situation::new(situation_ids.allocate()?, Arc::clone(&unit), def));
            }

            units.push(unit);
        }

        debug!(
            units = units.len(),
            formation_buffs = formation_buffs.len(),
            in_battle_buffs = in_battle_buffs.len(),
            situations = situations.len(),
            "catalog built"
        );

        Ok(Self {
            units,
            formation_buffs,
            in_battle_buffs,
            situations,
        })
    }

    pub fn units(&self) -> &[Arc<Unit>] {
        &self.units
    }

    pub fn formation_buffs(&self) -> &[FormationBuff] {
        &self.formation_buffs
    }

    pub fn in_battle_buffs(&self) -> &[InBattleBuff] {
        &self.in_battle_buffs
    }

    pub fn situations(&self) -> &[Situation] {
        &self.situations
    }

    pub fn unit_by_name(&self, name: &str) -> Option<&Arc<Unit>> {
        self.units.iter().find(|unit| unit.name() == name)
    }

    pub fn unit_table(&self) -> TableSource<'_, Arc<Unit>> {
        TableSource::with_all_columns(&self.units)
    }

    pub fn formation_table(&self) -> TableSource<'_, FormationBuff> {
        TableSource::with_all_columns(&self.formation_buffs)
    }

    pub fn in_battle_variants(&self) -> InBattleBuffVariants<'_> {
        InBattleBuffVariants::new(&self.in_battle_buffs)
    }

    pub fn situation_table(&self) -> TableSource<'_, Situation> {
        TableSource::with_all_columns(&self.situations)
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("units", &self.units.len())
            .field("formation_buffs", &self.formation_buffs.len())
            .field("in_battle_buffs", &self.in_battle_buffs.len())
            .field("situations", &self.situations.len())
            .finish()
    }
}
