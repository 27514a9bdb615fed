//! Units: identity, base stats and the entity filter every row delegates to.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::kinds::{BaseClass, ConditionKind, Element, Placement, Rarity, Species, WeaponType};
use crate::column::{Stat, StatRoot, StatType};
use crate::config::DatabaseConfig;
use crate::setting::filter::{admits, admits_any};
use crate::setting::{BaseStat, FilterSelection, SearchQuery, Setting, normalize};
use crate::stats::{UnitBaseStats, UnitStats};
use crate::table::{Column, RowId, StatColumns, TableRow};

/// Static description of a unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitData {
    pub name: String,
    /// Free-text class name, e.g. "Flame Lancer".
    pub class_name: String,
    pub rarity: Rarity,
    pub element: Element,
    pub base_class: BaseClass,
    pub weapon: WeaponType,
    pub species: BTreeSet<Species>,
    pub placement: Placement,
    pub base: UnitBaseStats,
    /// Frames between attacks.
    pub interval: i32,
    pub range: i32,
}

/// Columns of the unit table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::EnumCount)]
pub enum UnitColumn {
    Name,
    Rarity,
    Element,
    BaseClass,
    ClassName,
    Weapon,
    Species,
    Placement,
    Cost,
    Hp,
    Attack,
    Defense,
    Resist,
    Interval,
    Range,
    Dps,
}

impl Column for UnitColumn {
    fn stat_type(self) -> StatType {
        match self {
            Self::Name => StatType::Name,
            Self::Rarity => StatType::Rarity,
            Self::Element => StatType::Element,
            Self::BaseClass => StatType::BaseClass,
            Self::ClassName => StatType::ClassName,
            Self::Weapon => StatType::Weapon,
            Self::Species => StatType::Species,
            Self::Placement => StatType::Placement,
            Self::Cost => StatType::Cost,
            Self::Hp => StatType::Hp,
            Self::Attack => StatType::Attack,
            Self::Defense => StatType::Defense,
            Self::Resist => StatType::Resist,
            Self::Interval => StatType::Interval,
            Self::Range => StatType::Range,
            Self::Dps => StatType::Dps,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// A catalog unit.
pub struct Unit {
    id: RowId,
    data: Arc<UnitData>,
    config: DatabaseConfig,
    /// Conditions of the unit's situations, for the condition filter.
    conditions: BTreeSet<ConditionKind>,
    /// Normalized name and class name.
    search_fields: [String; 2],
    columns: StatColumns<UnitColumn>,
}

impl Unit {
    pub fn new(
        id: RowId,
        data: UnitData,
        conditions: BTreeSet<ConditionKind>,
        config: DatabaseConfig,
    ) -> Self {
        let data = Arc::new(data);
        let search_fields = [normalize(&data.name), normalize(&data.class_name)];
        let columns = StatColumns::build(|column| unit_stat(&data, config, column));
        Self {
            id,
            data,
            config,
            conditions,
            search_fields,
            columns,
        }
    }

    pub fn data(&self) -> &UnitData {
        &self.data
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn conditions(&self) -> &BTreeSet<ConditionKind> {
        &self.conditions
    }

    /// Final stats under `setting`.
    pub fn stats(&self, setting: &Setting) -> UnitStats {
        UnitStats::derive(setting, &self.data.base, &self.config)
    }

    /// A fresh column of this unit, for rows that show unit identity.
    pub fn column_stat(&self, column: UnitColumn) -> Box<dyn Stat> {
        unit_stat(&self.data, self.config, column)
    }

    /// Search and checkbox filters against a pre-parsed query.
    pub fn matches_filter(&self, query: &SearchQuery, filter: &FilterSelection) -> bool {
        let data = &*self.data;
        query.matches(self.search_fields.iter().map(String::as_str))
            && admits(&filter.rarity, &data.rarity)
            && admits(&filter.element, &data.element)
            && admits(&filter.base_class, &data.base_class)
            && admits(&filter.weapon, &data.weapon)
            && admits_any(&filter.species, data.species.iter())
            && admits(&filter.placement, &data.placement)
            && admits_any(&filter.condition, self.conditions.iter())
    }

    /// Keeps the units that match `setting`, in input order.
    pub fn filter<'a>(setting: &Setting, units: &'a [Arc<Unit>]) -> Vec<&'a Arc<Unit>> {
        units.iter().filter(|unit| unit.matches(setting)).collect()
    }
}

impl TableRow for Unit {
    type Column = UnitColumn;

    fn id(&self) -> RowId {
        self.id
    }

    fn stat(&self, column: UnitColumn) -> &dyn Stat {
        self.columns.get(column)
    }

    fn matches(&self, setting: &Setting) -> bool {
        self.matches_filter(&setting.search_query(), &setting.filter)
    }
}

impl std::fmt::Debug for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Unit")
            .field("id", &self.id)
            .field("name", &self.data.name)
            .finish_non_exhaustive()
    }
}

/// Attack damage per second of real time.
fn dps(attack: i32, interval: i32, frames_per_second: i32) -> Option<i32> {
    if interval <= 0 {
        return None;
    }
    let dps = i64::from(attack) * i64::from(frames_per_second) / i64::from(interval);
    i32::try_from(dps).ok()
}

fn unit_stat(data: &Arc<UnitData>, config: DatabaseConfig, column: UnitColumn) -> Box<dyn Stat> {
    let stat_type = column.stat_type();
    let derived = |stat: BaseStat| {
        let data = Arc::clone(data);
        StatRoot::new(stat_type, move |setting: &Setting| {
            Some(UnitStats::derive(setting, &data.base, &config).get(stat))
        })
    };
    match column {
        UnitColumn::Name => Box::new(StatRoot::constant(stat_type, data.name.clone())),
        UnitColumn::Rarity => Box::new(StatRoot::constant(stat_type, data.rarity)),
        UnitColumn::Element => Box::new(StatRoot::constant(stat_type, data.element)),
        UnitColumn::BaseClass => Box::new(StatRoot::constant(stat_type, data.base_class)),
        UnitColumn::ClassName => Box::new(StatRoot::constant(stat_type, data.class_name.clone())),
        UnitColumn::Weapon => Box::new(StatRoot::constant(stat_type, data.weapon)),
        UnitColumn::Species => Box::new(StatRoot::constant(stat_type, data.species.clone())),
        UnitColumn::Placement => Box::new(StatRoot::constant(stat_type, data.placement)),
        UnitColumn::Cost => {
            let data = Arc::clone(data);
            Box::new(
                StatRoot::new(stat_type, move |setting: &Setting| {
                    Some(UnitStats::derive(setting, &data.base, &config).cost)
                })
                .reversed(),
            )
        }
        UnitColumn::Hp => Box::new(derived(BaseStat::Hp)),
        UnitColumn::Attack => Box::new(derived(BaseStat::Attack)),
        UnitColumn::Defense => Box::new(derived(BaseStat::Defense)),
        UnitColumn::Resist => Box::new(derived(BaseStat::Resist)),
        UnitColumn::Interval => Box::new(StatRoot::constant(stat_type, data.interval).reversed()),
        UnitColumn::Range => Box::new(StatRoot::constant(stat_type, data.range)),
        UnitColumn::Dps => {
            let data = Arc::clone(data);
            Box::new(StatRoot::new(stat_type, move |setting: &Setting| {
                let attack = UnitStats::derive(setting, &data.base, &config).attack;
                dps(attack, data.interval, config.frames_per_second)
            }))
        }
    }
}
