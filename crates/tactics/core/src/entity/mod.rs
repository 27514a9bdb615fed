//! Domain entities and the table rows built from them.
//!
//! Every row type owns its columns as type-erased [`Stat`](crate::column::Stat)s
//! built once at catalog construction. Buff and situation rows hold their
//! owning [`Unit`] and delegate identity columns and filtering to it.

pub mod formation;
pub mod in_battle;
pub mod kinds;
pub mod situation;
pub mod target;
pub mod unit;

pub use formation::{
    FormationBuff, FormationBuffColumn, FormationBuffDef, FormationBuffValue, FormationEffect,
    calculate_formation_buff,
};
pub use in_battle::{
    BuffDuration, InBattleBuff, InBattleBuffColumn, InBattleBuffDef, InBattleBuffValue,
    InBattleEffect, calculate_in_battle_buff,
};
pub use kinds::{
    BaseClass, ConditionKind, Element, Placement, Rarity, Requirement, SkillType, Species,
    StatusEffect, WeaponType, Weather,
};
pub use situation::{Situation, SituationColumn, SituationDef, SituationEffect, calculate_situation};
pub use target::{BuffTarget, ParseTargetError, target_sort_key};
pub use unit::{Unit, UnitColumn, UnitData};

#[cfg(test)]
pub(crate) mod fixtures {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use super::*;
    use crate::config::DatabaseConfig;
    use crate::setting::BaseStatTable;
    use crate::stats::UnitBaseStats;
    use crate::table::RowId;

    pub fn unit_data(name: &str) -> UnitData {
        UnitData {
            name: name.to_string(),
            class_name: "Flame Lancer".to_string(),
            rarity: Rarity::Epic,
            element: Element::Fire,
            base_class: BaseClass::Soldier,
            weapon: WeaponType::Spear,
            species: [Species::Human].into(),
            placement: Placement::Melee,
            base: UnitBaseStats {
                stats: BaseStatTable {
                    hp: 1200,
                    attack: 250,
                    defense: 90,
                    resist: 15,
                },
                cost: 12,
                ..UnitBaseStats::default()
            },
            interval: 40,
            range: 1,
        }
    }

    pub fn unit(id: u32, name: &str) -> Arc<Unit> {
        Arc::new(Unit::new(
            RowId(id),
            unit_data(name),
            BTreeSet::new(),
            DatabaseConfig::default(),
        ))
    }
}
