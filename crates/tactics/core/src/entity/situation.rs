//! Situations: conditional modifiers of a unit's own kit (vs flying, while
//! blocking, at low HP, ...).

use std::collections::BTreeSet;
use std::sync::Arc;

use super::formation::requirements_met;
use super::kinds::{ConditionKind, Requirement};
use super::unit::{Unit, UnitColumn};
use crate::column::{Stat, StatRoot, StatType, format};
use crate::setting::Setting;
use crate::table::{Column, RowId, StatColumns, TableRow};

/// Multipliers applied while the condition holds (`100` neutral).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SituationEffect {
    pub attack: Option<i32>,
    pub damage: Option<i32>,
    pub defense: Option<i32>,
}

impl SituationEffect {
    /// Field-by-field override: every field set in `over` wins.
    pub fn merge(self, over: &Self) -> Self {
        Self {
            attack: over.attack.or(self.attack),
            damage: over.damage.or(self.damage),
            defense: over.defense.or(self.defense),
        }
    }
}

/// Static definition of a situation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SituationDef {
    pub condition: ConditionKind,
    pub effect: SituationEffect,
    pub requirements: BTreeSet<Requirement>,
    pub potential_effect: Option<SituationEffect>,
    pub supplement: Option<String>,
}

/// Resolves a situation's effect, or `None` while a requirement is unmet.
pub fn calculate_situation(setting: &Setting, def: &SituationDef) -> Option<SituationEffect> {
    if !requirements_met(&def.requirements, setting) {
        return None;
    }
    Some(match (&def.potential_effect, setting.potential) {
        (Some(potential), true) => def.effect.merge(potential),
        _ => def.effect,
    })
}

/// Columns of the situation table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum SituationColumn {
    Unit,
    Rarity,
    Element,
    Condition,
    Attack,
    Damage,
    Defense,
    Requirement,
    Supplement,
}

impl Column for SituationColumn {
    fn stat_type(self) -> StatType {
        match self {
            Self::Unit => StatType::Name,
            Self::Rarity => StatType::Rarity,
            Self::Element => StatType::Element,
            Self::Condition => StatType::Condition,
            Self::Attack => StatType::SituationAttack,
            Self::Damage => StatType::SituationDamage,
            Self::Defense => StatType::SituationDefense,
            Self::Requirement => StatType::Requirement,
            Self::Supplement => StatType::Supplement,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// One situation of one unit.
pub struct Situation {
    id: RowId,
    unit: Arc<Unit>,
    def: Arc<SituationDef>,
    columns: StatColumns<SituationColumn>,
}

impl Situation {
    pub fn new(id: RowId, unit: Arc<Unit>, def: SituationDef) -> Self {
        let def = Arc::new(def);
        let columns = StatColumns::build(|column| situation_stat(&unit, &def, column));
        Self {
            id,
            unit,
            def,
            columns,
        }
    }

    pub fn unit(&self) -> &Arc<Unit> {
        &self.unit
    }

    pub fn condition(&self) -> ConditionKind {
        self.def.condition
    }

    pub fn effect(&self, setting: &Setting) -> Option<SituationEffect> {
        calculate_situation(setting, &self.def)
    }
}

impl TableRow for Situation {
    type Column = SituationColumn;

    fn id(&self) -> RowId {
        self.id
    }

    fn stat(&self, column: SituationColumn) -> &dyn Stat {
        self.columns.get(column)
    }

    fn matches(&self, setting: &Setting) -> bool {
        self.unit.matches(setting)
    }
}

fn situation_stat(
    unit: &Unit,
    def: &Arc<SituationDef>,
    column: SituationColumn,
) -> Box<dyn Stat> {
    let stat_type = column.stat_type();
    let field = |pick: fn(&SituationEffect) -> Option<i32>| {
        let def = Arc::clone(def);
        move |setting: &Setting| calculate_situation(setting, &def).and_then(|e| pick(&e))
    };
    match column {
        SituationColumn::Unit => unit.column_stat(UnitColumn::Name),
        SituationColumn::Rarity => unit.column_stat(UnitColumn::Rarity),
        SituationColumn::Element => unit.column_stat(UnitColumn::Element),
        SituationColumn::Condition => Box::new(StatRoot::constant(stat_type, def.condition)),
        SituationColumn::Attack => Box::new(format::multiplier(stat_type, field(|e| e.attack))),
        SituationColumn::Damage => Box::new(format::multiplier(stat_type, field(|e| e.damage))),
        SituationColumn::Defense => Box::new(format::multiplier(stat_type, field(|e| e.defense))),
        SituationColumn::Requirement => {
            Box::new(StatRoot::constant(stat_type, def.requirements.clone()))
        }
        SituationColumn::Supplement => {
            let def = Arc::clone(def);
            Box::new(StatRoot::new(stat_type, move |_| def.supplement.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::fixtures;

    fn vs_flying() -> SituationDef {
        SituationDef {
            condition: ConditionKind::VsFlying,
            effect: SituationEffect {
                attack: Some(150),
                ..SituationEffect::default()
            },
            requirements: BTreeSet::new(),
            potential_effect: Some(SituationEffect {
                attack: Some(180),
                damage: Some(110),
                defense: None,
            }),
            supplement: Some("ranged only".into()),
        }
    }

    #[test]
    fn columns_follow_potential() {
        let row = Situation::new(RowId(0), fixtures::unit(0, "Aria"), vs_flying());
        let base = Setting::default();
        let maxed = Setting::maxed();

        assert_eq!(
            row.stat(SituationColumn::Attack).display_text(&base).as_deref(),
            Some("+50%")
        );
        assert_eq!(
            row.stat(SituationColumn::Attack).display_text(&maxed).as_deref(),
            Some("+80%")
        );
        assert!(!row.stat(SituationColumn::Damage).is_defined(&base));
        assert!(row.stat(SituationColumn::Damage).is_defined(&maxed));
        assert_eq!(
            row.stat(SituationColumn::Condition).display_text(&base).as_deref(),
            Some("vs_flying")
        );
        assert_eq!(row.condition(), ConditionKind::VsFlying);
        assert_eq!(row.effect(&maxed).and_then(|e| e.damage), Some(110));
    }

    #[test]
    fn potential_gate_disables_effect() {
        let def = SituationDef {
            requirements: [Requirement::Potential].into(),
            ..vs_flying()
        };
        assert_eq!(calculate_situation(&Setting::default(), &def), None);
        assert_eq!(
            calculate_situation(&Setting::maxed(), &def).and_then(|e| e.attack),
            Some(180)
        );
    }
}
