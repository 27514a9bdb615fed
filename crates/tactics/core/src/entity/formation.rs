//! Formation buffs: passive team-wide stat bonuses granted while a unit is in
//! the formation.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::kinds::Requirement;
use super::target::{BuffTarget, target_sort_key};
use super::unit::{Unit, UnitColumn};
use crate::column::{Stat, StatRoot, StatType, format};
use crate::setting::{BaseStat, BaseStatTable, Setting};
use crate::table::{Column, RowId, StatColumns, TableRow};

/// Effect fields of a formation buff. `None` means the buff does not touch
/// that stat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormationEffect {
    /// Percentage increase per base stat.
    pub stats: BaseStatTable<Option<i32>>,
    /// Deployment cost change.
    pub cost: Option<i32>,
    /// Critical rate, percentage points.
    pub critical_rate: Option<i32>,
}

impl FormationEffect {
    /// Field-by-field override: every field set in `over` wins.
    pub fn merge(self, over: &Self) -> Self {
        Self {
            stats: self.stats.map(|stat, value| over.stats.get(stat).or(value)),
            cost: over.cost.or(self.cost),
            critical_rate: over.critical_rate.or(self.critical_rate),
        }
    }
}

/// Static definition of a formation buff.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormationBuffDef {
    pub target: BTreeSet<BuffTarget>,
    pub effect: FormationEffect,
    pub requirements: BTreeSet<Requirement>,
    /// Replaces fields of `effect` while potential is enabled.
    pub potential_effect: Option<FormationEffect>,
    pub supplement: Option<String>,
}

/// A formation buff resolved under one setting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormationBuffValue {
    pub target: BTreeSet<BuffTarget>,
    pub effect: FormationEffect,
    pub requirements: BTreeSet<Requirement>,
}

/// Resolves a formation buff, or `None` while a requirement is unmet.
pub fn calculate_formation_buff(
    setting: &Setting,
    def: &FormationBuffDef,
) -> Option<FormationBuffValue> {
    if !requirements_met(&def.requirements, setting) {
        return None;
    }
    let effect = match (&def.potential_effect, setting.potential) {
        (Some(potential), true) => def.effect.merge(potential),
        _ => def.effect,
    };
    Some(FormationBuffValue {
        target: def.target.clone(),
        effect,
        requirements: def.requirements.clone(),
    })
}

pub(crate) fn requirements_met(requirements: &BTreeSet<Requirement>, setting: &Setting) -> bool {
    requirements
        .iter()
        .all(|requirement| requirement.is_met(setting.potential, setting.weapon))
}

/// Columns of the formation buff table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum FormationBuffColumn {
    Unit,
    Rarity,
    Element,
    Target,
    Hp,
    Attack,
    Defense,
    Resist,
    Cost,
    CriticalRate,
    Requirement,
    Supplement,
}

impl Column for FormationBuffColumn {
    fn stat_type(self) -> StatType {
        match self {
            Self::Unit => StatType::Name,
            Self::Rarity => StatType::Rarity,
            Self::Element => StatType::Element,
            Self::Target => StatType::BuffTarget,
            Self::Hp => StatType::FormationHp,
            Self::Attack => StatType::FormationAttack,
            Self::Defense => StatType::FormationDefense,
            Self::Resist => StatType::FormationResist,
            Self::Cost => StatType::FormationCost,
            Self::CriticalRate => StatType::FormationCriticalRate,
            Self::Requirement => StatType::Requirement,
            Self::Supplement => StatType::Supplement,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// One formation buff of one unit.
pub struct FormationBuff {
    id: RowId,
    unit: Arc<Unit>,
    columns: StatColumns<FormationBuffColumn>,
}

impl FormationBuff {
    pub fn new(id: RowId, unit: Arc<Unit>, def: FormationBuffDef) -> Self {
        let def = Arc::new(def);
        let columns = StatColumns::build(|column| formation_stat(&unit, &def, column));
        Self { id, unit, columns }
    }

    pub fn unit(&self) -> &Arc<Unit> {
        &self.unit
    }

    /// Keeps the buffs whose owning unit matches `setting`, in input order.
    pub fn filter<'a>(setting: &Setting, buffs: &'a [FormationBuff]) -> Vec<&'a FormationBuff> {
        let query = setting.search_query();
        buffs
            .iter()
            .filter(|buff| buff.unit.matches_filter(&query, &setting.filter))
            .collect()
    }
}

impl TableRow for FormationBuff {
    type Column = FormationBuffColumn;

    fn id(&self) -> RowId {
        self.id
    }

    fn stat(&self, column: FormationBuffColumn) -> &dyn Stat {
        self.columns.get(column)
    }

    fn matches(&self, setting: &Setting) -> bool {
        self.unit.matches(setting)
    }
}

fn formation_stat(
    unit: &Unit,
    def: &Arc<FormationBuffDef>,
    column: FormationBuffColumn,
) -> Box<dyn Stat> {
    let stat_type = column.stat_type();
    let shared = Arc::clone(def);
    let field = move |pick: fn(&FormationEffect) -> Option<i32>| {
        let def = Arc::clone(&shared);
        move |setting: &Setting| {
            calculate_formation_buff(setting, &def).and_then(|value| pick(&value.effect))
        }
    };
    let stat = |base: BaseStat| field(base_stat_picker(base));
    match column {
        FormationBuffColumn::Unit => unit.column_stat(UnitColumn::Name),
        FormationBuffColumn::Rarity => unit.column_stat(UnitColumn::Rarity),
        FormationBuffColumn::Element => unit.column_stat(UnitColumn::Element),
        FormationBuffColumn::Target => Box::new(
            StatRoot::constant(stat_type, def.target.clone())
                .with_comparer(|_, targets| Some(target_sort_key(targets))),
        ),
        FormationBuffColumn::Hp => Box::new(format::delta(stat_type, stat(BaseStat::Hp))),
        FormationBuffColumn::Attack => Box::new(format::delta(stat_type, stat(BaseStat::Attack))),
        FormationBuffColumn::Defense => {
            Box::new(format::delta(stat_type, stat(BaseStat::Defense)))
        }
        FormationBuffColumn::Resist => Box::new(format::delta(stat_type, stat(BaseStat::Resist))),
        FormationBuffColumn::Cost => Box::new(format::cost_delta(stat_type, field(|e| e.cost))),
        FormationBuffColumn::CriticalRate => {
            Box::new(format::delta(stat_type, field(|e| e.critical_rate)))
        }
        FormationBuffColumn::Requirement => {
            Box::new(StatRoot::constant(stat_type, def.requirements.clone()))
        }
        FormationBuffColumn::Supplement => {
            let def = Arc::clone(def);
            Box::new(StatRoot::new(stat_type, move |_| def.supplement.clone()))
        }
    }
}

fn base_stat_picker(stat: BaseStat) -> fn(&FormationEffect) -> Option<i32> {
    match stat {
        BaseStat::Hp => |e| e.stats.hp,
        BaseStat::Attack => |e| e.stats.attack,
        BaseStat::Defense => |e| e.stats.defense,
        BaseStat::Resist => |e| e.stats.resist,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::StatColor;
    use crate::entity::Element;
    use crate::entity::fixtures;

    fn def() -> FormationBuffDef {
        FormationBuffDef {
            target: [BuffTarget::Element(Element::Fire)].into(),
            effect: FormationEffect {
                stats: BaseStatTable::splat(None).with(BaseStat::Attack, Some(10)),
                cost: Some(-1),
                critical_rate: None,
            },
            requirements: BTreeSet::new(),
            potential_effect: Some(FormationEffect {
                stats: BaseStatTable::splat(None).with(BaseStat::Attack, Some(15)),
                ..FormationEffect::default()
            }),
            supplement: Some("front row only".into()),
        }
    }

    #[test]
    fn potential_override_is_merged_per_field() {
        let base = calculate_formation_buff(&Setting::default(), &def()).map(|v| v.effect);
        let maxed = calculate_formation_buff(&Setting::maxed(), &def()).map(|v| v.effect);
        assert_eq!(base.and_then(|e| e.stats.attack), Some(10));
        assert_eq!(maxed.and_then(|e| e.stats.attack), Some(15));
        // untouched by the override
        assert_eq!(maxed.and_then(|e| e.cost), Some(-1));
    }

    #[test]
    fn unmet_requirement_disables_values() {
        let gated = FormationBuffDef {
            requirements: [Requirement::Weapon].into(),
            ..def()
        };
        assert_eq!(calculate_formation_buff(&Setting::default(), &gated), None);

        let buff = FormationBuff::new(RowId(0), fixtures::unit(0, "Aria"), gated);
        let setting = Setting::default();
        assert!(!buff.stat(FormationBuffColumn::Attack).is_defined(&setting));
        assert!(!buff.stat(FormationBuffColumn::Cost).is_defined(&setting));
        assert!(buff.stat(FormationBuffColumn::Unit).is_defined(&setting));
        assert!(buff.stat(FormationBuffColumn::Attack).is_defined(&Setting::maxed()));
    }

    #[test]
    fn columns_render_deltas() {
        let buff = FormationBuff::new(RowId(3), fixtures::unit(0, "Aria"), def());
        let setting = Setting::default();
        assert_eq!(buff.id(), RowId(3));
        assert_eq!(
            buff.stat(FormationBuffColumn::Attack).display_text(&setting).as_deref(),
            Some("+10%")
        );
        assert_eq!(buff.stat(FormationBuffColumn::Hp).display_text(&setting), None);
        let cost = buff.stat(FormationBuffColumn::Cost);
        assert_eq!(cost.display_text(&setting).as_deref(), Some("-1"));
        assert_eq!(cost.color(&setting), Some(StatColor::Positive));
        assert_eq!(
            buff.stat(FormationBuffColumn::Unit).display_text(&setting).as_deref(),
            Some("Aria")
        );
        assert_eq!(
            buff.stat(FormationBuffColumn::Target).display_text(&setting).as_deref(),
            Some("element:fire")
        );
    }

    #[test]
    fn filter_delegates_to_unit() {
        let buffs = vec![
            FormationBuff::new(RowId(0), fixtures::unit(0, "Aria"), def()),
            FormationBuff::new(RowId(1), fixtures::unit(1, "Bram"), def()),
        ];
        let setting = Setting {
            search: "bram".into(),
            ..Setting::default()
        };
        let kept: Vec<RowId> = FormationBuff::filter(&setting, &buffs)
            .into_iter()
            .map(|buff| buff.id())
            .collect();
        assert_eq!(kept, vec![RowId(1)]);
    }
}
