//! In-battle buffs: effects of skills, abilities and passives once deployed.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use super::formation::requirements_met;
use super::kinds::{Element, Requirement, SkillType, StatusEffect, Weather};
use super::target::{BuffTarget, target_sort_key};
use super::unit::{Unit, UnitColumn};
use crate::column::{DisplayItem, SortKey, Stat, StatRoot, StatType, StatValue, format};
use crate::setting::{BaseStat, BaseStatTable, Setting};
use crate::table::{Column, RowId, StatColumns, TableRow};

/// How long a buff lasts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuffDuration {
    Seconds(i32),
    Permanent,
}

impl fmt::Display for BuffDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds(secs) => write!(f, "{secs}s"),
            Self::Permanent => f.write_str("permanent"),
        }
    }
}

impl StatValue for BuffDuration {
    fn display_item(&self) -> Option<DisplayItem> {
        Some(DisplayItem::Text(self.to_string()))
    }

    fn sort_key(&self) -> Option<SortKey> {
        Some(SortKey::Number(match self {
            Self::Seconds(secs) => f64::from(*secs),
            Self::Permanent => f64::INFINITY,
        }))
    }
}

/// Effect fields of an in-battle buff. `None` (or an empty set) means the buff
/// does not touch that aspect.
///
/// Multipliers are percent of the original (`100` neutral); rates are
/// percentage points (`0` neutral).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InBattleEffect {
    /// Multiplier per base stat.
    pub stats: BaseStatTable<Option<i32>>,
    pub damage_dealt: Option<i32>,
    pub critical_rate: Option<i32>,
    pub critical_damage: Option<i32>,
    pub penetration: Option<i32>,
    /// Lower is better.
    pub damage_taken: Option<i32>,
    pub evasion: Option<i32>,
    pub attack_speed: Option<i32>,
    /// Attack delay multiplier; lower is better.
    pub delay: Option<i32>,
    pub move_speed: Option<i32>,
    /// Redeploy time multiplier; lower is better.
    pub redeploy_time: Option<i32>,
    /// Deployment cost change.
    pub cost: Option<i32>,
    /// Elemental field created on the map.
    pub field: Option<Element>,
    pub status_immunity: BTreeSet<StatusEffect>,
    pub weather: Option<Weather>,
}

impl InBattleEffect {
    /// Field-by-field override: every field set in `over` wins.
    pub fn merge(&self, over: &Self) -> Self {
        Self {
            stats: self.stats.map(|stat, value| over.stats.get(stat).or(value)),
            damage_dealt: over.damage_dealt.or(self.damage_dealt),
            critical_rate: over.critical_rate.or(self.critical_rate),
            critical_damage: over.critical_damage.or(self.critical_damage),
            penetration: over.penetration.or(self.penetration),
            damage_taken: over.damage_taken.or(self.damage_taken),
            evasion: over.evasion.or(self.evasion),
            attack_speed: over.attack_speed.or(self.attack_speed),
            delay: over.delay.or(self.delay),
            move_speed: over.move_speed.or(self.move_speed),
            redeploy_time: over.redeploy_time.or(self.redeploy_time),
            cost: over.cost.or(self.cost),
            field: over.field.or(self.field),
            status_immunity: if over.status_immunity.is_empty() {
                self.status_immunity.clone()
            } else {
                over.status_immunity.clone()
            },
            weather: over.weather.or(self.weather),
        }
    }
}

/// Static definition of an in-battle buff.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InBattleBuffDef {
    pub skill_type: SkillType,
    pub target: BTreeSet<BuffTarget>,
    pub duration: BuffDuration,
    pub requirements: BTreeSet<Requirement>,
    pub effect: InBattleEffect,
    /// Replaces fields of `effect` while potential is enabled.
    pub potential_effect: Option<InBattleEffect>,
    pub supplement: Option<String>,
}

/// An in-battle buff resolved under one setting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InBattleBuffValue {
    pub target: BTreeSet<BuffTarget>,
    pub duration: BuffDuration,
    pub effect: InBattleEffect,
    pub requirements: BTreeSet<Requirement>,
}

/// Resolves an in-battle buff, or `None` while a requirement is unmet.
pub fn calculate_in_battle_buff(
    setting: &Setting,
    def: &InBattleBuffDef,
) -> Option<InBattleBuffValue> {
    if !requirements_met(&def.requirements, setting) {
        return None;
    }
    let effect = match (&def.potential_effect, setting.potential) {
        (Some(potential), true) => def.effect.merge(potential),
        _ => def.effect.clone(),
    };
    Some(InBattleBuffValue {
        target: def.target.clone(),
        duration: def.duration,
        effect,
        requirements: def.requirements.clone(),
    })
}

/// Columns of the in-battle buff table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum InBattleBuffColumn {
    Unit,
    Rarity,
    Element,
    SkillType,
    Target,
    Duration,
    Requirement,
    Hp,
    Attack,
    Defense,
    Resist,
    DamageDealt,
    CriticalRate,
    CriticalDamage,
    Penetration,
    DamageTaken,
    Evasion,
    AttackSpeed,
    Delay,
    MoveSpeed,
    RedeployTime,
    Cost,
    Field,
    StatusImmunity,
    Weather,
    Supplement,
}

impl Column for InBattleBuffColumn {
    fn stat_type(self) -> StatType {
        match self {
            Self::Unit => StatType::Name,
            Self::Rarity => StatType::Rarity,
            Self::Element => StatType::Element,
            Self::SkillType => StatType::SkillType,
            Self::Target => StatType::BuffTarget,
            Self::Duration => StatType::Duration,
            Self::Requirement => StatType::Requirement,
            Self::Hp => StatType::BuffHp,
            Self::Attack => StatType::BuffAttack,
            Self::Defense => StatType::BuffDefense,
            Self::Resist => StatType::BuffResist,
            Self::DamageDealt => StatType::DamageDealt,
            Self::CriticalRate => StatType::CriticalRate,
            Self::CriticalDamage => StatType::CriticalDamage,
            Self::Penetration => StatType::Penetration,
            Self::DamageTaken => StatType::DamageTaken,
            Self::Evasion => StatType::Evasion,
            Self::AttackSpeed => StatType::AttackSpeed,
            Self::Delay => StatType::Delay,
            Self::MoveSpeed => StatType::MoveSpeed,
            Self::RedeployTime => StatType::RedeployTime,
            Self::Cost => StatType::BuffCost,
            Self::Field => StatType::Field,
            Self::StatusImmunity => StatType::StatusImmunity,
            Self::Weather => StatType::Weather,
            Self::Supplement => StatType::Supplement,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// One in-battle buff of one unit.
pub struct InBattleBuff {
    id: RowId,
    unit: Arc<Unit>,
    columns: StatColumns<InBattleBuffColumn>,
}

impl InBattleBuff {
    pub fn new(id: RowId, unit: Arc<Unit>, def: InBattleBuffDef) -> Self {
        let def = Arc::new(def);
        let columns = StatColumns::build(|column| in_battle_stat(&unit, &def, column));
        Self { id, unit, columns }
    }

    pub fn unit(&self) -> &Arc<Unit> {
        &self.unit
    }

    /// Keeps the buffs whose owning unit matches `setting`, in input order.
    pub fn filter<'a>(setting: &Setting, buffs: &'a [InBattleBuff]) -> Vec<&'a InBattleBuff> {
        let query = setting.search_query();
        buffs
            .iter()
            .filter(|buff| buff.unit.matches_filter(&query, &setting.filter))
            .collect()
    }
}

impl TableRow for InBattleBuff {
    type Column = InBattleBuffColumn;

    fn id(&self) -> RowId {
        self.id
    }

    fn stat(&self, column: InBattleBuffColumn) -> &dyn Stat {
        self.columns.get(column)
    }

    fn matches(&self, setting: &Setting) -> bool {
        self.unit.matches(setting)
    }
}

fn in_battle_stat(
    unit: &Unit,
    def: &Arc<InBattleBuffDef>,
    column: InBattleBuffColumn,
) -> Box<dyn Stat> {
    use InBattleBuffColumn as C;

    let stat_type = column.stat_type();
    let resolve = |def: &Arc<InBattleBuffDef>| {
        let def = Arc::clone(def);
        move |setting: &Setting| calculate_in_battle_buff(setting, &def)
    };
    let field = |pick: fn(&InBattleEffect) -> Option<i32>| {
        let value = resolve(def);
        move |setting: &Setting| value(setting).and_then(|value| pick(&value.effect))
    };
    let stat = |base: BaseStat| {
        let value = resolve(def);
        move |setting: &Setting| value(setting).and_then(|value| value.effect.stats.get(base))
    };

    match column {
        C::Unit => unit.column_stat(UnitColumn::Name),
        C::Rarity => unit.column_stat(UnitColumn::Rarity),
        C::Element => unit.column_stat(UnitColumn::Element),
        C::SkillType => Box::new(StatRoot::constant(stat_type, def.skill_type)),
        C::Target => Box::new(
            StatRoot::constant(stat_type, def.target.clone())
                .with_comparer(|_, targets| Some(target_sort_key(targets))),
        ),
        C::Duration => Box::new(StatRoot::constant(stat_type, def.duration)),
        C::Requirement => Box::new(StatRoot::constant(stat_type, def.requirements.clone())),
        C::Hp => Box::new(format::multiplier(stat_type, stat(BaseStat::Hp))),
        C::Attack => Box::new(format::multiplier(stat_type, stat(BaseStat::Attack))),
        C::Defense => Box::new(format::multiplier(stat_type, stat(BaseStat::Defense))),
        C::Resist => Box::new(format::multiplier(stat_type, stat(BaseStat::Resist))),
        C::DamageDealt => Box::new(format::multiplier(stat_type, field(|e| e.damage_dealt))),
        C::CriticalRate => Box::new(format::delta(stat_type, field(|e| e.critical_rate))),
        C::CriticalDamage => Box::new(format::delta(stat_type, field(|e| e.critical_damage))),
        C::Penetration => Box::new(format::delta(stat_type, field(|e| e.penetration))),
        C::DamageTaken => {
            Box::new(format::inverse_multiplier(stat_type, field(|e| e.damage_taken)))
        }
        C::Evasion => Box::new(format::delta(stat_type, field(|e| e.evasion))),
        C::AttackSpeed => Box::new(format::multiplier(stat_type, field(|e| e.attack_speed))),
        C::Delay => Box::new(format::inverse_multiplier(stat_type, field(|e| e.delay))),
        C::MoveSpeed => Box::new(format::multiplier(stat_type, field(|e| e.move_speed))),
        C::RedeployTime => {
            Box::new(format::inverse_multiplier(stat_type, field(|e| e.redeploy_time)))
        }
        C::Cost => Box::new(format::cost_delta(stat_type, field(|e| e.cost))),
        C::Field => {
            let value = resolve(def);
            Box::new(StatRoot::new(stat_type, move |setting: &Setting| {
                value(setting).and_then(|value| value.effect.field)
            }))
        }
        C::StatusImmunity => {
            let value = resolve(def);
            Box::new(StatRoot::new(stat_type, move |setting: &Setting| {
                value(setting)
                    .map(|value| value.effect.status_immunity)
                    .filter(|immunity| !immunity.is_empty())
            }))
        }
        C::Weather => {
            let value = resolve(def);
            Box::new(StatRoot::new(stat_type, move |setting: &Setting| {
                value(setting).and_then(|value| value.effect.weather)
            }))
        }
        C::Supplement => {
            let def = Arc::clone(def);
            Box::new(StatRoot::new(stat_type, move |_| def.supplement.clone()))
        }
    }
}
