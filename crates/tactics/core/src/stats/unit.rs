//! Unit stats - base data plus setting-dependent bonuses.
//!
//! UnitStats = (Base + Potential + Weapon + Flat) × (1 + %Inc) × More × Clamp
//!
//! Base data is stored on the unit; bonuses are never stored, they are
//! rebuilt from the current [`Setting`] on every read.

use super::bonus::{Bonus, BonusStack, StatBounds, StatLayer};
use super::effects::StatEffect;
use crate::config::DatabaseConfig;
use crate::setting::{BaseStat, BaseStatTable, Setting};

/// Static stat data for one unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitBaseStats {
    /// Stats at max level without potential or weapon.
    pub stats: BaseStatTable<i32>,

    /// Flat additions unlocked by potential.
    #[cfg_attr(feature = "serde", serde(default))]
    pub potential_bonus: BaseStatTable<i32>,

    /// Flat additions from the exclusive weapon.
    #[cfg_attr(feature = "serde", serde(default))]
    pub weapon_bonus: BaseStatTable<i32>,

    /// Deployment cost.
    pub cost: i32,

    /// Cost reduction unlocked by potential.
    #[cfg_attr(feature = "serde", serde(default))]
    pub potential_cost_reduction: i32,
}

/// Bonuses to unit stats collected from a [`Setting`].
#[derive(Clone, Debug, Default)]
pub struct UnitBonuses {
    pub stats: BaseStatTable<BonusStack>,
    pub cost_reduction: i32,
    pub cap: i32,
}

impl UnitBonuses {
    pub fn new(cap: i32) -> Self {
        Self {
            cap,
            ..Self::default()
        }
    }

    /// Collects every bonus the setting grants to a unit with `base` stats.
    pub fn from_setting(setting: &Setting, base: &UnitBaseStats, config: &DatabaseConfig) -> Self {
        let effect = setting
            .active_subskills()
            .map(|subskill| subskill.effect())
            .chain(setting.beast.map(|beast| beast.effect()))
            .fold(StatEffect::default(), StatEffect::combine);

        let stats = BaseStatTable::from_fn(|stat| {
            let mut stack = BonusStack::new();
            if setting.potential {
                stack.add(Bonus::Flat(base.potential_bonus.get(stat)));
            }
            if setting.weapon {
                stack.add(Bonus::Flat(base.weapon_bonus.get(stat)));
            }
            stack.extend([
                Bonus::Flat(setting.battle_addition.get(stat)),
                Bonus::Flat(effect.flat.get(stat)),
                Bonus::Increased(setting.formation.get(stat)),
                Bonus::Increased(effect.percent.get(stat)),
                Bonus::More(
                    setting
                        .battle_multiplier
                        .get(stat)
                        .saturating_sub(DatabaseConfig::NEUTRAL_MULTIPLIER),
                ),
            ]);
            stack
        });

        let mut cost_reduction = effect.cost_reduction;
        if setting.potential {
            cost_reduction += base.potential_cost_reduction;
        }

        Self {
            stats,
            cost_reduction,
            cap: config.stat_cap,
        }
    }
}

/// Final unit stats under one setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitStats {
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub resist: i32,
    pub cost: i32,
}

impl UnitStats {
    /// Shorthand for collecting bonuses and computing in one step.
    pub fn derive(setting: &Setting, base: &UnitBaseStats, config: &DatabaseConfig) -> Self {
        Self::compute(base, &UnitBonuses::from_setting(setting, base, config))
    }

    pub fn get(&self, stat: BaseStat) -> i32 {
        match stat {
            BaseStat::Hp => self.hp,
            BaseStat::Attack => self.attack,
            BaseStat::Defense => self.defense,
            BaseStat::Resist => self.resist,
        }
    }
}

impl StatLayer for UnitStats {
    type Base = UnitBaseStats;
    type Bonuses = UnitBonuses;
    type Final = UnitStats;

    fn compute(base: &UnitBaseStats, bonuses: &UnitBonuses) -> UnitStats {
        let stat = |stat: BaseStat| {
            let bounds = match stat {
                BaseStat::Hp => StatBounds::hp(bonuses.cap),
                _ => StatBounds::base(bonuses.cap),
            };
            bonuses
                .stats
                .get_ref(stat)
                .apply(base.stats.get(stat), bounds)
        };
        let cost = (base.cost - bonuses.cost_reduction)
            .clamp(StatBounds::COST.min, StatBounds::COST.max);

        UnitStats {
            hp: stat(BaseStat::Hp),
            attack: stat(BaseStat::Attack),
            defense: stat(BaseStat::Defense),
            resist: stat(BaseStat::Resist),
            cost,
        }
    }

    fn empty_bonuses() -> UnitBonuses {
        UnitBonuses::new(DatabaseConfig::DEFAULT_STAT_CAP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setting::SettingPatch;
    use crate::stats::{Beast, Subskill};

    fn base() -> UnitBaseStats {
        UnitBaseStats {
            stats: BaseStatTable {
                hp: 1000,
                attack: 200,
                defense: 100,
                resist: 20,
            },
            potential_bonus: BaseStatTable::splat(0).with(BaseStat::Attack, 50),
            weapon_bonus: BaseStatTable::splat(0).with(BaseStat::Hp, 200),
            cost: 12,
            potential_cost_reduction: 2,
        }
    }

    #[test]
    fn default_setting_yields_base_stats() {
        let stats = UnitStats::derive(&Setting::default(), &base(), &DatabaseConfig::default());
        assert_eq!(stats, UnitStats::from_base(&base()));
        assert_eq!(stats.attack, 200);
        assert_eq!(stats.cost, 12);
    }

    #[test]
    fn potential_and_weapon_add_flat_bonuses() {
        let stats = UnitStats::derive(&Setting::maxed(), &base(), &DatabaseConfig::default());
        assert_eq!(stats.attack, 250);
        assert_eq!(stats.hp, 1200);
        assert_eq!(stats.cost, 10);
    }

    #[test]
    fn formation_then_multiplier() {
        let setting = Setting::default().apply_all([
            SettingPatch::SetFormation(BaseStat::Attack, 10),
            SettingPatch::SetBattleMultiplier(BaseStat::Attack, 120),
            SettingPatch::SetBattleAddition(BaseStat::Attack, 20),
        ]);
        // (200 + 20) × 1.10 × 1.20 = 290.4
        let stats = UnitStats::derive(&setting, &base(), &DatabaseConfig::default());
        assert_eq!(stats.attack, 290);
        assert_eq!(stats.defense, 100);
    }

    #[test]
    fn subskills_and_beast_stack() {
        let setting = Setting {
            subskills: vec![Subskill::AttackUp, Subskill::CostDown],
            beast: Some(Beast::Phoenix),
            ..Setting::default()
        };
        let stats = UnitStats::derive(&setting, &base(), &DatabaseConfig::default());
        // 200 × (1 + 0.15 + 0.10)
        assert_eq!(stats.attack, 250);
        assert_eq!(stats.hp, 1100);
        assert_eq!(stats.cost, 10);
    }

    #[test]
    fn stats_are_clamped() {
        let zeroed = Setting::default().apply(SettingPatch::SetBattleMultiplier(BaseStat::Hp, 0));
        let stats = UnitStats::derive(&zeroed, &base(), &DatabaseConfig::default());
        assert_eq!(stats.hp, 1);

        let capped = UnitStats::derive(
            &Setting::default(),
            &base(),
            &DatabaseConfig::default().with_stat_cap(500),
        );
        assert_eq!(capped.hp, 500);
        assert_eq!(capped.attack, 200);
    }

    #[test]
    fn extreme_setting_values_clamp_instead_of_overflowing() {
        let setting = Setting::maxed().apply_all([
            SettingPatch::SetFormation(BaseStat::Attack, i32::MAX),
            SettingPatch::SetBattleMultiplier(BaseStat::Attack, i32::MAX),
            SettingPatch::SetBattleAddition(BaseStat::Attack, i32::MAX),
            SettingPatch::SetFormation(BaseStat::Hp, i32::MIN),
        ]);
        let stats = UnitStats::derive(&setting, &base(), &DatabaseConfig::default());
        assert_eq!(stats.attack, DatabaseConfig::DEFAULT_STAT_CAP);
        assert_eq!(stats.hp, 1);
        assert_eq!(stats.defense, 100);
    }

    #[test]
    fn cost_never_goes_negative() {
        let cheap = UnitBaseStats {
            cost: 2,
            ..base()
        };
        let setting = Setting {
            subskills: vec![Subskill::CostDown],
            beast: Some(Beast::Griffin),
            ..Setting::maxed()
        };
        assert_eq!(UnitStats::derive(&setting, &cheap, &DatabaseConfig::default()).cost, 0);
    }
}
