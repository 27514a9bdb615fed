//! Pure setting edits.
//!
//! The presentation layer translates UI events into [`SettingPatch`] values
//! and calls [`Setting::apply`] to get the next snapshot. How the UI
//! dispatches those changes is not this crate's concern.

use super::{BaseStat, FilterItem, Setting};
use crate::config::DatabaseConfig;
use crate::stats::{Beast, Subskill};

/// A single edit to a [`Setting`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingPatch {
    SetPotential(bool),
    SetWeapon(bool),
    /// In-battle multiplier percent for one stat.
    SetBattleMultiplier(BaseStat, i32),
    /// Flat in-battle addition for one stat.
    SetBattleAddition(BaseStat, i32),
    /// Formation percentage for one stat.
    SetFormation(BaseStat, i32),
    /// Equips the subskill, or unequips it when already equipped.
    /// Ignored when every slot is taken.
    ToggleSubskill(Subskill),
    SetBeast(Option<Beast>),
    SetSearch(String),
    ToggleFilter(FilterItem),
    /// Selects a checkbox, leaving it selected if it already is.
    SelectFilter(FilterItem),
    ClearFilters,
    /// Back to [`Setting::default`].
    Reset,
}

impl Setting {
    /// Returns a new setting with the patch applied; `self` is unchanged.
    #[must_use]
    pub fn apply(&self, patch: SettingPatch) -> Setting {
        let mut next = self.clone();
        match patch {
            SettingPatch::SetPotential(on) => next.potential = on,
            SettingPatch::SetWeapon(on) => next.weapon = on,
            SettingPatch::SetBattleMultiplier(stat, value) => {
                next.battle_multiplier = next.battle_multiplier.with(stat, value.max(0));
            }
            SettingPatch::SetBattleAddition(stat, value) => {
                next.battle_addition = next.battle_addition.with(stat, value);
            }
            SettingPatch::SetFormation(stat, value) => {
                next.formation = next.formation.with(stat, value);
            }
            SettingPatch::ToggleSubskill(subskill) => {
                if let Some(pos) = next.subskills.iter().position(|s| *s == subskill) {
                    next.subskills.remove(pos);
                } else if next.subskills.len() < DatabaseConfig::MAX_SUBSKILLS {
                    next.subskills.push(subskill);
                }
            }
            SettingPatch::SetBeast(beast) => next.beast = beast,
            SettingPatch::SetSearch(text) => next.search = text,
            SettingPatch::ToggleFilter(item) => next.filter.toggle(item),
            SettingPatch::SelectFilter(item) => next.filter.select(item),
            SettingPatch::ClearFilters => next.filter = Default::default(),
            SettingPatch::Reset => next = Setting::default(),
        }
        next
    }

    /// Applies patches in order.
    #[must_use]
    pub fn apply_all(&self, patches: impl IntoIterator<Item = SettingPatch>) -> Setting {
        patches
            .into_iter()
            .fold(self.clone(), |setting, patch| setting.apply(patch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Element;

    #[test]
    fn apply_leaves_original_untouched() {
        let base = Setting::default();
        let next = base.apply(SettingPatch::SetPotential(true));
        assert!(!base.potential);
        assert!(next.potential);
    }

    #[test]
    fn negative_multiplier_is_clamped_to_zero() {
        let next = Setting::default().apply(SettingPatch::SetBattleMultiplier(BaseStat::Hp, -40));
        assert_eq!(next.battle_multiplier.hp, 0);
    }

    #[test]
    fn subskill_slots_are_bounded() {
        let next = Setting::default().apply_all([
            SettingPatch::ToggleSubskill(Subskill::AttackUp),
            SettingPatch::ToggleSubskill(Subskill::DefenseUp),
            SettingPatch::ToggleSubskill(Subskill::CostDown),
        ]);
        assert_eq!(next.subskills, vec![Subskill::AttackUp, Subskill::DefenseUp]);

        let next = next.apply(SettingPatch::ToggleSubskill(Subskill::AttackUp));
        assert_eq!(next.subskills, vec![Subskill::DefenseUp]);
    }

    #[test]
    fn filter_toggle_and_clear() {
        let item = FilterItem::Element(Element::Water);
        let next = Setting::default().apply(SettingPatch::ToggleFilter(item));
        assert!(next.filter.contains(item));
        let cleared = next.apply(SettingPatch::ClearFilters);
        assert!(cleared.filter.is_empty());
    }

    #[test]
    fn select_filter_is_idempotent() {
        let item = FilterItem::Element(Element::Water);
        let selected = Setting::default().apply_all([
            SettingPatch::SelectFilter(item),
            SettingPatch::SelectFilter(item),
        ]);
        assert!(selected.filter.contains(item));

        let toggled = selected.apply(SettingPatch::ToggleFilter(item));
        assert!(!toggled.filter.contains(item));
        assert_eq!(toggled.apply(SettingPatch::SelectFilter(item)), selected);
    }

    #[test]
    fn reset_restores_defaults() {
        let edited = Setting::maxed().apply(SettingPatch::SetSearch("aria".into()));
        assert_eq!(edited.apply(SettingPatch::Reset), Setting::default());
    }
}
