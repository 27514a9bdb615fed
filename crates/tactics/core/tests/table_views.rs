//! End-to-end table behaviour over a small catalog: filter, sort and
//! category views driven only by `Setting` snapshots.

mod common;

use tactics_core::{
    BuffCategory, FilterItem, InBattleBuffColumn, Rarity, RowId, Setting, SettingPatch, StatColor,
    StatType, TableRow, UnitColumn,
};

fn ids<R: TableRow>(rows: &[&R]) -> Vec<RowId> {
    rows.iter().map(|row| row.id()).collect()
}

// ============================================================================
// Unit table
// ============================================================================

#[test]
fn rarity_filter_keeps_only_matching_units() {
    let catalog = common::catalog();
    let table = catalog.unit_table();
    let setting = Setting::default().apply(SettingPatch::ToggleFilter(
        "rarity=5".parse::<FilterItem>().expect("valid filter"),
    ));

    let rows = table.filter(&setting);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name(), "Aria");
    assert_eq!(
        rows[0].stat(UnitColumn::Rarity).display_text(&setting).as_deref(),
        Some("legendary")
    );

    let sorted = table.sort(&setting, rows.clone(), UnitColumn::Attack, true);
    assert_eq!(ids(&sorted), ids(&rows));
}

#[test]
fn attack_sort_follows_direction_and_setting() {
    let catalog = common::catalog();
    let table = catalog.unit_table();
    let setting = Setting::default();

    let ascending = table.sort(&setting, table.filter(&setting), UnitColumn::Attack, false);
    let names: Vec<&str> = ascending.iter().map(|unit| unit.name()).collect();
    assert_eq!(names, ["Bram", "Cleo", "Aria"]);

    let descending = table.sort(&setting, table.filter(&setting), UnitColumn::Attack, true);
    let names: Vec<&str> = descending.iter().map(|unit| unit.name()).collect();
    assert_eq!(names, ["Aria", "Cleo", "Bram"]);

    // Potential adds +50 attack to everyone; Bram (200) still trails.
    let maxed = Setting::maxed();
    let aria = catalog.unit_by_name("Aria").expect("fixture unit");
    assert_eq!(
        aria.stat(UnitColumn::Attack).display_text(&maxed).as_deref(),
        Some("350")
    );
    let resorted = table.sort(&maxed, table.filter(&maxed), UnitColumn::Attack, false);
    assert_eq!(resorted[0].name(), "Bram");
}

#[test]
fn equal_costs_keep_catalog_order() {
    let catalog = common::catalog();
    let table = catalog.unit_table();
    let setting = Setting::default();
    let rows = table.filter(&setting);

    for reversed in [false, true] {
        let sorted = table.sort(&setting, rows.clone(), UnitColumn::Cost, reversed);
        assert_eq!(ids(&sorted), vec![RowId(0), RowId(1), RowId(2)]);
    }
}

#[test]
fn search_matches_normalized_name() {
    let catalog = common::catalog();
    let setting = Setting::default().apply(SettingPatch::SetSearch("  CLEO ".into()));
    let rows = catalog.unit_table().filter(&setting);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name(), "Cleo");
}

// ============================================================================
// In-battle buff views
// ============================================================================

#[test]
fn category_view_drops_rows_without_category_values() {
    let catalog = common::catalog();
    let variants = catalog.in_battle_variants();
    let defense = variants.category(BuffCategory::Defense);

    // The weapon-gated evasion buff only shows once weapons are enabled.
    let rows = defense.filter(&Setting::default());
    assert_eq!(ids(&rows), vec![RowId(2)]);

    let rows = defense.filter(&Setting::maxed());
    assert_eq!(ids(&rows), vec![RowId(1), RowId(2)]);

    let speed = variants.category(BuffCategory::Speed);
    assert!(speed.filter(&Setting::default()).is_empty());
    assert_eq!(ids(&speed.filter(&Setting::maxed())), vec![RowId(3)]);

    assert_eq!(variants.full().filter(&Setting::default()).len(), 5);
}

#[test]
fn category_view_still_applies_entity_filter() {
    let catalog = common::catalog();
    let base_stat = catalog.in_battle_variants().category(BuffCategory::BaseStat);
    let setting = Setting::default().apply(SettingPatch::ToggleFilter(
        "element=wind".parse::<FilterItem>().expect("valid filter"),
    ));

    let rows = base_stat.filter(&setting);
    assert_eq!(ids(&rows), vec![RowId(4)]);
    assert_eq!(rows[0].unit().name(), "Cleo");
}

#[test]
fn broadest_targets_sort_first() {
    let catalog = common::catalog();
    let table = catalog.in_battle_variants().full();
    let setting = Setting::default();
    let target = table.column(StatType::BuffTarget).expect("target column");

    let sorted = table.sort(&setting, table.filter(&setting), target, false);
    assert_eq!(
        ids(&sorted),
        vec![RowId(0), RowId(4), RowId(2), RowId(3), RowId(1)]
    );
}

#[test]
fn undefined_values_trail_in_both_directions() {
    let catalog = common::catalog();
    let table = catalog.in_battle_variants().full();
    let setting = Setting::maxed();
    let rows = table.filter(&setting);

    for reversed in [false, true] {
        let sorted = table.sort(&setting, rows.clone(), InBattleBuffColumn::Evasion, reversed);
        assert_eq!(sorted[0].id(), RowId(1));
        assert!(
            sorted[1..]
                .iter()
                .all(|row| !row.stat(InBattleBuffColumn::Evasion).is_defined(&setting))
        );
    }
}

#[test]
fn buff_values_are_formatted_and_colored() {
    let catalog = common::catalog();
    let setting = Setting::default();
    let buffs = catalog.in_battle_buffs();

    let war_cry = buffs[0].stat(InBattleBuffColumn::Attack);
    assert_eq!(war_cry.display_text(&setting).as_deref(), Some("+20%"));
    assert_eq!(war_cry.color(&setting), None);

    let weakened = Setting::default();
    let penalty = tactics_core::column::format::multiplier(StatType::BuffAttack, |_| Some(90));
    assert_eq!(penalty.get_color(&weakened), Some(StatColor::Negative));

    let bulwark = buffs[2].stat(InBattleBuffColumn::DamageTaken);
    assert_eq!(bulwark.display_text(&setting).as_deref(), Some("-20%"));
    assert_eq!(bulwark.color(&setting), None);
    assert!(bulwark.is_reversed());

    assert_eq!(
        buffs[0].stat(InBattleBuffColumn::Target).display_text(&setting).as_deref(),
        Some("all")
    );

    let evasion = buffs[1].stat(InBattleBuffColumn::Evasion);
    assert_eq!(evasion.display_text(&setting), None);
    assert_eq!(evasion.color(&setting), None);
}

#[test]
fn unsortable_columns_leave_order_alone() {
    let catalog = common::catalog();
    let table = catalog.in_battle_variants().full();
    let setting = Setting::default();
    let rows = table.filter(&setting);

    let sorted = table.sort(&setting, rows.clone(), InBattleBuffColumn::Supplement, true);
    assert_eq!(ids(&sorted), ids(&rows));
}

// ============================================================================
// Formation and situation tables
// ============================================================================

#[test]
fn formation_and_situation_tables_follow_catalog_order() {
    let catalog = common::catalog();
    let setting = Setting::default();

    let formation = catalog.formation_table().filter(&setting);
    let owners: Vec<&str> = formation.iter().map(|buff| buff.unit().name()).collect();
    assert_eq!(owners, ["Aria", "Bram"]);

    let situations = catalog.situation_table().filter(&setting);
    assert_eq!(situations.len(), 1);
    assert_eq!(situations[0].unit().name(), "Aria");

    let night = Setting::default().apply(SettingPatch::ToggleFilter(
        "condition=night".parse::<FilterItem>().expect("valid filter"),
    ));
    assert!(catalog.situation_table().filter(&night).is_empty());
    assert!(catalog.unit_table().filter(&night).is_empty());
}

#[test]
fn rarity_filter_accepts_labels() {
    let item = "rarity=legendary".parse::<FilterItem>().expect("valid filter");
    assert_eq!(item, FilterItem::Rarity(Rarity::Legendary));
}
