//! Shared catalog fixture for integration tests.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

use tactics_core::{
    BaseClass, BaseStat, BaseStatTable, BuffDuration, BuffRef, BuffTarget, Catalog, CatalogInput,
    ConditionKind, DatabaseConfig, Element, FormationBuffDef, FormationEffect, InBattleBuffDef,
    InBattleEffect, Placement, Rarity, Requirement, SituationDef, SituationEffect, SkillType,
    Species, UnitBaseStats, UnitData, UnitEntry, WeaponType,
};

pub fn unit(
    name: &str,
    rarity: Rarity,
    element: Element,
    base_class: BaseClass,
    species: Species,
    attack: i32,
) -> UnitData {
    UnitData {
        name: name.to_string(),
        class_name: format!("{base_class} of {element}"),
        rarity,
        element,
        base_class,
        weapon: WeaponType::Sword,
        species: [species].into(),
        placement: Placement::Melee,
        base: UnitBaseStats {
            stats: BaseStatTable {
                hp: 1000,
                attack,
                defense: 100,
                resist: 10,
            },
            potential_bonus: BaseStatTable::splat(0).with(BaseStat::Attack, 50),
            cost: 12,
            ..UnitBaseStats::default()
        },
        interval: 30,
        range: 1,
    }
}

pub fn in_battle(target: BuffTarget, effect: InBattleEffect) -> InBattleBuffDef {
    InBattleBuffDef {
        skill_type: SkillType::Skill,
        target: [target].into(),
        duration: BuffDuration::Seconds(15),
        requirements: BTreeSet::new(),
        effect,
        potential_effect: None,
        supplement: None,
    }
}

/// Three units; only Aria is legendary.
///
/// In-battle buffs, in order:
/// 0. Aria war cry: attack ×1.2 (template)
/// 1. Aria weapon skill: evasion +20, weapon only
/// 2. Bram bulwark: damage taken ×0.8
/// 3. Cleo volley: attack speed ×1.3, potential only
/// 4. Cleo war cry (template)
pub fn input() -> CatalogInput {
    let war_cry = in_battle(
        BuffTarget::All,
        InBattleEffect {
            stats: BaseStatTable::splat(None).with(BaseStat::Attack, Some(120)),
            ..InBattleEffect::default()
        },
    );

    let mut aria = UnitEntry::new(unit(
        "Aria",
        Rarity::Legendary,
        Element::Fire,
        BaseClass::Soldier,
        Species::Human,
        300,
    ));
    aria.formation_buffs.push(BuffRef::Inline(FormationBuffDef {
        target: [BuffTarget::Element(Element::Fire)].into(),
        effect: FormationEffect {
            stats: BaseStatTable::splat(None).with(BaseStat::Attack, Some(10)),
            ..FormationEffect::default()
        },
        ..FormationBuffDef::default()
    }));
    aria.in_battle_buffs.push(BuffRef::Template("war_cry".into()));
    aria.in_battle_buffs.push(BuffRef::Inline(InBattleBuffDef {
        requirements: [Requirement::Weapon].into(),
        ..in_battle(
            BuffTarget::Own,
            InBattleEffect {
                evasion: Some(20),
                ..InBattleEffect::default()
            },
        )
    }));
    aria.situations.push(SituationDef {
        condition: ConditionKind::VsFlying,
        effect: SituationEffect {
            attack: Some(150),
            ..SituationEffect::default()
        },
        requirements: BTreeSet::new(),
        potential_effect: None,
        supplement: None,
    });

    let mut bram = UnitEntry::new(unit(
        "Bram",
        Rarity::Rare,
        Element::Water,
        BaseClass::Guardian,
        Species::Dwarf,
        200,
    ));
    bram.formation_buffs.push(BuffRef::Inline(FormationBuffDef {
        target: [BuffTarget::All].into(),
        effect: FormationEffect {
            stats: BaseStatTable::splat(None).with(BaseStat::Hp, Some(15)),
            ..FormationEffect::default()
        },
        ..FormationBuffDef::default()
    }));
    bram.in_battle_buffs.push(BuffRef::Inline(in_battle(
        BuffTarget::BaseClass(BaseClass::Guardian),
        InBattleEffect {
            damage_taken: Some(80),
            ..InBattleEffect::default()
        },
    )));

    let mut cleo = UnitEntry::new(unit(
        "Cleo",
        Rarity::Epic,
        Element::Wind,
        BaseClass::Archer,
        Species::Elf,
        250,
    ));
    cleo.in_battle_buffs.push(BuffRef::Inline(InBattleBuffDef {
        requirements: [Requirement::Potential].into(),
        ..in_battle(
            BuffTarget::Species(Species::Elf),
            InBattleEffect {
                attack_speed: Some(130),
                ..InBattleEffect::default()
            },
        )
    }));
    cleo.in_battle_buffs.push(BuffRef::Template("war_cry".into()));

    CatalogInput {
        units: vec![aria, bram, cleo],
        formation_templates: BTreeMap::new(),
        in_battle_templates: [("war_cry".to_string(), war_cry)].into(),
    }
}

pub fn catalog() -> Catalog {
    Catalog::build(input(), &DatabaseConfig::default()).expect("fixture catalog is valid")
}
