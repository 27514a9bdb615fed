//! Buff records shared by unit files and the template file.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tactics_core::{
    BaseStatTable, BuffDuration, BuffRef, FormationBuffDef, FormationEffect, InBattleBuffDef,
    InBattleEffect, SituationDef, SituationEffect,
};

use crate::loaders::{LoadResult, parse_key, parse_keys, read_file};

/// Inline buff or a reference to a named template.
#[derive(Debug, Clone, Deserialize)]
pub enum BuffRefSpec<D> {
    Template(String),
    Inline(D),
}

impl<D> BuffRefSpec<D> {
    pub(crate) fn resolve<T>(
        self,
        convert: impl FnOnce(D) -> LoadResult<T>,
    ) -> LoadResult<BuffRef<T>> {
        Ok(match self {
            Self::Template(name) => BuffRef::Template(name),
            Self::Inline(spec) => BuffRef::Inline(convert(spec)?),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormationEffectSpec {
    pub stats: BaseStatTable<Option<i32>>,
    pub cost: Option<i32>,
    pub critical_rate: Option<i32>,
}

impl From<FormationEffectSpec> for FormationEffect {
    fn from(spec: FormationEffectSpec) -> Self {
        Self {
            stats: spec.stats,
            cost: spec.cost,
            critical_rate: spec.critical_rate,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormationBuffSpec {
    pub target: Vec<String>,
    #[serde(default)]
    pub effect: FormationEffectSpec,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub potential_effect: Option<FormationEffectSpec>,
    #[serde(default)]
    pub supplement: Option<String>,
}

impl FormationBuffSpec {
    pub fn into_def(self) -> LoadResult<FormationBuffDef> {
        Ok(FormationBuffDef {
            target: parse_keys(&self.target, "buff target")?,
            effect: self.effect.into(),
            requirements: parse_keys(&self.requirements, "requirement")?,
            potential_effect: self.potential_effect.map(Into::into),
            supplement: self.supplement,
        })
    }
}

/// `Seconds(15)` or `Permanent`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub enum DurationSpec {
    Seconds(i32),
    Permanent,
}

impl From<DurationSpec> for BuffDuration {
    fn from(spec: DurationSpec) -> Self {
        match spec {
            DurationSpec::Seconds(secs) => Self::Seconds(secs),
            DurationSpec::Permanent => Self::Permanent,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InBattleEffectSpec {
    pub stats: BaseStatTable<Option<i32>>,
    pub damage_dealt: Option<i32>,
    pub critical_rate: Option<i32>,
    pub critical_damage: Option<i32>,
    pub penetration: Option<i32>,
    pub damage_taken: Option<i32>,
    pub evasion: Option<i32>,
    pub attack_speed: Option<i32>,
    pub delay: Option<i32>,
    pub move_speed: Option<i32>,
    pub redeploy_time: Option<i32>,
    pub cost: Option<i32>,
    pub field: Option<String>,
    pub status_immunity: Vec<String>,
    pub weather: Option<String>,
}

impl InBattleEffectSpec {
    pub fn into_effect(self) -> LoadResult<InBattleEffect> {
        Ok(InBattleEffect {
            stats: self.stats,
            damage_dealt: self.damage_dealt,
            critical_rate: self.critical_rate,
            critical_damage: self.critical_damage,
            penetration: self.penetration,
            damage_taken: self.damage_taken,
            evasion: self.evasion,
            attack_speed: self.attack_speed,
            delay: self.delay,
            move_speed: self.move_speed,
            redeploy_time: self.redeploy_time,
            cost: self.cost,
            field: self
                .field
                .as_deref()
                .map(|field| parse_key(field, "field element"))
                .transpose()?,
            status_immunity: parse_keys(&self.status_immunity, "status effect")?,
            weather: self
                .weather
                .as_deref()
                .map(|weather| parse_key(weather, "weather"))
                .transpose()?,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InBattleBuffSpec {
    pub skill_type: String,
    pub target: Vec<String>,
    pub duration: DurationSpec,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub effect: InBattleEffectSpec,
    #[serde(default)]
    pub potential_effect: Option<InBattleEffectSpec>,
    #[serde(default)]
    pub supplement: Option<String>,
}

impl InBattleBuffSpec {
    pub fn into_def(self) -> LoadResult<InBattleBuffDef> {
        Ok(InBattleBuffDef {
            skill_type: parse_key(&self.skill_type, "skill type")?,
            target: parse_keys(&self.target, "buff target")?,
            duration: self.duration.into(),
            requirements: parse_keys(&self.requirements, "requirement")?,
            effect: self.effect.into_effect()?,
            potential_effect: self
                .potential_effect
                .map(InBattleEffectSpec::into_effect)
                .transpose()?,
            supplement: self.supplement,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SituationEffectSpec {
    pub attack: Option<i32>,
    pub damage: Option<i32>,
    pub defense: Option<i32>,
}

impl From<SituationEffectSpec> for SituationEffect {
    fn from(spec: SituationEffectSpec) -> Self {
        Self {
            attack: spec.attack,
            damage: spec.damage,
            defense: spec.defense,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SituationSpec {
    pub condition: String,
    #[serde(default)]
    pub effect: SituationEffectSpec,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub potential_effect: Option<SituationEffectSpec>,
    #[serde(default)]
    pub supplement: Option<String>,
}

impl SituationSpec {
    pub fn into_def(self) -> LoadResult<SituationDef> {
        Ok(SituationDef {
            condition: parse_key(&self.condition, "condition")?,
            effect: self.effect.into(),
            requirements: parse_keys(&self.requirements, "requirement")?,
            potential_effect: self.potential_effect.map(Into::into),
            supplement: self.supplement,
        })
    }
}

/// Template file structure for RON files.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuffTemplateFile {
    pub formation: BTreeMap<String, FormationBuffSpec>,
    pub in_battle: BTreeMap<String, InBattleBuffSpec>,
}

/// Named buff definitions shared between units.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuffTemplates {
    pub formation: BTreeMap<String, FormationBuffDef>,
    pub in_battle: BTreeMap<String, InBattleBuffDef>,
}

impl BuffTemplates {
    pub fn len(&self) -> usize {
        self.formation.len() + self.in_battle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Loader for buff templates from RON files.
pub struct BuffTemplateLoader;

impl BuffTemplateLoader {
    /// Load buff templates from a RON file.
    pub fn load(path: &Path) -> LoadResult<BuffTemplates> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse buff templates from RON text.
    pub fn parse(content: &str) -> LoadResult<BuffTemplates> {
        let file: BuffTemplateFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse buff templates RON: {}", e))?;

        let mut templates = BuffTemplates::default();
        for (name, spec) in file.formation {
            let def = spec
                .into_def()
                .map_err(|e| anyhow::anyhow!("Invalid formation template '{}': {}", name, e))?;
            templates.formation.insert(name, def);
        }
        for (name, spec) in file.in_battle {
            let def = spec
                .into_def()
                .map_err(|e| anyhow::anyhow!("Invalid in-battle template '{}': {}", name, e))?;
            templates.in_battle.insert(name, def);
        }
        Ok(templates)
    }
}
