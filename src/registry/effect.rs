//! Effect type definitions and the registry they load into
//!
//! Each `[[effect]]` table in `effects.toml` becomes one `EffectType`.
//! Types are immutable after load; creatures look them up by id every time
//! they add, query or resolve immunity for an effect.

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::config::EffectsConfig;
use crate::core::duration::TimeDuration;
use crate::core::error::{EffectError, Result};
use crate::core::types::{EffectTypeId, FlagId, TraitId};

/// Flag carried by effects that hide the bearer
pub const FLAG_INVISIBLE: &str = "EFFECT_INVISIBLE";

/// Which creature-composition rule can make a monster immune
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImmunityRule {
    /// No composition-based immunity
    #[default]
    None,
    /// Needs a resolvable blood type and a body that can bleed
    Bleeding,
    /// Needs a body that can bleed
    Poison,
}

/// Rules for one kind of status effect
#[derive(Debug, Clone, Serialize)]
pub struct EffectType {
    pub id: EffectTypeId,
    pub name: String,
    pub description: String,
    pub flags: AHashSet<FlagId>,
    pub immunity: ImmunityRule,
    /// Character traits that make the bearer fully immune
    pub immune_traits: Vec<TraitId>,
    /// Character traits that make the bearer resistant
    pub resist_traits: Vec<TraitId>,
    /// Active effects that make the bearer resistant
    pub resist_effects: Vec<EffectTypeId>,
    /// Effects that can't be added while this one is active
    pub blocks_effects: Vec<EffectTypeId>,
    pub max_duration: TimeDuration,
    pub max_intensity: u32,
}

impl EffectType {
    pub fn has_flag(&self, flag: &FlagId) -> bool {
        self.flags.contains(flag)
    }

    pub fn is_immunity_trait(&self, trait_id: &TraitId) -> bool {
        self.immune_traits.contains(trait_id)
    }

    pub fn blocks(&self, effect: &EffectTypeId) -> bool {
        self.blocks_effects.contains(effect)
    }

    pub fn clamp_duration(&self, duration: TimeDuration) -> TimeDuration {
        duration.min(self.max_duration)
    }

    /// Intensity always lands in `1..=max_intensity`
    pub fn clamp_intensity(&self, intensity: u32) -> u32 {
        intensity.clamp(1, self.max_intensity)
    }
}

/// All loaded effect types, indexed by id
#[derive(Debug, Clone, Default)]
pub struct EffectRegistry {
    effects: AHashMap<EffectTypeId, EffectType>,
}

impl EffectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an effect type; ids must be unique
    pub fn register(&mut self, effect: EffectType) -> Result<()> {
        if self.effects.contains_key(&effect.id) {
            return Err(EffectError::DuplicateDefinition {
                kind: "effect",
                id: effect.id.to_string(),
            });
        }
        self.effects.insert(effect.id.clone(), effect);
        Ok(())
    }

    /// Get an effect type by id
    pub fn get(&self, id: &EffectTypeId) -> Option<&EffectType> {
        self.effects.get(id)
    }

    pub fn contains(&self, id: &EffectTypeId) -> bool {
        self.effects.contains_key(id)
    }

    /// All effect ids in sorted order
    pub fn ids(&self) -> Vec<&EffectTypeId> {
        let mut ids: Vec<&EffectTypeId> = self.effects.keys().collect();
        ids.sort();
        ids
    }

    pub fn iter(&self) -> impl Iterator<Item = &EffectType> {
        self.effects.values()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Load effect types from a TOML file
    pub fn load_from_toml(path: &Path, config: &EffectsConfig) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content, &path.display().to_string(), config)
    }

    /// Parse effect types from a TOML string
    ///
    /// `source` only labels errors.
    pub fn parse_toml(content: &str, source: &str, config: &EffectsConfig) -> Result<Self> {
        let toml_data: TomlEffects =
            toml::from_str(content).map_err(|e| EffectError::toml(source, e))?;

        let mut registry = Self::new();
        for effect in toml_data.effect {
            registry.register(effect.into_effect_type(config)?)?;
        }
        registry.check_references()?;
        Ok(registry)
    }

    /// Every `resist_effects` and `blocks_effects` entry must name a
    /// registered effect
    fn check_references(&self) -> Result<()> {
        for effect in self.effects.values() {
            if let Some(missing) = effect
                .resist_effects
                .iter()
                .chain(&effect.blocks_effects)
                .find(|id| !self.effects.contains_key(*id))
            {
                return Err(EffectError::UnknownReference {
                    kind: "effect",
                    owner: effect.id.to_string(),
                    id: missing.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// TOML representation of effects file
#[derive(Debug, Deserialize)]
struct TomlEffects {
    #[serde(default)]
    effect: Vec<TomlEffect>,
}

/// TOML representation of a single effect type
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlEffect {
    id: EffectTypeId,
    name: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    flags: Vec<FlagId>,
    #[serde(default)]
    immunity: ImmunityRule,
    #[serde(default)]
    immune_traits: Vec<TraitId>,
    #[serde(default)]
    resist_traits: Vec<TraitId>,
    #[serde(default)]
    resist_effects: Vec<EffectTypeId>,
    #[serde(default)]
    blocks_effects: Vec<EffectTypeId>,
    max_duration: Option<TimeDuration>,
    max_intensity: Option<u32>,
}

impl TomlEffect {
    fn into_effect_type(self, config: &EffectsConfig) -> Result<EffectType> {
        let max_intensity = self.max_intensity.unwrap_or(config.default_max_intensity);
        if max_intensity == 0 {
            return Err(EffectError::InvalidConfig(format!(
                "effect '{}' has max_intensity 0",
                self.id
            )));
        }

        let max_duration = self.max_duration.unwrap_or(config.default_max_duration);
        if max_duration.is_zero() {
            return Err(EffectError::InvalidDuration(format!(
                "effect '{}' has max_duration 0",
                self.id
            )));
        }

        Ok(EffectType {
            name: self.name.unwrap_or_else(|| self.id.to_string()),
            id: self.id,
            description: self.description,
            flags: self.flags.into_iter().collect(),
            immunity: self.immunity,
            immune_traits: self.immune_traits,
            resist_traits: self.resist_traits,
            resist_effects: self.resist_effects,
            blocks_effects: self.blocks_effects,
            max_duration,
            max_intensity,
        })
    }
}
