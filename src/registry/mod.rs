//! Static game data loaded from TOML
//!
//! `GameData` bundles every registry creatures consult. It is built once at
//! startup, cross-checked, and then shared read-only behind an `Arc`.

pub mod effect;
pub mod monster;

pub use effect::{EffectRegistry, EffectType, ImmunityRule, FLAG_INVISIBLE};
pub use monster::{
    BloodType, Material, MaterialRegistry, MonsterFlag, MonsterType, MonsterTypeRegistry,
    Species, SpeciesRegistry,
};

use std::path::Path;
use std::sync::Arc;

use crate::core::config::EffectsConfig;
use crate::core::error::{EffectError, Result};

pub const EFFECTS_FILE: &str = "effects.toml";
pub const SPECIES_FILE: &str = "species.toml";
pub const MATERIALS_FILE: &str = "materials.toml";
pub const MONSTERS_FILE: &str = "monsters.toml";

/// Every registry a creature needs, validated against each other
#[derive(Debug, Clone)]
pub struct GameData {
    pub effects: EffectRegistry,
    pub species: SpeciesRegistry,
    pub materials: MaterialRegistry,
    pub monsters: MonsterTypeRegistry,
}

impl GameData {
    /// Bundle registries, rejecting monsters that name unknown species or
    /// materials
    pub fn new(
        effects: EffectRegistry,
        species: SpeciesRegistry,
        materials: MaterialRegistry,
        monsters: MonsterTypeRegistry,
    ) -> Result<Self> {
        for monster in monsters.iter() {
            if let Some(missing) = monster.species.iter().find(|s| species.get(s).is_none()) {
                return Err(EffectError::UnknownReference {
                    kind: "species",
                    owner: monster.id.to_string(),
                    id: missing.to_string(),
                });
            }
            if let Some(missing) = monster.materials.iter().find(|m| materials.get(m).is_none()) {
                return Err(EffectError::UnknownReference {
                    kind: "material",
                    owner: monster.id.to_string(),
                    id: missing.to_string(),
                });
            }
        }

        Ok(Self {
            effects,
            species,
            materials,
            monsters,
        })
    }

    /// Load all four data files from a directory
    pub fn load_directory(dir: &Path, config: &EffectsConfig) -> Result<Self> {
        let effects = EffectRegistry::load_from_toml(&dir.join(EFFECTS_FILE), config)?;
        let species = SpeciesRegistry::load_from_toml(&dir.join(SPECIES_FILE))?;
        let materials = MaterialRegistry::load_from_toml(&dir.join(MATERIALS_FILE))?;
        let monsters = MonsterTypeRegistry::load_from_toml(&dir.join(MONSTERS_FILE))?;

        let data = Self::new(effects, species, materials, monsters)?;
        tracing::info!(
            "Loaded {} effects, {} species, {} materials, {} monster types from {}",
            data.effects.len(),
            data.species.len(),
            data.materials.len(),
            data.monsters.len(),
            dir.display()
        );
        Ok(data)
    }

    /// Load from the directory named in `config`
    pub fn load(config: &EffectsConfig) -> Result<Arc<Self>> {
        Self::load_directory(&config.data_dir, config).map(Arc::new)
    }
}
