//! Monster species, materials and monster types
//!
//! These tables only carry what effect immunity needs: which blood a
//! species bleeds, which materials can bleed at all, and what each monster
//! type is made of.

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use crate::core::error::{EffectError, Result};
use crate::core::types::{MaterialId, MonsterTypeId, SpeciesId};

/// Kind of blood a creature leaves behind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BloodType {
    Blood,
    InsectBlood,
    InvertebrateBlood,
    VeggyBlood,
    Acid,
}

/// Monster flags relevant to effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MonsterFlag {
    /// Warm-blooded
    Warm,
    /// Bleeds invertebrate blood regardless of species
    ArthropodBlood,
    /// Bleeds acid regardless of species
    AcidBlood,
}

impl MonsterFlag {
    /// Blood type implied by this flag, if any
    pub fn blood_type(&self) -> Option<BloodType> {
        match self {
            MonsterFlag::ArthropodBlood => Some(BloodType::InvertebrateBlood),
            MonsterFlag::AcidBlood => Some(BloodType::Acid),
            MonsterFlag::Warm => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    pub id: SpeciesId,
    #[serde(default)]
    pub name: String,
    /// Blood every member of the species bleeds, unless a flag overrides it
    #[serde(default)]
    pub bleeds: Option<BloodType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub id: MaterialId,
    #[serde(default)]
    pub name: String,
    /// Whether a body made of this can bleed
    #[serde(default)]
    pub bleeds: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterType {
    pub id: MonsterTypeId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub species: Vec<SpeciesId>,
    #[serde(default)]
    pub materials: Vec<MaterialId>,
    #[serde(default)]
    pub flags: AHashSet<MonsterFlag>,
}

impl MonsterType {
    pub fn in_species(&self, species: &SpeciesId) -> bool {
        self.species.contains(species)
    }

    pub fn made_of(&self, material: &MaterialId) -> bool {
        self.materials.contains(material)
    }

    pub fn has_flag(&self, flag: MonsterFlag) -> bool {
        self.flags.contains(&flag)
    }
}

/// Species indexed by id
#[derive(Debug, Clone, Default)]
pub struct SpeciesRegistry {
    species: AHashMap<SpeciesId, Species>,
}

impl SpeciesRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, species: Species) -> Result<()> {
        insert_unique(&mut self.species, "species", species.id.clone(), species)
    }

    pub fn get(&self, id: &SpeciesId) -> Option<&Species> {
        self.species.get(id)
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content, &path.display().to_string())
    }

    pub fn parse_toml(content: &str, source: &str) -> Result<Self> {
        let toml_data: TomlSpecies =
            toml::from_str(content).map_err(|e| EffectError::toml(source, e))?;
        let mut registry = Self::new();
        for species in toml_data.species {
            registry.register(species)?;
        }
        Ok(registry)
    }
}

/// Materials indexed by id
#[derive(Debug, Clone, Default)]
pub struct MaterialRegistry {
    materials: AHashMap<MaterialId, Material>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, material: Material) -> Result<()> {
        insert_unique(&mut self.materials, "material", material.id.clone(), material)
    }

    pub fn get(&self, id: &MaterialId) -> Option<&Material> {
        self.materials.get(id)
    }

    /// Unknown materials never bleed
    pub fn bleeds(&self, id: &MaterialId) -> bool {
        self.materials.get(id).is_some_and(|m| m.bleeds)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content, &path.display().to_string())
    }

    pub fn parse_toml(content: &str, source: &str) -> Result<Self> {
        let toml_data: TomlMaterials =
            toml::from_str(content).map_err(|e| EffectError::toml(source, e))?;
        let mut registry = Self::new();
        for material in toml_data.material {
            registry.register(material)?;
        }
        Ok(registry)
    }
}

/// Monster types indexed by id
///
/// Types are handed out as `Arc`s so a live monster can keep its type
/// without borrowing the registry.
#[derive(Debug, Clone, Default)]
pub struct MonsterTypeRegistry {
    monsters: AHashMap<MonsterTypeId, Arc<MonsterType>>,
}

impl MonsterTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, monster: MonsterType) -> Result<()> {
        insert_unique(
            &mut self.monsters,
            "monster",
            monster.id.clone(),
            Arc::new(monster),
        )
    }

    pub fn get(&self, id: &MonsterTypeId) -> Option<&Arc<MonsterType>> {
        self.monsters.get(id)
    }

    /// All monster ids in sorted order
    pub fn ids(&self) -> Vec<&MonsterTypeId> {
        let mut ids: Vec<&MonsterTypeId> = self.monsters.keys().collect();
        ids.sort();
        ids
    }

    pub fn iter(&self) -> impl Iterator<Item = &MonsterType> {
        self.monsters.values().map(|m| m.as_ref())
    }

    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content, &path.display().to_string())
    }

    pub fn parse_toml(content: &str, source: &str) -> Result<Self> {
        let toml_data: TomlMonsters =
            toml::from_str(content).map_err(|e| EffectError::toml(source, e))?;
        let mut registry = Self::new();
        for monster in toml_data.monster {
            registry.register(monster)?;
        }
        Ok(registry)
    }
}

fn insert_unique<K, V>(
    map: &mut AHashMap<K, V>,
    kind: &'static str,
    id: K,
    value: V,
) -> Result<()>
where
    K: std::hash::Hash + Eq + std::fmt::Display,
{
    if map.contains_key(&id) {
        return Err(EffectError::DuplicateDefinition {
            kind,
            id: id.to_string(),
        });
    }
    map.insert(id, value);
    Ok(())
}

#[derive(Debug, Deserialize)]
struct TomlSpecies {
    #[serde(default)]
    species: Vec<Species>,
}

#[derive(Debug, Deserialize)]
struct TomlMaterials {
    #[serde(default)]
    material: Vec<Material>,
}

#[derive(Debug, Deserialize)]
struct TomlMonsters {
    #[serde(default)]
    monster: Vec<MonsterType>,
}
