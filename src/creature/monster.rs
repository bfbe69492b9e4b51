//! Monsters
//!
//! Monsters have no anatomy; every effect sits on the whole body. Whether an
//! effect can take hold depends on what the monster type is made of and
//! what blood, if any, it bleeds.

use std::sync::Arc;

use crate::core::error::{EffectError, Result};
use crate::core::types::{CreatureId, MaterialId, MonsterTypeId, SpeciesId};
use crate::effects::store::EffectStore;
use crate::registry::effect::{EffectType, ImmunityRule};
use crate::registry::monster::{BloodType, MonsterFlag, MonsterType};
use crate::registry::GameData;

#[derive(Debug, Clone)]
pub struct Monster {
    id: CreatureId,
    data: Arc<GameData>,
    kind: Arc<MonsterType>,
    pub(crate) effects: EffectStore,
}

impl Monster {
    /// Spawn a monster of a registered type
    pub fn new(data: Arc<GameData>, type_id: &MonsterTypeId) -> Result<Self> {
        let kind = data
            .monsters
            .get(type_id)
            .cloned()
            .ok_or_else(|| EffectError::UnknownMonsterType(type_id.clone()))?;

        Ok(Self {
            id: CreatureId::new(),
            data,
            kind,
            effects: EffectStore::new(),
        })
    }

    pub fn id(&self) -> CreatureId {
        self.id
    }

    pub fn data(&self) -> &Arc<GameData> {
        &self.data
    }

    pub fn monster_type(&self) -> &MonsterType {
        &self.kind
    }

    pub fn name(&self) -> &str {
        if self.kind.name.is_empty() {
            self.kind.id.as_str()
        } else {
            &self.kind.name
        }
    }

    pub fn in_species(&self, species: &SpeciesId) -> bool {
        self.kind.in_species(species)
    }

    pub fn made_of(&self, material: &MaterialId) -> bool {
        self.kind.made_of(material)
    }

    pub fn has_flag(&self, flag: MonsterFlag) -> bool {
        self.kind.has_flag(flag)
    }

    /// Blood this monster bleeds
    ///
    /// Blood flags win over the species default; with neither, the monster
    /// has no blood at all.
    pub fn blood_type(&self) -> Option<BloodType> {
        let from_flag = [MonsterFlag::AcidBlood, MonsterFlag::ArthropodBlood]
            .into_iter()
            .filter(|flag| self.has_flag(*flag))
            .find_map(|flag| flag.blood_type());

        from_flag.or_else(|| {
            self.kind
                .species
                .iter()
                .filter_map(|id| self.data.species.get(id))
                .find_map(|species| species.bleeds)
        })
    }

    /// Made of something that bleeds, or warm-blooded
    pub fn has_living_body(&self) -> bool {
        self.has_flag(MonsterFlag::Warm)
            || self
                .kind
                .materials
                .iter()
                .any(|material| self.data.materials.bleeds(material))
    }

    pub fn can_bleed(&self) -> bool {
        self.blood_type().is_some() && self.has_living_body()
    }

    pub fn is_immune_to(&self, effect: &EffectType) -> bool {
        match effect.immunity {
            ImmunityRule::None => false,
            ImmunityRule::Bleeding => !self.can_bleed(),
            ImmunityRule::Poison => !self.has_living_body(),
        }
    }
}
