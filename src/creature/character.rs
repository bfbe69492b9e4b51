//! Player-controlled characters
//!
//! A character has a humanoid anatomy, so effects can land on individual
//! body parts, and a set of traits (mutations) that can grant immunity.

use ahash::AHashSet;
use std::sync::Arc;

use crate::core::types::{CreatureId, TraitId};
use crate::effects::store::EffectStore;
use crate::effects::target::BodyPart;
use crate::registry::effect::EffectType;
use crate::registry::GameData;

#[derive(Debug, Clone)]
pub struct Character {
    id: CreatureId,
    pub name: String,
    data: Arc<GameData>,
    body: AHashSet<BodyPart>,
    traits: AHashSet<TraitId>,
    pub(crate) effects: EffectStore,
}

impl Character {
    /// A character with a full humanoid body, no traits and no effects
    pub fn new(data: Arc<GameData>) -> Self {
        Self {
            id: CreatureId::new(),
            name: "Unnamed".to_string(),
            data,
            body: BodyPart::all().into_iter().collect(),
            traits: AHashSet::new(),
            effects: EffectStore::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn id(&self) -> CreatureId {
        self.id
    }

    pub fn data(&self) -> &Arc<GameData> {
        &self.data
    }

    // === ANATOMY ===

    /// Replace the anatomy, e.g. for an amputee
    pub fn set_body(&mut self, parts: impl IntoIterator<Item = BodyPart>) {
        self.body = parts.into_iter().collect();
    }

    pub fn has_part(&self, part: BodyPart) -> bool {
        self.body.contains(&part)
    }

    /// Body parts in canonical order
    pub fn body_parts(&self) -> Vec<BodyPart> {
        BodyPart::all()
            .into_iter()
            .filter(|part| self.body.contains(part))
            .collect()
    }

    // === TRAITS ===

    pub fn has_trait(&self, trait_id: &TraitId) -> bool {
        self.traits.contains(trait_id)
    }

    /// Gain a trait; returns false if it was already held
    pub fn set_trait(&mut self, trait_id: impl Into<TraitId>) -> bool {
        self.traits.insert(trait_id.into())
    }

    /// Lose a trait; returns false if it wasn't held
    pub fn unset_trait(&mut self, trait_id: &TraitId) -> bool {
        self.traits.remove(trait_id)
    }

    /// Flip a trait on or off, returning whether it is now held
    pub fn toggle_trait(&mut self, trait_id: &TraitId) -> bool {
        if self.traits.remove(trait_id) {
            false
        } else {
            self.traits.insert(trait_id.clone());
            true
        }
    }

    pub fn clear_mutations(&mut self) {
        self.traits.clear();
    }

    pub fn traits(&self) -> impl Iterator<Item = &TraitId> {
        self.traits.iter()
    }

    // === EFFECT RULES ===

    /// Immune iff a currently held trait is listed as granting immunity
    pub fn is_immune_to(&self, effect: &EffectType) -> bool {
        effect
            .immune_traits
            .iter()
            .any(|trait_id| self.has_trait(trait_id))
    }

    pub fn resists_via_trait(&self, effect: &EffectType) -> bool {
        effect
            .resist_traits
            .iter()
            .any(|trait_id| self.has_trait(trait_id))
    }
}
