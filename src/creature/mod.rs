//! Creatures and the effect API they share
//!
//! `Creature` is a closed set of variants. Storage, lookup and expiry are
//! identical for every variant; only immunity, resistance and where an
//! effect may land differ, and those are dispatched by matching on the
//! variant.

pub mod character;
pub mod monster;

pub use character::Character;
pub use monster::Monster;

use rand::Rng;
use std::sync::Arc;

use crate::core::duration::TimeDuration;
use crate::core::types::{CreatureId, EffectTypeId, FlagId};
use crate::effects::instance::EffectInstance;
use crate::effects::store::EffectStore;
use crate::effects::target::{BodyPart, EffectTarget};
use crate::registry::GameData;

/// Request to apply an effect
///
/// Defaults to the whole body, intensity 1, and respecting immunity. A zero
/// duration is rejected with `AddOutcome::NoDuration` rather than stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddEffect {
    pub effect: EffectTypeId,
    pub duration: TimeDuration,
    pub target: EffectTarget,
    pub intensity: u32,
    /// Apply even if the creature is immune or an active effect blocks it
    pub force: bool,
}

impl AddEffect {
    pub fn new(effect: impl Into<EffectTypeId>, duration: TimeDuration) -> Self {
        Self {
            effect: effect.into(),
            duration,
            target: EffectTarget::WholeBody,
            intensity: 1,
            force: false,
        }
    }

    /// Apply to a single body part
    pub fn on(mut self, part: BodyPart) -> Self {
        self.target = EffectTarget::Part(part);
        self
    }

    pub fn with_intensity(mut self, intensity: u32) -> Self {
        self.intensity = intensity;
        self
    }

    /// Bypass immunity and blocking effects
    pub fn forced(mut self) -> Self {
        self.force = true;
        self
    }
}

/// What happened to an `AddEffect` request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Applied,
    /// Creature is immune and the request wasn't forced
    Immune,
    /// An active effect blocks this one and the request wasn't forced
    Blocked,
    /// Environmental exposure was resisted or its roll failed
    Resisted,
    /// Requested duration was zero; nothing to apply
    NoDuration,
    /// No such effect type is registered
    UnknownEffect,
    /// The character doesn't have the requested body part
    MissingBodyPart,
}

impl AddOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, AddOutcome::Applied)
    }
}

#[derive(Debug, Clone)]
pub enum Creature {
    Character(Character),
    Monster(Monster),
}

impl From<Character> for Creature {
    fn from(character: Character) -> Self {
        Creature::Character(character)
    }
}

impl From<Monster> for Creature {
    fn from(monster: Monster) -> Self {
        Creature::Monster(monster)
    }
}

impl Creature {
    pub fn id(&self) -> CreatureId {
        match self {
            Creature::Character(c) => c.id(),
            Creature::Monster(m) => m.id(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Creature::Character(c) => &c.name,
            Creature::Monster(m) => m.name(),
        }
    }

    pub fn as_character(&self) -> Option<&Character> {
        match self {
            Creature::Character(c) => Some(c),
            Creature::Monster(_) => None,
        }
    }

    pub fn as_character_mut(&mut self) -> Option<&mut Character> {
        match self {
            Creature::Character(c) => Some(c),
            Creature::Monster(_) => None,
        }
    }

    pub fn as_monster(&self) -> Option<&Monster> {
        match self {
            Creature::Monster(m) => Some(m),
            Creature::Character(_) => None,
        }
    }

    pub fn as_monster_mut(&mut self) -> Option<&mut Monster> {
        match self {
            Creature::Monster(m) => Some(m),
            Creature::Character(_) => None,
        }
    }

    /// Registries this creature was spawned against
    pub fn data(&self) -> &Arc<GameData> {
        match self {
            Creature::Character(c) => c.data(),
            Creature::Monster(m) => m.data(),
        }
    }

    fn store(&self) -> &EffectStore {
        match self {
            Creature::Character(c) => &c.effects,
            Creature::Monster(m) => &m.effects,
        }
    }

    fn store_mut(&mut self) -> &mut EffectStore {
        match self {
            Creature::Character(c) => &mut c.effects,
            Creature::Monster(m) => &mut m.effects,
        }
    }

    /// Where a requested target actually lands, if anywhere
    fn resolve_target(&self, requested: EffectTarget) -> Option<EffectTarget> {
        match (self, requested) {
            (Creature::Monster(_), _) => Some(EffectTarget::WholeBody),
            (Creature::Character(_), EffectTarget::WholeBody) => Some(EffectTarget::WholeBody),
            (Creature::Character(c), EffectTarget::Part(part)) => {
                c.has_part(part).then_some(requested)
            }
        }
    }

    // === IMMUNITY & RESISTANCE ===

    /// Would a non-forced `add_effect` of this type be blocked?
    ///
    /// Unknown effect types are never blocked.
    pub fn is_immune_effect(&self, effect: &EffectTypeId) -> bool {
        let Some(effect_type) = self.data().effects.get(effect) else {
            return false;
        };
        match self {
            Creature::Character(c) => c.is_immune_to(effect_type),
            Creature::Monster(m) => m.is_immune_to(effect_type),
        }
    }

    /// Partially resists: holds a listed resist effect, or (characters) a
    /// listed resist trait. Never blocks application.
    pub fn resists_effect(&self, effect: &EffectTypeId) -> bool {
        let Some(effect_type) = self.data().effects.get(effect) else {
            return false;
        };

        let by_effect = effect_type
            .resist_effects
            .iter()
            .any(|resist| self.has_effect(resist));

        by_effect
            || match self {
                Creature::Character(c) => c.resists_via_trait(effect_type),
                Creature::Monster(_) => false,
            }
    }

    /// First active effect whose type blocks `effect`
    pub fn blocked_by(&self, effect: &EffectTypeId) -> Option<&EffectTypeId> {
        let data = self.data();
        self.store().effect_ids().find(|active| {
            data.effects
                .get(active)
                .is_some_and(|effect_type| effect_type.blocks(effect))
        })
    }

    // === MUTATION ===

    pub fn add_effect(&mut self, request: AddEffect) -> AddOutcome {
        let data = Arc::clone(self.data());
        let creature = self.id();

        let Some(effect_type) = data.effects.get(&request.effect) else {
            tracing::warn!(
                "Creature {} ignored unknown effect '{}'",
                creature,
                request.effect
            );
            return AddOutcome::UnknownEffect;
        };

        if request.duration.is_zero() {
            tracing::debug!("Creature {} ignored zero-length {}", creature, request.effect);
            return AddOutcome::NoDuration;
        }

        if !request.force {
            if self.is_immune_effect(&request.effect) {
                tracing::debug!("Creature {} is immune to {}", creature, request.effect);
                return AddOutcome::Immune;
            }
            if let Some(blocker) = self.blocked_by(&request.effect) {
                tracing::debug!(
                    "Creature {}: {} blocked by {}",
                    creature,
                    request.effect,
                    blocker
                );
                return AddOutcome::Blocked;
            }
        }

        let Some(target) = self.resolve_target(request.target) else {
            tracing::debug!(
                "Creature {} has no {} for {}",
                creature,
                request.target,
                request.effect
            );
            return AddOutcome::MissingBodyPart;
        };

        let instance = EffectInstance::new(
            request.effect,
            target,
            effect_type.clamp_duration(request.duration),
            effect_type.clamp_intensity(request.intensity),
        );
        tracing::debug!(
            "Creature {} gains {} on {} for {} (intensity {})",
            creature,
            instance.effect,
            instance.target,
            instance.duration,
            instance.intensity
        );
        self.store_mut().insert(instance);
        AddOutcome::Applied
    }

    /// Environmental exposure, e.g. smoke or a gas cloud
    ///
    /// A creature that resists the effect shrugs it off entirely. Otherwise
    /// each listed body part, or the requested target if none are listed,
    /// gets its own roll against `strength` (a percent chance, capped at
    /// 100) and successful rolls go through `add_effect`. Returns one
    /// outcome per target.
    pub fn add_env_effect<R: Rng>(
        &mut self,
        request: AddEffect,
        parts: &[BodyPart],
        strength: u32,
        rng: &mut R,
    ) -> Vec<AddOutcome> {
        let targets: Vec<EffectTarget> = if parts.is_empty() {
            vec![request.target]
        } else {
            parts.iter().copied().map(EffectTarget::Part).collect()
        };

        if !self.data().effects.contains(&request.effect) {
            tracing::warn!(
                "Creature {} ignored unknown effect '{}'",
                self.id(),
                request.effect
            );
            return vec![AddOutcome::UnknownEffect; targets.len()];
        }

        if self.resists_effect(&request.effect) {
            tracing::debug!("Creature {} resists exposure to {}", self.id(), request.effect);
            return vec![AddOutcome::Resisted; targets.len()];
        }

        let chance = strength.min(100);
        targets
            .into_iter()
            .map(|target| {
                if rng.gen_range(0..100) < chance {
                    self.add_effect(AddEffect {
                        target,
                        ..request.clone()
                    })
                } else {
                    AddOutcome::Resisted
                }
            })
            .collect()
    }

    /// Remove every instance of an effect, whatever body part it is on
    ///
    /// Returns true if anything was removed.
    pub fn remove_effect(&mut self, effect: &EffectTypeId) -> bool {
        let removed = self.store_mut().remove_all(effect);
        if removed > 0 {
            tracing::debug!("Creature {} lost {} ({} instances)", self.id(), effect, removed);
        }
        removed > 0
    }

    /// Remove an effect from one body part only
    pub fn remove_effect_on(&mut self, effect: &EffectTypeId, part: BodyPart) -> bool {
        let removed = self.store_mut().remove(effect, part.into()).is_some();
        if removed {
            tracing::debug!("Creature {} lost {} on {}", self.id(), effect, part);
        }
        removed
    }

    pub fn clear_effects(&mut self) {
        self.store_mut().clear();
    }

    /// Run every effect's clock down, returning the ones that expired
    pub fn process_effects(&mut self, elapsed: TimeDuration) -> Vec<EffectInstance> {
        let expired = self.store_mut().decay(elapsed);
        for instance in &expired {
            tracing::debug!(
                "Creature {}: {} on {} wore off",
                self.id(),
                instance.effect,
                instance.target
            );
        }
        expired
    }

    // === QUERIES ===

    /// Any instance of this effect, on any body part or the whole body
    pub fn has_effect(&self, effect: &EffectTypeId) -> bool {
        self.store().contains(effect)
    }

    /// An instance on exactly this body part; a whole-body instance doesn't
    /// count
    pub fn has_effect_on(&self, effect: &EffectTypeId, part: BodyPart) -> bool {
        self.store().contains_at(effect, part.into())
    }

    pub fn has_effect_with_flag(&self, flag: &FlagId) -> bool {
        let data = self.data();
        self.store()
            .effect_ids()
            .filter_map(|id| data.effects.get(id))
            .any(|effect_type| effect_type.has_flag(flag))
    }

    pub fn get_effect(&self, effect: &EffectTypeId, target: EffectTarget) -> Option<&EffectInstance> {
        self.store().get(effect, target)
    }

    /// Remaining duration, zero if absent
    pub fn get_effect_dur(&self, effect: &EffectTypeId, target: EffectTarget) -> TimeDuration {
        self.get_effect(effect, target)
            .map(|instance| instance.duration)
            .unwrap_or(TimeDuration::ZERO)
    }

    /// Intensity, zero if absent
    pub fn get_effect_int(&self, effect: &EffectTypeId, target: EffectTarget) -> u32 {
        self.get_effect(effect, target)
            .map(|instance| instance.intensity)
            .unwrap_or(0)
    }

    pub fn effects(&self) -> impl Iterator<Item = &EffectInstance> {
        self.store().iter()
    }

    /// Active effects sorted by id then target
    pub fn effect_snapshot(&self) -> Vec<EffectInstance> {
        self.store().snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::EffectsConfig;
    use crate::core::types::MonsterTypeId;
    use crate::registry::{EffectRegistry, MaterialRegistry, MonsterTypeRegistry, SpeciesRegistry};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const EFFECTS: &str = r#"
[[effect]]
id = "bleed"
immunity = "bleeding"
max_duration = "1 h"
max_intensity = 3

[[effect]]
id = "grabbed"

[[effect]]
id = "poison"
immunity = "poison"
resist_traits = ["POISRESIST"]
resist_effects = ["antitoxin"]

[[effect]]
id = "antitoxin"

[[effect]]
id = "wet"
blocks_effects = ["onfire"]

[[effect]]
id = "onfire"
"#;

    fn data() -> Arc<GameData> {
        Arc::new(
            GameData::new(
                EffectRegistry::parse_toml(EFFECTS, "effects", &EffectsConfig::default()).unwrap(),
                SpeciesRegistry::parse_toml("[[species]]\nid = \"ROBOT\"\n", "species").unwrap(),
                MaterialRegistry::parse_toml("[[material]]\nid = \"steel\"\n", "materials")
                    .unwrap(),
                MonsterTypeRegistry::parse_toml(
                    "[[monster]]\nid = \"mon_turret\"\nspecies = [\"ROBOT\"]\nmaterials = [\"steel\"]\n",
                    "monsters",
                )
                .unwrap(),
            )
            .unwrap(),
        )
    }

    fn character() -> Creature {
        Character::new(data()).into()
    }

    fn turret() -> Creature {
        Monster::new(data(), &MonsterTypeId::new("mon_turret")).unwrap().into()
    }

    #[test]
    fn test_add_request_defaults() {
        let request = AddEffect::new("bleed", TimeDuration::from_minutes(1));
        assert_eq!(request.target, EffectTarget::WholeBody);
        assert_eq!(request.intensity, 1);
        assert!(!request.force);

        let request = request.on(BodyPart::ArmLeft).with_intensity(2).forced();
        assert_eq!(request.target, EffectTarget::Part(BodyPart::ArmLeft));
        assert_eq!(request.intensity, 2);
        assert!(request.force);
    }

    #[test]
    fn test_duration_and_intensity_clamped() {
        let mut dummy = character();
        let bleed = EffectTypeId::new("bleed");
        let outcome = dummy.add_effect(
            AddEffect::new(&bleed, TimeDuration::from_days(3))
                .on(BodyPart::Torso)
                .with_intensity(9),
        );
        assert_eq!(outcome, AddOutcome::Applied);

        let torso = EffectTarget::Part(BodyPart::Torso);
        assert_eq!(dummy.get_effect_dur(&bleed, torso), TimeDuration::from_hours(1));
        assert_eq!(dummy.get_effect_int(&bleed, torso), 3);

        dummy.add_effect(AddEffect::new(&bleed, TimeDuration::from_minutes(1)).on(BodyPart::Head));
        let head = EffectTarget::Part(BodyPart::Head);
        assert_eq!(dummy.get_effect_int(&bleed, head), 1);
    }

    #[test]
    fn test_re_adding_overwrites() {
        let mut dummy = character();
        let bleed = EffectTypeId::new("bleed");
        dummy.add_effect(AddEffect::new(&bleed, TimeDuration::from_minutes(30)).with_intensity(3));
        dummy.add_effect(AddEffect::new(&bleed, TimeDuration::from_minutes(1)));

        assert_eq!(
            dummy.get_effect_dur(&bleed, EffectTarget::WholeBody),
            TimeDuration::from_minutes(1)
        );
        assert_eq!(dummy.get_effect_int(&bleed, EffectTarget::WholeBody), 1);
        assert_eq!(dummy.effects().count(), 1);
    }

    #[test]
    fn test_absent_effect_getters_are_zero() {
        let dummy = character();
        let bleed = EffectTypeId::new("bleed");
        assert!(dummy.get_effect(&bleed, EffectTarget::WholeBody).is_none());
        assert_eq!(dummy.get_effect_dur(&bleed, EffectTarget::WholeBody), TimeDuration::ZERO);
        assert_eq!(dummy.get_effect_int(&bleed, EffectTarget::WholeBody), 0);
    }

    #[test]
    fn test_unknown_effect_is_ignored() {
        let mut dummy = character();
        let unknown = EffectTypeId::new("no_such_effect");
        let outcome = dummy.add_effect(AddEffect::new(&unknown, TimeDuration::from_minutes(1)));
        assert_eq!(outcome, AddOutcome::UnknownEffect);
        assert!(!dummy.has_effect(&unknown));
        assert!(!dummy.is_immune_effect(&unknown));
        assert!(!dummy.remove_effect(&unknown));
    }

    #[test]
    fn test_missing_body_part() {
        let mut dummy = character();
        dummy
            .as_character_mut()
            .unwrap()
            .set_body([BodyPart::Head, BodyPart::Torso]);

        let grabbed = EffectTypeId::new("grabbed");
        let outcome =
            dummy.add_effect(AddEffect::new(&grabbed, TimeDuration::from_minutes(1)).on(BodyPart::ArmLeft));
        assert_eq!(outcome, AddOutcome::MissingBodyPart);
        assert!(!dummy.has_effect(&grabbed));
    }

    #[test]
    fn test_monster_effects_land_on_whole_body() {
        let mut turret = turret();
        let grabbed = EffectTypeId::new("grabbed");
        let outcome =
            turret.add_effect(AddEffect::new(&grabbed, TimeDuration::from_minutes(1)).on(BodyPart::ArmLeft));
        assert!(outcome.is_applied());
        assert!(turret.has_effect(&grabbed));
        assert!(!turret.has_effect_on(&grabbed, BodyPart::ArmLeft));
        assert!(turret.get_effect(&grabbed, EffectTarget::WholeBody).is_some());
    }

    #[test]
    fn test_immune_monster_reports_outcome() {
        let mut turret = turret();
        let poison = EffectTypeId::new("poison");
        let outcome = turret.add_effect(AddEffect::new(&poison, TimeDuration::from_minutes(1)));
        assert_eq!(outcome, AddOutcome::Immune);
        assert!(!turret.has_effect(&poison));

        let outcome = turret.add_effect(AddEffect::new(&poison, TimeDuration::from_minutes(1)).forced());
        assert_eq!(outcome, AddOutcome::Applied);
        assert!(turret.has_effect(&poison));
    }

    #[test]
    fn test_process_effects_expires() {
        let mut dummy = character();
        let bleed = EffectTypeId::new("bleed");
        let grabbed = EffectTypeId::new("grabbed");
        dummy.add_effect(AddEffect::new(&bleed, TimeDuration::from_turns(30)).on(BodyPart::ArmLeft));
        dummy.add_effect(AddEffect::new(&grabbed, TimeDuration::from_minutes(2)));

        assert!(dummy.process_effects(TimeDuration::from_turns(10)).is_empty());
        assert_eq!(
            dummy.get_effect_dur(&bleed, BodyPart::ArmLeft.into()).turns(),
            20
        );

        let expired = dummy.process_effects(TimeDuration::from_minutes(1));
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].effect, bleed);
        assert!(!dummy.has_effect(&bleed));
        assert!(dummy.has_effect(&grabbed));
    }

    #[test]
    fn test_resists_via_effect_and_trait() {
        let poison = EffectTypeId::new("poison");
        let antitoxin = EffectTypeId::new("antitoxin");

        let mut dummy = character();
        assert!(!dummy.resists_effect(&poison));

        dummy.add_effect(AddEffect::new(&antitoxin, TimeDuration::from_hours(1)));
        assert!(dummy.resists_effect(&poison));
        dummy.remove_effect(&antitoxin);
        assert!(!dummy.resists_effect(&poison));

        dummy.as_character_mut().unwrap().set_trait("POISRESIST");
        assert!(dummy.resists_effect(&poison));
        // Resistance never blocks application
        assert!(dummy
            .add_effect(AddEffect::new(&poison, TimeDuration::from_minutes(1)))
            .is_applied());
    }

    #[test]
    fn test_monster_resists_only_via_effects() {
        let mut turret = turret();
        let poison = EffectTypeId::new("poison");
        assert!(!turret.resists_effect(&poison));
        turret.add_effect(AddEffect::new("antitoxin", TimeDuration::from_hours(1)));
        assert!(turret.resists_effect(&poison));
    }

    #[test]
    fn test_variant_accessors() {
        let mut dummy = character();
        assert!(dummy.as_character().is_some());
        assert!(dummy.as_monster().is_none());
        assert!(dummy.as_monster_mut().is_none());
        assert_eq!(dummy.name(), "Unnamed");

        let turret = turret();
        assert!(turret.as_monster().is_some());
        assert!(turret.as_character().is_none());
        assert_eq!(turret.name(), "mon_turret");
        assert_ne!(turret.id(), dummy.id());
    }

    #[test]
    fn test_snapshot_sorted() {
        let mut dummy = character();
        dummy.add_effect(AddEffect::new("grabbed", TimeDuration::from_minutes(1)).on(BodyPart::LegLeft));
        dummy.add_effect(AddEffect::new("bleed", TimeDuration::from_minutes(1)));
        let ids: Vec<String> = dummy
            .effect_snapshot()
            .iter()
            .map(|i| i.effect.to_string())
            .collect();
        assert_eq!(ids, vec!["bleed", "grabbed"]);
    }

    #[test]
    fn test_zero_duration_is_not_stored() {
        let mut dummy = character();
        let grabbed = EffectTypeId::new("grabbed");
        let outcome = dummy.add_effect(AddEffect::new(&grabbed, TimeDuration::ZERO));
        assert_eq!(outcome, AddOutcome::NoDuration);
        assert!(!outcome.is_applied());
        assert!(!dummy.has_effect(&grabbed));
        assert!(dummy.process_effects(TimeDuration::ZERO).is_empty());
    }

    #[test]
    fn test_active_effect_blocks_add() {
        let mut dummy = character();
        let onfire = EffectTypeId::new("onfire");
        let wet = EffectTypeId::new("wet");
        dummy.add_effect(AddEffect::new(&wet, TimeDuration::from_minutes(5)));

        assert_eq!(dummy.blocked_by(&onfire), Some(&wet));
        let outcome = dummy.add_effect(AddEffect::new(&onfire, TimeDuration::from_minutes(1)));
        assert_eq!(outcome, AddOutcome::Blocked);
        assert!(!dummy.has_effect(&onfire));

        // Blocking is one-way
        assert!(dummy.blocked_by(&wet).is_none());

        dummy.remove_effect(&wet);
        assert!(dummy
            .add_effect(AddEffect::new(&onfire, TimeDuration::from_minutes(1)))
            .is_applied());
    }

    #[test]
    fn test_forced_add_ignores_block() {
        let mut turret = turret();
        let onfire = EffectTypeId::new("onfire");
        turret.add_effect(AddEffect::new("wet", TimeDuration::from_minutes(5)));

        let outcome =
            turret.add_effect(AddEffect::new(&onfire, TimeDuration::from_minutes(1)).forced());
        assert_eq!(outcome, AddOutcome::Applied);
        assert!(turret.has_effect(&onfire));
    }

    #[test]
    fn test_env_effect_resisted() {
        let mut dummy = character();
        let poison = EffectTypeId::new("poison");
        dummy.as_character_mut().unwrap().set_trait("POISRESIST");
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let outcomes = dummy.add_env_effect(
            AddEffect::new(&poison, TimeDuration::from_minutes(10)),
            &[BodyPart::Mouth, BodyPart::Eyes],
            100,
            &mut rng,
        );
        assert_eq!(outcomes, vec![AddOutcome::Resisted, AddOutcome::Resisted]);
        assert!(!dummy.has_effect(&poison));
    }

    #[test]
    fn test_env_effect_applies_to_each_part() {
        let mut dummy = character();
        let poison = EffectTypeId::new("poison");
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let outcomes = dummy.add_env_effect(
            AddEffect::new(&poison, TimeDuration::from_minutes(10)),
            &[BodyPart::Mouth, BodyPart::Eyes],
            100,
            &mut rng,
        );
        assert!(outcomes.iter().all(AddOutcome::is_applied));
        assert!(dummy.has_effect_on(&poison, BodyPart::Mouth));
        assert!(dummy.has_effect_on(&poison, BodyPart::Eyes));
        assert!(!dummy.has_effect_on(&poison, BodyPart::Torso));
    }

    #[test]
    fn test_env_effect_strength_gates_roll() {
        let mut dummy = character();
        let grabbed = EffectTypeId::new("grabbed");
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let outcomes = dummy.add_env_effect(
            AddEffect::new(&grabbed, TimeDuration::from_minutes(1)),
            &[],
            0,
            &mut rng,
        );
        assert_eq!(outcomes, vec![AddOutcome::Resisted]);
        assert!(!dummy.has_effect(&grabbed));

        // No parts listed: the requested target gets the one roll
        let outcomes = dummy.add_env_effect(
            AddEffect::new(&grabbed, TimeDuration::from_minutes(1)),
            &[],
            250,
            &mut rng,
        );
        assert_eq!(outcomes, vec![AddOutcome::Applied]);
        assert!(dummy.get_effect(&grabbed, EffectTarget::WholeBody).is_some());
    }

    #[test]
    fn test_env_effect_still_respects_immunity() {
        let mut turret = turret();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let outcomes = turret.add_env_effect(
            AddEffect::new("poison", TimeDuration::from_minutes(1)),
            &[],
            100,
            &mut rng,
        );
        assert_eq!(outcomes, vec![AddOutcome::Immune]);
    }
}
