//! Per-creature storage of active effects
//!
//! Effects are keyed first by effect type, then by target. A given
//! (effect type, target) pair holds at most one instance; inserting at an
//! occupied key replaces what was there. Empty inner maps are never kept, so
//! "has any instance of X" is just a presence check on the outer map.

use ahash::AHashMap;

use crate::core::duration::TimeDuration;
use crate::core::types::EffectTypeId;
use crate::effects::instance::EffectInstance;
use crate::effects::target::EffectTarget;

#[derive(Debug, Clone, Default)]
pub struct EffectStore {
    effects: AHashMap<EffectTypeId, AHashMap<EffectTarget, EffectInstance>>,
}

impl EffectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an instance, returning the one it replaced
    pub fn insert(&mut self, instance: EffectInstance) -> Option<EffectInstance> {
        self.effects
            .entry(instance.effect.clone())
            .or_default()
            .insert(instance.target, instance)
    }

    /// Remove the instance at exactly this key
    pub fn remove(
        &mut self,
        effect: &EffectTypeId,
        target: EffectTarget,
    ) -> Option<EffectInstance> {
        let by_target = self.effects.get_mut(effect)?;
        let removed = by_target.remove(&target);
        if by_target.is_empty() {
            self.effects.remove(effect);
        }
        removed
    }

    /// Remove every instance of an effect type, on every target
    ///
    /// Returns the number of instances removed.
    pub fn remove_all(&mut self, effect: &EffectTypeId) -> usize {
        self.effects
            .remove(effect)
            .map(|by_target| by_target.len())
            .unwrap_or(0)
    }

    /// Is any instance of this effect type present?
    pub fn contains(&self, effect: &EffectTypeId) -> bool {
        self.effects.contains_key(effect)
    }

    /// Is an instance present at exactly this key?
    pub fn contains_at(&self, effect: &EffectTypeId, target: EffectTarget) -> bool {
        self.get(effect, target).is_some()
    }

    pub fn get(&self, effect: &EffectTypeId, target: EffectTarget) -> Option<&EffectInstance> {
        self.effects.get(effect)?.get(&target)
    }

    /// All instances of one effect type
    pub fn instances_of<'a>(
        &'a self,
        effect: &EffectTypeId,
    ) -> impl Iterator<Item = &'a EffectInstance> + 'a {
        self.effects
            .get(effect)
            .into_iter()
            .flat_map(|by_target| by_target.values())
    }

    /// Effect types with at least one active instance
    pub fn effect_ids(&self) -> impl Iterator<Item = &EffectTypeId> {
        self.effects.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EffectInstance> {
        self.effects.values().flat_map(|by_target| by_target.values())
    }

    /// Instances sorted by effect id then target, for stable output
    pub fn snapshot(&self) -> Vec<EffectInstance> {
        let mut instances: Vec<EffectInstance> = self.iter().cloned().collect();
        instances.sort_by(|a, b| (&a.effect, a.target).cmp(&(&b.effect, b.target)));
        instances
    }

    pub fn len(&self) -> usize {
        self.effects.values().map(|by_target| by_target.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }

    /// Advance every instance by `elapsed`, dropping the ones that run out
    ///
    /// Expired instances are returned sorted by effect id then target.
    pub fn decay(&mut self, elapsed: TimeDuration) -> Vec<EffectInstance> {
        let mut expired = Vec::new();

        for by_target in self.effects.values_mut() {
            let done: Vec<EffectTarget> = by_target
                .iter_mut()
                .filter_map(|(target, instance)| instance.decay(elapsed).then_some(*target))
                .collect();
            for target in done {
                if let Some(instance) = by_target.remove(&target) {
                    expired.push(instance);
                }
            }
        }
        self.effects.retain(|_, by_target| !by_target.is_empty());

        expired.sort_by(|a, b| (&a.effect, a.target).cmp(&(&b.effect, b.target)));
        expired
    }
}
