//! A single active effect on a creature

use serde::{Deserialize, Serialize};

use crate::core::duration::TimeDuration;
use crate::core::types::EffectTypeId;
use crate::effects::target::EffectTarget;

/// An effect currently applied to a creature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectInstance {
    pub effect: EffectTypeId,
    pub target: EffectTarget,
    /// Remaining duration
    pub duration: TimeDuration,
    pub intensity: u32,
}

impl EffectInstance {
    pub fn new(
        effect: impl Into<EffectTypeId>,
        target: EffectTarget,
        duration: TimeDuration,
        intensity: u32,
    ) -> Self {
        Self {
            effect: effect.into(),
            target,
            duration,
            intensity,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.duration.is_zero()
    }

    /// Run the clock down; returns true once the effect has expired
    pub fn decay(&mut self, elapsed: TimeDuration) -> bool {
        self.duration = self.duration.saturating_sub(elapsed);
        self.is_expired()
    }
}
