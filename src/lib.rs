//! Creature Effects - data-driven status effects for creatures
//!
//! Effect types, monster species and materials are loaded from TOML into
//! an immutable `GameData`. Characters and monsters each own an effect
//! store keyed by effect type and body part, and decide per variant which
//! effects they are immune to.

pub mod core;
pub mod creature;
pub mod effects;
pub mod registry;
pub mod report;

pub use crate::core::{EffectError, EffectsConfig, Result, TimeDuration};
pub use crate::creature::{AddEffect, AddOutcome, Character, Creature, Monster};
pub use crate::effects::{BodyPart, EffectInstance, EffectTarget};
pub use crate::registry::GameData;
