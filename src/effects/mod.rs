//! Active effect bookkeeping: targets, instances and the per-creature store

pub mod instance;
pub mod store;
pub mod target;

pub use instance::EffectInstance;
pub use store::EffectStore;
pub use target::{BodyPart, EffectTarget};
