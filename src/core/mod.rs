pub mod config;
pub mod duration;
pub mod error;
pub mod types;

pub use config::{config, set_config, EffectsConfig};
pub use duration::TimeDuration;
pub use error::{EffectError, Result};
