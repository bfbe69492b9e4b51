//! Core identifiers used throughout the crate
//!
//! Data-driven ids (effects, flags, traits, species, materials, monster
//! types) are interned as owned strings and compared by value. Creatures
//! themselves get a random UUID so log lines can tell two zombies apart.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a live creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreatureId(pub Uuid);

impl CreatureId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CreatureId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // First block of the UUID is plenty for log correlation
        let text = self.0.to_string();
        f.write_str(text.split('-').next().unwrap_or(&text))
    }
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&$name> for $name {
            fn from(id: &$name) -> Self {
                id.clone()
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Effect type identifier, e.g. `bleed` or `downed`
    EffectTypeId
);
string_id!(
    /// Flag carried by an effect type, e.g. `EFFECT_INVISIBLE`
    FlagId
);
string_id!(
    /// Character trait or mutation, e.g. `SLIMY`
    TraitId
);
string_id!(
    /// Monster species, e.g. `ZOMBIE`
    SpeciesId
);
string_id!(MaterialId);
string_id!(MonsterTypeId);
