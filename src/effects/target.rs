//! Where an effect sits on a creature
//!
//! Characters can carry an effect on a single body part or on the body as a
//! whole. Monsters have no anatomy and only ever use the whole-body key.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Body parts of a humanoid character (12 total)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BodyPart {
    #[serde(rename = "head")]
    Head,
    #[serde(rename = "eyes")]
    Eyes,
    #[serde(rename = "mouth")]
    Mouth,
    #[serde(rename = "torso")]
    Torso,
    #[serde(rename = "arm_l")]
    ArmLeft,
    #[serde(rename = "arm_r")]
    ArmRight,
    #[serde(rename = "hand_l")]
    HandLeft,
    #[serde(rename = "hand_r")]
    HandRight,
    #[serde(rename = "leg_l")]
    LegLeft,
    #[serde(rename = "leg_r")]
    LegRight,
    #[serde(rename = "foot_l")]
    FootLeft,
    #[serde(rename = "foot_r")]
    FootRight,
}

impl BodyPart {
    /// Returns all body parts
    pub fn all() -> [BodyPart; 12] {
        [
            BodyPart::Head,
            BodyPart::Eyes,
            BodyPart::Mouth,
            BodyPart::Torso,
            BodyPart::ArmLeft,
            BodyPart::ArmRight,
            BodyPart::HandLeft,
            BodyPart::HandRight,
            BodyPart::LegLeft,
            BodyPart::LegRight,
            BodyPart::FootLeft,
            BodyPart::FootRight,
        ]
    }

    /// Short identifier used in data files and logs
    pub fn id(&self) -> &'static str {
        match self {
            BodyPart::Head => "head",
            BodyPart::Eyes => "eyes",
            BodyPart::Mouth => "mouth",
            BodyPart::Torso => "torso",
            BodyPart::ArmLeft => "arm_l",
            BodyPart::ArmRight => "arm_r",
            BodyPart::HandLeft => "hand_l",
            BodyPart::HandRight => "hand_r",
            BodyPart::LegLeft => "leg_l",
            BodyPart::LegRight => "leg_r",
            BodyPart::FootLeft => "foot_l",
            BodyPart::FootRight => "foot_r",
        }
    }

    /// Look up a part by its identifier; unknown ids are simply absent
    pub fn from_id(id: &str) -> Option<BodyPart> {
        BodyPart::all().into_iter().find(|part| part.id() == id)
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Key half of an effect instance: the whole body or one part of it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectTarget {
    #[default]
    WholeBody,
    Part(BodyPart),
}

impl EffectTarget {
    pub fn body_part(&self) -> Option<BodyPart> {
        match self {
            EffectTarget::WholeBody => None,
            EffectTarget::Part(part) => Some(*part),
        }
    }

    pub fn is_whole_body(&self) -> bool {
        matches!(self, EffectTarget::WholeBody)
    }
}

impl From<BodyPart> for EffectTarget {
    fn from(part: BodyPart) -> Self {
        EffectTarget::Part(part)
    }
}

impl fmt::Display for EffectTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectTarget::WholeBody => f.write_str("whole body"),
            EffectTarget::Part(part) => fmt::Display::fmt(part, f),
        }
    }
}
