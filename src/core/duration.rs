//! Turn-based durations
//!
//! One turn is one second of game time. Data files may spell durations as a
//! bare number of turns (`600`) or as a number with a unit suffix
//! (`"10 m"`, `"12 h"`, `"365 d"`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::EffectError;

pub const TURNS_PER_MINUTE: u64 = 60;
pub const TURNS_PER_HOUR: u64 = 60 * TURNS_PER_MINUTE;
pub const TURNS_PER_DAY: u64 = 24 * TURNS_PER_HOUR;

/// Non-negative span of game time measured in turns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "DurationRepr", into = "u64")]
pub struct TimeDuration(u64);

impl TimeDuration {
    pub const ZERO: TimeDuration = TimeDuration(0);

    pub const fn from_turns(turns: u64) -> Self {
        Self(turns)
    }

    pub const fn from_minutes(minutes: u64) -> Self {
        Self(minutes.saturating_mul(TURNS_PER_MINUTE))
    }

    pub const fn from_hours(hours: u64) -> Self {
        Self(hours.saturating_mul(TURNS_PER_HOUR))
    }

    pub const fn from_days(days: u64) -> Self {
        Self(days.saturating_mul(TURNS_PER_DAY))
    }

    pub fn turns(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Subtract, stopping at zero
    pub fn saturating_sub(self, other: TimeDuration) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl fmt::Display for TimeDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let turns = self.0;
        if turns != 0 && turns % TURNS_PER_DAY == 0 {
            write!(f, "{} d", turns / TURNS_PER_DAY)
        } else if turns != 0 && turns % TURNS_PER_HOUR == 0 {
            write!(f, "{} h", turns / TURNS_PER_HOUR)
        } else if turns != 0 && turns % TURNS_PER_MINUTE == 0 {
            write!(f, "{} m", turns / TURNS_PER_MINUTE)
        } else {
            write!(f, "{} s", turns)
        }
    }
}

impl FromStr for TimeDuration {
    type Err = EffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let split = text
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(text.len());
        let (number, unit) = text.split_at(split);

        let amount: u64 = number
            .parse()
            .map_err(|_| EffectError::InvalidDuration(s.to_string()))?;

        let scale = match unit.trim() {
            "" | "s" | "turns" => 1,
            "m" => TURNS_PER_MINUTE,
            "h" => TURNS_PER_HOUR,
            "d" => TURNS_PER_DAY,
            _ => return Err(EffectError::InvalidDuration(s.to_string())),
        };

        amount
            .checked_mul(scale)
            .map(TimeDuration)
            .ok_or_else(|| EffectError::InvalidDuration(s.to_string()))
    }
}

impl From<TimeDuration> for u64 {
    fn from(duration: TimeDuration) -> Self {
        duration.0
    }
}

/// Accepted spellings of a duration in data files
#[derive(Deserialize)]
#[serde(untagged)]
enum DurationRepr {
    Turns(u64),
    Text(String),
}

impl TryFrom<DurationRepr> for TimeDuration {
    type Error = EffectError;

    fn try_from(repr: DurationRepr) -> Result<Self, Self::Error> {
        match repr {
            DurationRepr::Turns(turns) => Ok(TimeDuration(turns)),
            DurationRepr::Text(text) => text.parse(),
        }
    }
}
