//! `Timestamp` value type
//!
//! A point in elapsed album time parsed from loosely written `hh:mm:ss`
//! strings (`"9"`, `"0:09"`, `"00:0:09"`, `"1:02:03"`). Identity is the
//! total number of seconds: two inputs that denote the same amount of time
//! are equal, hash identically and render to the same canonical string.

use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Maximum number of `:`-separated components (`hh:mm:ss`).
const MAX_COMPONENTS: usize = 3;

/// Largest value accepted in a single component.
///
/// `60` is accepted and used literally (`"1:60"` is 120 seconds), it does not
/// roll over into the next unit during parsing.
const MAX_COMPONENT_VALUE: u32 = 60;

/// Raised when a time token is not shaped like `hh:mm:ss` or a component is
/// outside `[0, 60]`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Timestamp given: '{input}'. Please use the 'hh:mm:ss' format.")]
pub struct TimestampError {
    pub input: String,
}

impl TimestampError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

/// Canonical elapsed-time value with whole-second resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp {
    seconds: u32,
}

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp { seconds: 0 };

    /// Parses `text` (1 to 3 `:`-separated components of 1-2 digits each).
    ///
    /// A bare number is seconds: `"45"` is 45 seconds, not 45 minutes.
    pub fn parse(text: &str) -> Result<Self, TimestampError> {
        let components: Vec<&str> = text.split(':').collect();
        if components.len() > MAX_COMPONENTS {
            return Err(TimestampError::new(text));
        }

        let mut seconds: u32 = 0;
        for component in components {
            if component.is_empty() || component.len() > 2 || !component.bytes().all(|b| b.is_ascii_digit()) {
                return Err(TimestampError::new(text));
            }
            let value: u32 = component.parse().map_err(|_| TimestampError::new(text))?;
            if value > MAX_COMPONENT_VALUE {
                return Err(TimestampError::new(text));
            }
            seconds = seconds * 60 + value;
        }

        Ok(Self { seconds })
    }

    pub const fn from_seconds(seconds: u32) -> Self {
        Self { seconds }
    }

    /// Total whole seconds.
    pub const fn to_seconds(self) -> u32 {
        self.seconds
    }

    /// Canonical minimal form: `m:ss` below one hour, `h:mm:ss` otherwise.
    pub fn render(self) -> String {
        super::format_timestamp(self.seconds)
    }

    /// Subtraction that refuses to go below zero.
    pub fn checked_sub(self, other: Timestamp) -> Option<Timestamp> {
        self.seconds.checked_sub(other.seconds).map(Timestamp::from_seconds)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timestamp::parse(s)
    }
}

impl TryFrom<&str> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Timestamp::parse(value)
    }
}

impl Add for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: Timestamp) -> Timestamp {
        Timestamp::from_seconds(self.seconds.saturating_add(rhs.seconds))
    }
}

impl AddAssign for Timestamp {
    fn add_assign(&mut self, rhs: Timestamp) {
        *self = *self + rhs;
    }
}

/// Saturates at [`Timestamp::ZERO`]; use [`Timestamp::checked_sub`] to detect underflow.
impl Sub for Timestamp {
    type Output = Timestamp;

    fn sub(self, rhs: Timestamp) -> Timestamp {
        Timestamp::from_seconds(self.seconds.saturating_sub(rhs.seconds))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.render())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Timestamp::parse(&text).map_err(serde::de::Error::custom)
    }
}
