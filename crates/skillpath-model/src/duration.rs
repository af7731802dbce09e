//! Elapsed-time values authored as `H:MM:SS` in catalog files.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use crate::error::ModelError;

/// Duration of a learning node, stored as whole seconds.
///
/// Catalogs author durations as `H:MM:SS` (hours unbounded, minutes and
/// seconds strictly below 60). Serializes back to the same form.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Duration(u64);

impl Duration {
    pub fn from_seconds(seconds: u64) -> Self {
        Duration(seconds)
    }

    pub fn as_seconds(&self) -> u64 {
        self.0
    }
}

impl FromStr for Duration {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidDuration {
            value: s.to_string(),
        };
        let mut parts = s.trim().split(':');
        let hours: u64 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let minutes: u64 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let seconds: u64 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        if parts.next().is_some() || minutes >= 60 || seconds >= 60 {
            return Err(invalid());
        }
        Ok(Duration(hours * 3600 + minutes * 60 + seconds))
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / 3600;
        let minutes = (self.0 % 3600) / 60;
        let seconds = self.0 % 60;
        write!(f, "{hours}:{minutes:02}:{seconds:02}")
    }
}

impl TryFrom<String> for Duration {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Duration> for String {
    fn from(value: Duration) -> Self {
        value.to_string()
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration(self.0 + rhs.0)
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Duration) {
        self.0 += rhs.0;
    }
}
