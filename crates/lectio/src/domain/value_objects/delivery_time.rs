//! DeliveryTime - Per-user "HH:MM" send time

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Wall-clock time of day a user receives their reading.
///
/// Matching is at minute granularity: a scheduler sweep that observes
/// the same hour and minute fires the delivery. Parsing is strict
/// two-digit `HH:MM`, mirroring the stored format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeliveryTime {
    hour: u32,
    minute: u32,
}

impl DeliveryTime {
    pub fn new(hour: u32, minute: u32) -> Result<Self, String> {
        if hour > 23 || minute > 59 {
            return Err(format!("Invalid delivery time: {:02}:{:02}", hour, minute));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// True when the wall clock is inside this delivery minute
    pub fn matches(&self, now: NaiveTime) -> bool {
        now.hour() == self.hour && now.minute() == self.minute
    }
}

impl Default for DeliveryTime {
    fn default() -> Self {
        Self { hour: 8, minute: 0 }
    }
}

impl std::fmt::Display for DeliveryTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl std::str::FromStr for DeliveryTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid delivery time (expected HH:MM): {}", s);

        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        if hour.len() != 2
            || minute.len() != 2
            || !hour.bytes().all(|b| b.is_ascii_digit())
            || !minute.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl TryFrom<String> for DeliveryTime {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DeliveryTime> for String {
    fn from(value: DeliveryTime) -> Self {
        value.to_string()
    }
}
