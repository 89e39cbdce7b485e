use std::fmt;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// Duration or offset in 100 ns units, as used for run times and playback
/// positions. Serialized as a plain integer.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Ticks(i64);

impl Ticks {
    pub const PER_MILLISECOND: i64 = 10_000;
    pub const PER_SECOND: i64 = 10_000_000;

    pub const ZERO: Ticks = Ticks(0);

    pub fn new(ticks: i64) -> Self {
        Ticks(ticks)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn from_seconds(seconds: i64) -> Self {
        Ticks(seconds.saturating_mul(Self::PER_SECOND))
    }

    pub fn from_millis(millis: i64) -> Self {
        Ticks(millis.saturating_mul(Self::PER_MILLISECOND))
    }

    pub fn as_seconds(&self) -> i64 {
        self.0 / Self::PER_SECOND
    }

    pub fn as_millis(&self) -> i64 {
        self.0 / Self::PER_MILLISECOND
    }

    /// Sub-tick precision is truncated toward zero.
    pub fn from_duration(duration: TimeDelta) -> Self {
        match duration.num_nanoseconds() {
            Some(nanos) => Ticks(nanos / 100),
            // Out of nanosecond range: fall back to microsecond resolution.
            None => {
                let saturated = if duration < TimeDelta::zero() {
                    i64::MIN
                } else {
                    i64::MAX
                };
                Ticks(
                    duration
                        .num_microseconds()
                        .map_or(saturated, |micros| micros.saturating_mul(10)),
                )
            }
        }
    }

    pub fn as_duration(&self) -> TimeDelta {
        let seconds = self.0.div_euclid(Self::PER_SECOND);
        let nanos = self.0.rem_euclid(Self::PER_SECOND) * 100;
        TimeDelta::seconds(seconds) + TimeDelta::nanoseconds(nanos)
    }
}

impl fmt::Display for Ticks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Ticks {
    fn from(ticks: i64) -> Self {
        Ticks(ticks)
    }
}

impl From<Ticks> for i64 {
    fn from(ticks: Ticks) -> Self {
        ticks.0
    }
}

impl From<TimeDelta> for Ticks {
    fn from(duration: TimeDelta) -> Self {
        Ticks::from_duration(duration)
    }
}

impl From<Ticks> for TimeDelta {
    fn from(ticks: Ticks) -> Self {
        ticks.as_duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_between_ticks_and_durations() {
        let ticks = Ticks::from_seconds(90);
        assert_eq!(ticks.value(), 900_000_000);
        assert_eq!(ticks.as_duration(), TimeDelta::seconds(90));
        assert_eq!(Ticks::from(TimeDelta::milliseconds(1_500)).as_millis(), 1_500);
        assert_eq!(Ticks::new(-15_000_000).as_duration(), TimeDelta::milliseconds(-1_500));
    }

    #[test]
    fn serializes_as_plain_integer() {
        let json = serde_json::to_string(&Ticks::new(123)).expect("serialize");
        assert_eq!(json, "123");
        let back: Ticks = serde_json::from_str("456").expect("deserialize");
        assert_eq!(back, Ticks::new(456));
    }
}
