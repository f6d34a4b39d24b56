use serde::*;
use std::fmt;
use std::str::FromStr;

/// Minute-of-day clock time, `00:00` .. `23:59`.
/// Stored as minutes since midnight so interval math stays integer-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MINUTES_PER_DAY: u16 = 24 * 60;

    /// Constant-friendly constructor. Out-of-range input clamps to `23:59`;
    /// use [`TimeOfDay::from_hm`] where bad input must be reported.
    pub const fn hm(hour: u8, minute: u8) -> Self {
        let total = hour as u16 * 60 + minute as u16;
        if total >= Self::MINUTES_PER_DAY {
            Self(Self::MINUTES_PER_DAY - 1)
        } else {
            Self(total)
        }
    }

    /// Create from an hour/minute pair. Returns `Err` for out-of-range parts.
    pub fn from_hm(hour: u8, minute: u8) -> Result<Self, String> {
        if hour >= 24 {
            return Err(format!("hour out of range: {hour}"));
        }
        if minute >= 60 {
            return Err(format!("minute out of range: {minute}"));
        }
        Ok(Self(hour as u16 * 60 + minute as u16))
    }

    /// Create from raw minutes since midnight. Returns `Err` past `23:59`.
    pub fn from_minutes(minutes: u16) -> Result<Self, String> {
        if minutes >= Self::MINUTES_PER_DAY {
            return Err(format!("minutes out of range: {minutes}"));
        }
        Ok(Self(minutes))
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u16 {
        self.0
    }

    pub fn hour(&self) -> u8 {
        (self.0 / 60) as u8
    }

    pub fn minute(&self) -> u8 {
        (self.0 % 60) as u8
    }

    /// Offset this time by `delta` minutes, clamping at `23:59`.
    pub fn add_minutes(&self, delta: u16) -> Self {
        let total = self.0.saturating_add(delta);
        Self(total.min(Self::MINUTES_PER_DAY - 1))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = String;

    /// Parse `"HH:MM"` (24-hour clock, zero padding optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| format!("invalid time literal: {s:?}"))?;
        let hour: u8 = h
            .parse()
            .map_err(|_| format!("invalid hour in time literal: {s:?}"))?;
        let minute: u8 = m
            .parse()
            .map_err(|_| format!("invalid minute in time literal: {s:?}"))?;
        Self::from_hm(hour, minute)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Day of the week. Ordering follows the academic week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub fn all() -> [DayOfWeek; 7] {
        [
            DayOfWeek::Monday,
            DayOfWeek::Tuesday,
            DayOfWeek::Wednesday,
            DayOfWeek::Thursday,
            DayOfWeek::Friday,
            DayOfWeek::Saturday,
            DayOfWeek::Sunday,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monday" => Ok(DayOfWeek::Monday),
            "tuesday" => Ok(DayOfWeek::Tuesday),
            "wednesday" => Ok(DayOfWeek::Wednesday),
            "thursday" => Ok(DayOfWeek::Thursday),
            "friday" => Ok(DayOfWeek::Friday),
            "saturday" => Ok(DayOfWeek::Saturday),
            "sunday" => Ok(DayOfWeek::Sunday),
            _ => Err(format!("unknown day of week: {s:?}")),
        }
    }
}

/// A weekly meeting interval: one day, half-open time range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub day: DayOfWeek,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl Slot {
    pub fn new(day: DayOfWeek, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { day, start, end }
    }

    /// A slot is well formed when it covers at least one minute.
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.day, self.start, self.end)
    }
}
