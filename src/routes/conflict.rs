use serde::{Deserialize, Serialize};

use crate::api::{DayOfWeek, TimeOfDay};

// =========================================================
// Overlap check types
// =========================================================

/// One weekly interval, half-open over `[start, end)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IntervalSpec {
    pub day: DayOfWeek,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

/// Result of an overlap probe between two intervals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OverlapCheckData {
    pub overlaps: bool,
}

/// Route function name constant for the overlap probe
pub const CHECK_OVERLAP: &str = "check_overlap";
