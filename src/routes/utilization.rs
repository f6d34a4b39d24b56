use serde::{Deserialize, Serialize};

use crate::api::{ClassroomId, DayOfWeek};

// =========================================================
// Utilization types
// =========================================================

/// Approved row count for one classroom.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassroomUsage {
    pub classroom_id: ClassroomId,
    pub code: String,
    pub building: String,
    pub capacity: u32,
    pub schedule_count: usize,
}

/// Approved row count for one weekday.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayUsage {
    pub day: DayOfWeek,
    pub count: usize,
}

/// Utilization report over the approved timetable.
///
/// Classrooms are ordered by id, days in weekday order; days without any
/// approved row are omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UtilizationData {
    pub classroom_usage: Vec<ClassroomUsage>,
    pub day_distribution: Vec<DayUsage>,
}

/// Route function name constant for classroom utilization
pub const GET_CLASSROOM_UTILIZATION: &str = "get_classroom_utilization";
