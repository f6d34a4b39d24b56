use serde::{Deserialize, Serialize};

use crate::api::{DayOfWeek, InstructorId, TimeOfDay};

// =========================================================
// Instructor calendar types
// =========================================================

/// One weekly calendar entry, ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Course label, e.g. "COMP101 (section 2)".
    pub summary: String,
    pub day_of_week: DayOfWeek,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    /// Building and room, e.g. "Science 101".
    pub location: String,
}

/// Weekly calendar of one instructor's approved teaching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstructorCalendarData {
    pub instructor_id: InstructorId,
    pub events: Vec<CalendarEvent>,
}

/// Route function name constant for instructor schedule listing
pub const GET_INSTRUCTOR_SCHEDULE: &str = "get_instructor_schedule";

/// Route function name constant for instructor calendar
pub const GET_INSTRUCTOR_CALENDAR: &str = "get_instructor_calendar";
