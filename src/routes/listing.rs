use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{
    BatchId, DayOfWeek, InstructorId, ScheduleEntryId, ScheduleStatus, Semester, TimeOfDay, UserId,
};

// =========================================================
// Schedule listing types
// =========================================================

/// One schedule row joined with its catalog data.
///
/// Catalog fields are left blank when the referenced section or classroom no
/// longer exists, so a stale row still renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleView {
    pub id: Option<ScheduleEntryId>,
    pub course_code: String,
    pub section_number: u32,
    pub instructor_id: Option<InstructorId>,
    pub classroom_code: String,
    pub building: String,
    pub room_number: String,
    pub semester: Semester,
    pub year: u16,
    pub day_of_week: DayOfWeek,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub status: ScheduleStatus,
    pub batch_id: BatchId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
}

/// A list of schedule rows with its length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleListData {
    pub schedules: Vec<ScheduleView>,
    pub total: usize,
}

/// Route function name constant for draft listing
pub const LIST_DRAFT_SCHEDULES: &str = "list_draft_schedules";

/// Route function name constant for active listing
pub const LIST_ACTIVE_SCHEDULES: &str = "list_active_schedules";

/// Route function name constant for single row lookup
pub const GET_SCHEDULE_DETAIL: &str = "get_schedule_detail";
