//! Public API surface for the Rust backend.
//!
//! This file consolidates the core entity and DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::approval::ApprovalData;
pub use crate::routes::approval::RejectionData;
pub use crate::routes::calendar::CalendarEvent;
pub use crate::routes::calendar::InstructorCalendarData;
pub use crate::routes::conflict::IntervalSpec;
pub use crate::routes::conflict::OverlapCheckData;
pub use crate::routes::generation::GenerationData;
pub use crate::routes::listing::ScheduleListData;
pub use crate::routes::listing::ScheduleView;
pub use crate::routes::utilization::ClassroomUsage;
pub use crate::routes::utilization::DayUsage;
pub use crate::routes::utilization::UtilizationData;

use crate::define_id_type;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

define_id_type!(i64, SectionId);
define_id_type!(i64, ClassroomId);
define_id_type!(i64, InstructorId);
define_id_type!(i64, ScheduleEntryId);
define_id_type!(i64, UserId);

/// Identifier shared by every schedule row produced by one generation run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BatchId(pub Uuid);

impl BatchId {
    pub fn new(value: Uuid) -> Self {
        BatchId(value)
    }

    /// Mint a fresh random batch identifier.
    pub fn generate() -> Self {
        BatchId(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for BatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for BatchId {
    fn from(value: Uuid) -> Self {
        BatchId(value)
    }
}

impl std::str::FromStr for BatchId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(BatchId)
            .map_err(|e| format!("invalid batch id {s:?}: {e}"))
    }
}

pub use crate::models::DayOfWeek;
pub use crate::models::Slot;
pub use crate::models::TimeOfDay;

/// Academic term within a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Semester {
    Fall,
    Spring,
}

impl Semester {
    pub fn as_str(&self) -> &'static str {
        match self {
            Semester::Fall => "Fall",
            Semester::Spring => "Spring",
        }
    }
}

impl std::fmt::Display for Semester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Semester {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fall" => Ok(Semester::Fall),
            "spring" => Ok(Semester::Spring),
            _ => Err(format!("unknown semester: {s:?}")),
        }
    }
}

/// Room category used to match sections to compatible classrooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Classroom,
    Lab,
    Studio,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Classroom => "classroom",
            RoomType::Lab => "lab",
            RoomType::Studio => "studio",
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RoomType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classroom" => Ok(RoomType::Classroom),
            "lab" => Ok(RoomType::Lab),
            "studio" => Ok(RoomType::Studio),
            _ => Err(format!("unknown room type: {s:?}")),
        }
    }
}

/// Lifecycle state of a schedule row.
///
/// Rows are born `Draft`, become `Approved` or are deleted on rejection,
/// and previously approved rows move to `Archived` when a newer batch
/// for the same term is approved with `archive_existing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    Draft,
    Approved,
    Rejected,
    Archived,
}

impl ScheduleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleStatus::Draft => "draft",
            ScheduleStatus::Approved => "approved",
            ScheduleStatus::Rejected => "rejected",
            ScheduleStatus::Archived => "archived",
        }
    }
}

impl std::fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical teaching room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classroom {
    /// Database ID (optional on input, server-assigned)
    #[serde(default)]
    pub id: Option<ClassroomId>,
    /// Room code shown on timetables (e.g. "SCI-101")
    pub code: String,
    pub building: String,
    pub room_number: String,
    /// Seat count, must be positive
    pub capacity: u32,
    pub room_type: RoomType,
}

impl Classroom {
    pub fn new(
        code: String,
        building: String,
        room_number: String,
        capacity: u32,
        room_type: RoomType,
    ) -> Result<Self, String> {
        if code.trim().is_empty() {
            return Err("Classroom code must not be empty".to_string());
        }
        if capacity == 0 {
            return Err("Classroom capacity must be positive".to_string());
        }
        Ok(Self {
            id: None,
            code,
            building,
            room_number,
            capacity,
            room_type,
        })
    }
}

/// One offering of a course in a given term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSection {
    /// Database ID (optional on input, server-assigned)
    #[serde(default)]
    pub id: Option<SectionId>,
    /// Course code shown to students (e.g. "COMP101")
    pub course_code: String,
    pub section_number: u32,
    pub semester: Semester,
    pub year: u16,
    pub instructor_id: InstructorId,
    /// Enrollment ceiling, must be positive
    pub capacity: u32,
    /// Students currently enrolled, never above `capacity`
    #[serde(default)]
    pub enrolled_count: u32,
    /// Required room category; `None` accepts any room
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_type: Option<RoomType>,
}

impl CourseSection {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        course_code: String,
        section_number: u32,
        semester: Semester,
        year: u16,
        instructor_id: InstructorId,
        capacity: u32,
        enrolled_count: u32,
        room_type: Option<RoomType>,
    ) -> Result<Self, String> {
        if course_code.trim().is_empty() {
            return Err("Course code must not be empty".to_string());
        }
        if capacity == 0 {
            return Err("Section capacity must be positive".to_string());
        }
        if enrolled_count > capacity {
            return Err(format!(
                "Enrolled count {enrolled_count} exceeds capacity {capacity}"
            ));
        }
        Ok(Self {
            id: None,
            course_code,
            section_number,
            semester,
            year,
            instructor_id,
            capacity,
            enrolled_count,
            room_type,
        })
    }

    /// Human-readable label used in calendars and logs.
    pub fn label(&self) -> String {
        format!("{} (section {})", self.course_code, self.section_number)
    }
}

/// One placed weekly meeting of a section in a classroom.
///
/// The term is denormalized from the section so that status and term
/// filters never need a join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Database ID (optional on input, server-assigned)
    #[serde(default)]
    pub id: Option<ScheduleEntryId>,
    pub section_id: SectionId,
    pub classroom_id: ClassroomId,
    pub semester: Semester,
    pub year: u16,
    pub day_of_week: DayOfWeek,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub status: ScheduleStatus,
    pub batch_id: BatchId,
    /// Approving user, absent until the batch is approved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<UserId>,
    /// Approval instant, absent until the batch is approved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
}

impl ScheduleEntry {
    /// The weekly interval this entry occupies.
    pub fn slot(&self) -> Slot {
        Slot::new(self.day_of_week, self.start_time, self.end_time)
    }
}
