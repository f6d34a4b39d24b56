//! Shared data models re-exported for storage layer consumers.

pub use crate::api::{
    BatchId, Classroom, ClassroomId, CourseSection, InstructorId, RoomType, ScheduleEntry,
    ScheduleEntryId, ScheduleStatus, SectionId, Semester, UserId, UtilizationData,
};
pub use crate::models::{DayOfWeek, Slot, TimeOfDay};

/// Row counts from resolving one batch.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct BatchResolution {
    /// Draft rows promoted to approved.
    pub approved: usize,
    /// Previously approved rows of the same term moved to archived.
    pub archived: usize,
}

impl BatchResolution {
    pub fn new(approved: usize, archived: usize) -> Self {
        Self { approved, archived }
    }
}

/// Row counts from seeding a catalog into a repository.
#[derive(Debug, Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
pub struct SeedSummary {
    pub classrooms: usize,
    pub sections: usize,
}
