use serde::{Deserialize, Serialize};

use crate::api::{BatchId, ScheduleStatus, SectionId};

// =========================================================
// Generation types
// =========================================================

/// Outcome of one timetable generation run.
///
/// The batch id ties together every draft row the run produced; sections the
/// solver could not place are listed so the caller can adjust the catalog
/// and rerun.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationData {
    pub batch_id: BatchId,
    pub status: ScheduleStatus,
    pub placed: usize,
    pub unplaced_section_ids: Vec<SectionId>,
    pub steps_used: u64,
    pub budget_exhausted: bool,
}

/// Route function name constant for generation
pub const GENERATE_SCHEDULE: &str = "generate_schedule";
