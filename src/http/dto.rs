//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Most response DTOs are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Approval
    ApprovalData,
    RejectionData,
    // Calendar
    CalendarEvent,
    InstructorCalendarData,
    // Conflict probe
    IntervalSpec,
    OverlapCheckData,
    // Generation
    GenerationData,
    // Listing
    ScheduleListData,
    ScheduleView,
    // Utilization
    ClassroomUsage,
    DayUsage,
    UtilizationData,
};

/// Request body for generating a draft timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Term to schedule ("Fall" or "Spring")
    pub semester: Option<String>,
    /// Year to schedule
    pub year: Option<i32>,
    /// Remove previous draft rows for the term first (default: true)
    #[serde(default = "default_true")]
    pub clear_existing: bool,
}

/// Request body for approving a draft batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApproveRequest {
    /// Archive currently approved rows for the same term (default: true)
    #[serde(default = "default_true")]
    pub archive_existing: bool,
    /// User recorded as the approver
    #[serde(default)]
    pub approver_id: Option<i64>,
}

impl Default for ApproveRequest {
    fn default() -> Self {
        Self {
            archive_existing: true,
            approver_id: None,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Query parameters for the active timetable listing.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ActiveQuery {
    /// Narrow to one semester ("Fall" or "Spring")
    #[serde(default)]
    pub semester: Option<String>,
    /// Narrow to one year
    #[serde(default)]
    pub year: Option<u16>,
}

/// Request body for the interval overlap probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlapCheckRequest {
    pub a: IntervalSpec,
    pub b: IntervalSpec,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Repository connection status
    pub database: String,
}
