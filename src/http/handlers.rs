//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! existing service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::dto::{
    ActiveQuery, ApprovalData, ApproveRequest, GenerateRequest, GenerationData, HealthResponse,
    InstructorCalendarData, OverlapCheckData, OverlapCheckRequest, RejectionData, ScheduleListData,
    ScheduleView, UtilizationData,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{BatchId, InstructorId, ScheduleEntryId, Semester, UserId};
use crate::db::services as db_services;
use crate::scheduler;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn parse_semester(raw: &str) -> Result<Semester, AppError> {
    raw.parse().map_err(AppError::BadRequest)
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the repository
/// is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Timetable Generation
// =============================================================================

/// POST /v1/scheduling/generate
///
/// Run the solver for one term and store the result as a draft batch.
pub async fn generate_schedule(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<(StatusCode, Json<GenerationData>), AppError> {
    let semester = request
        .semester
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("Missing required field: semester".to_string()))?;
    let semester = parse_semester(semester)?;

    let year = request
        .year
        .ok_or_else(|| AppError::BadRequest("Missing required field: year".to_string()))?;
    let year = u16::try_from(year)
        .map_err(|_| AppError::BadRequest(format!("Year {} out of range", year)))?;

    let data = db_services::generate_timetable(
        state.repository.as_ref(),
        &state.generation_locks,
        semester,
        year,
        request.clear_existing,
        &state.solver,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(data)))
}

// =============================================================================
// Batch Lifecycle
// =============================================================================

/// POST /v1/scheduling/batches/{batch_id}/approve
///
/// Promote a draft batch to the active timetable. The body is optional;
/// omitting it archives the previously approved term rows.
pub async fn approve_schedule(
    State(state): State<AppState>,
    Path(batch_id): Path<Uuid>,
    request: Option<Json<ApproveRequest>>,
) -> HandlerResult<ApprovalData> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let approver = request.approver_id.map(UserId::new);

    let data = db_services::approve_timetable(
        state.repository.as_ref(),
        BatchId::from(batch_id),
        approver,
        request.archive_existing,
    )
    .await?;

    Ok(Json(data))
}

/// POST /v1/scheduling/batches/{batch_id}/reject
///
/// Delete a draft batch. Rejection is terminal; repeating the call yields 404.
pub async fn reject_schedule(
    State(state): State<AppState>,
    Path(batch_id): Path<Uuid>,
) -> HandlerResult<RejectionData> {
    let data =
        db_services::reject_timetable(state.repository.as_ref(), BatchId::from(batch_id)).await?;
    Ok(Json(data))
}

// =============================================================================
// Schedule Listings
// =============================================================================

/// GET /v1/scheduling/drafts
///
/// List all draft rows awaiting review.
pub async fn list_drafts(State(state): State<AppState>) -> HandlerResult<ScheduleListData> {
    let data = db_services::list_drafts(state.repository.as_ref()).await?;
    Ok(Json(data))
}

/// GET /v1/scheduling/active
///
/// List the approved timetable, optionally narrowed by semester and year.
pub async fn list_active(
    State(state): State<AppState>,
    Query(query): Query<ActiveQuery>,
) -> HandlerResult<ScheduleListData> {
    let semester = match query.semester.as_deref() {
        Some(raw) => Some(parse_semester(raw)?),
        None => None,
    };

    let data =
        db_services::list_active_schedules(state.repository.as_ref(), semester, query.year).await?;
    Ok(Json(data))
}

/// GET /v1/scheduling/{schedule_id}
///
/// Get a single schedule row joined with its catalog data.
pub async fn get_schedule_detail(
    State(state): State<AppState>,
    Path(schedule_id): Path<i64>,
) -> HandlerResult<ScheduleView> {
    let data = db_services::get_schedule_detail(
        state.repository.as_ref(),
        ScheduleEntryId::new(schedule_id),
    )
    .await?;
    Ok(Json(data))
}

// =============================================================================
// Instructor Views
// =============================================================================

/// GET /v1/scheduling/instructor/{instructor_id}
///
/// List one instructor's approved teaching, week ordered.
pub async fn get_instructor_schedule(
    State(state): State<AppState>,
    Path(instructor_id): Path<i64>,
) -> HandlerResult<ScheduleListData> {
    let data = db_services::instructor_schedule(
        state.repository.as_ref(),
        InstructorId::new(instructor_id),
    )
    .await?;
    Ok(Json(data))
}

/// GET /v1/scheduling/instructor/{instructor_id}/calendar
///
/// Get one instructor's weekly calendar with rendered summaries.
pub async fn get_instructor_calendar(
    State(state): State<AppState>,
    Path(instructor_id): Path<i64>,
) -> HandlerResult<InstructorCalendarData> {
    let data = db_services::instructor_calendar(
        state.repository.as_ref(),
        InstructorId::new(instructor_id),
    )
    .await?;
    Ok(Json(data))
}

// =============================================================================
// Analytics
// =============================================================================

/// GET /v1/analytics/utilization
///
/// Classroom and weekday utilization over the approved timetable.
pub async fn get_classroom_utilization(
    State(state): State<AppState>,
) -> HandlerResult<UtilizationData> {
    let data = db_services::classroom_utilization(state.repository.as_ref()).await?;
    Ok(Json(data))
}

// =============================================================================
// Conflict Probe
// =============================================================================

/// POST /v1/scheduling/conflicts/check
///
/// Check whether two weekly intervals overlap. Intervals are half-open, so
/// back-to-back blocks do not collide.
pub async fn check_overlap(
    State(_state): State<AppState>,
    Json(request): Json<OverlapCheckRequest>,
) -> HandlerResult<OverlapCheckData> {
    for spec in [&request.a, &request.b] {
        if spec.start >= spec.end {
            return Err(AppError::BadRequest(format!(
                "Interval start {} must precede end {}",
                spec.start, spec.end
            )));
        }
    }

    let overlaps = scheduler::overlaps(
        request.a.day,
        request.a.start,
        request.a.end,
        request.b.day,
        request.b.start,
        request.b.end,
    );

    Ok(Json(OverlapCheckData { overlaps }))
}
