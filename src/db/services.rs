//! High-level database service layer.
//!
//! This module provides repository-agnostic operations that work with any
//! implementation of the repository traits. These functions contain the
//! business logic of the timetable lifecycle, such as draft generation,
//! batch promotion, and view assembly, that should be consistent regardless
//! of the storage backend.
//!
//! # Architecture
//!
//! The database module follows a layered architecture:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, CLI, tests)               │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - Business Logic           │
//! │  - Timetable generation orchestration                   │
//! │  - Batch approval / rejection                           │
//! │  - Schedule view assembly                               │
//! └───────────┬─────────────────────────┬───────────────────┘
//!             │                         │
//! ┌───────────▼──────────────┐  ┌───────▼───────────────────┐
//! │  Repository Traits        │  │  Solver (scheduler/)      │
//! │  - ScheduleRepository     │  │  - candidate enumeration  │
//! │  - CatalogRepository      │  │  - backtracking search    │
//! │  - AnalyticsRepository    │  └───────────────────────────┘
//! └───────────┬──────────────┘
//!             │
//! ┌───────────▼──────────────┐
//! │  Local Repository        │
//! │  (in-memory)             │
//! └──────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use campus_scheduler::db::{services, repositories::LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!
//!     let drafts = services::list_drafts(&repo).await?;
//!     println!("Found {} draft rows", drafts.total);
//!
//!     Ok(())
//! }
//! ```

use chrono::Utc;
use log::{info, warn};
use std::collections::HashMap;

use super::models::SeedSummary;
use super::repository::{FullRepository, RepositoryError, RepositoryResult};
use crate::api::{
    ApprovalData, BatchId, CalendarEvent, Classroom, ClassroomId, CourseSection, GenerationData,
    InstructorCalendarData, InstructorId, RejectionData, ScheduleEntry, ScheduleEntryId,
    ScheduleListData, ScheduleStatus, ScheduleView, SectionId, Semester, UserId, UtilizationData,
};
use crate::models::CatalogData;
use crate::scheduler::{self, SolverConfig};
use crate::services::generation::GenerationLocks;

// ==================== Health & Connection ====================

/// Check if the repository connection is healthy.
///
/// This is a simple pass-through to the repository's health check.
///
/// # Arguments
/// * `repo` - Repository implementation
///
/// # Returns
/// * `Ok(true)` if connection is healthy
/// * `Err` if check fails
pub async fn health_check<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Timetable Generation ====================

/// Generate a draft timetable for one term.
///
/// This function orchestrates the complete generation process:
/// 1. Serialize against other generation runs for the same term
/// 2. Optionally clear previous draft rows for the term
/// 3. Load the section and classroom catalog for the term
/// 4. Run the backtracking solver
/// 5. Persist the placements as one draft batch
///
/// The solver output is re-checked for double bookings before it is stored;
/// a hit there means a solver bug and surfaces as a `ConflictError` rather
/// than a corrupted timetable.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `locks` - Per-term generation locks
/// * `semester` - Term to schedule
/// * `year` - Year to schedule
/// * `clear_existing` - Remove previous draft rows for the term first
/// * `solver` - Step budget and slot grid for the search
///
/// # Returns
/// * `Ok(GenerationData)` - Batch id and placement summary
/// * `Err` if the catalog cannot be read or the batch cannot be stored
pub async fn generate_timetable<R: FullRepository + ?Sized>(
    repo: &R,
    locks: &GenerationLocks,
    semester: Semester,
    year: u16,
    clear_existing: bool,
    solver: &SolverConfig,
) -> RepositoryResult<GenerationData> {
    let _permit = locks.acquire(semester, year).await;

    info!(
        "Service layer: generating timetable for {} {} (clear_existing={})",
        semester, year, clear_existing
    );

    if clear_existing {
        let removed = repo.clear_drafts(semester, year).await?;
        if removed > 0 {
            info!(
                "Service layer: cleared {} previous draft rows for {} {}",
                removed, semester, year
            );
        }
    }

    let (sections, classrooms) = futures::try_join!(
        repo.list_sections(semester, year),
        repo.list_classrooms()
    )?;

    let outcome = scheduler::solve(&sections, &classrooms, solver);

    if let Some((a, b)) = scheduler::find_conflict(&outcome.placements) {
        return Err(RepositoryError::conflict(format!(
            "Solver emitted overlapping rows for sections {} and {}",
            a, b
        )));
    }

    let batch_id = BatchId::generate();
    let entries: Vec<ScheduleEntry> = outcome
        .placements
        .iter()
        .map(|p| ScheduleEntry {
            id: None,
            section_id: p.section_id,
            classroom_id: p.classroom_id,
            semester,
            year,
            day_of_week: p.slot.day,
            start_time: p.slot.start,
            end_time: p.slot.end,
            status: ScheduleStatus::Draft,
            batch_id,
            approved_by: None,
            approved_at: None,
        })
        .collect();

    repo.insert_draft_entries(&entries).await?;

    if outcome.budget_exhausted {
        warn!(
            "Service layer: step budget exhausted after {} steps, {} sections left unplaced",
            outcome.steps_used,
            outcome.unplaced.len()
        );
    }
    info!(
        "Service layer: batch {} drafted with {} rows ({} unplaced, {} steps)",
        batch_id,
        entries.len(),
        outcome.unplaced.len(),
        outcome.steps_used
    );

    Ok(GenerationData {
        batch_id,
        status: ScheduleStatus::Draft,
        placed: outcome.placements.len(),
        unplaced_section_ids: outcome.unplaced,
        steps_used: outcome.steps_used,
        budget_exhausted: outcome.budget_exhausted,
    })
}

// ==================== Batch Lifecycle ====================

/// Approve a draft batch, making it the active timetable.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `batch_id` - Batch to promote
/// * `approver` - User recorded on the approved rows
/// * `archive_existing` - Archive currently approved rows for the same term
///
/// # Returns
/// * `Ok(ApprovalData)` - Approved and archived row counts
/// * `Err(NotFound)` if the batch has no draft rows
pub async fn approve_timetable<R: FullRepository + ?Sized>(
    repo: &R,
    batch_id: BatchId,
    approver: Option<UserId>,
    archive_existing: bool,
) -> RepositoryResult<ApprovalData> {
    info!(
        "Service layer: approving batch {} (archive_existing={})",
        batch_id, archive_existing
    );

    let resolution = repo
        .approve_batch(batch_id, approver, Utc::now(), archive_existing)
        .await?;

    info!(
        "Service layer: batch {} approved ({} rows promoted, {} archived)",
        batch_id, resolution.approved, resolution.archived
    );

    Ok(ApprovalData {
        batch_id,
        approved: resolution.approved,
        archived: resolution.archived,
    })
}

/// Reject a draft batch, deleting its rows.
///
/// Rejection is terminal; the rows are gone and a second call for the same
/// batch reports `NotFound`.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `batch_id` - Batch to reject
///
/// # Returns
/// * `Ok(RejectionData)` - Deleted row count
/// * `Err(NotFound)` if the batch has no draft rows
pub async fn reject_timetable<R: FullRepository + ?Sized>(
    repo: &R,
    batch_id: BatchId,
) -> RepositoryResult<RejectionData> {
    info!("Service layer: rejecting batch {}", batch_id);

    let deleted = repo.reject_batch(batch_id).await?;

    info!(
        "Service layer: batch {} rejected ({} rows deleted)",
        batch_id, deleted
    );

    Ok(RejectionData { batch_id, deleted })
}

// ==================== Schedule Views ====================

/// List all draft rows as assembled views.
///
/// # Arguments
/// * `repo` - Repository implementation
///
/// # Returns
/// * `Ok(ScheduleListData)` - Draft rows joined with catalog data
/// * `Err` if query fails
pub async fn list_drafts<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<ScheduleListData> {
    info!("Service layer: listing draft schedules");
    let rows = repo.list_by_status(ScheduleStatus::Draft).await?;
    let schedules = views_for_entries(repo, &rows).await?;
    Ok(ScheduleListData {
        total: schedules.len(),
        schedules,
    })
}

/// List the active (approved) timetable, optionally narrowed to a term.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `semester` - Optional semester filter
/// * `year` - Optional year filter
///
/// # Returns
/// * `Ok(ScheduleListData)` - Approved rows joined with catalog data
/// * `Err` if query fails
pub async fn list_active_schedules<R: FullRepository + ?Sized>(
    repo: &R,
    semester: Option<Semester>,
    year: Option<u16>,
) -> RepositoryResult<ScheduleListData> {
    info!(
        "Service layer: listing active schedules (semester={:?}, year={:?})",
        semester, year
    );
    let rows = repo.list_active(semester, year).await?;
    let schedules = views_for_entries(repo, &rows).await?;
    Ok(ScheduleListData {
        total: schedules.len(),
        schedules,
    })
}

/// Get a single schedule row as an assembled view.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `entry_id` - Row to fetch
///
/// # Returns
/// * `Ok(ScheduleView)` - The row joined with catalog data
/// * `Err(NotFound)` if the row does not exist
pub async fn get_schedule_detail<R: FullRepository + ?Sized>(
    repo: &R,
    entry_id: ScheduleEntryId,
) -> RepositoryResult<ScheduleView> {
    let entry = repo.get_entry(entry_id).await?;
    let section = section_or_none(repo, entry.section_id).await?;
    let classroom = classroom_or_none(repo, entry.classroom_id).await?;
    Ok(assemble_view(&entry, section.as_ref(), classroom.as_ref()))
}

/// List the approved rows taught by one instructor.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `instructor_id` - Instructor to query
///
/// # Returns
/// * `Ok(ScheduleListData)` - The instructor's approved rows, week ordered
/// * `Err` if query fails
pub async fn instructor_schedule<R: FullRepository + ?Sized>(
    repo: &R,
    instructor_id: InstructorId,
) -> RepositoryResult<ScheduleListData> {
    let rows = repo.list_for_instructor(instructor_id).await?;
    let schedules = views_for_entries(repo, &rows).await?;
    Ok(ScheduleListData {
        total: schedules.len(),
        schedules,
    })
}

/// Build a weekly calendar for one instructor.
///
/// Events carry a human-readable summary and location instead of raw ids,
/// suitable for rendering without further catalog lookups.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `instructor_id` - Instructor to query
///
/// # Returns
/// * `Ok(InstructorCalendarData)` - Week-ordered calendar events
/// * `Err` if query fails
pub async fn instructor_calendar<R: FullRepository + ?Sized>(
    repo: &R,
    instructor_id: InstructorId,
) -> RepositoryResult<InstructorCalendarData> {
    let rows = repo.list_for_instructor(instructor_id).await?;

    let mut sections: HashMap<SectionId, Option<CourseSection>> = HashMap::new();
    let mut classrooms: HashMap<ClassroomId, Option<Classroom>> = HashMap::new();
    let mut events = Vec::with_capacity(rows.len());
    for row in &rows {
        if !sections.contains_key(&row.section_id) {
            let section = section_or_none(repo, row.section_id).await?;
            sections.insert(row.section_id, section);
        }
        if !classrooms.contains_key(&row.classroom_id) {
            let classroom = classroom_or_none(repo, row.classroom_id).await?;
            classrooms.insert(row.classroom_id, classroom);
        }

        let section = sections.get(&row.section_id).and_then(|s| s.as_ref());
        let classroom = classrooms.get(&row.classroom_id).and_then(|c| c.as_ref());
        events.push(CalendarEvent {
            summary: section.map(|s| s.label()).unwrap_or_default(),
            day_of_week: row.day_of_week,
            start_time: row.start_time,
            end_time: row.end_time,
            location: classroom
                .map(|c| format!("{} {}", c.building, c.room_number))
                .unwrap_or_default(),
        });
    }

    Ok(InstructorCalendarData {
        instructor_id,
        events,
    })
}

// ==================== Analytics ====================

/// Classroom utilization over the approved timetable.
///
/// # Arguments
/// * `repo` - Repository implementation
///
/// # Returns
/// * `Ok(UtilizationData)` - Per-classroom and per-day row counts
/// * `Err` if query fails
pub async fn classroom_utilization<R: FullRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<UtilizationData> {
    info!("Service layer: computing classroom utilization");
    repo.classroom_utilization().await
}

// ==================== Catalog ====================

/// Store a parsed catalog in the repository.
///
/// Rows are stored one by one; the first validation failure aborts the seed
/// and is returned to the caller.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `catalog` - Parsed classroom and section catalog
///
/// # Returns
/// * `Ok(SeedSummary)` - Stored row counts
/// * `Err` if any row fails validation
pub async fn seed_catalog<R: FullRepository + ?Sized>(
    repo: &R,
    catalog: &CatalogData,
) -> RepositoryResult<SeedSummary> {
    let mut summary = SeedSummary::default();
    for classroom in &catalog.classrooms {
        repo.store_classroom(classroom).await?;
        summary.classrooms += 1;
    }
    for section in &catalog.sections {
        repo.store_section(section).await?;
        summary.sections += 1;
    }

    info!(
        "Service layer: seeded catalog ({} classrooms, {} sections)",
        summary.classrooms, summary.sections
    );
    Ok(summary)
}

// ==================== View Assembly Helpers ====================

async fn section_or_none<R: FullRepository + ?Sized>(
    repo: &R,
    section_id: SectionId,
) -> RepositoryResult<Option<CourseSection>> {
    match repo.get_section(section_id).await {
        Ok(section) => Ok(Some(section)),
        Err(RepositoryError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

async fn classroom_or_none<R: FullRepository + ?Sized>(
    repo: &R,
    classroom_id: ClassroomId,
) -> RepositoryResult<Option<Classroom>> {
    match repo.get_classroom(classroom_id).await {
        Ok(classroom) => Ok(Some(classroom)),
        Err(RepositoryError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Join schedule rows with their catalog entries, memoizing lookups.
async fn views_for_entries<R: FullRepository + ?Sized>(
    repo: &R,
    rows: &[ScheduleEntry],
) -> RepositoryResult<Vec<ScheduleView>> {
    let mut sections: HashMap<SectionId, Option<CourseSection>> = HashMap::new();
    let mut classrooms: HashMap<ClassroomId, Option<Classroom>> = HashMap::new();

    let mut views = Vec::with_capacity(rows.len());
    for row in rows {
        if !sections.contains_key(&row.section_id) {
            let section = section_or_none(repo, row.section_id).await?;
            sections.insert(row.section_id, section);
        }
        if !classrooms.contains_key(&row.classroom_id) {
            let classroom = classroom_or_none(repo, row.classroom_id).await?;
            classrooms.insert(row.classroom_id, classroom);
        }

        views.push(assemble_view(
            row,
            sections.get(&row.section_id).and_then(|s| s.as_ref()),
            classrooms.get(&row.classroom_id).and_then(|c| c.as_ref()),
        ));
    }
    Ok(views)
}

/// Build one view row. Missing catalog entries leave their fields blank
/// rather than failing the whole listing.
fn assemble_view(
    entry: &ScheduleEntry,
    section: Option<&CourseSection>,
    classroom: Option<&Classroom>,
) -> ScheduleView {
    ScheduleView {
        id: entry.id,
        course_code: section.map(|s| s.course_code.clone()).unwrap_or_default(),
        section_number: section.map(|s| s.section_number).unwrap_or_default(),
        instructor_id: section.map(|s| s.instructor_id),
        classroom_code: classroom.map(|c| c.code.clone()).unwrap_or_default(),
        building: classroom.map(|c| c.building.clone()).unwrap_or_default(),
        room_number: classroom.map(|c| c.room_number.clone()).unwrap_or_default(),
        semester: entry.semester,
        year: entry.year,
        day_of_week: entry.day_of_week,
        start_time: entry.start_time,
        end_time: entry.end_time,
        status: entry.status,
        batch_id: entry.batch_id,
        approved_by: entry.approved_by,
        approved_at: entry.approved_at,
    }
}
