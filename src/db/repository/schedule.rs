//! Core schedule repository trait for timetable rows.
//!
//! This trait defines the lifecycle operations for schedule entries: bulk
//! draft insertion, batch approval and rejection, and the status-scoped
//! listings the HTTP layer serves.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::error::RepositoryResult;
use crate::api::*;
use crate::db::models::BatchResolution;

/// Repository trait for schedule row lifecycle operations.
///
/// Rows move `draft -> approved` (or are deleted on rejection) strictly as
/// whole batches. Implementations must make `approve_batch`, `reject_batch`
/// and `clear_drafts` atomic: concurrent readers see either none or all of
/// the effect.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    // ==================== Health & Connection ====================

    /// Check if the backend is healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if the backend is healthy
    /// - `Ok(false)` if unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    // ==================== Draft Insertion ====================

    /// Store a batch of freshly generated draft rows.
    ///
    /// Every entry must carry `ScheduleStatus::Draft` and the same batch id.
    ///
    /// # Arguments
    /// * `entries` - The draft rows to store; ids are server-assigned
    ///
    /// # Returns
    /// * `Ok(Vec<ScheduleEntryId>)` - Assigned ids, in input order
    /// * `Err(RepositoryError::ValidationError)` - If an entry is not a draft
    ///   or batch ids disagree
    async fn insert_draft_entries(
        &self,
        entries: &[ScheduleEntry],
    ) -> RepositoryResult<Vec<ScheduleEntryId>>;

    // ==================== Row Queries ====================

    /// Retrieve a single schedule row by ID.
    ///
    /// # Arguments
    /// * `entry_id` - The ID of the row to retrieve
    ///
    /// # Returns
    /// * `Ok(ScheduleEntry)` - The row
    /// * `Err(RepositoryError::NotFound)` - If the row doesn't exist
    async fn get_entry(&self, entry_id: ScheduleEntryId) -> RepositoryResult<ScheduleEntry>;

    /// List every row with the given status, ordered by id.
    async fn list_by_status(&self, status: ScheduleStatus) -> RepositoryResult<Vec<ScheduleEntry>>;

    /// List approved rows, optionally narrowed to a term.
    ///
    /// # Arguments
    /// * `semester` - Keep only rows of this semester when present
    /// * `year` - Keep only rows of this year when present
    ///
    /// # Returns
    /// * `Ok(Vec<ScheduleEntry>)` - Approved rows ordered by day, start
    ///   time, then id
    async fn list_active(
        &self,
        semester: Option<Semester>,
        year: Option<u16>,
    ) -> RepositoryResult<Vec<ScheduleEntry>>;

    /// List every row belonging to a batch regardless of status, ordered
    /// by id.
    async fn list_batch(&self, batch_id: BatchId) -> RepositoryResult<Vec<ScheduleEntry>>;

    /// List approved rows taught by one instructor, ordered by day then
    /// start time. Unknown instructors yield an empty list, not an error.
    async fn list_for_instructor(
        &self,
        instructor_id: InstructorId,
    ) -> RepositoryResult<Vec<ScheduleEntry>>;

    // ==================== Batch Lifecycle ====================

    /// Delete every draft row of the given term.
    ///
    /// # Arguments
    /// * `semester` - Term semester
    /// * `year` - Term year
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of rows removed; zero is not an error
    async fn clear_drafts(&self, semester: Semester, year: u16) -> RepositoryResult<usize>;

    /// Promote every draft row of a batch to approved, all under one
    /// write transaction.
    ///
    /// # Arguments
    /// * `batch_id` - The batch to promote
    /// * `approver` - User recorded on each promoted row, if known
    /// * `approved_at` - Instant recorded on each promoted row
    /// * `archive_existing` - Also move previously approved rows of the
    ///   batch's term to archived
    ///
    /// # Returns
    /// * `Ok(BatchResolution)` - How many rows were approved and archived
    /// * `Err(RepositoryError::NotFound)` - If the batch has no draft rows
    async fn approve_batch(
        &self,
        batch_id: BatchId,
        approver: Option<UserId>,
        approved_at: DateTime<Utc>,
        archive_existing: bool,
    ) -> RepositoryResult<BatchResolution>;

    /// Delete every draft row of a batch.
    ///
    /// # Arguments
    /// * `batch_id` - The batch to discard
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of rows deleted
    /// * `Err(RepositoryError::NotFound)` - If the batch has no draft rows,
    ///   including a second rejection of the same batch
    async fn reject_batch(&self, batch_id: BatchId) -> RepositoryResult<usize>;
}
