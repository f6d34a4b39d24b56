//! Analytics repository trait for utilization reporting.
//!
//! This trait defines the aggregate queries behind the reporting endpoints.
//! Aggregates are computed over approved rows only, so drafts being
//! reviewed never leak into reports.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::UtilizationData;

/// Repository trait for reporting aggregates.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    /// Aggregate approved rows into per-classroom usage counts and a
    /// per-weekday distribution.
    ///
    /// # Returns
    /// * `Ok(UtilizationData)` - Classroom usage ordered by classroom id,
    ///   day distribution in weekday order; both empty when nothing is
    ///   approved
    /// * `Err(RepositoryError)` - If the operation fails
    async fn classroom_utilization(&self) -> RepositoryResult<UtilizationData>;
}
