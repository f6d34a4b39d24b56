//! Repository trait definitions for storage operations.
//!
//! This module provides a collection of focused repository traits that abstract
//! storage operations. By splitting responsibilities across multiple traits,
//! implementations can be more focused and testable.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//! - [`schedule`]: Schedule row lifecycle (drafts, approval, rejection, listings)
//! - [`catalog`]: Classroom and course section storage
//! - [`analytics`]: Utilization aggregates for reporting
//!
//! # Trait Composition
//!
//! A complete repository implementation typically implements all traits:
//!
//! ```ignore
//! impl ScheduleRepository for MyRepo { ... }
//! impl CatalogRepository for MyRepo { ... }
//! impl AnalyticsRepository for MyRepo { ... }
//! ```
//!
//! # Convenience Trait Bound
//!
//! For functions that need all repository capabilities, use the [`FullRepository`] trait bound:
//!
//! ```ignore
//! async fn my_service<R: FullRepository>(repo: &R) -> RepositoryResult<()> {
//!     let sections = repo.list_sections(Semester::Fall, 2025).await?;
//!     repo.insert_draft_entries(&entries).await?;
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod catalog;
pub mod error;
pub mod schedule;

// Re-export error types
pub use error::{ErrorContext, RepositoryError, RepositoryResult};

// Re-export all traits
pub use analytics::AnalyticsRepository;
pub use catalog::CatalogRepository;
pub use schedule::ScheduleRepository;

/// Composite trait bound for a complete repository implementation.
///
/// This trait is automatically implemented for any type that implements
/// all three repository traits. Use this as a convenient bound when you
/// need access to all repository operations.
///
/// # Example
///
/// ```ignore
/// async fn generate<R: FullRepository>(repo: &R) -> RepositoryResult<()> {
///     let sections = repo.list_sections(Semester::Fall, 2025).await?;
///     let classrooms = repo.list_classrooms().await?;
///     // ... solve and persist
///     Ok(())
/// }
/// ```
pub trait FullRepository:
    ScheduleRepository + CatalogRepository + AnalyticsRepository
{
}

// Blanket implementation: any type implementing all three traits automatically implements FullRepository
impl<T> FullRepository for T where
    T: ScheduleRepository + CatalogRepository + AnalyticsRepository
{
}
