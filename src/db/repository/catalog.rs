//! Catalog repository trait for classrooms and course sections.
//!
//! The catalog is the scheduler's input universe: the rooms placements may
//! use and the sections that need placing. Course and enrollment management
//! live in another system; this trait only stores what generation reads.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::*;

/// Repository trait for the classroom/section catalog.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    // ==================== Classrooms ====================

    /// Store a classroom and assign it an id.
    ///
    /// # Arguments
    /// * `classroom` - The room to store; any incoming id is ignored
    ///
    /// # Returns
    /// * `Ok(ClassroomId)` - The assigned id
    /// * `Err(RepositoryError::ValidationError)` - If the room has a blank
    ///   code or zero capacity
    async fn store_classroom(&self, classroom: &Classroom) -> RepositoryResult<ClassroomId>;

    /// Retrieve a classroom by ID.
    ///
    /// # Returns
    /// * `Ok(Classroom)` - The room
    /// * `Err(RepositoryError::NotFound)` - If the room doesn't exist
    async fn get_classroom(&self, classroom_id: ClassroomId) -> RepositoryResult<Classroom>;

    /// List every classroom, ordered by id.
    async fn list_classrooms(&self) -> RepositoryResult<Vec<Classroom>>;

    // ==================== Course Sections ====================

    /// Store a course section and assign it an id.
    ///
    /// # Arguments
    /// * `section` - The section to store; any incoming id is ignored
    ///
    /// # Returns
    /// * `Ok(SectionId)` - The assigned id
    /// * `Err(RepositoryError::ValidationError)` - If the section has a
    ///   blank course code, zero capacity, or enrollment above capacity
    async fn store_section(&self, section: &CourseSection) -> RepositoryResult<SectionId>;

    /// Retrieve a course section by ID.
    ///
    /// # Returns
    /// * `Ok(CourseSection)` - The section
    /// * `Err(RepositoryError::NotFound)` - If the section doesn't exist
    async fn get_section(&self, section_id: SectionId) -> RepositoryResult<CourseSection>;

    /// List every section of one term, ordered by id.
    ///
    /// # Arguments
    /// * `semester` - Term semester
    /// * `year` - Term year
    async fn list_sections(
        &self,
        semester: Semester,
        year: u16,
    ) -> RepositoryResult<Vec<CourseSection>>;
}
