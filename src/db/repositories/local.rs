//! In-memory local repository implementation.
//!
//! This module provides a local implementation of all repository traits
//! suitable for unit testing and local development. All data is stored in
//! memory using HashMap structures, providing fast, deterministic, and
//! isolated execution.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::api::*;
use crate::db::models::BatchResolution;
use crate::db::repository::*;

/// In-memory local repository.
///
/// This implementation stores all data in memory using HashMaps, making it
/// ideal for unit tests and local development that need isolation and speed.
/// Batch operations take the single write lock once, so approval, rejection
/// and draft clearing are atomic with respect to every other operation.
///
/// # Example
/// ```ignore
/// let repo = LocalRepository::new();
///
/// // Pre-populate with test data
/// let room_id = repo.store_classroom_impl(classroom);
/// let section_id = repo.store_section_impl(section);
///
/// let rooms = repo.list_classrooms().await.unwrap();
/// assert_eq!(rooms.len(), 1);
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    classrooms: HashMap<ClassroomId, Classroom>,
    sections: HashMap<SectionId, CourseSection>,
    entries: HashMap<ScheduleEntryId, ScheduleEntry>,

    // ID counters
    next_classroom_id: i64,
    next_section_id: i64,
    next_entry_id: i64,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            classrooms: HashMap::new(),
            sections: HashMap::new(),
            entries: HashMap::new(),
            next_classroom_id: 1,
            next_section_id: 1,
            next_entry_id: 1,
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Add a classroom, bypassing validation.
    ///
    /// This is a helper method for setting up data. The room is assigned
    /// an ID automatically; any incoming ID is overwritten.
    ///
    /// # Returns
    /// The ID assigned to the classroom
    pub fn store_classroom_impl(&self, mut classroom: Classroom) -> ClassroomId {
        let mut data = self.data.write().unwrap();
        let classroom_id = ClassroomId::new(data.next_classroom_id);
        data.next_classroom_id += 1;

        classroom.id = Some(classroom_id);
        data.classrooms.insert(classroom_id, classroom);

        classroom_id
    }

    /// Add a course section, bypassing validation.
    ///
    /// This is a helper method for setting up data. The section is assigned
    /// an ID automatically; any incoming ID is overwritten.
    ///
    /// # Returns
    /// The ID assigned to the section
    pub fn store_section_impl(&self, mut section: CourseSection) -> SectionId {
        let mut data = self.data.write().unwrap();
        let section_id = SectionId::new(data.next_section_id);
        data.next_section_id += 1;

        section.id = Some(section_id);
        data.sections.insert(section_id, section);

        section_id
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write().unwrap();
        data.is_healthy = healthy;
    }

    /// Clear all data from the repository, keeping the health flag.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Get the number of schedule rows stored.
    pub fn entry_count(&self) -> usize {
        self.data.read().unwrap().entries.len()
    }

    /// Check if a schedule row exists.
    pub fn has_entry(&self, entry_id: ScheduleEntryId) -> bool {
        self.data.read().unwrap().entries.contains_key(&entry_id)
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self) -> RepositoryResult<()> {
        let data = self.data.read().unwrap();
        if !data.is_healthy {
            return Err(RepositoryError::connection("Repository is not healthy"));
        }
        Ok(())
    }

    /// Helper to get a schedule row or return NotFound error.
    fn get_entry_impl(&self, entry_id: ScheduleEntryId) -> RepositoryResult<ScheduleEntry> {
        let data = self.data.read().unwrap();
        data.entries.get(&entry_id).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Schedule entry {} not found", entry_id),
                ErrorContext::new("get_entry")
                    .with_entity("schedule_entry")
                    .with_entity_id(entry_id),
            )
        })
    }

    /// Draft row ids of a batch, sorted by id.
    fn draft_ids_of_batch(data: &LocalData, batch_id: BatchId) -> Vec<ScheduleEntryId> {
        let mut ids: Vec<ScheduleEntryId> = data
            .entries
            .iter()
            .filter(|(_, e)| e.batch_id == batch_id && e.status == ScheduleStatus::Draft)
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        ids
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

// ==================== Schedule Repository ====================

#[async_trait]
impl ScheduleRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        let data = self.data.read().unwrap();
        Ok(data.is_healthy)
    }

    async fn insert_draft_entries(
        &self,
        entries: &[ScheduleEntry],
    ) -> RepositoryResult<Vec<ScheduleEntryId>> {
        self.check_health()?;

        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let batch_id = entries[0].batch_id;
        for entry in entries {
            if entry.status != ScheduleStatus::Draft {
                return Err(RepositoryError::validation_with_context(
                    format!("Cannot insert {} row, only drafts", entry.status),
                    ErrorContext::new("insert_draft_entries").with_entity("schedule_entry"),
                ));
            }
            if entry.batch_id != batch_id {
                return Err(RepositoryError::validation_with_context(
                    "Entries span multiple batches",
                    ErrorContext::new("insert_draft_entries")
                        .with_entity("batch")
                        .with_entity_id(batch_id),
                ));
            }
        }

        let mut data = self.data.write().unwrap();
        let mut ids = Vec::with_capacity(entries.len());
        for entry in entries {
            let entry_id = ScheduleEntryId::new(data.next_entry_id);
            data.next_entry_id += 1;

            let mut stored = entry.clone();
            stored.id = Some(entry_id);
            data.entries.insert(entry_id, stored);
            ids.push(entry_id);
        }
        Ok(ids)
    }

    async fn get_entry(&self, entry_id: ScheduleEntryId) -> RepositoryResult<ScheduleEntry> {
        self.get_entry_impl(entry_id)
    }

    async fn list_by_status(&self, status: ScheduleStatus) -> RepositoryResult<Vec<ScheduleEntry>> {
        let data = self.data.read().unwrap();

        let mut rows: Vec<ScheduleEntry> = data
            .entries
            .values()
            .filter(|e| e.status == status)
            .cloned()
            .collect();

        rows.sort_by_key(|e| e.id);
        Ok(rows)
    }

    async fn list_active(
        &self,
        semester: Option<Semester>,
        year: Option<u16>,
    ) -> RepositoryResult<Vec<ScheduleEntry>> {
        let data = self.data.read().unwrap();

        let mut rows: Vec<ScheduleEntry> = data
            .entries
            .values()
            .filter(|e| e.status == ScheduleStatus::Approved)
            .filter(|e| semester.map_or(true, |s| e.semester == s))
            .filter(|e| year.map_or(true, |y| e.year == y))
            .cloned()
            .collect();

        rows.sort_by_key(|e| (e.day_of_week, e.start_time, e.id));
        Ok(rows)
    }

    async fn list_batch(&self, batch_id: BatchId) -> RepositoryResult<Vec<ScheduleEntry>> {
        let data = self.data.read().unwrap();

        let mut rows: Vec<ScheduleEntry> = data
            .entries
            .values()
            .filter(|e| e.batch_id == batch_id)
            .cloned()
            .collect();

        rows.sort_by_key(|e| e.id);
        Ok(rows)
    }

    async fn list_for_instructor(
        &self,
        instructor_id: InstructorId,
    ) -> RepositoryResult<Vec<ScheduleEntry>> {
        let data = self.data.read().unwrap();

        let mut rows: Vec<ScheduleEntry> = data
            .entries
            .values()
            .filter(|e| e.status == ScheduleStatus::Approved)
            .filter(|e| {
                data.sections
                    .get(&e.section_id)
                    .map(|s| s.instructor_id == instructor_id)
                    .unwrap_or(false)
            })
            .cloned()
            .collect();

        rows.sort_by_key(|e| (e.day_of_week, e.start_time, e.id));
        Ok(rows)
    }

    async fn clear_drafts(&self, semester: Semester, year: u16) -> RepositoryResult<usize> {
        self.check_health()?;

        let mut data = self.data.write().unwrap();
        let before = data.entries.len();
        data.entries.retain(|_, e| {
            !(e.status == ScheduleStatus::Draft && e.semester == semester && e.year == year)
        });
        Ok(before - data.entries.len())
    }

    async fn approve_batch(
        &self,
        batch_id: BatchId,
        approver: Option<UserId>,
        approved_at: DateTime<Utc>,
        archive_existing: bool,
    ) -> RepositoryResult<BatchResolution> {
        self.check_health()?;

        // One write lock for the whole promotion keeps it atomic.
        let mut data = self.data.write().unwrap();

        let draft_ids = Self::draft_ids_of_batch(&data, batch_id);

        // Every row of a batch shares one term; take it from the first row.
        let (semester, year) = match draft_ids.first().and_then(|id| data.entries.get(id)) {
            Some(first) => (first.semester, first.year),
            None => {
                return Err(RepositoryError::not_found_with_context(
                    format!("Batch {} has no draft rows", batch_id),
                    ErrorContext::new("approve_batch")
                        .with_entity("batch")
                        .with_entity_id(batch_id),
                ));
            }
        };

        let mut archived = 0;
        if archive_existing {
            for entry in data.entries.values_mut() {
                if entry.status == ScheduleStatus::Approved
                    && entry.semester == semester
                    && entry.year == year
                {
                    entry.status = ScheduleStatus::Archived;
                    archived += 1;
                }
            }
        }

        let mut approved = 0;
        for entry_id in &draft_ids {
            if let Some(entry) = data.entries.get_mut(entry_id) {
                entry.status = ScheduleStatus::Approved;
                entry.approved_by = approver;
                entry.approved_at = Some(approved_at);
                approved += 1;
            }
        }

        Ok(BatchResolution::new(approved, archived))
    }

    async fn reject_batch(&self, batch_id: BatchId) -> RepositoryResult<usize> {
        self.check_health()?;

        let mut data = self.data.write().unwrap();

        let draft_ids = Self::draft_ids_of_batch(&data, batch_id);
        if draft_ids.is_empty() {
            return Err(RepositoryError::not_found_with_context(
                format!("Batch {} has no draft rows", batch_id),
                ErrorContext::new("reject_batch")
                    .with_entity("batch")
                    .with_entity_id(batch_id),
            ));
        }

        for entry_id in &draft_ids {
            data.entries.remove(entry_id);
        }
        Ok(draft_ids.len())
    }
}

// ==================== Catalog Repository ====================

#[async_trait]
impl CatalogRepository for LocalRepository {
    async fn store_classroom(&self, classroom: &Classroom) -> RepositoryResult<ClassroomId> {
        self.check_health()?;

        if classroom.code.trim().is_empty() {
            return Err(RepositoryError::validation_with_context(
                "Classroom code must not be empty",
                ErrorContext::new("store_classroom").with_entity("classroom"),
            ));
        }
        if classroom.capacity == 0 {
            return Err(RepositoryError::validation_with_context(
                format!("Classroom {} capacity must be positive", classroom.code),
                ErrorContext::new("store_classroom").with_entity("classroom"),
            ));
        }

        Ok(self.store_classroom_impl(classroom.clone()))
    }

    async fn get_classroom(&self, classroom_id: ClassroomId) -> RepositoryResult<Classroom> {
        let data = self.data.read().unwrap();
        data.classrooms.get(&classroom_id).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Classroom {} not found", classroom_id),
                ErrorContext::new("get_classroom")
                    .with_entity("classroom")
                    .with_entity_id(classroom_id),
            )
        })
    }

    async fn list_classrooms(&self) -> RepositoryResult<Vec<Classroom>> {
        let data = self.data.read().unwrap();

        let mut rooms: Vec<Classroom> = data.classrooms.values().cloned().collect();
        rooms.sort_by_key(|c| c.id);
        Ok(rooms)
    }

    async fn store_section(&self, section: &CourseSection) -> RepositoryResult<SectionId> {
        self.check_health()?;

        if section.course_code.trim().is_empty() {
            return Err(RepositoryError::validation_with_context(
                "Course code must not be empty",
                ErrorContext::new("store_section").with_entity("course_section"),
            ));
        }
        if section.capacity == 0 {
            return Err(RepositoryError::validation_with_context(
                format!("Section {} capacity must be positive", section.course_code),
                ErrorContext::new("store_section").with_entity("course_section"),
            ));
        }
        if section.enrolled_count > section.capacity {
            return Err(RepositoryError::validation_with_context(
                format!(
                    "Section {} enrollment {} exceeds capacity {}",
                    section.course_code, section.enrolled_count, section.capacity
                ),
                ErrorContext::new("store_section").with_entity("course_section"),
            ));
        }

        Ok(self.store_section_impl(section.clone()))
    }

    async fn get_section(&self, section_id: SectionId) -> RepositoryResult<CourseSection> {
        let data = self.data.read().unwrap();
        data.sections.get(&section_id).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Section {} not found", section_id),
                ErrorContext::new("get_section")
                    .with_entity("course_section")
                    .with_entity_id(section_id),
            )
        })
    }

    async fn list_sections(
        &self,
        semester: Semester,
        year: u16,
    ) -> RepositoryResult<Vec<CourseSection>> {
        let data = self.data.read().unwrap();

        let mut sections: Vec<CourseSection> = data
            .sections
            .values()
            .filter(|s| s.semester == semester && s.year == year)
            .cloned()
            .collect();

        sections.sort_by_key(|s| s.id);
        Ok(sections)
    }
}

// ==================== Analytics Repository ====================

#[async_trait]
impl AnalyticsRepository for LocalRepository {
    async fn classroom_utilization(&self) -> RepositoryResult<UtilizationData> {
        self.check_health()?;

        let data = self.data.read().unwrap();

        let mut per_room: HashMap<ClassroomId, usize> = HashMap::new();
        let mut per_day: HashMap<DayOfWeek, usize> = HashMap::new();
        for entry in data
            .entries
            .values()
            .filter(|e| e.status == ScheduleStatus::Approved)
        {
            *per_room.entry(entry.classroom_id).or_insert(0) += 1;
            *per_day.entry(entry.day_of_week).or_insert(0) += 1;
        }

        let mut classroom_usage: Vec<ClassroomUsage> = per_room
            .into_iter()
            .map(|(classroom_id, schedule_count)| {
                let room = data.classrooms.get(&classroom_id);
                ClassroomUsage {
                    classroom_id,
                    code: room.map(|r| r.code.clone()).unwrap_or_default(),
                    building: room.map(|r| r.building.clone()).unwrap_or_default(),
                    capacity: room.map(|r| r.capacity).unwrap_or(0),
                    schedule_count,
                }
            })
            .collect();
        classroom_usage.sort_by_key(|u| u.classroom_id);

        // Weekday order, days without rows omitted.
        let day_distribution: Vec<DayUsage> = DayOfWeek::all()
            .iter()
            .filter_map(|day| {
                per_day.get(day).map(|&count| DayUsage {
                    day: *day,
                    count,
                })
            })
            .collect();

        Ok(UtilizationData {
            classroom_usage,
            day_distribution,
        })
    }
}
