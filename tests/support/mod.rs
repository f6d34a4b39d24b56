// Each test binary compiles its own copy of this module and not every
// binary uses every helper.
#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use campus_scheduler::api::{
    BatchId, Classroom, ClassroomId, CourseSection, InstructorId, RoomType, ScheduleEntry,
    ScheduleStatus, SectionId, Semester,
};
use campus_scheduler::models::DayOfWeek;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK poisoned");
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// A classroom in the Science building with the given code and capacity.
pub fn classroom(code: &str, capacity: u32, room_type: RoomType) -> Classroom {
    let room_number = code.rsplit('-').next().unwrap_or("101").to_string();
    Classroom::new(
        code.to_string(),
        "Science".to_string(),
        room_number,
        capacity,
        room_type,
    )
    .expect("fixture classroom is valid")
}

/// A Fall 2025 section with the given course code, instructor and capacity.
pub fn section(code: &str, instructor: i64, capacity: u32) -> CourseSection {
    CourseSection::new(
        code.to_string(),
        1,
        Semester::Fall,
        2025,
        InstructorId::new(instructor),
        capacity,
        0,
        None,
    )
    .expect("fixture section is valid")
}

/// A Fall 2025 draft schedule row for the given ids and weekly interval.
pub fn draft_entry(
    section_id: SectionId,
    classroom_id: ClassroomId,
    batch_id: BatchId,
    day: DayOfWeek,
    start: &str,
    end: &str,
) -> ScheduleEntry {
    ScheduleEntry {
        id: None,
        section_id,
        classroom_id,
        semester: Semester::Fall,
        year: 2025,
        day_of_week: day,
        start_time: start.parse().expect("fixture start time parses"),
        end_time: end.parse().expect("fixture end time parses"),
        status: ScheduleStatus::Draft,
        batch_id,
        approved_by: None,
        approved_at: None,
    }
}
