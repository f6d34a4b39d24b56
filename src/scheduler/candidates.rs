//! Candidate (classroom, slot) enumeration for course sections.
//!
//! The catalog fixes the weekly grid of teaching slots; candidate generation
//! crosses that grid with the rooms that can actually host a section. The
//! emitted order is the search order, so it is deterministic: rooms sorted
//! tightest fit first (capacity ascending, id ascending), slots in catalog
//! order within each room.

use crate::api::{Classroom, ClassroomId, CourseSection};
use crate::models::{DayOfWeek, Slot, TimeOfDay};

/// Default teaching block length in minutes.
pub const STANDARD_BLOCK_MINUTES: u16 = 100;

/// The weekly grid of slots a timetable may use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotCatalog {
    slots: Vec<Slot>,
}

impl SlotCatalog {
    /// Build from an explicit slot list. Order is preserved and becomes the
    /// candidate enumeration order.
    pub fn custom(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    /// Cross a set of days with a set of daily start times, each block
    /// running `block_minutes`. Days iterate outermost so the grid reads
    /// Monday 09:00, Monday 11:00, .. Tuesday 09:00, and so on.
    pub fn from_grid(days: &[DayOfWeek], day_starts: &[TimeOfDay], block_minutes: u16) -> Self {
        let mut slots = Vec::with_capacity(days.len() * day_starts.len());
        for &day in days {
            for &start in day_starts {
                slots.push(Slot::new(day, start, start.add_minutes(block_minutes)));
            }
        }
        Self { slots }
    }

    /// The standard academic grid: Monday through Saturday, 100-minute
    /// blocks starting 09:00, 11:00, 14:00 and 16:00.
    pub fn standard() -> Self {
        let days = [
            DayOfWeek::Monday,
            DayOfWeek::Tuesday,
            DayOfWeek::Wednesday,
            DayOfWeek::Thursday,
            DayOfWeek::Friday,
            DayOfWeek::Saturday,
        ];
        let starts = [
            TimeOfDay::hm(9, 0),
            TimeOfDay::hm(11, 0),
            TimeOfDay::hm(14, 0),
            TimeOfDay::hm(16, 0),
        ];
        Self::from_grid(&days, &starts, STANDARD_BLOCK_MINUTES)
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for SlotCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// One feasible (classroom, slot) pair for a section, before conflict checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub classroom_id: ClassroomId,
    pub slot: Slot,
}

/// Enumerate every candidate placement for `section`.
///
/// A room qualifies when its capacity covers the section's capacity and its
/// type matches the section's required type, if any. Rooms without a
/// server-assigned id cannot be referenced by a schedule row and are skipped.
pub fn candidates_for_section(
    section: &CourseSection,
    classrooms: &[Classroom],
    catalog: &SlotCatalog,
) -> Vec<Candidate> {
    let mut rooms: Vec<(ClassroomId, &Classroom)> = classrooms
        .iter()
        .filter_map(|room| room.id.map(|id| (id, room)))
        .filter(|(_, room)| room.capacity >= section.capacity)
        .filter(|(_, room)| {
            section
                .room_type
                .map_or(true, |required| required == room.room_type)
        })
        .collect();

    // Tightest fit first; id breaks capacity ties so the order is total.
    rooms.sort_by_key(|(id, room)| (room.capacity, id.value()));

    let mut candidates = Vec::with_capacity(rooms.len() * catalog.len());
    for (id, _) in rooms {
        for slot in catalog.slots() {
            candidates.push(Candidate {
                classroom_id: id,
                slot: *slot,
            });
        }
    }
    candidates
}
