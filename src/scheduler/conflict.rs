//! Interval overlap tests between weekly meetings.
//!
//! All scheduling intervals are half-open `[start, end)` on a single day of
//! the week, so two meetings that touch end-to-start do not collide and the
//! same wall-clock range on different days never collides.

use crate::api::{ClassroomId, InstructorId, SectionId};
use crate::models::{DayOfWeek, Slot, TimeOfDay};

/// True when two half-open day intervals share at least one minute.
pub fn overlaps(
    day_a: DayOfWeek,
    start_a: TimeOfDay,
    end_a: TimeOfDay,
    day_b: DayOfWeek,
    start_b: TimeOfDay,
    end_b: TimeOfDay,
) -> bool {
    if day_a != day_b {
        return false;
    }
    !(end_a <= start_b || end_b <= start_a)
}

/// True when two slots share at least one minute.
pub fn slots_overlap(a: &Slot, b: &Slot) -> bool {
    overlaps(a.day, a.start, a.end, b.day, b.start, b.end)
}

/// One section pinned to a classroom and weekly slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub section_id: SectionId,
    pub instructor_id: InstructorId,
    pub classroom_id: ClassroomId,
    pub slot: Slot,
}

/// True when the candidate would double-book a classroom already used by
/// any committed placement.
pub fn conflicts_with_classroom(candidate: &Placement, committed: &[Placement]) -> bool {
    committed.iter().any(|placed| {
        placed.classroom_id == candidate.classroom_id && slots_overlap(&placed.slot, &candidate.slot)
    })
}

/// True when the candidate would double-book an instructor already teaching
/// in any committed placement.
pub fn conflicts_with_instructor(candidate: &Placement, committed: &[Placement]) -> bool {
    committed.iter().any(|placed| {
        placed.instructor_id == candidate.instructor_id
            && slots_overlap(&placed.slot, &candidate.slot)
    })
}

/// Scan a full assignment for any classroom or instructor double-booking.
///
/// The search never commits a conflicting placement, so a hit here means a
/// bug upstream rather than bad input.
pub fn find_conflict(placements: &[Placement]) -> Option<(SectionId, SectionId)> {
    for (i, a) in placements.iter().enumerate() {
        for b in &placements[i + 1..] {
            let same_resource =
                a.classroom_id == b.classroom_id || a.instructor_id == b.instructor_id;
            if same_resource && slots_overlap(&a.slot, &b.slot) {
                return Some((a.section_id, b.section_id));
            }
        }
    }
    None
}
