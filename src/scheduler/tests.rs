//! Scheduler tests covering overlap math, candidate enumeration and the
//! backtracking search, including budget and dead-end behavior.

use super::*;
use crate::api::{
    Classroom, ClassroomId, CourseSection, InstructorId, RoomType, SectionId, Semester,
};
use crate::models::{DayOfWeek, Slot, TimeOfDay};

fn slot(day: DayOfWeek, start: &str, end: &str) -> Slot {
    Slot::new(day, start.parse().unwrap(), end.parse().unwrap())
}

fn room(id: i64, capacity: u32, room_type: RoomType) -> Classroom {
    let mut room = Classroom::new(
        format!("R-{id}"),
        "Main".to_string(),
        format!("{id}"),
        capacity,
        room_type,
    )
    .unwrap();
    room.id = Some(ClassroomId::new(id));
    room
}

fn section(id: i64, instructor: i64, capacity: u32) -> CourseSection {
    let mut section = CourseSection::new(
        format!("COMP{id:03}"),
        1,
        Semester::Fall,
        2025,
        InstructorId::new(instructor),
        capacity,
        0,
        None,
    )
    .unwrap();
    section.id = Some(SectionId::new(id));
    section
}

fn lab_section(id: i64, instructor: i64, capacity: u32) -> CourseSection {
    let mut s = section(id, instructor, capacity);
    s.room_type = Some(RoomType::Lab);
    s
}

fn single_slot_catalog() -> SlotCatalog {
    SlotCatalog::custom(vec![slot(DayOfWeek::Monday, "09:00", "10:40")])
}

// ==================== Overlap primitives ====================

#[test]
fn test_adjacent_intervals_do_not_overlap() {
    let first = slot(DayOfWeek::Monday, "09:00", "10:00");
    let second = slot(DayOfWeek::Monday, "10:00", "11:00");
    assert!(!slots_overlap(&first, &second));
    assert!(!slots_overlap(&second, &first));
}

#[test]
fn test_partial_overlap_is_symmetric() {
    let first = slot(DayOfWeek::Monday, "09:00", "10:40");
    let second = slot(DayOfWeek::Monday, "10:00", "11:40");
    assert!(slots_overlap(&first, &second));
    assert!(slots_overlap(&second, &first));
}

#[test]
fn test_containment_overlaps() {
    let outer = slot(DayOfWeek::Friday, "09:00", "12:00");
    let inner = slot(DayOfWeek::Friday, "10:00", "11:00");
    assert!(slots_overlap(&outer, &inner));
    assert!(slots_overlap(&inner, &outer));
}

#[test]
fn test_identical_intervals_overlap() {
    let a = slot(DayOfWeek::Wednesday, "14:00", "15:40");
    assert!(slots_overlap(&a, &a));
}

#[test]
fn test_same_times_different_days_do_not_overlap() {
    let monday = slot(DayOfWeek::Monday, "09:00", "10:40");
    let tuesday = slot(DayOfWeek::Tuesday, "09:00", "10:40");
    assert!(!slots_overlap(&monday, &tuesday));
}

#[test]
fn test_classroom_conflict_detection() {
    let committed = vec![Placement {
        section_id: SectionId::new(1),
        instructor_id: InstructorId::new(1),
        classroom_id: ClassroomId::new(7),
        slot: slot(DayOfWeek::Monday, "09:00", "10:40"),
    }];

    let same_room_overlapping = Placement {
        section_id: SectionId::new(2),
        instructor_id: InstructorId::new(2),
        classroom_id: ClassroomId::new(7),
        slot: slot(DayOfWeek::Monday, "10:00", "11:40"),
    };
    assert!(conflicts_with_classroom(&same_room_overlapping, &committed));
    assert!(!conflicts_with_instructor(&same_room_overlapping, &committed));

    let other_room = Placement {
        classroom_id: ClassroomId::new(8),
        ..same_room_overlapping
    };
    assert!(!conflicts_with_classroom(&other_room, &committed));
}

#[test]
fn test_instructor_conflict_detection() {
    let committed = vec![Placement {
        section_id: SectionId::new(1),
        instructor_id: InstructorId::new(5),
        classroom_id: ClassroomId::new(1),
        slot: slot(DayOfWeek::Tuesday, "11:00", "12:40"),
    }];

    let same_instructor_elsewhere = Placement {
        section_id: SectionId::new(2),
        instructor_id: InstructorId::new(5),
        classroom_id: ClassroomId::new(2),
        slot: slot(DayOfWeek::Tuesday, "12:00", "13:40"),
    };
    assert!(conflicts_with_instructor(
        &same_instructor_elsewhere,
        &committed
    ));
    assert!(!conflicts_with_classroom(
        &same_instructor_elsewhere,
        &committed
    ));
}

#[test]
fn test_find_conflict_reports_offending_pair() {
    let a = Placement {
        section_id: SectionId::new(1),
        instructor_id: InstructorId::new(1),
        classroom_id: ClassroomId::new(9),
        slot: slot(DayOfWeek::Monday, "09:00", "10:40"),
    };
    let b = Placement {
        section_id: SectionId::new(2),
        instructor_id: InstructorId::new(2),
        classroom_id: ClassroomId::new(9),
        slot: slot(DayOfWeek::Monday, "09:00", "10:40"),
    };
    assert_eq!(
        find_conflict(&[a, b]),
        Some((SectionId::new(1), SectionId::new(2)))
    );

    let c = Placement {
        classroom_id: ClassroomId::new(10),
        slot: slot(DayOfWeek::Tuesday, "09:00", "10:40"),
        ..b
    };
    assert_eq!(find_conflict(&[a, c]), None);
}

// ==================== Slot catalog ====================

#[test]
fn test_standard_catalog_shape() {
    let catalog = SlotCatalog::standard();
    // 6 days x 4 daily starts
    assert_eq!(catalog.len(), 24);
    assert!(!catalog.is_empty());

    let first = catalog.slots()[0];
    assert_eq!(first.day, DayOfWeek::Monday);
    assert_eq!(first.start.to_string(), "09:00");
    assert_eq!(first.end.to_string(), "10:40");

    assert!(catalog.slots().iter().all(|s| s.is_well_formed()));
    assert!(catalog
        .slots()
        .iter()
        .all(|s| s.day != DayOfWeek::Sunday));
    assert!(catalog
        .slots()
        .iter()
        .any(|s| s.day == DayOfWeek::Saturday));
}

#[test]
fn test_catalog_from_grid_orders_days_outermost() {
    let catalog = SlotCatalog::from_grid(
        &[DayOfWeek::Monday, DayOfWeek::Tuesday],
        &[TimeOfDay::hm(9, 0), TimeOfDay::hm(11, 0)],
        60,
    );
    let days: Vec<DayOfWeek> = catalog.slots().iter().map(|s| s.day).collect();
    assert_eq!(
        days,
        vec![
            DayOfWeek::Monday,
            DayOfWeek::Monday,
            DayOfWeek::Tuesday,
            DayOfWeek::Tuesday
        ]
    );
    assert_eq!(catalog.slots()[1].end.to_string(), "12:00");
}

// ==================== Candidate enumeration ====================

#[test]
fn test_candidates_respect_capacity() {
    let rooms = vec![
        room(1, 30, RoomType::Classroom),
        room(2, 45, RoomType::Classroom),
    ];
    let big = section(1, 1, 40);

    let candidates = candidates_for_section(&big, &rooms, &single_slot_catalog());
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].classroom_id, ClassroomId::new(2));
}

#[test]
fn test_candidates_respect_room_type() {
    let rooms = vec![
        room(1, 30, RoomType::Classroom),
        room(2, 30, RoomType::Lab),
    ];
    let needs_lab = lab_section(1, 1, 20);

    let candidates = candidates_for_section(&needs_lab, &rooms, &single_slot_catalog());
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].classroom_id, ClassroomId::new(2));
}

#[test]
fn test_candidates_tightest_fit_first() {
    let rooms = vec![
        room(1, 60, RoomType::Classroom),
        room(2, 30, RoomType::Classroom),
        room(3, 45, RoomType::Classroom),
    ];
    let small = section(1, 1, 20);
    let catalog = single_slot_catalog();

    let candidates = candidates_for_section(&small, &rooms, &catalog);
    let order: Vec<i64> = candidates.iter().map(|c| c.classroom_id.value()).collect();
    assert_eq!(order, vec![2, 3, 1]);
}

#[test]
fn test_candidates_id_breaks_capacity_ties() {
    let rooms = vec![
        room(9, 30, RoomType::Classroom),
        room(3, 30, RoomType::Classroom),
    ];
    let candidates = candidates_for_section(&section(1, 1, 20), &rooms, &single_slot_catalog());
    let order: Vec<i64> = candidates.iter().map(|c| c.classroom_id.value()).collect();
    assert_eq!(order, vec![3, 9]);
}

#[test]
fn test_candidates_skip_rooms_without_id() {
    let with_id = room(1, 30, RoomType::Classroom);
    let without_id = Classroom {
        id: None,
        ..room(2, 30, RoomType::Classroom)
    };
    let candidates = candidates_for_section(
        &section(1, 1, 20),
        &[with_id, without_id],
        &single_slot_catalog(),
    );
    assert_eq!(candidates.len(), 1);
}

#[test]
fn test_candidates_cross_rooms_with_catalog() {
    let rooms = vec![
        room(1, 30, RoomType::Classroom),
        room(2, 45, RoomType::Classroom),
    ];
    let candidates = candidates_for_section(&section(1, 1, 20), &rooms, &SlotCatalog::standard());
    assert_eq!(candidates.len(), 2 * 24);
}

// ==================== Backtracking search ====================

#[test]
fn test_solve_no_sections() {
    let outcome = solve(&[], &[room(1, 30, RoomType::Classroom)], &SolverConfig::default());
    assert!(outcome.placements.is_empty());
    assert!(outcome.fully_placed());
    assert_eq!(outcome.steps_used, 0);
    assert!(!outcome.budget_exhausted);
}

#[test]
fn test_solve_single_section_takes_tightest_room_first_slot() {
    let rooms = vec![
        room(1, 60, RoomType::Classroom),
        room(2, 25, RoomType::Classroom),
    ];
    let outcome = solve(&[section(1, 1, 20)], &rooms, &SolverConfig::default());

    assert!(outcome.fully_placed());
    assert_eq!(outcome.steps_used, 1);
    let placement = outcome.placements[0];
    assert_eq!(placement.classroom_id, ClassroomId::new(2));
    assert_eq!(placement.slot.day, DayOfWeek::Monday);
    assert_eq!(placement.slot.start.to_string(), "09:00");
}

#[test]
fn test_solve_capacity_routes_to_bigger_room() {
    let rooms = vec![
        room(1, 10, RoomType::Classroom),
        room(2, 25, RoomType::Classroom),
    ];
    let outcome = solve(&[section(1, 1, 20)], &rooms, &SolverConfig::default());

    assert!(outcome.fully_placed());
    assert_eq!(outcome.placements[0].classroom_id, ClassroomId::new(2));
}

#[test]
fn test_solve_sets_aside_impossible_section_without_burning_budget() {
    let rooms = vec![room(1, 30, RoomType::Classroom)];
    let impossible = section(1, 1, 100);
    let fine = section(2, 2, 20);

    let outcome = solve(&[impossible, fine], &rooms, &SolverConfig::default());

    assert_eq!(outcome.unplaced, vec![SectionId::new(1)]);
    assert_eq!(outcome.placements.len(), 1);
    assert_eq!(outcome.placements[0].section_id, SectionId::new(2));
    // Only the placeable section consumed budget.
    assert_eq!(outcome.steps_used, 1);
    assert!(!outcome.budget_exhausted);
}

#[test]
fn test_solve_same_instructor_gets_disjoint_slots() {
    let rooms = vec![
        room(1, 30, RoomType::Classroom),
        room(2, 30, RoomType::Classroom),
    ];
    let sections = vec![section(1, 7, 20), section(2, 7, 20)];

    let outcome = solve(&sections, &rooms, &SolverConfig::default());

    assert!(outcome.fully_placed());
    let a = outcome.placements[0];
    let b = outcome.placements[1];
    assert_eq!(a.instructor_id, b.instructor_id);
    assert!(!slots_overlap(&a.slot, &b.slot));
}

#[test]
fn test_solve_single_slot_instructor_contention_leaves_one_unplaced() {
    // Two rooms but only one slot and one instructor: a full timetable
    // cannot exist, so the search must prove it and keep the deeper prefix.
    let rooms = vec![
        room(1, 30, RoomType::Classroom),
        room(2, 30, RoomType::Classroom),
    ];
    let sections = vec![section(1, 7, 20), section(2, 7, 20)];
    let config = SolverConfig {
        catalog: single_slot_catalog(),
        ..SolverConfig::default()
    };

    let outcome = solve(&sections, &rooms, &config);

    assert_eq!(outcome.placements.len(), 1);
    assert_eq!(outcome.unplaced, vec![SectionId::new(2)]);
    assert!(!outcome.budget_exhausted);
}

#[test]
fn test_solve_classroom_contention_leaves_one_unplaced() {
    let rooms = vec![room(1, 30, RoomType::Classroom)];
    let sections = vec![section(1, 1, 20), section(2, 2, 20)];
    let config = SolverConfig {
        catalog: single_slot_catalog(),
        ..SolverConfig::default()
    };

    let outcome = solve(&sections, &rooms, &config);

    assert_eq!(outcome.placements.len(), 1);
    assert_eq!(outcome.unplaced.len(), 1);
}

#[test]
fn test_solve_budget_exhaustion_keeps_deepest_prefix() {
    let rooms = vec![
        room(1, 30, RoomType::Classroom),
        room(2, 30, RoomType::Classroom),
    ];
    let sections = vec![section(1, 1, 20), section(2, 2, 20), section(3, 3, 20)];
    let config = SolverConfig {
        max_steps: 2,
        catalog: SlotCatalog::standard(),
    };

    let outcome = solve(&sections, &rooms, &config);

    assert!(outcome.budget_exhausted);
    assert_eq!(outcome.steps_used, 2);
    assert!(!outcome.fully_placed());
    assert!(outcome.placements.len() <= 2);
    assert_eq!(
        outcome.placements.len() + outcome.unplaced.len(),
        sections.len()
    );
}

#[test]
fn test_solve_zero_budget_places_nothing() {
    let rooms = vec![room(1, 30, RoomType::Classroom)];
    let config = SolverConfig {
        max_steps: 0,
        catalog: single_slot_catalog(),
    };

    let outcome = solve(&[section(1, 1, 20)], &rooms, &config);

    assert!(outcome.budget_exhausted);
    assert!(outcome.placements.is_empty());
    assert_eq!(outcome.unplaced, vec![SectionId::new(1)]);
}

#[test]
fn test_solve_is_deterministic() {
    let rooms = vec![
        room(1, 30, RoomType::Classroom),
        room(2, 45, RoomType::Lab),
        room(3, 60, RoomType::Classroom),
    ];
    let sections = vec![
        section(1, 1, 25),
        section(2, 1, 40),
        lab_section(3, 2, 30),
        section(4, 2, 20),
        section(5, 3, 55),
    ];
    let config = SolverConfig::default();

    let first = solve(&sections, &rooms, &config);
    let second = solve(&sections, &rooms, &config);

    assert_eq!(first.placements, second.placements);
    assert_eq!(first.unplaced, second.unplaced);
    assert_eq!(first.steps_used, second.steps_used);
}

#[test]
fn test_solve_full_timetable_is_conflict_free() {
    let rooms = vec![
        room(1, 30, RoomType::Classroom),
        room(2, 45, RoomType::Classroom),
        room(3, 30, RoomType::Lab),
    ];
    let sections = vec![
        section(1, 1, 25),
        section(2, 1, 25),
        section(3, 2, 40),
        lab_section(4, 2, 25),
        section(5, 3, 25),
        section(6, 3, 25),
        section(7, 4, 40),
        lab_section(8, 4, 20),
    ];

    let outcome = solve(&sections, &rooms, &SolverConfig::default());

    assert!(outcome.fully_placed(), "unplaced: {:?}", outcome.unplaced);
    assert_eq!(find_conflict(&outcome.placements), None);
}

#[test]
fn test_solve_most_constrained_section_goes_first() {
    // The lab section has a single eligible room, so it must win that room
    // even though the flexible section has a lower id.
    let rooms = vec![
        room(1, 30, RoomType::Lab),
        room(2, 30, RoomType::Classroom),
    ];
    let flexible = section(1, 1, 20);
    let constrained = lab_section(2, 2, 20);
    let config = SolverConfig {
        catalog: single_slot_catalog(),
        ..SolverConfig::default()
    };

    let outcome = solve(&[flexible, constrained], &rooms, &config);

    assert!(outcome.fully_placed());
    let lab_placement = outcome
        .placements
        .iter()
        .find(|p| p.section_id == SectionId::new(2))
        .unwrap();
    assert_eq!(lab_placement.classroom_id, ClassroomId::new(1));
}
