use campus_scheduler::api::{
    BatchId, Classroom, ClassroomId, CourseSection, DayOfWeek, InstructorId, RoomType,
    ScheduleStatus, SectionId, Semester, TimeOfDay,
};
use campus_scheduler::db::repositories::LocalRepository;
use campus_scheduler::db::services;
use campus_scheduler::routes;
use campus_scheduler::scheduler::SolverConfig;
use campus_scheduler::services::GenerationLocks;

fn seeded_repo() -> LocalRepository {
    let repo = LocalRepository::new();
    repo.store_classroom_impl(
        Classroom::new(
            "SCI-101".to_string(),
            "Science".to_string(),
            "101".to_string(),
            40,
            RoomType::Classroom,
        )
        .unwrap(),
    );
    repo.store_section_impl(
        CourseSection::new(
            "COMP101".to_string(),
            1,
            Semester::Fall,
            2025,
            InstructorId::new(1),
            30,
            0,
            None,
        )
        .unwrap(),
    );
    repo
}

#[tokio::test]
async fn test_generate_then_list_drafts() {
    let repo = seeded_repo();
    let locks = GenerationLocks::new();

    let generated = services::generate_timetable(
        &repo,
        &locks,
        Semester::Fall,
        2025,
        false,
        &SolverConfig::default(),
    )
    .await
    .unwrap();
    assert_eq!(generated.status, ScheduleStatus::Draft);
    assert_eq!(generated.placed, 1);

    let drafts = services::list_drafts(&repo).await.unwrap();
    assert_eq!(drafts.total, 1);
    assert_eq!(drafts.schedules[0].batch_id, generated.batch_id);
}

#[test]
fn test_routes_module_exists() {
    // Ensure routes module compiles and exports expected constants
    assert_eq!(routes::generation::GENERATE_SCHEDULE, "generate_schedule");
    assert_eq!(routes::approval::APPROVE_SCHEDULE_BATCH, "approve_schedule_batch");
    assert_eq!(routes::approval::REJECT_SCHEDULE_BATCH, "reject_schedule_batch");
    assert_eq!(routes::listing::LIST_DRAFT_SCHEDULES, "list_draft_schedules");
    assert_eq!(routes::listing::LIST_ACTIVE_SCHEDULES, "list_active_schedules");
    assert_eq!(routes::listing::GET_SCHEDULE_DETAIL, "get_schedule_detail");
    assert_eq!(routes::calendar::GET_INSTRUCTOR_SCHEDULE, "get_instructor_schedule");
    assert_eq!(routes::calendar::GET_INSTRUCTOR_CALENDAR, "get_instructor_calendar");
    assert_eq!(routes::conflict::CHECK_OVERLAP, "check_overlap");
    assert_eq!(routes::utilization::GET_CLASSROOM_UTILIZATION, "get_classroom_utilization");
}

#[test]
fn test_generation_data_creation() {
    let data = routes::generation::GenerationData {
        batch_id: BatchId::generate(),
        status: ScheduleStatus::Draft,
        placed: 3,
        unplaced_section_ids: vec![SectionId::new(9)],
        steps_used: 17,
        budget_exhausted: false,
    };
    assert_eq!(data.placed, 3);
    assert_eq!(data.unplaced_section_ids.len(), 1);
    assert!(!data.budget_exhausted);
}

#[test]
fn test_approval_data_creation() {
    let data = routes::approval::ApprovalData {
        batch_id: BatchId::generate(),
        approved: 10,
        archived: 8,
    };
    assert_eq!(data.approved, 10);
    assert_eq!(data.archived, 8);
}

#[test]
fn test_calendar_event_basic() {
    let event = routes::calendar::CalendarEvent {
        summary: "COMP101 (section 1)".to_string(),
        day_of_week: DayOfWeek::Monday,
        start_time: TimeOfDay::hm(9, 0),
        end_time: TimeOfDay::hm(10, 40),
        location: "Science 101".to_string(),
    };
    assert_eq!(event.summary, "COMP101 (section 1)");
    assert_eq!(event.location, "Science 101");
}

#[test]
fn test_interval_spec_basic() {
    let spec = routes::conflict::IntervalSpec {
        day: DayOfWeek::Friday,
        start: TimeOfDay::hm(14, 0),
        end: TimeOfDay::hm(15, 40),
    };
    assert_eq!(spec.day, DayOfWeek::Friday);
    assert!(spec.start < spec.end);
}

#[test]
fn test_classroom_usage_basic() {
    let usage = routes::utilization::ClassroomUsage {
        classroom_id: ClassroomId::new(2),
        code: "ENG-201".to_string(),
        building: "Engineering".to_string(),
        capacity: 25,
        schedule_count: 6,
    };
    assert_eq!(usage.code, "ENG-201");
    assert_eq!(usage.schedule_count, 6);
}

#[test]
fn test_route_constants_are_strings() {
    // Verify all route constants are strings (prevents typos)
    let _: &str = routes::generation::GENERATE_SCHEDULE;
    let _: &str = routes::approval::APPROVE_SCHEDULE_BATCH;
    let _: &str = routes::approval::REJECT_SCHEDULE_BATCH;
    let _: &str = routes::listing::LIST_DRAFT_SCHEDULES;
    let _: &str = routes::listing::LIST_ACTIVE_SCHEDULES;
    let _: &str = routes::listing::GET_SCHEDULE_DETAIL;
    let _: &str = routes::calendar::GET_INSTRUCTOR_SCHEDULE;
    let _: &str = routes::calendar::GET_INSTRUCTOR_CALENDAR;
    let _: &str = routes::conflict::CHECK_OVERLAP;
    let _: &str = routes::utilization::GET_CLASSROOM_UTILIZATION;
}
