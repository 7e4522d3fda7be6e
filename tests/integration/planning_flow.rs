use chronoforge_lib::error::AppResult;
use chronoforge_lib::models::schedule::{CommitmentRecord, EntryKind, ProposalRecord, ScheduleEntry};
use chronoforge_lib::services::schedule_service::ScheduleService;
use chronoforge_lib::services::schedule_utils::{self, MINUTES_PER_DAY};
use chronoforge_lib::services::window_calculator;

fn weekly_timetable() -> Vec<CommitmentRecord> {
    // Monday..Friday flattened into one list, with repeats and clashes
    vec![
        CommitmentRecord::new("09:00", "10:00", "Mathematics", true),
        CommitmentRecord::new("11:00", "12:00", "Physics", false),
        CommitmentRecord::new("09:00", "10:00", "Mathematics", true),
        CommitmentRecord::new("09:00", "10:00", "Chemistry", true),
        CommitmentRecord::new("14:00", "16:00", "Electronics Lab", true),
        CommitmentRecord::new("15:00", "16:00", "English", false),
        CommitmentRecord::new("11:00", "12:00", "Physics", false),
    ]
}

fn render(plan: &[ScheduleEntry]) -> Vec<(String, String, i64, EntryKind)> {
    plan.iter()
        .map(|entry| {
            (
                entry.interval.to_string(),
                entry.label.clone(),
                entry.estimated_minutes,
                entry.kind,
            )
        })
        .collect()
}

fn row(slot: &str, label: &str, minutes: i64, kind: EntryKind) -> (String, String, i64, EntryKind) {
    (slot.to_string(), label.to_string(), minutes, kind)
}

fn assert_ordered_and_disjoint(plan: &[ScheduleEntry]) {
    for pair in plan.windows(2) {
        assert!(pair[0].start() < pair[1].start(), "{:?} not before {:?}", pair[0], pair[1]);
        assert!(pair[0].end() <= pair[1].start(), "{:?} overlaps {:?}", pair[0], pair[1]);
    }
    for entry in plan {
        assert_eq!(entry.estimated_minutes, entry.interval.width());
    }
}

#[test]
fn weekly_timetable_and_generated_tasks_become_one_clean_day() -> AppResult<()> {
    let service = ScheduleService::default();
    let proposals = vec![
        ProposalRecord::new("07:00-08:00", "Morning run", true),
        ProposalRecord::new("08:30-09:30", "Revise calculus", true),
        ProposalRecord::new("10:00-11:00", "LeetCode", true),
        ProposalRecord::new("10:30-11:30", "Reply to mentor", true),
        ProposalRecord::new("13:00-17:00", "Project sprint", false),
        ProposalRecord::new("14:30-15:00", "Coffee", true),
        ProposalRecord::new("[CLASS] Imaginary seminar", "[CLASS] Imaginary seminar", false),
        ProposalRecord::new("18:00-19:00", "[CLASS] Imaginary seminar", false),
        ProposalRecord::new("soon", "Undated chore", true),
    ];

    let plan = service.build_day_plan(&weekly_timetable(), &proposals)?;
    assert_ordered_and_disjoint(&plan);

    assert_eq!(
        render(&plan),
        vec![
            row("07:00-08:00", "Morning run", 60, EntryKind::Proposal),
            row("08:30-09:00", "Revise calculus", 30, EntryKind::Proposal),
            row("09:00-10:00", "[CLASS] Mathematics", 60, EntryKind::Anchor),
            row("10:00-11:00", "LeetCode", 60, EntryKind::Proposal),
            row("11:00-12:00", "[CLASS] Physics", 60, EntryKind::Anchor),
            row("13:00-14:00", "Project sprint", 60, EntryKind::Proposal),
            row("14:00-16:00", "[CLASS] Electronics Lab", 120, EntryKind::Anchor),
            row("16:00-17:00", "Project sprint", 60, EntryKind::Proposal),
        ]
    );
    Ok(())
}

#[test]
fn window_example_leaves_two_gaps() {
    let span = schedule_utils::parse_slot("09:00-12:00").expect("span");
    let blockers = [
        schedule_utils::parse_slot("09:00-10:00").expect("blocker"),
        schedule_utils::parse_slot("11:00-11:30").expect("blocker"),
    ];

    let windows: Vec<String> = window_calculator::free_windows(span, &blockers)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(windows, vec!["10:00-11:00", "11:30-12:00"]);
}

#[test]
fn partially_covered_proposal_keeps_its_tail() -> AppResult<()> {
    let service = ScheduleService::default();
    let commitments = vec![CommitmentRecord::new("09:00", "10:00", "Lecture", true)];
    let proposals = vec![ProposalRecord::new("09:30-10:30", "Reading", true)];

    let plan = service.build_day_plan(&commitments, &proposals)?;
    let tail = plan
        .iter()
        .find(|entry| entry.kind == EntryKind::Proposal)
        .expect("fitted proposal");
    assert_eq!(tail.interval.to_string(), "10:00-10:30");
    assert_eq!(tail.estimated_minutes, 30);
    Ok(())
}

#[test]
fn fully_covered_proposal_disappears() -> AppResult<()> {
    let service = ScheduleService::default();
    let commitments = vec![CommitmentRecord::new("09:00", "10:00", "Lecture", true)];
    let proposals = vec![ProposalRecord::new("09:10-09:40", "Doodle", true)];

    let plan = service.build_day_plan(&commitments, &proposals)?;
    assert_eq!(plan.len(), 1);
    assert!(plan[0].is_anchor());
    Ok(())
}

#[test]
fn competing_proposals_resolve_back_to_back() -> AppResult<()> {
    let service = ScheduleService::default();
    let proposals = vec![
        ProposalRecord::new("10:00-11:00", "First", true),
        ProposalRecord::new("10:30-11:30", "Second", true),
    ];

    let plan = service.build_day_plan(&[], &proposals)?;
    assert_eq!(
        render(&plan),
        vec![
            row("10:00-11:00", "First", 60, EntryKind::Proposal),
            row("11:00-11:30", "Second", 30, EntryKind::Proposal),
        ]
    );
    Ok(())
}

#[test]
fn overnight_study_session_is_cut_by_late_class() -> AppResult<()> {
    let service = ScheduleService::default();
    let range = schedule_utils::parse_slot("22:00-02:00").expect("overnight");
    assert_eq!(range.width(), 240);
    assert!(range.end() >= MINUTES_PER_DAY);

    let commitments = vec![CommitmentRecord::new("23:00", "00:00", "Night lab", true)];
    let proposals = vec![ProposalRecord::new("22:00-02:00", "All-nighter", true)];

    let plan = service.build_day_plan(&commitments, &proposals)?;
    assert_ordered_and_disjoint(&plan);
    assert_eq!(
        render(&plan),
        vec![
            row("22:00-23:00", "All-nighter", 60, EntryKind::Proposal),
            row("23:00-24:00", "[CLASS] Night lab", 60, EntryKind::Anchor),
            row("24:00-26:00", "All-nighter", 120, EntryKind::Proposal),
        ]
    );
    Ok(())
}

#[test]
fn feeding_the_plan_back_reproduces_it() -> AppResult<()> {
    let service = ScheduleService::default();
    let proposals = vec![
        ProposalRecord::new("08:00-12:30", "Deep work", false),
        ProposalRecord::new("12:00-13:00", "Lunch", true),
        ProposalRecord::new("15:30-17:00", "Gym", true),
    ];

    let first = service.build_day_plan(&weekly_timetable(), &proposals)?;
    let replayed: Vec<ProposalRecord> = first.iter().map(ProposalRecord::from).collect();
    let second = service.build_day_plan(&weekly_timetable(), &replayed)?;

    assert_eq!(first, second);
    Ok(())
}
