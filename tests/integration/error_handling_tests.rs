// Malformed and adversarial input never fails a plan

use chronoforge_lib::error::{AppError, AppResult};
use chronoforge_lib::models::schedule::{CommitmentRecord, EntryKind, ProposalRecord};
use chronoforge_lib::models::settings::{AnchorOverlapPolicy, EngineSettings};
use chronoforge_lib::services::conflict_resolver;
use chronoforge_lib::services::schedule_service::ScheduleService;
use serde_json::json;

#[test]
fn empty_inputs_yield_empty_plan() -> AppResult<()> {
    let plan = ScheduleService::default().build_day_plan(&[], &[])?;
    assert!(plan.is_empty());
    Ok(())
}

#[test]
fn unusable_commitments_are_skipped() -> AppResult<()> {
    let commitments = vec![
        CommitmentRecord::default(),
        CommitmentRecord::new("09:00", "", "No end", true),
        CommitmentRecord::new("9 o'clock", "10:00", "Garbage", true),
        CommitmentRecord::new("25:00", "01:00", "Impossible", true),
        CommitmentRecord::new("13:00", "14:00", "Seminar", false),
    ];

    let plan = ScheduleService::default().build_day_plan(&commitments, &[])?;
    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].label, "[CLASS] Seminar");
    assert!(plan[0].attendance_safe);
    Ok(())
}

#[test]
fn malformed_proposals_only_cost_themselves() -> AppResult<()> {
    let proposals = vec![
        ProposalRecord::new("", "Blank", true),
        ProposalRecord::new("morning", "Vague", true),
        ProposalRecord::new("10:00-", "Half", true),
        ProposalRecord::new("10:00-11:00-12:00", "Triple", true),
        ProposalRecord::new("99:00-10:00", "Out of range", true),
        ProposalRecord::new("10:00-10:45", "Valid", true),
    ];

    let plan = ScheduleService::default().build_day_plan(&[], &proposals)?;
    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].label, "Valid");
    assert_eq!(plan[0].estimated_minutes, 45);
    Ok(())
}

#[test]
fn bad_secondary_fields_do_not_drop_records() -> AppResult<()> {
    let commitments: Vec<CommitmentRecord> = vec![
        serde_json::from_value(json!({
            "start_time": "13:00", "end_time": "14:00", "subject": null,
            "code": ["LAB"], "is_attendance_critical": "sometimes"
        }))?,
        serde_json::from_value(json!({
            "start": "15:00", "end": "16:00", "label": "Seminar", "attendance_critical": null
        }))?,
    ];
    let proposals: Vec<ProposalRecord> = vec![
        serde_json::from_value(json!({
            "time_slot": "12:30-13:30", "task_name": "Lunch", "is_attendance_safe": 1, "estimated_minutes": "1h"
        }))?,
        serde_json::from_value(json!({
            "interval": "14:00-15:00", "label": null, "attendance_safe": true, "estimated_minutes": null
        }))?,
    ];

    let plan = ScheduleService::default().build_day_plan(&commitments, &proposals)?;
    let rendered: Vec<(String, &str, bool, i64)> = plan
        .iter()
        .map(|entry| (entry.interval.to_string(), entry.label.as_str(), entry.attendance_safe, entry.estimated_minutes))
        .collect();
    assert_eq!(
        rendered,
        vec![
            ("12:30-13:00".to_string(), "Lunch", false, 30),
            ("13:00-14:00".to_string(), "[CLASS] Class", false, 60),
            ("14:00-15:00".to_string(), "", true, 60),
            ("15:00-16:00".to_string(), "[CLASS] Seminar", false, 60),
        ]
    );
    Ok(())
}

#[test]
fn every_proposal_dropped_still_returns_anchors() -> AppResult<()> {
    let commitments = vec![CommitmentRecord::new("08:00", "18:00", "Field trip", true)];
    let proposals = vec![
        ProposalRecord::new("09:00-10:00", "Covered", true),
        ProposalRecord::new("12:00-17:59", "Also covered", true),
        ProposalRecord::new("17:00-18:00", "[CLASS] Field trip", false),
    ];

    let plan = ScheduleService::default().build_day_plan(&commitments, &proposals)?;
    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].kind, EntryKind::Anchor);
    assert_eq!(plan[0].interval.to_string(), "08:00-18:00");
    Ok(())
}

#[test]
fn identical_proposals_collapse_to_one() -> AppResult<()> {
    let proposals = vec![
        ProposalRecord::new("15:00-16:00", "Gym", true),
        ProposalRecord::new("15:00-16:00", "Gym", true),
        ProposalRecord::new("15:00-16:00", "Gym", true),
    ];

    let plan = ScheduleService::default().build_day_plan(&[], &proposals)?;
    assert_eq!(plan.len(), 1);
    Ok(())
}

#[test]
fn strict_resolver_reports_overlapping_anchors() -> AppResult<()> {
    let service = ScheduleService::new(EngineSettings {
        anchor_overlap_policy: AnchorOverlapPolicy::Reject,
        ..EngineSettings::default()
    });
    let commitments = vec![CommitmentRecord::new("09:00", "10:00", "Mathematics", true)];
    let plan = service.build_day_plan(&commitments, &[])?;

    let mut doubled = plan.clone();
    doubled.extend(plan);
    let result = conflict_resolver::resolve_conflicts(doubled, AnchorOverlapPolicy::Reject);
    match result {
        Err(AppError::AnchorOverlap { first, second }) => {
            assert!(first.contains("[CLASS] Mathematics"));
            assert!(second.contains("09:00-10:00"));
        }
        other => panic!("expected anchor overlap, got {other:?}"),
    }
    Ok(())
}
