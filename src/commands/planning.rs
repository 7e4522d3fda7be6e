use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};

use crate::error::AppError;
use crate::models::lenient::decode_records;
use crate::models::routine::DailyRoutine;
use crate::models::schedule::{CommitmentRecord, ProposalRecord, ScheduleEntry};
use crate::services::schedule_service::ScheduleService;

use super::CommandResult;

/// Commitments and proposals are kept as raw JSON so that one malformed
/// record is skipped instead of failing the whole request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DayPlanRequest {
    #[serde(alias = "timetable")]
    pub commitments: Vec<JsonValue>,
    #[serde(alias = "scheduled_tasks", alias = "scheduledTasks")]
    pub proposals: Vec<JsonValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayPlanResponse {
    pub entries: Vec<ScheduleEntry>,
}

/// The routine's task list is decoded record by record, like the timetable.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutineRepairRequest {
    pub routine: DailyRoutine,
    #[serde(default)]
    pub timetable: Vec<JsonValue>,
}

pub fn planning_build_day(
    service: &ScheduleService,
    payload: DayPlanRequest,
) -> CommandResult<DayPlanResponse> {
    let commitments: Vec<CommitmentRecord> = decode_records(payload.commitments, "commitment");
    let proposals: Vec<ProposalRecord> = decode_records(payload.proposals, "proposal");

    let entries = service.build_day_plan(&commitments, &proposals)?;
    Ok(DayPlanResponse { entries })
}

pub fn planning_repair_routine(
    service: &ScheduleService,
    payload: RoutineRepairRequest,
) -> CommandResult<DailyRoutine> {
    let timetable: Vec<CommitmentRecord> = decode_records(payload.timetable, "commitment");
    Ok(service.repair_routine(payload.routine, &timetable)?)
}

/// Entry point for raw JSON requests. A body carrying a `routine` is
/// repaired in place; anything else is treated as a day-plan request.
pub fn planning_handle_json(service: &ScheduleService, raw: &str) -> CommandResult<JsonValue> {
    let body: JsonValue = serde_json::from_str(raw).map_err(|err| {
        AppError::validation_with_details(
            "request body is not valid JSON",
            json!({ "error": err.to_string() }),
        )
    })?;

    if !body.is_object() {
        return Err(AppError::validation("request body must be a JSON object").into());
    }

    if body.get("routine").is_some() {
        let payload: RoutineRepairRequest = serde_json::from_value(body).map_err(|err| {
            AppError::validation_with_details(
                "routine repair request is malformed",
                json!({ "error": err.to_string() }),
            )
        })?;
        let routine = planning_repair_routine(service, payload)?;
        return Ok(serde_json::to_value(routine).map_err(AppError::from)?);
    }

    let payload: DayPlanRequest = serde_json::from_value(body).map_err(|err| {
        AppError::validation_with_details(
            "day plan request is malformed",
            json!({ "error": err.to_string() }),
        )
    })?;
    let response = planning_build_day(service, payload)?;
    Ok(serde_json::to_value(response).map_err(AppError::from)?)
}
