use crate::{
    domain::entities::{parse_calendar_day, DateRange},
    infrastructure::http::middleware::{ApiError, ApiResult, AppState},
};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Longest range accepted over HTTP, ten years of days
pub const MAX_RANGE_DAYS: u32 = 3_653;

/// Most ranges accepted in one batch request
pub const MAX_BATCH_RANGES: usize = 1_000;

#[derive(Debug, Deserialize)]
pub struct WorkingDaysQuery {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkingDaysResponse {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub working_days: u32,
}

#[derive(Debug, Deserialize)]
pub struct RangeRequest {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Deserialize)]
pub struct BatchWorkingDaysRequest {
    pub ranges: Vec<RangeRequest>,
}

/// One entry per distinct range, ordered by start then end
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchWorkingDaysResponse {
    pub results: Vec<WorkingDaysResponse>,
}

pub async fn get_working_days(
    State(state): State<AppState>,
    query: Result<Query<WorkingDaysQuery>, QueryRejection>,
) -> ApiResult<Json<WorkingDaysResponse>> {
    let Query(query) = query?;
    let range = parse_range(&query.start, &query.end)?;

    let working_days = state
        .working_days_calculator
        .compute(range.start, range.end)
        .await?;

    Ok(Json(WorkingDaysResponse {
        start: range.start,
        end: range.end,
        working_days,
    }))
}

pub async fn compute_batch(
    State(state): State<AppState>,
    payload: Result<Json<BatchWorkingDaysRequest>, JsonRejection>,
) -> ApiResult<Json<BatchWorkingDaysResponse>> {
    let Json(request) = payload?;
    if request.ranges.len() > MAX_BATCH_RANGES {
        return Err(ApiError::BadRequest(format!(
            "At most {} ranges are accepted per batch",
            MAX_BATCH_RANGES
        )));
    }

    let ranges = request
        .ranges
        .iter()
        .map(|range| parse_range(&range.start, &range.end))
        .collect::<ApiResult<Vec<_>>>()?;

    let counts = state.working_days_calculator.compute_batch(ranges).await?;

    let mut results: Vec<WorkingDaysResponse> = counts
        .into_iter()
        .map(|(range, working_days)| WorkingDaysResponse {
            start: range.start,
            end: range.end,
            working_days,
        })
        .collect();
    results.sort_by_key(|result| (result.start, result.end));

    Ok(Json(BatchWorkingDaysResponse { results }))
}

fn parse_range(start: &str, end: &str) -> ApiResult<DateRange> {
    let range = DateRange::new(parse_calendar_day(start)?, parse_calendar_day(end)?);

    if range.day_count() > MAX_RANGE_DAYS {
        return Err(ApiError::BadRequest(format!(
            "Range {} to {} exceeds the maximum of {} days",
            range.start, range.end, MAX_RANGE_DAYS
        )));
    }
    Ok(range)
}
