use crate::{
    domain::entities::*,
    infrastructure::http::middleware::{ApiResult, AppState},
};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListHolidaysQuery {
    pub country: Option<String>,
    pub year: Option<i32>,
}

pub async fn list_holidays(
    State(state): State<AppState>,
    query: Result<Query<ListHolidaysQuery>, QueryRejection>,
) -> ApiResult<Json<HolidayListResponse>> {
    let Query(query) = query?;
    let response = state
        .holiday_service
        .list_holidays(query.country.as_deref(), query.year)
        .await?;
    Ok(Json(response))
}

pub async fn get_holiday(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Holiday>> {
    let holiday = state.holiday_service.get_holiday(&id).await?;
    Ok(Json(holiday))
}

pub async fn create_holiday(
    State(state): State<AppState>,
    payload: Result<Json<HolidayRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Holiday>)> {
    let Json(request) = payload?;
    let holiday = state.holiday_service.create_holiday(request).await?;
    Ok((StatusCode::CREATED, Json(holiday)))
}

pub async fn update_holiday(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<HolidayRequest>, JsonRejection>,
) -> ApiResult<Json<Holiday>> {
    let Json(request) = payload?;
    let holiday = state.holiday_service.update_holiday(&id, request).await?;
    Ok(Json(holiday))
}

pub async fn delete_holiday(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.holiday_service.delete_holiday(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
