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
pub struct ListVacationsQuery {
    pub person_id: Option<String>,
    pub year: Option<i32>,
}

pub async fn list_vacations(
    State(state): State<AppState>,
    query: Result<Query<ListVacationsQuery>, QueryRejection>,
) -> ApiResult<Json<VacationListResponse>> {
    let Query(query) = query?;
    let response = state
        .vacation_service
        .list_vacations(query.person_id.as_deref(), query.year)
        .await?;
    Ok(Json(response))
}

pub async fn list_person_vacations(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
) -> ApiResult<Json<VacationListResponse>> {
    let response = state
        .vacation_service
        .list_vacations(Some(&person_id), None)
        .await?;
    Ok(Json(response))
}

pub async fn get_vacation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<VacationResponse>> {
    let vacation = state.vacation_service.get_vacation(&id).await?;
    Ok(Json(vacation))
}

pub async fn create_vacation(
    State(state): State<AppState>,
    payload: Result<Json<VacationRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<VacationResponse>)> {
    let Json(request) = payload?;
    let vacation = state.vacation_service.create_vacation(request).await?;
    Ok((StatusCode::CREATED, Json(vacation)))
}

pub async fn update_vacation(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<VacationRequest>, JsonRejection>,
) -> ApiResult<Json<VacationResponse>> {
    let Json(request) = payload?;
    let vacation = state.vacation_service.update_vacation(&id, request).await?;
    Ok(Json(vacation))
}

pub async fn delete_vacation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.vacation_service.delete_vacation(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
