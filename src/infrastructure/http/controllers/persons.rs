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
use chrono::{Datelike, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct YearQuery {
    pub year: Option<i32>,
}

impl YearQuery {
    /// Requested year, defaulting to the current one
    pub fn year_or_current(&self) -> i32 {
        self.year.unwrap_or_else(|| Utc::now().year())
    }
}

pub async fn list_persons(State(state): State<AppState>) -> ApiResult<Json<PersonListResponse>> {
    let response = state.person_service.list_persons().await?;
    Ok(Json(response))
}

pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Person>> {
    let person = state.person_service.get_person(&id).await?;
    Ok(Json(person))
}

pub async fn create_person(
    State(state): State<AppState>,
    payload: Result<Json<PersonRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Person>)> {
    let Json(request) = payload?;
    let person = state.person_service.create_person(request).await?;
    Ok((StatusCode::CREATED, Json(person)))
}

pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<PersonRequest>, JsonRejection>,
) -> ApiResult<Json<Person>> {
    let Json(request) = payload?;
    let person = state.person_service.update_person(&id, request).await?;
    Ok(Json(person))
}

pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.person_service.delete_person(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_person_stats(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<YearQuery>, QueryRejection>,
) -> ApiResult<Json<PersonStats>> {
    let Query(query) = query?;
    let today = Utc::now().date_naive();
    let stats = state
        .stats_service
        .person_stats(&id, query.year_or_current(), today)
        .await?;
    Ok(Json(stats))
}
