use crate::{
    domain::entities::WeekendConfigurationDto,
    infrastructure::http::middleware::{ApiResult, AppState},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

pub async fn get_weekend_configuration(
    State(state): State<AppState>,
) -> ApiResult<Json<WeekendConfigurationDto>> {
    let weekend = state.configuration_service.get_weekend().await?;
    Ok(Json(WeekendConfigurationDto::from(weekend)))
}

pub async fn update_weekend_configuration(
    State(state): State<AppState>,
    payload: Result<Json<WeekendConfigurationDto>, JsonRejection>,
) -> ApiResult<Json<WeekendConfigurationDto>> {
    let Json(request) = payload?;
    let weekend = state
        .configuration_service
        .update_weekend(&request.weekend_days)
        .await?;
    Ok(Json(WeekendConfigurationDto::from(weekend)))
}
