use crate::{
    domain::entities::StatsOverviewResponse,
    infrastructure::http::{
        controllers::persons::YearQuery,
        middleware::{ApiResult, AppState},
    },
};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

pub async fn get_overview(
    State(state): State<AppState>,
    query: Result<Query<YearQuery>, QueryRejection>,
) -> ApiResult<Json<StatsOverviewResponse>> {
    let Query(query) = query?;
    let overview = state
        .stats_service
        .overview(query.year_or_current())
        .await?;
    Ok(Json(overview))
}
