use crate::infrastructure::http::controllers;
use crate::infrastructure::http::middleware::{rate_limit_middleware, AppState};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: AppState) -> Router {
    // Rate limited API routes
    let api = Router::new()
        .route(
            "/api/working-days",
            get(controllers::working_days::get_working_days),
        )
        .route(
            "/api/working-days/batch",
            post(controllers::working_days::compute_batch),
        )
        .route(
            "/api/holidays",
            get(controllers::holidays::list_holidays).post(controllers::holidays::create_holiday),
        )
        .route(
            "/api/holidays/:id",
            get(controllers::holidays::get_holiday)
                .put(controllers::holidays::update_holiday)
                .delete(controllers::holidays::delete_holiday),
        )
        .route(
            "/api/persons",
            get(controllers::persons::list_persons).post(controllers::persons::create_person),
        )
        .route(
            "/api/persons/:id",
            get(controllers::persons::get_person)
                .put(controllers::persons::update_person)
                .delete(controllers::persons::delete_person),
        )
        .route(
            "/api/persons/:id/stats",
            get(controllers::persons::get_person_stats),
        )
        .route(
            "/api/persons/:id/vacations",
            get(controllers::vacations::list_person_vacations),
        )
        .route(
            "/api/vacations",
            get(controllers::vacations::list_vacations)
                .post(controllers::vacations::create_vacation),
        )
        .route(
            "/api/vacations/:id",
            get(controllers::vacations::get_vacation)
                .put(controllers::vacations::update_vacation)
                .delete(controllers::vacations::delete_vacation),
        )
        .route("/api/stats/overview", get(controllers::stats::get_overview))
        .route(
            "/api/configuration/weekend",
            get(controllers::configuration::get_weekend_configuration)
                .put(controllers::configuration::update_weekend_configuration),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ));

    Router::new()
        .route("/", get(controllers::health::index))
        .route("/health", get(controllers::health::health_check))
        .merge(api)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
