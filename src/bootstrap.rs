use crate::application::services::{
    ApiRateLimiter, ConfigurationService, HolidayService, PersonService, StatsService,
    VacationService, WorkingDaysCalculator,
};
use crate::config::Config;
use crate::domain::errors::DomainResult;
use crate::domain::ports::configuration_repository::{
    ConfigurationReader, ConfigurationRepository,
};
use crate::domain::ports::holiday_repository::{HolidayReader, HolidayRepository};
use crate::domain::ports::person_repository::PersonRepository;
use crate::domain::ports::vacation_repository::VacationRepository;
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::persistence::Database;
use std::sync::Arc;
use std::time::Duration;

/// Wire services onto the database and start background maintenance.
///
/// Must be called from within a Tokio runtime.
pub fn build_app_state(db: Database, config: &Config) -> AppState {
    let db = Arc::new(db);

    let working_days_calculator = WorkingDaysCalculator::new(
        db.clone() as Arc<dyn HolidayReader>,
        db.clone() as Arc<dyn ConfigurationReader>,
    );
    tracing::info!("Working days calculator initialized");

    let holiday_service = HolidayService::new(db.clone() as Arc<dyn HolidayRepository>);
    let configuration_service =
        ConfigurationService::new(db.clone() as Arc<dyn ConfigurationRepository>);

    let person_repo = db.clone() as Arc<dyn PersonRepository>;
    let vacation_repo = db.clone() as Arc<dyn VacationRepository>;
    let person_service = PersonService::new(person_repo.clone());
    let vacation_service = VacationService::new(
        vacation_repo.clone(),
        person_repo.clone(),
        working_days_calculator.clone(),
    );
    let stats_service =
        StatsService::new(person_repo, vacation_repo, working_days_calculator.clone());

    let window = Duration::from_secs(config.rate_limit_window_seconds);
    let rate_limiter = ApiRateLimiter::new(config.rate_limit_requests, window);
    tracing::info!(
        "Rate limiter initialized ({} requests per {}s)",
        rate_limiter.max_requests(),
        config.rate_limit_window_seconds
    );
    spawn_rate_limiter_cleanup(rate_limiter.clone(), window);

    AppState {
        service_name: config.service_name.clone(),
        working_days_calculator,
        holiday_service,
        configuration_service,
        person_service,
        vacation_service,
        stats_service,
        rate_limiter,
        trust_forwarded_for: config.trust_forwarded_for,
    }
}

/// Load reference data into an empty store
pub async fn seed_reference_data(db: &Database, config: &Config) -> DomainResult<()> {
    if !config.seed_holidays {
        tracing::info!("Holiday seeding disabled");
        return Ok(());
    }

    let inserted = db.seed_holidays().await?;
    if inserted > 0 {
        tracing::info!("Inserted {} reference holidays", inserted);
    }
    Ok(())
}

fn spawn_rate_limiter_cleanup(rate_limiter: ApiRateLimiter, every: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            rate_limiter.cleanup();
            tracing::debug!(
                "Rate limiter cleanup, {} clients tracked",
                rate_limiter.tracked_clients()
            );
        }
    });
}
