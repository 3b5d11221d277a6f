pub mod error;
pub mod rate_limit;

pub use error::{ApiError, ApiResult};
pub use rate_limit::rate_limit_middleware;

use crate::application::services::{
    ApiRateLimiter, ConfigurationService, HolidayService, PersonService, StatsService,
    VacationService, WorkingDaysCalculator,
};

#[derive(Clone)]
pub struct AppState {
    pub service_name: String,
    pub working_days_calculator: WorkingDaysCalculator,
    pub holiday_service: HolidayService,
    pub configuration_service: ConfigurationService,
    pub person_service: PersonService,
    pub vacation_service: VacationService,
    pub stats_service: StatsService,
    pub rate_limiter: ApiRateLimiter,
    pub trust_forwarded_for: bool,
}
