pub mod configuration_service;
pub mod holiday_service;
pub mod person_service;
pub mod rate_limiter;
pub mod stats_service;
pub mod vacation_service;
pub mod working_days_calculator;

pub use configuration_service::ConfigurationService;
pub use holiday_service::HolidayService;
pub use person_service::PersonService;
pub use rate_limiter::ApiRateLimiter;
pub use stats_service::StatsService;
pub use vacation_service::VacationService;
pub use working_days_calculator::{count_working_days, WorkingDaysCalculator};
