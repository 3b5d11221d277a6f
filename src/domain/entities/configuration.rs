use super::{Country, WeekendDefinition};
use serde::{Deserialize, Serialize};

/// The single global configuration record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfiguration {
    pub first_day_of_week: u8, // 0 = Sunday, 1 = Monday
    pub weekend: WeekendDefinition,
    pub default_country: Country,
    pub updated_at: String,
}

impl Default for SystemConfiguration {
    fn default() -> Self {
        Self {
            first_day_of_week: 1,
            weekend: WeekendDefinition::default(),
            default_country: Country::AR,
            updated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// DTO for reading and replacing the weekend definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekendConfigurationDto {
    pub weekend_days: Vec<u8>,
}

impl From<WeekendDefinition> for WeekendConfigurationDto {
    fn from(weekend: WeekendDefinition) -> Self {
        Self {
            weekend_days: weekend.indices(),
        }
    }
}
