use crate::domain::entities::{Country, SystemConfiguration, WeekendDefinition};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::configuration_repository::{
    ConfigurationReader, ConfigurationRepository,
};
use crate::infrastructure::persistence::Database;
use sqlx::Row;

impl Database {
    // ========================================
    // System Configuration Operations
    // ========================================

    /// Get the configuration record, if one exists
    pub async fn get_system_configuration(&self) -> DomainResult<Option<SystemConfiguration>> {
        let row = sqlx::query(
            "SELECT first_day_of_week, weekend_days, default_country, updated_at
             FROM system_config WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let first_day_of_week: i64 = row.try_get("first_day_of_week")?;
        let weekend_days: String = row.try_get("weekend_days")?;
        let default_country: String = row.try_get("default_country")?;

        Ok(Some(SystemConfiguration {
            first_day_of_week: u8::try_from(first_day_of_week).map_err(|_| {
                DomainError::Internal(format!(
                    "Invalid first_day_of_week {} in store",
                    first_day_of_week
                ))
            })?,
            weekend: parse_weekend_days(&weekend_days)?,
            default_country: default_country.parse::<Country>().map_err(|_| {
                DomainError::Internal(format!(
                    "Unknown default_country '{}' in store",
                    default_country
                ))
            })?,
            updated_at: row.try_get("updated_at")?,
        }))
    }

    /// Store the weekend definition, creating the record with defaults if missing
    pub async fn save_weekend_days(&self, weekend: &WeekendDefinition) -> DomainResult<()> {
        let now = chrono::Utc::now().to_rfc3339();
        let defaults = SystemConfiguration::default();

        sqlx::query(
            "INSERT INTO system_config
                 (id, first_day_of_week, weekend_days, default_country, updated_at)
             VALUES (1, ?, ?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET
                 weekend_days = excluded.weekend_days,
                 updated_at = excluded.updated_at",
        )
        .bind(defaults.first_day_of_week as i64)
        .bind(format_weekend_days(weekend))
        .bind(defaults.default_country.as_str())
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Parse the stored comma-delimited weekday indices, e.g. `"0,6"`
pub fn parse_weekend_days(raw: &str) -> DomainResult<WeekendDefinition> {
    let indices = raw
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u8>().map_err(|_| {
                DomainError::Internal(format!("Malformed weekend_days '{}' in store", raw))
            })
        })
        .collect::<DomainResult<Vec<u8>>>()?;

    WeekendDefinition::from_indices(&indices)
        .map_err(|_| DomainError::Internal(format!("Malformed weekend_days '{}' in store", raw)))
}

pub fn format_weekend_days(weekend: &WeekendDefinition) -> String {
    weekend
        .indices()
        .iter()
        .map(|index| index.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[async_trait::async_trait]
impl ConfigurationReader for Database {
    async fn get_weekend_configuration(&self) -> DomainResult<Option<WeekendDefinition>> {
        Ok(self
            .get_system_configuration()
            .await?
            .map(|config| config.weekend))
    }
}

#[async_trait::async_trait]
impl ConfigurationRepository for Database {
    async fn get_configuration(&self) -> DomainResult<Option<SystemConfiguration>> {
        self.get_system_configuration().await
    }

    async fn save_weekend_configuration(&self, weekend: &WeekendDefinition) -> DomainResult<()> {
        self.save_weekend_days(weekend).await
    }
}
