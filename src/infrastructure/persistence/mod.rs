use crate::domain::errors::{DomainError, DomainResult};
use chrono::NaiveDate;
use log::LevelFilter;
use sqlx::{
    any::{AnyConnectOptions, AnyPoolOptions},
    AnyPool, ConnectOptions,
};
use std::str::FromStr;

mod configuration;
mod holidays;
mod persons;
pub mod seeds;
mod vacations;

pub use configuration::{format_weekend_days, parse_weekend_days};

pub struct Database {
    pub(crate) pool: AnyPool,
}

impl Database {
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        // Ensure drivers are installed for AnyPool
        sqlx::any::install_default_drivers();

        let mut connect_options = AnyConnectOptions::from_str(database_url)?;

        connect_options = connect_options
            .log_statements(LevelFilter::Info)
            .log_slow_statements(LevelFilter::Warn, std::time::Duration::from_secs(1));

        let pool = AnyPoolOptions::new()
            .max_connections(10)
            .min_connections(1)
            .connect_with(connect_options)
            .await?;

        if database_url.starts_with("sqlite") {
            sqlx::query("PRAGMA journal_mode = WAL")
                .execute(&pool)
                .await?;
            sqlx::query("PRAGMA busy_timeout = 5000")
                .execute(&pool)
                .await?;
        }

        tracing::debug!("Database pool ready");
        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        sqlx::migrate!("migrations/sqlite").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
        }
    }
}

/// Stored calendar dates are plain `YYYY-MM-DD` text
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn parse_date(raw: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| DomainError::Internal(format!("Malformed date '{}' in store", raw)))
}

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DomainError::NotFound("Resource not found".to_string()),
            sqlx::Error::Database(db_err) => {
                let message = db_err.message();
                if message.contains("UNIQUE") || message.contains("unique") {
                    DomainError::Conflict("Record already exists".to_string())
                } else {
                    DomainError::StoreUnavailable(format!("Database error: {}", message))
                }
            }
            other => DomainError::StoreUnavailable(other.to_string()),
        }
    }
}
