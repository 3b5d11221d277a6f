use crate::domain::entities::{Holiday, HolidayFilter};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Read side used by working-day calculation
#[async_trait]
pub trait HolidayReader: Send + Sync {
    /// Every holiday date in `[start, end]` inclusive, regardless of country or region
    async fn get_holiday_dates(&self, start: NaiveDate, end: NaiveDate)
        -> DomainResult<HashSet<NaiveDate>>;
}

/// Repository for holiday calendar management
#[async_trait]
pub trait HolidayRepository: Send + Sync {
    async fn create_holiday(&self, holiday: &Holiday) -> DomainResult<()>;
    async fn get_holiday(&self, id: &str) -> DomainResult<Option<Holiday>>;
    async fn list_holidays(&self, filter: &HolidayFilter) -> DomainResult<Vec<Holiday>>;
    async fn update_holiday(&self, holiday: &Holiday) -> DomainResult<()>;
    /// Returns false when no holiday had that id
    async fn delete_holiday(&self, id: &str) -> DomainResult<bool>;
    async fn count_holidays(&self) -> DomainResult<i64>;
}
