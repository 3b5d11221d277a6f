use crate::domain::entities::{
    Country, Holiday, HolidayFilter, HolidayListResponse, HolidayRequest,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::holiday_repository::HolidayRepository;
use std::sync::Arc;
use tracing::info;

/// Service for managing the holiday calendar
#[derive(Clone)]
pub struct HolidayService {
    holiday_repo: Arc<dyn HolidayRepository>,
}

impl HolidayService {
    pub fn new(holiday_repo: Arc<dyn HolidayRepository>) -> Self {
        Self { holiday_repo }
    }

    /// Create a new holiday
    pub async fn create_holiday(&self, request: HolidayRequest) -> DomainResult<Holiday> {
        let fields = request.validate()?;
        let holiday = Holiday::new(fields.date, fields.name, fields.country, fields.region);

        self.holiday_repo.create_holiday(&holiday).await?;

        info!(
            "Created holiday: {} on {} ({})",
            holiday.name, holiday.date, holiday.id
        );
        Ok(holiday)
    }

    /// Get holiday by ID
    pub async fn get_holiday(&self, id: &str) -> DomainResult<Holiday> {
        self.holiday_repo
            .get_holiday(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Holiday {} not found", id)))
    }

    /// List holidays, optionally narrowed to a country and/or calendar year
    pub async fn list_holidays(
        &self,
        country: Option<&str>,
        year: Option<i32>,
    ) -> DomainResult<HolidayListResponse> {
        let country = country
            .filter(|c| !c.trim().is_empty())
            .map(str::parse::<Country>)
            .transpose()?;

        let filter = HolidayFilter { country, year };
        let holidays = self.holiday_repo.list_holidays(&filter).await?;
        let count = holidays.len() as i64;

        Ok(HolidayListResponse { holidays, count })
    }

    /// Replace every editable field of an existing holiday
    pub async fn update_holiday(&self, id: &str, request: HolidayRequest) -> DomainResult<Holiday> {
        let fields = request.validate()?;
        let current = self.get_holiday(id).await?;

        let updated = Holiday {
            date: fields.date,
            name: fields.name,
            country: fields.country,
            region: fields.region,
            updated_at: chrono::Utc::now().to_rfc3339(),
            ..current
        };

        self.holiday_repo.update_holiday(&updated).await?;

        info!("Updated holiday: {} ({})", updated.name, updated.id);
        Ok(updated)
    }

    /// Delete a holiday
    pub async fn delete_holiday(&self, id: &str) -> DomainResult<()> {
        if !self.holiday_repo.delete_holiday(id).await? {
            return Err(DomainError::NotFound(format!("Holiday {} not found", id)));
        }

        info!("Deleted holiday: {}", id);
        Ok(())
    }
}
