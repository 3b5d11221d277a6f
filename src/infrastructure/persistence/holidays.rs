use crate::domain::entities::{
    Country, Holiday, HolidayFilter, MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::holiday_repository::{HolidayReader, HolidayRepository};
use crate::infrastructure::persistence::{parse_date, Database, DATE_FORMAT};
use chrono::{Datelike, NaiveDate};
use sqlx::{
    any::{AnyArguments, AnyRow},
    query::Query,
    Any, Row,
};
use std::collections::HashSet;

impl Database {
    // ========================================
    // Holiday Operations
    // ========================================

    /// Create a new holiday
    pub async fn create_holiday(&self, holiday: &Holiday) -> DomainResult<()> {
        insert_holiday(holiday)
            .execute(&self.pool)
            .await
            .map_err(|e| duplicate_holiday(e, holiday))?;

        Ok(())
    }

    /// Insert all holidays or none of them
    pub async fn insert_holidays(&self, holidays: &[Holiday]) -> DomainResult<usize> {
        let mut tx = self.pool.begin().await?;

        for holiday in holidays {
            insert_holiday(holiday)
                .execute(&mut *tx)
                .await
                .map_err(|e| duplicate_holiday(e, holiday))?;
        }

        tx.commit().await?;
        Ok(holidays.len())
    }

    /// Get a holiday by ID
    pub async fn get_holiday(&self, id: &str) -> DomainResult<Option<Holiday>> {
        let row = sqlx::query(
            "SELECT id, date, name, country, region, created_at, updated_at
             FROM holidays WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_holiday).transpose()
    }

    /// List holidays ordered by date
    pub async fn list_holidays(&self, filter: &HolidayFilter) -> DomainResult<Vec<Holiday>> {
        let mut sql = String::from(
            "SELECT id, date, name, country, region, created_at, updated_at
             FROM holidays WHERE 1 = 1",
        );
        let mut params: Vec<String> = Vec::new();

        if let Some(country) = filter.country {
            sql.push_str(" AND country = ?");
            params.push(country.as_str().to_string());
        }
        if let Some(year) = filter.year {
            sql.push_str(" AND substr(date, 1, 4) = ?");
            params.push(format!("{:04}", year));
        }
        sql.push_str(" ORDER BY date ASC, country ASC");

        let mut query = sqlx::query(&sql);
        for param in &params {
            query = query.bind(param.as_str());
        }

        let rows = query.fetch_all(&self.pool).await?;
        rows.iter().map(row_to_holiday).collect()
    }

    /// Holiday dates within `[start, end]`, all countries included
    pub async fn holiday_dates_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<HashSet<NaiveDate>> {
        // Stored dates are four-digit years; clamp so text comparison stays ordered
        if start > end || start.year() > MAX_SUPPORTED_YEAR || end.year() < MIN_SUPPORTED_YEAR {
            return Ok(HashSet::new());
        }
        let start = if start.year() < MIN_SUPPORTED_YEAR {
            format!("{:04}-01-01", MIN_SUPPORTED_YEAR)
        } else {
            start.format(DATE_FORMAT).to_string()
        };
        let end = if end.year() > MAX_SUPPORTED_YEAR {
            format!("{:04}-12-31", MAX_SUPPORTED_YEAR)
        } else {
            end.format(DATE_FORMAT).to_string()
        };

        let rows = sqlx::query("SELECT DISTINCT date FROM holidays WHERE date >= ? AND date <= ?")
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| parse_date(&row.try_get::<String, _>("date")?))
            .collect()
    }

    /// Update a holiday
    pub async fn update_holiday(&self, holiday: &Holiday) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE holidays SET date = ?, name = ?, country = ?, region = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(holiday.date.format(DATE_FORMAT).to_string())
        .bind(&holiday.name)
        .bind(holiday.country.as_str())
        .bind(&holiday.region)
        .bind(&holiday.updated_at)
        .bind(&holiday.id)
        .execute(&self.pool)
        .await
        .map_err(|e| duplicate_holiday(e, holiday))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "Holiday {} not found",
                holiday.id
            )));
        }

        Ok(())
    }

    /// Delete a holiday
    pub async fn delete_holiday(&self, id: &str) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM holidays WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count_holidays(&self) -> DomainResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM holidays")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

fn insert_holiday(holiday: &Holiday) -> Query<'_, Any, AnyArguments<'_>> {
    sqlx::query(
        "INSERT INTO holidays (id, date, name, country, region, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&holiday.id)
    .bind(holiday.date.format(DATE_FORMAT).to_string())
    .bind(&holiday.name)
    .bind(holiday.country.as_str())
    .bind(&holiday.region)
    .bind(&holiday.created_at)
    .bind(&holiday.updated_at)
}

fn row_to_holiday(row: &AnyRow) -> DomainResult<Holiday> {
    let country: String = row.try_get("country")?;
    let country = country
        .parse::<Country>()
        .map_err(|_| DomainError::Internal(format!("Unknown country '{}' in store", country)))?;

    Ok(Holiday {
        id: row.try_get("id")?,
        date: parse_date(&row.try_get::<String, _>("date")?)?,
        name: row.try_get("name")?,
        country,
        region: row.try_get::<Option<String>, _>("region")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn duplicate_holiday(err: sqlx::Error, holiday: &Holiday) -> DomainError {
    match DomainError::from(err) {
        DomainError::Conflict(_) => DomainError::Conflict(format!(
            "A holiday already exists on {} for {}{}",
            holiday.date,
            holiday.country,
            holiday
                .region
                .as_deref()
                .map(|r| format!(" ({})", r))
                .unwrap_or_default()
        )),
        other => other,
    }
}

#[async_trait::async_trait]
impl HolidayReader for Database {
    async fn get_holiday_dates(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<HashSet<NaiveDate>> {
        self.holiday_dates_between(start, end).await
    }
}

#[async_trait::async_trait]
impl HolidayRepository for Database {
    async fn create_holiday(&self, holiday: &Holiday) -> DomainResult<()> {
        Database::create_holiday(self, holiday).await
    }

    async fn get_holiday(&self, id: &str) -> DomainResult<Option<Holiday>> {
        Database::get_holiday(self, id).await
    }

    async fn list_holidays(&self, filter: &HolidayFilter) -> DomainResult<Vec<Holiday>> {
        Database::list_holidays(self, filter).await
    }

    async fn update_holiday(&self, holiday: &Holiday) -> DomainResult<()> {
        Database::update_holiday(self, holiday).await
    }

    async fn delete_holiday(&self, id: &str) -> DomainResult<bool> {
        Database::delete_holiday(self, id).await
    }

    async fn count_holidays(&self) -> DomainResult<i64> {
        Database::count_holidays(self).await
    }
}
