use crate::domain::entities::{Vacation, VacationFilter, VacationStatus};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::vacation_repository::VacationRepository;
use crate::infrastructure::persistence::{parse_date, Database, DATE_FORMAT};
use sqlx::{any::AnyRow, Row};

impl Database {
    // ========================================
    // Vacation Operations
    // ========================================

    pub async fn create_vacation(&self, vacation: &Vacation) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO vacations
             (id, person_id, start_date, end_date, status, notes, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&vacation.id)
        .bind(&vacation.person_id)
        .bind(vacation.start_date.format(DATE_FORMAT).to_string())
        .bind(vacation.end_date.format(DATE_FORMAT).to_string())
        .bind(vacation.status.as_str())
        .bind(&vacation.notes)
        .bind(&vacation.created_at)
        .bind(&vacation.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn get_vacation(&self, id: &str) -> DomainResult<Option<Vacation>> {
        let row = sqlx::query(
            "SELECT id, person_id, start_date, end_date, status, notes, created_at, updated_at
             FROM vacations WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_vacation).transpose()
    }

    /// List vacations ordered by start date
    pub async fn list_vacations(&self, filter: &VacationFilter) -> DomainResult<Vec<Vacation>> {
        let mut sql = String::from(
            "SELECT id, person_id, start_date, end_date, status, notes, created_at, updated_at
             FROM vacations WHERE 1 = 1",
        );
        let mut params: Vec<String> = Vec::new();

        if let Some(person_id) = &filter.person_id {
            sql.push_str(" AND person_id = ?");
            params.push(person_id.clone());
        }
        if let Some(year) = filter.year {
            // Overlaps the year at all
            sql.push_str(" AND start_date <= ? AND end_date >= ?");
            params.push(format!("{:04}-12-31", year));
            params.push(format!("{:04}-01-01", year));
        }
        sql.push_str(" ORDER BY start_date ASC, end_date ASC, id ASC");

        let mut query = sqlx::query(&sql);
        for param in &params {
            query = query.bind(param.as_str());
        }

        let rows = query.fetch_all(&self.pool).await?;
        rows.iter().map(row_to_vacation).collect()
    }

    pub async fn update_vacation(&self, vacation: &Vacation) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE vacations
             SET person_id = ?, start_date = ?, end_date = ?, status = ?, notes = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&vacation.person_id)
        .bind(vacation.start_date.format(DATE_FORMAT).to_string())
        .bind(vacation.end_date.format(DATE_FORMAT).to_string())
        .bind(vacation.status.as_str())
        .bind(&vacation.notes)
        .bind(&vacation.updated_at)
        .bind(&vacation.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "Vacation {} not found",
                vacation.id
            )));
        }

        Ok(())
    }

    pub async fn delete_vacation(&self, id: &str) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM vacations WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_vacation(row: &AnyRow) -> DomainResult<Vacation> {
    let status: String = row.try_get("status")?;
    let status = status
        .parse::<VacationStatus>()
        .map_err(|_| DomainError::Internal(format!("Unknown status '{}' in store", status)))?;

    Ok(Vacation {
        id: row.try_get("id")?,
        person_id: row.try_get("person_id")?,
        start_date: parse_date(&row.try_get::<String, _>("start_date")?)?,
        end_date: parse_date(&row.try_get::<String, _>("end_date")?)?,
        status,
        notes: row.try_get::<Option<String>, _>("notes")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait::async_trait]
impl VacationRepository for Database {
    async fn create_vacation(&self, vacation: &Vacation) -> DomainResult<()> {
        Database::create_vacation(self, vacation).await
    }

    async fn get_vacation(&self, id: &str) -> DomainResult<Option<Vacation>> {
        Database::get_vacation(self, id).await
    }

    async fn list_vacations(&self, filter: &VacationFilter) -> DomainResult<Vec<Vacation>> {
        Database::list_vacations(self, filter).await
    }

    async fn update_vacation(&self, vacation: &Vacation) -> DomainResult<()> {
        Database::update_vacation(self, vacation).await
    }

    async fn delete_vacation(&self, id: &str) -> DomainResult<bool> {
        Database::delete_vacation(self, id).await
    }
}
