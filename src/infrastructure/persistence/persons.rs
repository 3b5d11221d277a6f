use crate::domain::entities::Person;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::person_repository::PersonRepository;
use crate::infrastructure::persistence::Database;
use sqlx::{any::AnyRow, Row};

impl Database {
    // ========================================
    // Person Operations
    // ========================================

    pub async fn create_person(&self, person: &Person) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO persons (id, name, email, available_days, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&person.id)
        .bind(&person.name)
        .bind(&person.email)
        .bind(i64::from(person.available_days))
        .bind(&person.created_at)
        .bind(&person.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| duplicate_email(e, &person.email))?;

        Ok(())
    }

    pub async fn get_person(&self, id: &str) -> DomainResult<Option<Person>> {
        let row = sqlx::query(
            "SELECT id, name, email, available_days, created_at, updated_at
             FROM persons WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_person).transpose()
    }

    pub async fn list_persons(&self) -> DomainResult<Vec<Person>> {
        let rows = sqlx::query(
            "SELECT id, name, email, available_days, created_at, updated_at
             FROM persons ORDER BY name ASC, email ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_person).collect()
    }

    pub async fn update_person(&self, person: &Person) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE persons SET name = ?, email = ?, available_days = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&person.name)
        .bind(&person.email)
        .bind(i64::from(person.available_days))
        .bind(&person.updated_at)
        .bind(&person.id)
        .execute(&self.pool)
        .await
        .map_err(|e| duplicate_email(e, &person.email))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "Person {} not found",
                person.id
            )));
        }

        Ok(())
    }

    /// Delete a person and their vacations in one transaction
    pub async fn delete_person(&self, id: &str) -> DomainResult<bool> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM vacations WHERE person_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM persons WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}

fn row_to_person(row: &AnyRow) -> DomainResult<Person> {
    let available_days: i64 = row.try_get("available_days")?;
    let available_days = i32::try_from(available_days).map_err(|_| {
        DomainError::Internal(format!("Available days {} out of range", available_days))
    })?;

    Ok(Person {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        available_days,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn duplicate_email(err: sqlx::Error, email: &str) -> DomainError {
    match DomainError::from(err) {
        DomainError::Conflict(_) => {
            DomainError::Conflict(format!("A person with email {} already exists", email))
        }
        other => other,
    }
}

#[async_trait::async_trait]
impl PersonRepository for Database {
    async fn create_person(&self, person: &Person) -> DomainResult<()> {
        Database::create_person(self, person).await
    }

    async fn get_person(&self, id: &str) -> DomainResult<Option<Person>> {
        Database::get_person(self, id).await
    }

    async fn list_persons(&self) -> DomainResult<Vec<Person>> {
        Database::list_persons(self).await
    }

    async fn update_person(&self, person: &Person) -> DomainResult<()> {
        Database::update_person(self, person).await
    }

    async fn delete_person(&self, id: &str) -> DomainResult<bool> {
        Database::delete_person(self, id).await
    }
}
