use crate::domain::entities::{Person, PersonListResponse, PersonRequest};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::person_repository::PersonRepository;
use std::sync::Arc;
use tracing::info;

/// Service for managing people and their allowance
#[derive(Clone)]
pub struct PersonService {
    person_repo: Arc<dyn PersonRepository>,
}

impl PersonService {
    pub fn new(person_repo: Arc<dyn PersonRepository>) -> Self {
        Self { person_repo }
    }

    pub async fn create_person(&self, request: PersonRequest) -> DomainResult<Person> {
        let fields = request.validate()?;
        let person = Person::new(fields.name, fields.email, fields.available_days);

        self.person_repo.create_person(&person).await?;

        info!("Created person: {} ({})", person.name, person.id);
        Ok(person)
    }

    pub async fn get_person(&self, id: &str) -> DomainResult<Person> {
        self.person_repo
            .get_person(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Person {} not found", id)))
    }

    pub async fn list_persons(&self) -> DomainResult<PersonListResponse> {
        let persons = self.person_repo.list_persons().await?;
        let count = persons.len() as i64;
        Ok(PersonListResponse { persons, count })
    }

    /// Replace name, email and allowance of an existing person
    pub async fn update_person(&self, id: &str, request: PersonRequest) -> DomainResult<Person> {
        let fields = request.validate()?;
        let current = self.get_person(id).await?;

        let updated = Person {
            name: fields.name,
            email: fields.email,
            available_days: fields.available_days,
            updated_at: chrono::Utc::now().to_rfc3339(),
            ..current
        };

        self.person_repo.update_person(&updated).await?;

        info!("Updated person: {} ({})", updated.name, updated.id);
        Ok(updated)
    }

    /// Delete a person together with their vacations
    pub async fn delete_person(&self, id: &str) -> DomainResult<()> {
        if !self.person_repo.delete_person(id).await? {
            return Err(DomainError::NotFound(format!("Person {} not found", id)));
        }

        info!("Deleted person: {}", id);
        Ok(())
    }
}
