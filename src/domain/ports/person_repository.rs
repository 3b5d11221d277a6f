use crate::domain::entities::Person;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Repository for people and their yearly allowance
#[async_trait]
pub trait PersonRepository: Send + Sync {
    async fn create_person(&self, person: &Person) -> DomainResult<()>;
    async fn get_person(&self, id: &str) -> DomainResult<Option<Person>>;
    /// Ordered by name
    async fn list_persons(&self) -> DomainResult<Vec<Person>>;
    async fn update_person(&self, person: &Person) -> DomainResult<()>;
    /// Deletes the person's vacations too; returns false when no person had that id
    async fn delete_person(&self, id: &str) -> DomainResult<bool>;
}
