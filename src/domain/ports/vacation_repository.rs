use crate::domain::entities::{Vacation, VacationFilter};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait VacationRepository: Send + Sync {
    async fn create_vacation(&self, vacation: &Vacation) -> DomainResult<()>;
    async fn get_vacation(&self, id: &str) -> DomainResult<Option<Vacation>>;
    /// Ordered by start date
    async fn list_vacations(&self, filter: &VacationFilter) -> DomainResult<Vec<Vacation>>;
    async fn update_vacation(&self, vacation: &Vacation) -> DomainResult<()>;
    /// Returns false when no vacation had that id
    async fn delete_vacation(&self, id: &str) -> DomainResult<bool>;
}
