use crate::domain::entities::{SystemConfiguration, WeekendDefinition};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Read side used by working-day calculation
#[async_trait]
pub trait ConfigurationReader: Send + Sync {
    /// `None` when no configuration record exists
    async fn get_weekend_configuration(&self) -> DomainResult<Option<WeekendDefinition>>;
}

#[async_trait]
pub trait ConfigurationRepository: Send + Sync {
    async fn get_configuration(&self) -> DomainResult<Option<SystemConfiguration>>;
    async fn save_weekend_configuration(&self, weekend: &WeekendDefinition) -> DomainResult<()>;
}
