use crate::domain::entities::WeekendDefinition;
use crate::domain::errors::DomainResult;
use crate::domain::ports::configuration_repository::ConfigurationRepository;
use std::sync::Arc;
use tracing::info;

/// Service for the global weekend configuration
#[derive(Clone)]
pub struct ConfigurationService {
    configuration_repo: Arc<dyn ConfigurationRepository>,
}

impl ConfigurationService {
    pub fn new(configuration_repo: Arc<dyn ConfigurationRepository>) -> Self {
        Self { configuration_repo }
    }

    /// Current weekend definition, falling back to Sunday and Saturday
    pub async fn get_weekend(&self) -> DomainResult<WeekendDefinition> {
        Ok(self
            .configuration_repo
            .get_configuration()
            .await?
            .map(|config| config.weekend)
            .unwrap_or_default())
    }

    /// Replace the weekend definition with the given Sunday-based indices
    pub async fn update_weekend(&self, weekend_days: &[u8]) -> DomainResult<WeekendDefinition> {
        let weekend = WeekendDefinition::from_indices(weekend_days)?;

        self.configuration_repo
            .save_weekend_configuration(&weekend)
            .await?;

        info!("Weekend configuration updated: {:?}", weekend.indices());
        Ok(weekend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SystemConfiguration;
    use crate::domain::errors::DomainError;
    use async_trait::async_trait;
    use chrono::Weekday;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryConfiguration {
        record: Mutex<Option<SystemConfiguration>>,
    }

    #[async_trait]
    impl ConfigurationRepository for InMemoryConfiguration {
        async fn get_configuration(&self) -> DomainResult<Option<SystemConfiguration>> {
            Ok(self.record.lock().unwrap().clone())
        }

        async fn save_weekend_configuration(
            &self,
            weekend: &WeekendDefinition,
        ) -> DomainResult<()> {
            let mut record = self.record.lock().unwrap();
            let mut config = record.take().unwrap_or_default();
            config.weekend = *weekend;
            *record = Some(config);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_missing_record_defaults_to_sunday_saturday() {
        let service = ConfigurationService::new(Arc::new(InMemoryConfiguration::default()));
        let weekend = service.get_weekend().await.unwrap();
        assert_eq!(weekend, WeekendDefinition::default());
    }

    #[tokio::test]
    async fn test_update_weekend_round_trip() {
        let service = ConfigurationService::new(Arc::new(InMemoryConfiguration::default()));

        let updated = service.update_weekend(&[5, 6]).await.unwrap();
        assert_eq!(updated.days(), vec![Weekday::Fri, Weekday::Sat]);

        let stored = service.get_weekend().await.unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_update_weekend_rejects_bad_index() {
        let repo = Arc::new(InMemoryConfiguration::default());
        let service = ConfigurationService::new(repo.clone());

        let result = service.update_weekend(&[0, 9]).await;
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
        assert!(repo.record.lock().unwrap().is_none());
    }
}
