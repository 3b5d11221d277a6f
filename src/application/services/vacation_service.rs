use crate::application::services::WorkingDaysCalculator;
use crate::domain::entities::{
    year_range, Person, Vacation, VacationFilter, VacationListResponse, VacationRequest,
    VacationResponse,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::person_repository::PersonRepository;
use crate::domain::ports::vacation_repository::VacationRepository;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Service for vacation requests.
///
/// Working-day counts are not stored. Every response recomputes them, so a
/// holiday or weekend change shows up on the next read.
#[derive(Clone)]
pub struct VacationService {
    vacation_repo: Arc<dyn VacationRepository>,
    person_repo: Arc<dyn PersonRepository>,
    calculator: WorkingDaysCalculator,
}

impl VacationService {
    pub fn new(
        vacation_repo: Arc<dyn VacationRepository>,
        person_repo: Arc<dyn PersonRepository>,
        calculator: WorkingDaysCalculator,
    ) -> Self {
        Self {
            vacation_repo,
            person_repo,
            calculator,
        }
    }

    /// Create a vacation for an existing person.
    ///
    /// Fails with [`DomainError::InvalidRange`] when the end date is before
    /// the start date, and with a validation error when the person is unknown.
    pub async fn create_vacation(
        &self,
        request: VacationRequest,
    ) -> DomainResult<VacationResponse> {
        let fields = request.validate()?;
        let person = self.existing_person(&fields.person_id).await?;
        let working_days = self
            .calculator
            .compute(fields.start_date, fields.end_date)
            .await?;

        let vacation = Vacation::new(fields);
        self.vacation_repo.create_vacation(&vacation).await?;

        info!(
            "Created vacation {} for {}: {} to {} ({} working days)",
            vacation.id, person.name, vacation.start_date, vacation.end_date, working_days
        );
        Ok(VacationResponse::from_vacation(
            vacation,
            person.name,
            working_days,
        ))
    }

    pub async fn get_vacation(&self, id: &str) -> DomainResult<VacationResponse> {
        let vacation = self.find_vacation(id).await?;
        self.describe(vec![vacation])
            .await?
            .pop()
            .ok_or_else(|| DomainError::Internal(format!("Vacation {} vanished", id)))
    }

    /// List vacations, optionally for one person and/or overlapping one year
    pub async fn list_vacations(
        &self,
        person_id: Option<&str>,
        year: Option<i32>,
    ) -> DomainResult<VacationListResponse> {
        if let Some(year) = year {
            year_range(year)?;
        }

        let filter = VacationFilter {
            person_id: person_id
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string),
            year,
        };
        let vacations = self.vacation_repo.list_vacations(&filter).await?;
        let vacations = self.describe(vacations).await?;
        let count = vacations.len() as i64;

        Ok(VacationListResponse { vacations, count })
    }

    /// Replace every editable field of an existing vacation
    pub async fn update_vacation(
        &self,
        id: &str,
        request: VacationRequest,
    ) -> DomainResult<VacationResponse> {
        let current = self.find_vacation(id).await?;
        let fields = request.validate()?;
        let person = self.existing_person(&fields.person_id).await?;
        let working_days = self
            .calculator
            .compute(fields.start_date, fields.end_date)
            .await?;

        let updated = Vacation {
            person_id: fields.person_id,
            start_date: fields.start_date,
            end_date: fields.end_date,
            status: fields.status,
            notes: fields.notes,
            updated_at: chrono::Utc::now().to_rfc3339(),
            ..current
        };
        self.vacation_repo.update_vacation(&updated).await?;

        info!("Updated vacation {} ({})", updated.id, updated.status);
        Ok(VacationResponse::from_vacation(
            updated,
            person.name,
            working_days,
        ))
    }

    pub async fn delete_vacation(&self, id: &str) -> DomainResult<()> {
        if !self.vacation_repo.delete_vacation(id).await? {
            return Err(DomainError::NotFound(format!("Vacation {} not found", id)));
        }

        info!("Deleted vacation: {}", id);
        Ok(())
    }

    async fn find_vacation(&self, id: &str) -> DomainResult<Vacation> {
        self.vacation_repo
            .get_vacation(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Vacation {} not found", id)))
    }

    async fn existing_person(&self, person_id: &str) -> DomainResult<Person> {
        self.person_repo
            .get_person(person_id)
            .await?
            .ok_or_else(|| {
                DomainError::ValidationError(format!("Person {} does not exist", person_id))
            })
    }

    /// Attach person names and working-day counts with one batch computation
    async fn describe(&self, vacations: Vec<Vacation>) -> DomainResult<Vec<VacationResponse>> {
        let counts = self
            .calculator
            .compute_batch(vacations.iter().map(Vacation::range))
            .await?;
        let names = self.person_names(&vacations).await?;

        Ok(vacations
            .into_iter()
            .map(|vacation| {
                let working_days = counts.get(&vacation.range()).copied().unwrap_or(0);
                let person_name = names.get(&vacation.person_id).cloned().unwrap_or_default();
                VacationResponse::from_vacation(vacation, person_name, working_days)
            })
            .collect())
    }

    async fn person_names(&self, vacations: &[Vacation]) -> DomainResult<HashMap<String, String>> {
        let persons = match vacations {
            [] => Vec::new(),
            [single] => self
                .person_repo
                .get_person(&single.person_id)
                .await?
                .into_iter()
                .collect(),
            _ => self.person_repo.list_persons().await?,
        };

        Ok(persons
            .into_iter()
            .map(|person| (person.id, person.name))
            .collect())
    }
}
