use crate::application::services::WorkingDaysCalculator;
use crate::domain::entities::{
    clip_range, usage_percentage, year_range, DateRange, PersonStats, StatsOverview,
    StatsOverviewResponse, UpcomingVacation, Vacation, VacationFilter, VacationStatus,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::person_repository::PersonRepository;
use crate::domain::ports::vacation_repository::VacationRepository;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;

/// Yearly allowance summaries.
///
/// Only the part of a vacation inside the requested year counts toward that
/// year, so a vacation over New Year is split between both years.
#[derive(Clone)]
pub struct StatsService {
    person_repo: Arc<dyn PersonRepository>,
    vacation_repo: Arc<dyn VacationRepository>,
    calculator: WorkingDaysCalculator,
}

#[derive(Default, Clone, Copy)]
struct Totals {
    approved: u32,
    pending: u32,
    rejected: u32,
}

impl Totals {
    fn add(&mut self, status: VacationStatus, days: u32) {
        match status {
            VacationStatus::Approved => self.approved += days,
            VacationStatus::Pending => self.pending += days,
            VacationStatus::Rejected => self.rejected += days,
        }
    }
}

impl StatsService {
    pub fn new(
        person_repo: Arc<dyn PersonRepository>,
        vacation_repo: Arc<dyn VacationRepository>,
        calculator: WorkingDaysCalculator,
    ) -> Self {
        Self {
            person_repo,
            vacation_repo,
            calculator,
        }
    }

    /// Per-status working days for one person in `year`, plus the vacations
    /// not yet started on `today` that were not rejected
    pub async fn person_stats(
        &self,
        person_id: &str,
        year: i32,
        today: NaiveDate,
    ) -> DomainResult<PersonStats> {
        let span = year_range(year)?;
        let person = self
            .person_repo
            .get_person(person_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Person {} not found", person_id)))?;

        let filter = VacationFilter {
            person_id: Some(person.id.clone()),
            year: Some(year),
        };
        let vacations = self.vacation_repo.list_vacations(&filter).await?;

        let clipped: Vec<Option<DateRange>> = vacations
            .iter()
            .map(|vacation| clip_range(vacation.range(), span))
            .collect();
        let counts = self
            .calculator
            .compute_batch(
                clipped
                    .iter()
                    .flatten()
                    .copied()
                    .chain(vacations.iter().map(Vacation::range)),
            )
            .await?;

        let mut totals = Totals::default();
        for (vacation, range) in vacations.iter().zip(&clipped) {
            let days = range
                .and_then(|range| counts.get(&range).copied())
                .unwrap_or(0);
            totals.add(vacation.status, days);
        }

        let upcoming_vacations = vacations
            .iter()
            .filter(|v| v.status != VacationStatus::Rejected && v.start_date >= today)
            .map(|v| UpcomingVacation {
                id: v.id.clone(),
                start_date: v.start_date,
                end_date: v.end_date,
                working_days_count: counts.get(&v.range()).copied().unwrap_or(0),
                status: v.status,
            })
            .collect();

        Ok(PersonStats {
            remaining: i64::from(person.available_days) - i64::from(totals.approved),
            person_id: person.id,
            person_name: person.name,
            year,
            available: person.available_days,
            approved: totals.approved,
            pending: totals.pending,
            rejected: totals.rejected,
            upcoming_vacations,
        })
    }

    /// Allowance use in `year` for every person, ordered by name
    pub async fn overview(&self, year: i32) -> DomainResult<StatsOverviewResponse> {
        let span = year_range(year)?;
        let persons = self.person_repo.list_persons().await?;

        let filter = VacationFilter {
            person_id: None,
            year: Some(year),
        };
        let vacations = self.vacation_repo.list_vacations(&filter).await?;

        let clipped: Vec<(&Vacation, DateRange)> = vacations
            .iter()
            .filter_map(|vacation| clip_range(vacation.range(), span).map(|r| (vacation, r)))
            .collect();
        let counts = self
            .calculator
            .compute_batch(clipped.iter().map(|(_, range)| *range))
            .await?;

        let mut totals: HashMap<&str, Totals> = HashMap::new();
        for (vacation, range) in &clipped {
            let days = counts.get(range).copied().unwrap_or(0);
            totals
                .entry(vacation.person_id.as_str())
                .or_default()
                .add(vacation.status, days);
        }

        let persons = persons
            .into_iter()
            .map(|person| {
                let person_totals = totals.get(person.id.as_str()).copied().unwrap_or_default();
                StatsOverview {
                    remaining: i64::from(person.available_days)
                        - i64::from(person_totals.approved),
                    usage_percentage: usage_percentage(
                        person_totals.approved,
                        person.available_days,
                    ),
                    person_id: person.id,
                    person_name: person.name,
                    available: person.available_days,
                    used: person_totals.approved,
                    pending: person_totals.pending,
                }
            })
            .collect();

        Ok(StatsOverviewResponse { year, persons })
    }
}
