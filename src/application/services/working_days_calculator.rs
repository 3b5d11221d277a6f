use crate::domain::entities::{CalendarDay, DateRange, WeekendDefinition};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::configuration_repository::ConfigurationReader;
use crate::domain::ports::holiday_repository::HolidayReader;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Counts business days (neither weekend nor holiday) in inclusive date ranges.
///
/// Holds no state between calls. Each computation takes one snapshot of the
/// weekend definition and one holiday lookup; read failures are returned
/// as-is without retrying.
#[derive(Clone)]
pub struct WorkingDaysCalculator {
    holiday_reader: Arc<dyn HolidayReader>,
    configuration_reader: Arc<dyn ConfigurationReader>,
}

impl WorkingDaysCalculator {
    pub fn new(
        holiday_reader: Arc<dyn HolidayReader>,
        configuration_reader: Arc<dyn ConfigurationReader>,
    ) -> Self {
        Self {
            holiday_reader,
            configuration_reader,
        }
    }

    /// Working days between `start` and `end`, both included.
    ///
    /// Fails with [`DomainError::InvalidRange`] when `start` falls after `end`
    /// once time-of-day is dropped, and with [`DomainError::ValidationError`]
    /// when either date lies outside the supported years.
    pub async fn compute(
        &self,
        start: impl CalendarDay,
        end: impl CalendarDay,
    ) -> DomainResult<u32> {
        let range = DateRange::new(start, end);
        if !range.is_valid() {
            return Err(DomainError::InvalidRange {
                start: range.start,
                end: range.end,
            });
        }
        range.check_supported()?;

        let weekend = self.weekend_definition().await?;
        let holidays = self
            .holiday_reader
            .get_holiday_dates(range.start, range.end)
            .await?;

        Ok(count_working_days(&range, &weekend, &holidays))
    }

    /// Working days for many ranges with a single holiday lookup.
    ///
    /// Unlike [`compute`](Self::compute), a range whose start is after its end
    /// maps to 0 instead of failing. Identical ranges share one entry. A date
    /// outside the supported years fails the whole batch before any read.
    pub async fn compute_batch<I>(&self, ranges: I) -> DomainResult<HashMap<DateRange, u32>>
    where
        I: IntoIterator<Item = DateRange>,
    {
        let ranges: Vec<DateRange> = ranges.into_iter().collect();
        if ranges.is_empty() {
            return Ok(HashMap::new());
        }
        for range in &ranges {
            range.check_supported()?;
        }

        let weekend = self.weekend_definition().await?;

        let holidays = match overall_span(&ranges) {
            Some(span) => {
                self.holiday_reader
                    .get_holiday_dates(span.start, span.end)
                    .await?
            }
            None => HashSet::new(),
        };

        let mut results = HashMap::with_capacity(ranges.len());
        for range in ranges {
            results.entry(range).or_insert_with(|| {
                if range.is_valid() {
                    count_working_days(&range, &weekend, &holidays)
                } else {
                    0
                }
            });
        }

        Ok(results)
    }

    async fn weekend_definition(&self) -> DomainResult<WeekendDefinition> {
        Ok(self
            .configuration_reader
            .get_weekend_configuration()
            .await?
            .unwrap_or_default())
    }
}

/// Day-by-day count over `range` against already loaded weekend and holiday sets.
pub fn count_working_days(
    range: &DateRange,
    weekend: &WeekendDefinition,
    holidays: &HashSet<NaiveDate>,
) -> u32 {
    range
        .days()
        .filter(|day| !weekend.is_weekend(*day) && !holidays.contains(day))
        .count() as u32
}

/// Smallest range covering every valid range, if any
fn overall_span(ranges: &[DateRange]) -> Option<DateRange> {
    ranges
        .iter()
        .filter(|range| range.is_valid())
        .fold(None, |span: Option<DateRange>, range| {
            Some(match span {
                Some(span) => DateRange {
                    start: span.start.min(range.start),
                    end: span.end.max(range.end),
                },
                None => *range,
            })
        })
}
