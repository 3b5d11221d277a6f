use crate::domain::entities::{ensure_supported, DateRange, VacationStatus};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One person's allowance use for a calendar year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonStats {
    pub person_id: String,
    pub person_name: String,
    pub year: i32,
    pub available: i32,
    pub approved: u32,
    pub pending: u32,
    pub rejected: u32,
    /// `available - approved`; negative when the allowance is overspent
    pub remaining: i64,
    pub upcoming_vacations: Vec<UpcomingVacation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingVacation {
    pub id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub working_days_count: u32,
    pub status: VacationStatus,
}

/// Summary row for the team overview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsOverview {
    pub person_id: String,
    pub person_name: String,
    pub available: i32,
    pub used: u32,
    pub pending: u32,
    pub remaining: i64,
    pub usage_percentage: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsOverviewResponse {
    pub year: i32,
    pub persons: Vec<StatsOverview>,
}

/// January 1st through December 31st of `year`
pub fn year_range(year: i32) -> DomainResult<DateRange> {
    let invalid = || DomainError::ValidationError(format!("Unsupported year {}", year));
    let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(invalid)?;
    let end = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(invalid)?;
    ensure_supported(start)?;
    Ok(DateRange { start, end })
}

/// Part of `range` that falls inside `within`, if any
pub fn clip_range(range: DateRange, within: DateRange) -> Option<DateRange> {
    let clipped = DateRange {
        start: range.start.max(within.start),
        end: range.end.min(within.end),
    };
    clipped.is_valid().then_some(clipped)
}

/// Share of the allowance already approved, rounded to one decimal
pub fn usage_percentage(used: u32, available: i32) -> f64 {
    if available <= 0 {
        return 0.0;
    }
    let percentage = f64::from(used) / f64::from(available) * 100.0;
    (percentage * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_year_range() {
        let range = year_range(2025).unwrap();
        assert_eq!(range.start, d(2025, 1, 1));
        assert_eq!(range.end, d(2025, 12, 31));
        assert!(year_range(10_000).is_err());
        assert!(year_range(-1).is_err());
    }

    #[test]
    fn test_clip_range() {
        let year = year_range(2025).unwrap();

        let spanning = DateRange::new(d(2024, 12, 29), d(2025, 1, 3));
        assert_eq!(
            clip_range(spanning, year),
            Some(DateRange::new(d(2025, 1, 1), d(2025, 1, 3)))
        );

        let outside = DateRange::new(d(2024, 3, 1), d(2024, 3, 5));
        assert_eq!(clip_range(outside, year), None);
    }

    #[test]
    fn test_usage_percentage() {
        assert_eq!(usage_percentage(5, 20), 25.0);
        assert_eq!(usage_percentage(1, 3), 33.3);
        assert_eq!(usage_percentage(4, 0), 0.0);
    }
}
