use crate::domain::errors::{DomainError, DomainResult};
use chrono::{Datelike, NaiveDate, Weekday};

/// Weekdays ordered by their storage index (0 = Sunday ... 6 = Saturday).
const SUNDAY_FIRST: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Set of weekdays treated as non-working regardless of holidays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekendDefinition {
    mask: u8,
}

impl WeekendDefinition {
    pub fn new(days: impl IntoIterator<Item = Weekday>) -> Self {
        let mask = days
            .into_iter()
            .fold(0u8, |mask, day| mask | bit(day));
        Self { mask }
    }

    /// Build from Sunday-based indices. Duplicates are ignored.
    pub fn from_indices(indices: &[u8]) -> DomainResult<Self> {
        let mut days = Vec::with_capacity(indices.len());
        for &index in indices {
            let day = SUNDAY_FIRST.get(index as usize).copied().ok_or_else(|| {
                DomainError::ValidationError(format!(
                    "Invalid weekday index {}, expected 0 (Sunday) to 6 (Saturday)",
                    index
                ))
            })?;
            days.push(day);
        }
        Ok(Self::new(days))
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.mask & bit(day) != 0
    }

    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.contains(date.weekday())
    }

    /// Weekend days in Sunday-first order.
    pub fn days(&self) -> Vec<Weekday> {
        SUNDAY_FIRST
            .iter()
            .copied()
            .filter(|day| self.contains(*day))
            .collect()
    }

    /// Sunday-based indices in ascending order.
    pub fn indices(&self) -> Vec<u8> {
        self.days()
            .into_iter()
            .map(|day| day.num_days_from_sunday() as u8)
            .collect()
    }
}

impl Default for WeekendDefinition {
    fn default() -> Self {
        Self::new([Weekday::Sun, Weekday::Sat])
    }
}

fn bit(day: Weekday) -> u8 {
    1 << day.num_days_from_sunday()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sunday_and_saturday() {
        let weekend = WeekendDefinition::default();
        assert_eq!(weekend.days(), vec![Weekday::Sun, Weekday::Sat]);
        assert_eq!(weekend.indices(), vec![0, 6]);
    }

    #[test]
    fn test_from_indices_uses_sunday_zero() {
        let weekend = WeekendDefinition::from_indices(&[5, 6]).unwrap();
        assert!(weekend.contains(Weekday::Fri));
        assert!(weekend.contains(Weekday::Sat));
        assert!(!weekend.contains(Weekday::Sun));
    }

    #[test]
    fn test_from_indices_deduplicates() {
        let weekend = WeekendDefinition::from_indices(&[6, 0, 6]).unwrap();
        assert_eq!(weekend.indices(), vec![0, 6]);
    }

    #[test]
    fn test_from_indices_rejects_out_of_range() {
        let result = WeekendDefinition::from_indices(&[0, 7]);
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[test]
    fn test_empty_weekend() {
        let weekend = WeekendDefinition::from_indices(&[]).unwrap();
        let saturday = NaiveDate::from_ymd_opt(2025, 11, 29).unwrap();
        assert!(!weekend.is_weekend(saturday));
        assert!(weekend.indices().is_empty());
    }

    #[test]
    fn test_is_weekend_by_date() {
        let weekend = WeekendDefinition::default();
        let monday = NaiveDate::from_ymd_opt(2025, 11, 24).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2025, 11, 30).unwrap();
        assert!(!weekend.is_weekend(monday));
        assert!(weekend.is_weekend(sunday));
    }
}
