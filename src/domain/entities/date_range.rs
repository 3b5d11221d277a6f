use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Years that format as four plain digits and so sort correctly as text.
pub const MIN_SUPPORTED_YEAR: i32 = 0;
pub const MAX_SUPPORTED_YEAR: i32 = 9999;

/// A value that can be reduced to a calendar day.
///
/// Date-times lose their time-of-day component, so `2025-01-01T23:00` and
/// `2025-01-01T00:00` land on the same day.
pub trait CalendarDay {
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl<T: CalendarDay + ?Sized> CalendarDay for &T {
    fn calendar_day(&self) -> NaiveDate {
        (**self).calendar_day()
    }
}

/// Inclusive span of calendar dates.
///
/// A range whose start is after its end is representable; callers decide
/// whether that is an error or an empty span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: impl CalendarDay, end: impl CalendarDay) -> Self {
        Self {
            start: start.calendar_day(),
            end: end.calendar_day(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    /// Number of calendar days covered, both ends included. Zero when invalid.
    pub fn day_count(&self) -> u32 {
        if !self.is_valid() {
            return 0;
        }
        (self.end - self.start).num_days() as u32 + 1
    }

    /// Fails when either end lies outside the supported years.
    pub fn check_supported(&self) -> DomainResult<()> {
        ensure_supported(self.start)?;
        ensure_supported(self.end)?;
        Ok(())
    }

    /// Every calendar day from start to end inclusive.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

/// Parse a date or date-time string into a calendar day.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive `YYYY-MM-DDTHH:MM[:SS]`
/// forms. The time component is dropped.
pub fn parse_calendar_day(input: &str) -> DomainResult<NaiveDate> {
    let input = input.trim();

    let date = parse_any(input).ok_or_else(|| {
        DomainError::ValidationError(format!("Invalid date '{}', expected YYYY-MM-DD", input))
    })?;

    ensure_supported(date)
}

fn parse_any(input: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Some(datetime.calendar_day());
    }

    [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
    ]
    .iter()
    .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
    .map(|datetime| datetime.calendar_day())
}

/// Reject dates whose year falls outside `MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR`
pub fn ensure_supported(date: NaiveDate) -> DomainResult<NaiveDate> {
    if (MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&date.year()) {
        Ok(date)
    } else {
        Err(DomainError::ValidationError(format!(
            "Date {} is outside the supported years {:04}..={}",
            date, MIN_SUPPORTED_YEAR, MAX_SUPPORTED_YEAR
        )))
    }
}
