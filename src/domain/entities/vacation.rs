use crate::domain::entities::{parse_calendar_day, DateRange};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MAX_NOTES_LENGTH: usize = 2000;

/// Longest vacation accepted, in calendar days
pub const MAX_VACATION_DAYS: u32 = 366;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VacationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl VacationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VacationStatus::Pending => "Pending",
            VacationStatus::Approved => "Approved",
            VacationStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for VacationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VacationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(VacationStatus::Pending),
            "approved" => Ok(VacationStatus::Approved),
            "rejected" => Ok(VacationStatus::Rejected),
            other => Err(DomainError::ValidationError(format!(
                "Unknown vacation status '{}', expected Pending, Approved or Rejected",
                other
            ))),
        }
    }
}

/// Stored vacation. The working-day count is never persisted; it is
/// recomputed on read so holiday edits are always reflected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vacation {
    pub id: String,
    pub person_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: VacationStatus,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Vacation {
    pub fn new(fields: VacationFields) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            person_id: fields.person_id,
            start_date: fields.start_date,
            end_date: fields.end_date,
            status: fields.status,
            notes: fields.notes,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }
}

/// Listing filter; `year` keeps vacations overlapping that calendar year
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VacationFilter {
    pub person_id: Option<String>,
    pub year: Option<i32>,
}

/// DTO for creating or replacing a vacation
#[derive(Debug, Clone, Deserialize)]
pub struct VacationRequest {
    pub person_id: String,
    pub start_date: String,
    pub end_date: String,
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// Validated vacation fields. Start and end may still be out of order;
/// that is reported by the working-day calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacationFields {
    pub person_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: VacationStatus,
    pub notes: Option<String>,
}

impl VacationRequest {
    pub fn validate(&self) -> DomainResult<VacationFields> {
        let person_id = self.person_id.trim();
        if person_id.is_empty() {
            return Err(DomainError::ValidationError(
                "Person id is required".to_string(),
            ));
        }

        let start_date = parse_calendar_day(&self.start_date)?;
        let end_date = parse_calendar_day(&self.end_date)?;

        let days = DateRange::new(start_date, end_date).day_count();
        if days > MAX_VACATION_DAYS {
            return Err(DomainError::ValidationError(format!(
                "Vacation spans {} days, the maximum is {}",
                days, MAX_VACATION_DAYS
            )));
        }

        let status = self
            .status
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(str::parse::<VacationStatus>)
            .transpose()?
            .unwrap_or_default();

        let notes = self
            .notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);
        if let Some(notes) = &notes {
            if notes.chars().count() > MAX_NOTES_LENGTH {
                return Err(DomainError::ValidationError(format!(
                    "Notes must be at most {} characters",
                    MAX_NOTES_LENGTH
                )));
            }
        }

        Ok(VacationFields {
            person_id: person_id.to_string(),
            start_date,
            end_date,
            status,
            notes,
        })
    }
}

/// Vacation as returned to clients, with its current working-day count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationResponse {
    pub id: String,
    pub person_id: String,
    pub person_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub working_days_count: u32,
    pub status: VacationStatus,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl VacationResponse {
    pub fn from_vacation(vacation: Vacation, person_name: String, working_days_count: u32) -> Self {
        Self {
            id: vacation.id,
            person_id: vacation.person_id,
            person_name,
            start_date: vacation.start_date,
            end_date: vacation.end_date,
            working_days_count,
            status: vacation.status,
            notes: vacation.notes,
            created_at: vacation.created_at,
            updated_at: vacation.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VacationListResponse {
    pub vacations: Vec<VacationResponse>,
    pub count: i64,
}
