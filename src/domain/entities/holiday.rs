use crate::domain::errors::{DomainError, DomainResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MAX_HOLIDAY_NAME_LENGTH: usize = 200;
pub const MAX_REGION_LENGTH: usize = 100;

/// Countries with a maintained holiday calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    AR,
    ES,
}

impl Country {
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::AR => "AR",
            Country::ES => "ES",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Country {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AR" => Ok(Country::AR),
            "ES" => Ok(Country::ES),
            other => Err(DomainError::ValidationError(format!(
                "Unsupported country '{}', expected AR or ES",
                other
            ))),
        }
    }
}

/// Holiday calendar entry.
///
/// Working-day calculation only looks at `date`; country and region are
/// informational and used for filtering listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub id: String,
    pub date: NaiveDate,
    pub name: String,
    pub country: Country,
    pub region: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Holiday {
    pub fn new(date: NaiveDate, name: String, country: Country, region: Option<String>) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date,
            name,
            country,
            region,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Listing filter; `None` fields match everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayFilter {
    pub country: Option<Country>,
    pub year: Option<i32>,
}

/// DTO for creating or replacing a holiday
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayRequest {
    pub date: String, // YYYY-MM-DD, time component ignored
    pub name: String,
    pub country: String,
    pub region: Option<String>,
}

/// Validated holiday fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayFields {
    pub date: NaiveDate,
    pub name: String,
    pub country: Country,
    pub region: Option<String>,
}

impl HolidayRequest {
    pub fn validate(&self) -> DomainResult<HolidayFields> {
        let date = super::parse_calendar_day(&self.date)?;

        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::ValidationError(
                "Holiday name is required".to_string(),
            ));
        }
        if name.chars().count() > MAX_HOLIDAY_NAME_LENGTH {
            return Err(DomainError::ValidationError(format!(
                "Holiday name must be at most {} characters",
                MAX_HOLIDAY_NAME_LENGTH
            )));
        }

        let country = self.country.parse::<Country>()?;

        let region = self
            .region
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string);
        if let Some(region) = &region {
            if region.chars().count() > MAX_REGION_LENGTH {
                return Err(DomainError::ValidationError(format!(
                    "Region must be at most {} characters",
                    MAX_REGION_LENGTH
                )));
            }
        }

        Ok(HolidayFields {
            date,
            name: name.to_string(),
            country,
            region,
        })
    }
}

/// DTO for holiday list response
#[derive(Debug, Serialize, Deserialize)]
pub struct HolidayListResponse {
    pub holidays: Vec<Holiday>,
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(date: &str, name: &str, country: &str, region: Option<&str>) -> HolidayRequest {
        HolidayRequest {
            date: date.to_string(),
            name: name.to_string(),
            country: country.to_string(),
            region: region.map(str::to_string),
        }
    }

    #[test]
    fn test_country_parsing() {
        assert_eq!("AR".parse::<Country>().unwrap(), Country::AR);
        assert_eq!(" es ".parse::<Country>().unwrap(), Country::ES);
        assert!("FR".parse::<Country>().is_err());
    }

    #[test]
    fn test_validate_trims_and_normalizes() {
        let fields = request("2025-12-25T10:00", "  Christmas ", "ar", Some("   "))
            .validate()
            .unwrap();
        assert_eq!(fields.date, NaiveDate::from_ymd_opt(2025, 12, 25).unwrap());
        assert_eq!(fields.name, "Christmas");
        assert_eq!(fields.country, Country::AR);
        assert_eq!(fields.region, None);
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let result = request("2025-12-25", "   ", "AR", None).validate();
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[test]
    fn test_validate_rejects_long_fields() {
        let long_name = "x".repeat(MAX_HOLIDAY_NAME_LENGTH + 1);
        assert!(request("2025-12-25", &long_name, "AR", None).validate().is_err());

        let long_region = "r".repeat(MAX_REGION_LENGTH + 1);
        assert!(request("2025-12-25", "Christmas", "ES", Some(&long_region))
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_rejects_bad_date() {
        assert!(request("25/12/2025", "Christmas", "AR", None).validate().is_err());
    }
}
