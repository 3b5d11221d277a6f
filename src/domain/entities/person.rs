use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

pub const MAX_PERSON_NAME_LENGTH: usize = 200;
pub const MAX_EMAIL_LENGTH: usize = 200;
pub const DEFAULT_AVAILABLE_DAYS: i32 = 20;

/// Someone who takes vacations, with a yearly allowance in working days
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub email: String,
    pub available_days: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl Person {
    pub fn new(name: String, email: String, available_days: i32) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            email,
            available_days,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// DTO for creating or replacing a person
#[derive(Debug, Clone, Deserialize)]
pub struct PersonRequest {
    pub name: String,
    pub email: String,
    pub available_days: Option<i32>,
}

/// Validated person fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonFields {
    pub name: String,
    pub email: String,
    pub available_days: i32,
}

impl PersonRequest {
    pub fn validate(&self) -> DomainResult<PersonFields> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::ValidationError(
                "Person name is required".to_string(),
            ));
        }
        if name.chars().count() > MAX_PERSON_NAME_LENGTH {
            return Err(DomainError::ValidationError(format!(
                "Person name must be at most {} characters",
                MAX_PERSON_NAME_LENGTH
            )));
        }

        let email = validate_and_normalize_email(&self.email)?;

        let available_days = self.available_days.unwrap_or(DEFAULT_AVAILABLE_DAYS);
        if available_days < 0 {
            return Err(DomainError::ValidationError(
                "Available days cannot be negative".to_string(),
            ));
        }

        Ok(PersonFields {
            name: name.to_string(),
            email,
            available_days,
        })
    }
}

/// Trim, check and lowercase an email address
pub fn validate_and_normalize_email(email: &str) -> DomainResult<String> {
    let trimmed = email.trim();

    if trimmed.is_empty() {
        return Err(DomainError::ValidationError("Email is required".to_string()));
    }

    if !email_address::EmailAddress::is_valid(trimmed) {
        return Err(DomainError::ValidationError(
            "Invalid email format. Must be in format user@domain.tld".to_string(),
        ));
    }

    // Require a TLD (dot after @)
    if let Some(at_pos) = trimmed.rfind('@') {
        if !trimmed[at_pos + 1..].contains('.') {
            return Err(DomainError::ValidationError(
                "Invalid email format. Domain must include a TLD (e.g., .com, .org)".to_string(),
            ));
        }
    }

    if trimmed.chars().count() > MAX_EMAIL_LENGTH {
        return Err(DomainError::ValidationError(format!(
            "Email must be at most {} characters",
            MAX_EMAIL_LENGTH
        )));
    }

    Ok(trimmed.to_lowercase())
}

/// DTO for person list response
#[derive(Debug, Serialize, Deserialize)]
pub struct PersonListResponse {
    pub persons: Vec<Person>,
    pub count: i64,
}
