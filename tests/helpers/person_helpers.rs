#![allow(dead_code)]
use chrono::NaiveDate;
use leavetrack::{
    application::services::{PersonService, StatsService, VacationService},
    domain::entities::{Person, Vacation, VacationFields, VacationStatus},
    domain::ports::{
        configuration_repository::ConfigurationReader, holiday_repository::HolidayReader,
        person_repository::PersonRepository, vacation_repository::VacationRepository,
    },
    infrastructure::persistence::Database,
    WorkingDaysCalculator,
};
use std::sync::Arc;

/// Person, vacation and stats services over one store
pub struct TestServices {
    pub persons: PersonService,
    pub vacations: VacationService,
    pub stats: StatsService,
}

pub fn test_services(db: &Database) -> TestServices {
    let db = Arc::new(db.clone());
    let calculator = WorkingDaysCalculator::new(
        db.clone() as Arc<dyn HolidayReader>,
        db.clone() as Arc<dyn ConfigurationReader>,
    );
    let person_repo = db.clone() as Arc<dyn PersonRepository>;
    let vacation_repo = db as Arc<dyn VacationRepository>;

    TestServices {
        persons: PersonService::new(person_repo.clone()),
        vacations: VacationService::new(
            vacation_repo.clone(),
            person_repo.clone(),
            calculator.clone(),
        ),
        stats: StatsService::new(person_repo, vacation_repo, calculator),
    }
}

/// Insert a person directly into the store
pub async fn create_test_person(db: &Database, name: &str, available_days: i32) -> Person {
    let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
    let person = Person::new(name.to_string(), email, available_days);
    db.create_person(&person)
        .await
        .expect("Failed to create person");
    person
}

/// Insert a vacation directly into the store
pub async fn create_test_vacation(
    db: &Database,
    person: &Person,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: VacationStatus,
) -> Vacation {
    let vacation = Vacation::new(VacationFields {
        person_id: person.id.clone(),
        start_date,
        end_date,
        status,
        notes: None,
    });
    db.create_vacation(&vacation)
        .await
        .expect("Failed to create vacation");
    vacation
}
