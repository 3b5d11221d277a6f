mod helpers;

use helpers::*;
use leavetrack::domain::entities::*;
use leavetrack::domain::errors::DomainError;
use tokio_test::{assert_err, assert_ok};

fn vacation_request(person: &Person, start: &str, end: &str) -> VacationRequest {
    VacationRequest {
        person_id: person.id.clone(),
        start_date: start.to_string(),
        end_date: end.to_string(),
        status: None,
        notes: None,
    }
}

// ========================================
// Persons
// ========================================

#[tokio::test]
async fn test_person_crud() {
    let test_db = setup_test_db().await;
    let services = test_services(&test_db.db());

    let created = assert_ok!(
        services
            .persons
            .create_person(PersonRequest {
                name: " Ana Pérez ".to_string(),
                email: "Ana.Perez@Example.com".to_string(),
                available_days: None,
            })
            .await
    );
    assert_eq!(created.name, "Ana Pérez");
    assert_eq!(created.email, "ana.perez@example.com");
    assert_eq!(created.available_days, DEFAULT_AVAILABLE_DAYS);

    let updated = assert_ok!(
        services
            .persons
            .update_person(
                &created.id,
                PersonRequest {
                    name: "Ana Pérez".to_string(),
                    email: "ana@example.com".to_string(),
                    available_days: Some(25),
                },
            )
            .await
    );
    assert_eq!(updated.available_days, 25);
    assert_eq!(updated.created_at, created.created_at);

    let list = assert_ok!(services.persons.list_persons().await);
    assert_eq!(list.count, 1);
    assert_eq!(list.persons[0].email, "ana@example.com");

    assert_ok!(services.persons.delete_person(&created.id).await);
    let err = assert_err!(services.persons.get_person(&created.id).await);
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn test_duplicate_email_conflicts_case_insensitively() {
    let test_db = setup_test_db().await;
    let services = test_services(&test_db.db());

    let request = |email: &str| PersonRequest {
        name: "Ana".to_string(),
        email: email.to_string(),
        available_days: Some(10),
    };

    assert_ok!(services.persons.create_person(request("ana@example.com")).await);
    let err = assert_err!(services.persons.create_person(request("ANA@example.com")).await);
    assert!(matches!(err, DomainError::Conflict(_)));
}

#[tokio::test]
async fn test_deleting_person_removes_their_vacations() {
    let test_db = setup_test_db().await;
    let db = test_db.db();
    let services = test_services(&db);

    let ana = create_test_person(&db, "Ana", 20).await;
    let bruno = create_test_person(&db, "Bruno", 20).await;
    let monday = date(2026, 2, 2);
    let friday = date(2026, 2, 6);
    create_test_vacation(&db, &ana, monday, friday, VacationStatus::Approved).await;
    let kept = create_test_vacation(&db, &bruno, monday, friday, VacationStatus::Pending).await;

    assert_ok!(services.persons.delete_person(&ana.id).await);

    let remaining = assert_ok!(services.vacations.list_vacations(None, None).await);
    assert_eq!(remaining.count, 1);
    assert_eq!(remaining.vacations[0].id, kept.id);

    let err = assert_err!(services.persons.delete_person(&ana.id).await);
    assert!(matches!(err, DomainError::NotFound(_)));
}

// ========================================
// Vacations
// ========================================

#[tokio::test]
async fn test_create_vacation_counts_working_days() {
    let test_db = setup_test_db().await;
    let db = test_db.db();
    let services = test_services(&db);
    let ana = create_test_person(&db, "Ana", 20).await;

    // Monday 2 Feb .. Sunday 8 Feb 2026
    let created = assert_ok!(
        services
            .vacations
            .create_vacation(vacation_request(&ana, "2026-02-02", "2026-02-08"))
            .await
    );

    assert_eq!(created.working_days_count, 5);
    assert_eq!(created.status, VacationStatus::Pending);
    assert_eq!(created.person_name, "Ana");

    let fetched = assert_ok!(services.vacations.get_vacation(&created.id).await);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_vacation_rejects_inverted_range_and_unknown_person() {
    let test_db = setup_test_db().await;
    let db = test_db.db();
    let services = test_services(&db);
    let ana = create_test_person(&db, "Ana", 20).await;

    let err = assert_err!(
        services
            .vacations
            .create_vacation(vacation_request(&ana, "2026-02-06", "2026-02-02"))
            .await
    );
    assert!(matches!(err, DomainError::InvalidRange { .. }));

    let mut stranger = vacation_request(&ana, "2026-02-02", "2026-02-06");
    stranger.person_id = "missing".to_string();
    let err = assert_err!(services.vacations.create_vacation(stranger).await);
    assert!(matches!(err, DomainError::ValidationError(_)));

    let list = assert_ok!(services.vacations.list_vacations(None, None).await);
    assert_eq!(list.count, 0);
}

#[tokio::test]
async fn test_working_days_follow_holiday_changes() {
    let test_db = setup_test_db().await;
    let db = test_db.db();
    let services = test_services(&db);
    let ana = create_test_person(&db, "Ana", 20).await;

    let created = assert_ok!(
        services
            .vacations
            .create_vacation(vacation_request(&ana, "2026-02-02", "2026-02-06"))
            .await
    );
    assert_eq!(created.working_days_count, 5);

    create_test_holiday(&db, date(2026, 2, 4), "Company Day", Country::AR, None).await;

    let fetched = assert_ok!(services.vacations.get_vacation(&created.id).await);
    assert_eq!(fetched.working_days_count, 4);
}

#[tokio::test]
async fn test_list_vacations_by_person_and_year() {
    let test_db = setup_test_db().await;
    let db = test_db.db();
    let services = test_services(&db);
    let ana = create_test_person(&db, "Ana", 20).await;
    let bruno = create_test_person(&db, "Bruno", 20).await;

    let approved = VacationStatus::Approved;
    let new_year =
        create_test_vacation(&db, &ana, date(2025, 12, 29), date(2026, 1, 2), approved).await;
    create_test_vacation(&db, &ana, date(2025, 3, 3), date(2025, 3, 7), approved).await;
    create_test_vacation(&db, &bruno, date(2026, 2, 2), date(2026, 2, 6), approved).await;

    let ana_2026 = assert_ok!(
        services
            .vacations
            .list_vacations(Some(&ana.id), Some(2026))
            .await
    );
    assert_eq!(ana_2026.count, 1);
    assert_eq!(ana_2026.vacations[0].id, new_year.id);
    // Full count, not only the 2026 part
    assert_eq!(ana_2026.vacations[0].working_days_count, 5);

    let all_2026 = assert_ok!(services.vacations.list_vacations(None, Some(2026)).await);
    assert_eq!(all_2026.count, 2);
    assert_eq!(all_2026.vacations[0].person_name, "Ana");
    assert_eq!(all_2026.vacations[1].person_name, "Bruno");

    let err = assert_err!(services.vacations.list_vacations(None, Some(10_000)).await);
    assert!(matches!(err, DomainError::ValidationError(_)));
}

#[tokio::test]
async fn test_update_and_delete_vacation() {
    let test_db = setup_test_db().await;
    let db = test_db.db();
    let services = test_services(&db);
    let ana = create_test_person(&db, "Ana", 20).await;

    let created = assert_ok!(
        services
            .vacations
            .create_vacation(vacation_request(&ana, "2026-02-02", "2026-02-06"))
            .await
    );

    let mut request = vacation_request(&ana, "2026-02-02", "2026-02-03");
    request.status = Some("Approved".to_string());
    request.notes = Some("**Ski trip**".to_string());
    let updated = assert_ok!(services.vacations.update_vacation(&created.id, request).await);
    assert_eq!(updated.status, VacationStatus::Approved);
    assert_eq!(updated.notes.as_deref(), Some("**Ski trip**"));
    assert_eq!(updated.working_days_count, 2);

    let missing = vacation_request(&ana, "2026-02-02", "2026-02-03");
    let err = assert_err!(services.vacations.update_vacation("missing", missing).await);
    assert!(matches!(err, DomainError::NotFound(_)));

    assert_ok!(services.vacations.delete_vacation(&created.id).await);
    let err = assert_err!(services.vacations.delete_vacation(&created.id).await);
    assert!(matches!(err, DomainError::NotFound(_)));
}
