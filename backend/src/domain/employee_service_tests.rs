//! Tests for the employee service.

use std::sync::Arc;

use mockall::predicate::eq;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{EmployeeRepositoryError, MockEmployeeRepository};

#[fixture]
fn elkin() -> EmployeeProfile {
    EmployeeProfile::new("Elkin", "Torres", "elkin@vita.com")
}

fn stored(id: i64, profile: EmployeeProfile) -> Employee {
    Employee::new(EmployeeId::new(id), profile)
}

fn service(repo: MockEmployeeRepository) -> EmployeeService<MockEmployeeRepository> {
    EmployeeService::new(Arc::new(repo))
}

#[rstest]
#[tokio::test]
async fn save_employee_inserts_when_email_is_free(elkin: EmployeeProfile) {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_email()
        .with(eq("elkin@vita.com"))
        .times(1)
        .return_once(|_| Ok(None));
    let inserted = stored(1, elkin.clone());
    repo.expect_insert()
        .times(1)
        .return_once(move |_| Ok(inserted));

    let employee = service(repo)
        .save_employee(elkin.clone())
        .await
        .expect("save succeeds");

    assert_eq!(employee.id(), EmployeeId::new(1));
    assert_eq!(employee.profile(), &elkin);
}

#[rstest]
#[tokio::test]
async fn save_employee_rejects_duplicate_email_without_inserting(elkin: EmployeeProfile) {
    let mut repo = MockEmployeeRepository::new();
    let existing = stored(7, elkin.clone());
    repo.expect_find_by_email()
        .times(1)
        .return_once(move |_| Ok(Some(existing)));
    repo.expect_insert().never();

    let error = service(repo)
        .save_employee(elkin)
        .await
        .expect_err("duplicate email rejected");

    assert_eq!(error.code(), ErrorCode::Conflict);
    assert_eq!(
        error.message(),
        "employee already exists with given email: elkin@vita.com"
    );
    let details = error.details().expect("details present");
    assert_eq!(details["code"], "duplicate_email");
}

#[rstest]
#[tokio::test]
async fn save_employee_maps_lost_race_to_conflict(elkin: EmployeeProfile) {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_email().return_once(|_| Ok(None));
    repo.expect_insert()
        .return_once(|profile| Err(EmployeeRepositoryError::duplicate_email(&profile.email)));

    let error = service(repo)
        .save_employee(elkin)
        .await
        .expect_err("unique index wins");

    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[rstest]
#[case(EmployeeRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(EmployeeRepositoryError::query("syntax error"), ErrorCode::InternalError)]
#[tokio::test]
async fn storage_failures_map_to_error_codes(
    #[case] failure: EmployeeRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_all().return_once(move || Err(failure));

    let error = service(repo)
        .get_all_employees()
        .await
        .expect_err("storage failure");

    assert_eq!(error.code(), expected);
}

#[rstest]
#[tokio::test]
async fn get_all_employees_preserves_storage_order(elkin: EmployeeProfile) {
    let sofi = EmployeeProfile::new("Sofi", "Torres", "sofi@vita.com");
    let records = vec![stored(1, elkin), stored(2, sofi)];
    let expected = records.clone();
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_all().return_once(move || Ok(records));

    let employees = service(repo).get_all_employees().await.expect("list");

    assert_eq!(employees, expected);
}

#[tokio::test]
async fn get_employee_by_id_returns_none_for_unknown_id() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id()
        .with(eq(EmployeeId::new(999_999)))
        .return_once(|_| Ok(None));

    let found = service(repo)
        .get_employee_by_id(EmployeeId::new(999_999))
        .await
        .expect("lookup succeeds");

    assert!(found.is_none());
}

#[rstest]
#[tokio::test]
async fn update_employee_saves_without_email_check(elkin: EmployeeProfile) {
    let employee = stored(3, elkin);
    let echoed = employee.clone();
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_email().never();
    repo.expect_save()
        .with(eq(employee.clone()))
        .times(1)
        .return_once(move |_| Ok(echoed));

    let saved = service(repo)
        .update_employee(employee.clone())
        .await
        .expect("update succeeds");

    assert_eq!(saved, employee);
}

#[tokio::test]
async fn delete_employee_passes_through() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_delete_by_id()
        .with(eq(EmployeeId::new(5)))
        .times(1)
        .return_once(|_| Ok(()));

    service(repo)
        .delete_employee(EmployeeId::new(5))
        .await
        .expect("delete succeeds");
}

#[rstest]
#[tokio::test]
async fn find_employee_by_name_delegates_to_repository(elkin: EmployeeProfile) {
    let record = stored(4, elkin);
    let expected = record.clone();
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_name()
        .with(eq("Elkin"), eq("Torres"))
        .return_once(move |_, _| Ok(Some(record)));

    let found = service(repo)
        .find_employee_by_name("Elkin", "Torres")
        .await
        .expect("lookup succeeds");

    assert_eq!(found, Some(expected));
}
