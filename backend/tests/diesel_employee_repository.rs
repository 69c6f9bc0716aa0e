//! PostgreSQL round trip for the Diesel employee repository.
//!
//! Runs only when `EMPLOYEES_TEST_DATABASE_URL` points at a disposable
//! database. The test truncates the `employees` table before it starts.

use diesel::{Connection, RunQueryDsl, pg::PgConnection};
use employees::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use employees::domain::{Employee, EmployeeId, EmployeeProfile};
use employees::outbound::persistence::{
    DbPool, DieselEmployeeRepository, PoolConfig, run_pending_migrations,
};

const DATABASE_URL_ENV: &str = "EMPLOYEES_TEST_DATABASE_URL";

fn test_database_url() -> Option<String> {
    std::env::var(DATABASE_URL_ENV)
        .ok()
        .filter(|url| !url.trim().is_empty())
}

fn reset_table(database_url: &str) {
    run_pending_migrations(database_url).expect("apply migrations");
    let mut conn = PgConnection::establish(database_url).expect("connect for reset");
    diesel::sql_query("TRUNCATE employees RESTART IDENTITY")
        .execute(&mut conn)
        .expect("truncate employees");
}

async fn repository(database_url: &str) -> DieselEmployeeRepository {
    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(2))
        .await
        .expect("build pool");
    DieselEmployeeRepository::new(pool)
}

#[tokio::test]
async fn diesel_repository_round_trip() {
    let Some(database_url) = test_database_url() else {
        eprintln!("SKIP-TEST-CLUSTER: {DATABASE_URL_ENV} not set");
        return;
    };
    reset_table(&database_url);
    let repo = repository(&database_url).await;

    let elkin = repo
        .insert(&EmployeeProfile::new("Elkin", "Torres", "elkin@vita.com"))
        .await
        .expect("insert elkin");
    let sofi = repo
        .insert(&EmployeeProfile::new("Sofi", "Torres", "sofi@vita.com"))
        .await
        .expect("insert sofi");
    assert!(sofi.id() > elkin.id());

    let all = repo.find_all().await.expect("find all");
    assert_eq!(all, vec![elkin.clone(), sofi.clone()]);

    assert_eq!(
        repo.find_by_id(elkin.id()).await.expect("find by id"),
        Some(elkin.clone())
    );
    assert_eq!(
        repo.find_by_email("sofi@vita.com").await.expect("find by email"),
        Some(sofi.clone())
    );
    assert_eq!(
        repo.find_by_name("Elkin", "Torres").await.expect("find by name"),
        Some(elkin.clone())
    );
    assert_eq!(
        repo.find_by_name_sql("Sofi", "Torres")
            .await
            .expect("find by name sql"),
        Some(sofi.clone())
    );
    assert_eq!(
        repo.find_by_name_sql("elkin", "torres")
            .await
            .expect("case-sensitive miss"),
        None
    );

    let duplicate = repo
        .insert(&EmployeeProfile::new("Other", "Person", "elkin@vita.com"))
        .await
        .expect_err("duplicate email rejected");
    assert_eq!(
        duplicate,
        EmployeeRepositoryError::duplicate_email("elkin@vita.com")
    );

    let renamed = Employee::new(
        elkin.id(),
        EmployeeProfile::new("Test", "Torres", "test@test.org"),
    );
    let saved = repo.save(&renamed).await.expect("save");
    assert_eq!(saved, renamed);
    assert_eq!(
        repo.find_by_id(elkin.id()).await.expect("reload"),
        Some(renamed)
    );

    repo.delete_by_id(elkin.id()).await.expect("delete");
    repo.delete_by_id(elkin.id()).await.expect("delete twice");
    repo.delete_by_id(EmployeeId::new(999_999))
        .await
        .expect("delete unknown id");
    assert_eq!(repo.find_by_id(elkin.id()).await.expect("reload"), None);
    assert_eq!(repo.find_all().await.expect("find all"), vec![sofi]);
}
