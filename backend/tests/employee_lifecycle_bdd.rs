//! Behavioural tests for the employee REST lifecycle.

use std::sync::Arc;

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use employees::Trace;
use employees::domain::EmployeeProfile;
use employees::domain::ports::EmployeeRepository;
use employees::inbound::http::employees::{DELETE_CONFIRMATION, configure};
use employees::inbound::http::error::{json_config, path_config, query_config};
use employees::inbound::http::state::HttpState;
use employees::outbound::memory::InMemoryEmployeeRepository;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};

struct EmployeeWorld {
    runtime: actix_rt::SystemRunner,
    repository: Arc<InMemoryEmployeeRepository>,
    status: Option<StatusCode>,
    body: Vec<u8>,
    created_id: Option<i64>,
}

impl EmployeeWorld {
    fn send(&mut self, request: actix_test::TestRequest) {
        let repository = Arc::clone(&self.repository);
        let (status, body) = self.runtime.block_on(async move {
            let app = actix_test::init_service(
                App::new()
                    .app_data(web::Data::new(HttpState::from_repository(repository)))
                    .app_data(json_config())
                    .app_data(query_config())
                    .app_data(path_config())
                    .wrap(Trace)
                    .service(web::scope("/api").configure(configure)),
            )
            .await;
            call(&app, request.to_request()).await
        });
        self.status = Some(status);
        self.body = body;
    }

    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    fn created_id(&self) -> i64 {
        self.created_id.expect("an employee was created earlier")
    }

    fn stored_count(&self) -> usize {
        let repository = Arc::clone(&self.repository);
        self.runtime
            .block_on(async move { repository.find_all().await })
            .expect("list employees")
            .len()
    }
}

async fn call<S>(app: &S, request: Request) -> (StatusCode, Vec<u8>)
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let res = actix_test::call_service(app, request).await;
    let status = res.status();
    let body = actix_test::read_body(res).await;
    (status, body.to_vec())
}

fn create_request(first_name: &str, last_name: &str, email: &str) -> actix_test::TestRequest {
    actix_test::TestRequest::post().uri("/api/employees").set_json(json!({
        "firstName": first_name,
        "lastName": last_name,
        "email": email,
    }))
}

#[fixture]
fn world() -> EmployeeWorld {
    EmployeeWorld {
        runtime: actix_rt::System::new(),
        repository: Arc::new(InMemoryEmployeeRepository::new()),
        status: None,
        body: Vec::new(),
        created_id: None,
    }
}

#[given("an empty employee directory")]
fn an_empty_employee_directory(world: &mut EmployeeWorld) {
    assert_eq!(world.stored_count(), 0);
}

#[given("Elkin Torres with email elkin@vita.com is on file")]
fn elkin_is_on_file(world: &mut EmployeeWorld) {
    let repository = Arc::clone(&world.repository);
    let stored = world
        .runtime
        .block_on(async move {
            repository
                .insert(&EmployeeProfile::new("Elkin", "Torres", "elkin@vita.com"))
                .await
        })
        .expect("seed employee");
    world.created_id = Some(stored.id().get());
}

#[when("the client creates Elkin Torres with email elkin@vita.com")]
fn the_client_creates_elkin(world: &mut EmployeeWorld) {
    world.send(create_request("Elkin", "Torres", "elkin@vita.com"));
    if world.status == Some(StatusCode::CREATED) {
        world.created_id = world.json()["id"].as_i64();
    }
}

#[when("the client creates Sofi Torres with email elkin@vita.com")]
fn the_client_creates_sofi_with_elkins_email(world: &mut EmployeeWorld) {
    world.send(create_request("Sofi", "Torres", "elkin@vita.com"));
}

#[when("the client renames the created employee to Test with email test@test.org")]
fn the_client_renames_the_created_employee(world: &mut EmployeeWorld) {
    let id = world.created_id();
    world.send(actix_test::TestRequest::put().uri("/api/employees").set_json(json!({
        "id": id,
        "firstName": "Test",
        "lastName": "Torres",
        "email": "test@test.org",
    })));
}

#[when("the client updates employee 999999")]
fn the_client_updates_an_unknown_employee(world: &mut EmployeeWorld) {
    world.send(actix_test::TestRequest::put().uri("/api/employees").set_json(json!({
        "id": 999_999,
        "firstName": "Ghost",
        "lastName": "Writer",
        "email": "ghost@vita.com",
    })));
}

#[when("the client deletes the created employee")]
fn the_client_deletes_the_created_employee(world: &mut EmployeeWorld) {
    let uri = format!("/api/employees/{}", world.created_id());
    world.send(actix_test::TestRequest::delete().uri(&uri));
}

#[when("the client deletes employee 999999")]
fn the_client_deletes_an_unknown_employee(world: &mut EmployeeWorld) {
    world.send(actix_test::TestRequest::delete().uri("/api/employees/999999"));
}

#[when("the client fetches the created employee")]
fn the_client_fetches_the_created_employee(world: &mut EmployeeWorld) {
    let uri = format!("/api/employees/{}", world.created_id());
    world.send(actix_test::TestRequest::get().uri(&uri));
}

#[when("the client fetches employee 999999")]
fn the_client_fetches_an_unknown_employee(world: &mut EmployeeWorld) {
    world.send(actix_test::TestRequest::get().uri("/api/employees/999999"));
}

#[then("the response status is 201")]
fn the_response_status_is_201(world: &mut EmployeeWorld) {
    assert_eq!(world.status, Some(StatusCode::CREATED));
}

#[then("the response status is 200")]
fn the_response_status_is_200(world: &mut EmployeeWorld) {
    assert_eq!(world.status, Some(StatusCode::OK));
}

#[then("the response status is 404")]
fn the_response_status_is_404(world: &mut EmployeeWorld) {
    assert_eq!(world.status, Some(StatusCode::NOT_FOUND));
}

#[then("the response status is 409")]
fn the_response_status_is_409(world: &mut EmployeeWorld) {
    assert_eq!(world.status, Some(StatusCode::CONFLICT));
}

#[then("the response echoes Elkin Torres with email elkin@vita.com")]
fn the_response_echoes_elkin(world: &mut EmployeeWorld) {
    let body = world.json();
    assert_eq!(body["firstName"], "Elkin");
    assert_eq!(body["lastName"], "Torres");
    assert_eq!(body["email"], "elkin@vita.com");
}

#[then("the response echoes Test Torres with email test@test.org")]
fn the_response_echoes_test(world: &mut EmployeeWorld) {
    let body = world.json();
    assert_eq!(body["id"].as_i64(), world.created_id);
    assert_eq!(body["firstName"], "Test");
    assert_eq!(body["lastName"], "Torres");
    assert_eq!(body["email"], "test@test.org");
}

#[then("the response carries a generated id")]
fn the_response_carries_a_generated_id(world: &mut EmployeeWorld) {
    assert!(world.json()["id"].as_i64().is_some());
}

#[then("the response text is the delete confirmation")]
fn the_response_text_is_the_delete_confirmation(world: &mut EmployeeWorld) {
    assert_eq!(world.body, DELETE_CONFIRMATION.as_bytes());
}

#[then("the response body is empty")]
fn the_response_body_is_empty(world: &mut EmployeeWorld) {
    assert!(world.body.is_empty());
}

#[then("the error code is conflict")]
fn the_error_code_is_conflict(world: &mut EmployeeWorld) {
    let body = world.json();
    assert_eq!(body["code"], "conflict");
    assert_eq!(body["details"]["code"], "duplicate_email");
}

#[then("the directory holds 1 employee")]
fn the_directory_holds_one_employee(world: &mut EmployeeWorld) {
    assert_eq!(world.stored_count(), 1);
}

#[scenario(
    path = "tests/features/employee_lifecycle.feature",
    name = "An employee is created, updated and deleted"
)]
fn an_employee_is_created_updated_and_deleted(world: EmployeeWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/employee_lifecycle.feature",
    name = "A second employee with the same email is rejected"
)]
fn a_second_employee_with_the_same_email_is_rejected(world: EmployeeWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/employee_lifecycle.feature",
    name = "Updating an unknown employee changes nothing"
)]
fn updating_an_unknown_employee_changes_nothing(world: EmployeeWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/employee_lifecycle.feature",
    name = "Fetching an unknown employee"
)]
fn fetching_an_unknown_employee(world: EmployeeWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/employee_lifecycle.feature",
    name = "Deleting an unknown employee still succeeds"
)]
fn deleting_an_unknown_employee_still_succeeds(world: EmployeeWorld) {
    drop(world);
}
