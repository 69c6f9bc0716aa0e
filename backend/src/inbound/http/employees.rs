//! Employee HTTP handlers.
//!
//! ```text
//! POST   /api/employees
//! GET    /api/employees
//! GET    /api/employees/search?firstName=..&lastName=..
//! GET    /api/employees/{id}
//! PUT    /api/employees
//! DELETE /api/employees/{id}
//! ```
//!
//! Lookups that find nothing answer `404` with an empty body. Identifiers in
//! the path must be decimal integers; anything else does not match a route.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Employee, EmployeeId, EmployeeProfile, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require};

/// Confirmation returned by the delete endpoint.
pub const DELETE_CONFIRMATION: &str = "Employee deleted successfully";

const ID: FieldName = FieldName::new("id");
const FIRST_NAME: FieldName = FieldName::new("firstName");
const LAST_NAME: FieldName = FieldName::new("lastName");
const EMAIL: FieldName = FieldName::new("email");

/// Wire representation of an employee.
///
/// Every field is optional on input so that a missing field is reported as a
/// structured `missing_field` error instead of an opaque parse failure.
/// Responses always carry all four fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    /// Storage-assigned identifier. Ignored on create, required on update.
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[schema(example = "Elkin")]
    pub first_name: Option<String>,
    #[schema(example = "Torres")]
    pub last_name: Option<String>,
    #[schema(example = "elkin@vita.com")]
    pub email: Option<String>,
}

impl From<Employee> for EmployeeDto {
    fn from(value: Employee) -> Self {
        let (id, profile) = value.into_parts();
        Self {
            id: Some(id.get()),
            first_name: Some(profile.first_name),
            last_name: Some(profile.last_name),
            email: Some(profile.email),
        }
    }
}

impl EmployeeDto {
    /// Convert into the replaceable fields, discarding any `id`.
    ///
    /// # Errors
    /// Returns an `invalid_request` error naming the first absent field.
    pub fn into_profile(self) -> Result<EmployeeProfile, Error> {
        Ok(EmployeeProfile {
            first_name: require(self.first_name, FIRST_NAME)?,
            last_name: require(self.last_name, LAST_NAME)?,
            email: require(self.email, EMAIL)?,
        })
    }

    /// Convert into a full record, requiring the `id`.
    ///
    /// # Errors
    /// Returns an `invalid_request` error naming the first absent field.
    pub fn into_employee(self) -> Result<Employee, Error> {
        let id = require(self.id, ID)?;
        let profile = self.into_profile()?;
        Ok(Employee::new(EmployeeId::new(id), profile))
    }
}

/// Query parameters for the exact-name lookup.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct EmployeeSearchParams {
    /// First name to match exactly.
    pub first_name: Option<String>,
    /// Last name to match exactly.
    pub last_name: Option<String>,
}

fn found_or_empty_404(employee: Option<Employee>) -> HttpResponse {
    match employee {
        Some(employee) => HttpResponse::Ok().json(EmployeeDto::from(employee)),
        None => HttpResponse::NotFound().finish(),
    }
}

/// Create an employee.
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = EmployeeDto,
    responses(
        (status = 201, description = "Employee created", body = EmployeeDto),
        (status = 400, description = "Missing or malformed field", body = ErrorSchema),
        (status = 409, description = "Email already on file", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("/employees")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<EmployeeDto>,
) -> ApiResult<HttpResponse> {
    let profile = payload.into_inner().into_profile()?;
    let employee = state.employees.save_employee(profile).await?;
    Ok(HttpResponse::Created().json(EmployeeDto::from(employee)))
}

/// List every employee.
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees", body = [EmployeeDto]),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "listEmployees"
)]
#[get("/employees")]
pub async fn list_employees(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let employees = state.employees_query.get_all_employees().await?;
    let body: Vec<EmployeeDto> = employees.into_iter().map(EmployeeDto::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// Find the first employee with an exact first and last name.
#[utoipa::path(
    get,
    path = "/api/employees/search",
    params(EmployeeSearchParams),
    responses(
        (status = 200, description = "Matching employee", body = EmployeeDto),
        (status = 400, description = "Missing name parameter", body = ErrorSchema),
        (status = 404, description = "No employee has that name")
    ),
    tags = ["employees"],
    operation_id = "searchEmployeeByName"
)]
#[get("/employees/search")]
pub async fn search_employees(
    state: web::Data<HttpState>,
    params: web::Query<EmployeeSearchParams>,
) -> ApiResult<HttpResponse> {
    let EmployeeSearchParams {
        first_name,
        last_name,
    } = params.into_inner();
    let first_name = require(first_name, FIRST_NAME)?;
    let last_name = require(last_name, LAST_NAME)?;
    let employee = state
        .employees_query
        .find_employee_by_name(&first_name, &last_name)
        .await?;
    Ok(found_or_empty_404(employee))
}

/// Fetch one employee by id.
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(("id" = i64, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Employee", body = EmployeeDto),
        (status = 404, description = "Employee not found")
    ),
    tags = ["employees"],
    operation_id = "getEmployee"
)]
#[get("/employees/{id:\\d+}")]
pub async fn get_employee(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = EmployeeId::new(path.into_inner());
    let employee = state.employees_query.get_employee_by_id(id).await?;
    Ok(found_or_empty_404(employee))
}

/// Overwrite every field of an existing employee.
#[utoipa::path(
    put,
    path = "/api/employees",
    request_body = EmployeeDto,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeDto),
        (status = 400, description = "Missing or malformed field", body = ErrorSchema),
        (status = 404, description = "Employee not found"),
        (status = 409, description = "Email held by another employee", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "updateEmployee"
)]
#[put("/employees")]
pub async fn update_employee(
    state: web::Data<HttpState>,
    payload: web::Json<EmployeeDto>,
) -> ApiResult<HttpResponse> {
    let employee = payload.into_inner().into_employee()?;
    if state
        .employees_query
        .get_employee_by_id(employee.id())
        .await?
        .is_none()
    {
        debug!(id = %employee.id(), "update target not found");
        return Ok(HttpResponse::NotFound().finish());
    }
    let updated = state.employees.update_employee(employee).await?;
    Ok(HttpResponse::Ok().json(EmployeeDto::from(updated)))
}

/// Delete an employee. Unknown identifiers are accepted.
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(("id" = i64, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Employee deleted", body = String, content_type = "text/plain")
    ),
    tags = ["employees"],
    operation_id = "deleteEmployee"
)]
#[delete("/employees/{id:\\d+}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .employees
        .delete_employee(EmployeeId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(DELETE_CONFIRMATION))
}

/// Register the employee handlers on a scope or app.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use employees::inbound::http::employees;
///
/// let _app = App::new().service(web::scope("/api").configure(employees::configure));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(search_employees)
        .service(get_employee)
        .service(list_employees)
        .service(create_employee)
        .service(update_employee)
        .service(delete_employee);
}
