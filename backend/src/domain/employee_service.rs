//! Employee domain service.
//!
//! Implements the employee driving ports over any [`EmployeeRepository`].
//! The only rule enforced here is email uniqueness on create; reads, updates
//! and deletes pass straight through to storage.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    EmployeeCommand, EmployeeQuery, EmployeeRepository, EmployeeRepositoryError,
};
use crate::domain::{Employee, EmployeeId, EmployeeProfile, Error};

fn map_repository_error(error: EmployeeRepositoryError) -> Error {
    match error {
        EmployeeRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("employee repository unavailable: {message}"))
        }
        EmployeeRepositoryError::Query { message } => {
            Error::internal(format!("employee repository error: {message}"))
        }
        EmployeeRepositoryError::DuplicateEmail { email } => duplicate_email(&email),
    }
}

fn duplicate_email(email: &str) -> Error {
    Error::conflict(format!("employee already exists with given email: {email}")).with_details(
        json!({
            "field": "email",
            "value": email,
            "code": "duplicate_email",
        }),
    )
}

/// Employee service implementing [`EmployeeCommand`] and [`EmployeeQuery`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use employees::domain::EmployeeService;
/// use employees::outbound::memory::InMemoryEmployeeRepository;
///
/// let service = EmployeeService::new(Arc::new(InMemoryEmployeeRepository::new()));
/// # let _ = service;
/// ```
pub struct EmployeeService<R> {
    repository: Arc<R>,
}

impl<R> Clone for EmployeeService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> EmployeeService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> EmployeeCommand for EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn save_employee(&self, profile: EmployeeProfile) -> Result<Employee, Error> {
        let existing = self
            .repository
            .find_by_email(&profile.email)
            .await
            .map_err(map_repository_error)?;
        if let Some(existing) = existing {
            info!(
                email = %profile.email,
                existing_id = %existing.id(),
                "rejected employee with duplicate email"
            );
            return Err(duplicate_email(&profile.email));
        }

        let employee = self
            .repository
            .insert(&profile)
            .await
            .map_err(map_repository_error)?;
        info!(id = %employee.id(), "created employee");
        Ok(employee)
    }

    async fn update_employee(&self, employee: Employee) -> Result<Employee, Error> {
        let saved = self
            .repository
            .save(&employee)
            .await
            .map_err(map_repository_error)?;
        info!(id = %saved.id(), "updated employee");
        Ok(saved)
    }

    async fn delete_employee(&self, id: EmployeeId) -> Result<(), Error> {
        self.repository
            .delete_by_id(id)
            .await
            .map_err(map_repository_error)?;
        info!(%id, "deleted employee");
        Ok(())
    }
}

#[async_trait]
impl<R> EmployeeQuery for EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn get_all_employees(&self) -> Result<Vec<Employee>, Error> {
        let employees = self
            .repository
            .find_all()
            .await
            .map_err(map_repository_error)?;
        debug!(count = employees.len(), "listed employees");
        Ok(employees)
    }

    async fn get_employee_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, Error> {
        let employee = self
            .repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?;
        debug!(%id, found = employee.is_some(), "looked up employee by id");
        Ok(employee)
    }

    async fn find_employee_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, Error> {
        let employee = self
            .repository
            .find_by_name(first_name, last_name)
            .await
            .map_err(map_repository_error)?;
        debug!(
            first_name,
            last_name,
            found = employee.is_some(),
            "looked up employee by name"
        );
        Ok(employee)
    }
}

#[cfg(test)]
#[path = "employee_service_tests.rs"]
mod tests;
