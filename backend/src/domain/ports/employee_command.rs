//! Driving port for employee mutations.
//!
//! HTTP handlers call [`EmployeeCommand`] to create, overwrite and remove
//! employee records without touching persistence adapters directly.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeId, EmployeeProfile, Error};

/// Domain use-case port for changing employee records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeCommand: Send + Sync {
    /// Store a new employee and return it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns a conflict when another employee already holds the email, or
    /// a storage error when persistence fails.
    async fn save_employee(&self, profile: EmployeeProfile) -> Result<Employee, Error>;

    /// Overwrite every field of the record keyed by `employee.id()`.
    ///
    /// No existence check is made here; callers that must distinguish a
    /// missing record look it up first.
    async fn update_employee(&self, employee: Employee) -> Result<Employee, Error>;

    /// Remove the record with `id`. Absent identifiers are not an error.
    async fn delete_employee(&self, id: EmployeeId) -> Result<(), Error>;
}
