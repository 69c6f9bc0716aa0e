//! Driving port for employee reads.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeId, Error};

/// Domain use-case port for reading employee records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeQuery: Send + Sync {
    /// Every stored employee in storage order.
    async fn get_all_employees(&self) -> Result<Vec<Employee>, Error>;

    /// The employee with `id`, or `None` when it is not on file.
    async fn get_employee_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, Error>;

    /// The first employee whose first and last names match exactly.
    async fn find_employee_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, Error>;
}
