//! Port abstraction for employee persistence adapters and their errors.
//!
//! The repository is a capability set over a keyed collection: insert, save
//! by id, read all, read by id, read by email, read by name, delete by id.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeId, EmployeeProfile};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by employee repository adapters.
    pub enum EmployeeRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "employee repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "employee repository query failed: {message}",
        /// The storage-level email uniqueness rule rejected the write.
        DuplicateEmail { email: String } => "employee email already on file: {email}",
    }
}

/// Storage operations over the `employees` collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert a new record; storage assigns the identifier.
    async fn insert(&self, profile: &EmployeeProfile) -> Result<Employee, EmployeeRepositoryError>;

    /// Write every field of `employee` keyed by its id, inserting the row if
    /// the id is not on file.
    async fn save(&self, employee: &Employee) -> Result<Employee, EmployeeRepositoryError>;

    /// Return every record in ascending id order.
    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeRepositoryError>;

    /// Fetch a record by identifier.
    async fn find_by_id(&self, id: EmployeeId)
    -> Result<Option<Employee>, EmployeeRepositoryError>;

    /// Fetch the record holding `email`, if any.
    async fn find_by_email(&self, email: &str)
    -> Result<Option<Employee>, EmployeeRepositoryError>;

    /// Fetch the lowest-id record whose first and last names match exactly.
    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, EmployeeRepositoryError>;

    /// Remove the record with `id`. Removing an absent id succeeds.
    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), EmployeeRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        EmployeeRepositoryError::connection("refused"),
        "employee repository connection failed: refused"
    )]
    #[case(
        EmployeeRepositoryError::query("syntax"),
        "employee repository query failed: syntax"
    )]
    #[case(
        EmployeeRepositoryError::duplicate_email("elkin@vita.com"),
        "employee email already on file: elkin@vita.com"
    )]
    fn errors_format_their_context(#[case] error: EmployeeRepositoryError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }
}
