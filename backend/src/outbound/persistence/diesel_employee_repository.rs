//! PostgreSQL-backed `EmployeeRepository` implementation using Diesel ORM.
//!
//! Email uniqueness is enforced by the `employees_email_key` index; unique
//! violations on that index surface as
//! [`EmployeeRepositoryError::DuplicateEmail`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{Employee, EmployeeId, EmployeeProfile};

use super::models::{EmployeeRow, EmployeeUpdate, NewEmployeeRow};
use super::pool::{DbPool, PoolError};
use super::schema::employees;

/// Name of the unique index guarding `employees.email`.
const EMAIL_UNIQUE_INDEX: &str = "employees_email_key";

const FIND_BY_NAME_SQL: &str = "SELECT id, first_name, last_name, email \
     FROM employees \
     WHERE first_name = $1 AND last_name = $2 \
     ORDER BY id \
     LIMIT 1";

/// Diesel-backed implementation of the [`EmployeeRepository`] port.
#[derive(Clone)]
pub struct DieselEmployeeRepository {
    pool: DbPool,
}

impl DieselEmployeeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Name lookup through a hand-written parameterised query.
    ///
    /// Behaves exactly like [`EmployeeRepository::find_by_name`]; kept for
    /// callers that need the raw SQL path.
    pub async fn find_by_name_sql(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::sql_query(FIND_BY_NAME_SQL)
            .bind::<Text, _>(first_name)
            .bind::<Text, _>(last_name)
            .get_result::<EmployeeRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Employee::from))
    }
}

fn map_pool_error(error: PoolError) -> EmployeeRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            EmployeeRepositoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> EmployeeRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            EmployeeRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => EmployeeRepositoryError::query("database error"),
        DieselError::QueryBuilderError(_) => EmployeeRepositoryError::query("database query error"),
        _ => EmployeeRepositoryError::query("database error"),
    }
}

/// Map write failures, recognising the email unique index.
fn map_write_error(error: diesel::result::Error, email: &str) -> EmployeeRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    if let DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) = &error {
        if info.constraint_name() == Some(EMAIL_UNIQUE_INDEX) {
            debug!(email, "email unique index rejected write");
            return EmployeeRepositoryError::duplicate_email(email);
        }
    }
    map_diesel_error(error)
}

#[async_trait]
impl EmployeeRepository for DieselEmployeeRepository {
    async fn insert(&self, profile: &EmployeeProfile) -> Result<Employee, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(employees::table)
            .values(NewEmployeeRow::from(profile))
            .returning(EmployeeRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_write_error(err, &profile.email))?;
        Ok(row.into())
    }

    async fn save(&self, employee: &Employee) -> Result<Employee, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(employees::table)
            .values(EmployeeRow::from(employee))
            .on_conflict(employees::id)
            .do_update()
            .set(EmployeeUpdate::from(employee.profile()))
            .returning(EmployeeRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_write_error(err, employee.email()))?;
        Ok(row.into())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<EmployeeRow> = employees::table
            .order(employees::id.asc())
            .select(EmployeeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = employees::table
            .find(id.get())
            .select(EmployeeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Employee::from))
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = employees::table
            .filter(employees::email.eq(email))
            .select(EmployeeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Employee::from))
    }

    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = employees::table
            .filter(employees::first_name.eq(first_name))
            .filter(employees::last_name.eq(last_name))
            .order(employees::id.asc())
            .select(EmployeeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Employee::from))
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(employees::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        debug!(%id, removed, "delete by id");
        Ok(())
    }
}
