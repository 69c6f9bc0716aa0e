//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use crate::domain::{Employee, EmployeeId, EmployeeProfile};

use super::schema::employees;

/// Row struct for reading from the employees table.
///
/// Also derives `QueryableByName` so raw SQL lookups can load it.
#[derive(Debug, Clone, Queryable, QueryableByName, Selectable, Insertable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EmployeeRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee::new(
            EmployeeId::new(row.id),
            EmployeeProfile {
                first_name: row.first_name,
                last_name: row.last_name,
                email: row.email,
            },
        )
    }
}

impl From<&Employee> for EmployeeRow {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id().get(),
            first_name: employee.first_name().to_owned(),
            last_name: employee.last_name().to_owned(),
            email: employee.email().to_owned(),
        }
    }
}

/// Insertable struct for new rows; the sequence assigns `id`.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
pub(crate) struct NewEmployeeRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
}

impl<'a> From<&'a EmployeeProfile> for NewEmployeeRow<'a> {
    fn from(profile: &'a EmployeeProfile) -> Self {
        Self {
            first_name: &profile.first_name,
            last_name: &profile.last_name,
            email: &profile.email,
        }
    }
}

/// Changeset replacing every mutable column of an existing row.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = employees)]
pub(crate) struct EmployeeUpdate<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
}

impl<'a> From<&'a EmployeeProfile> for EmployeeUpdate<'a> {
    fn from(profile: &'a EmployeeProfile) -> Self {
        Self {
            first_name: &profile.first_name,
            last_name: &profile.last_name,
            email: &profile.email,
        }
    }
}
