//! Employee data model.
//!
//! An employee is a stored identity ([`EmployeeId`]) plus the replaceable
//! [`EmployeeProfile`] fields. Profiles without an identity are inserts; the
//! storage layer assigns the identifier.

use std::fmt;
use std::str::FromStr;

/// Storage-assigned employee identifier.
///
/// # Examples
/// ```
/// use employees::domain::EmployeeId;
///
/// let id = EmployeeId::new(42);
/// assert_eq!(id.get(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmployeeId(i64);

impl EmployeeId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Return the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for EmployeeId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EmployeeId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// The fields of an employee that an update replaces wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeProfile {
    /// Given name, matched exactly by name lookups.
    pub first_name: String,
    /// Family name, matched exactly by name lookups.
    pub last_name: String,
    /// Contact address; unique across stored employees.
    pub email: String,
}

impl EmployeeProfile {
    /// Build a profile from its three fields.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }
}

/// A stored employee record.
///
/// # Examples
/// ```
/// use employees::domain::{Employee, EmployeeId, EmployeeProfile};
///
/// let employee = Employee::new(
///     EmployeeId::new(1),
///     EmployeeProfile::new("Elkin", "Torres", "elkin@vita.com"),
/// );
/// assert_eq!(employee.email(), "elkin@vita.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id: EmployeeId,
    profile: EmployeeProfile,
}

impl Employee {
    /// Combine an identifier with a profile.
    #[must_use]
    pub const fn new(id: EmployeeId, profile: EmployeeProfile) -> Self {
        Self { id, profile }
    }

    /// Storage identity of the record.
    #[must_use]
    pub const fn id(&self) -> EmployeeId {
        self.id
    }

    /// Replaceable fields of the record.
    #[must_use]
    pub const fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }

    /// Given name.
    pub fn first_name(&self) -> &str {
        &self.profile.first_name
    }

    /// Family name.
    pub fn last_name(&self) -> &str {
        &self.profile.last_name
    }

    /// Unique contact address.
    pub fn email(&self) -> &str {
        &self.profile.email
    }

    /// Consume the record, returning its parts.
    #[must_use]
    pub fn into_parts(self) -> (EmployeeId, EmployeeProfile) {
        (self.id, self.profile)
    }
}
