//! Process-local `EmployeeRepository` implementation.
//!
//! Records live in a `BTreeMap` keyed by id behind a mutex, so iteration is
//! already in ascending id order. Identifiers come from a monotonic counter
//! and are never reused; once the counter passes `i64::MAX` inserts fail with
//! a query error. The email uniqueness rule mirrors the unique index
//! on the SQL table.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{Employee, EmployeeId, EmployeeProfile};

#[derive(Debug)]
struct Store {
    /// `None` once every positive `i64` has been handed out.
    next_id: Option<i64>,
    records: BTreeMap<EmployeeId, EmployeeProfile>,
}

impl Store {
    fn email_taken_by_other(&self, email: &str, id: Option<EmployeeId>) -> bool {
        self.records
            .iter()
            .any(|(key, profile)| Some(*key) != id && profile.email == email)
    }
}

/// In-memory implementation of the [`EmployeeRepository`] port.
///
/// # Examples
/// ```
/// use employees::domain::EmployeeProfile;
/// use employees::domain::ports::EmployeeRepository;
/// use employees::outbound::memory::InMemoryEmployeeRepository;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let repo = InMemoryEmployeeRepository::new();
/// let stored = repo
///     .insert(&EmployeeProfile::new("Elkin", "Torres", "elkin@vita.com"))
///     .await
///     .expect("insert succeeds");
/// assert_eq!(stored.id().get(), 1);
/// # });
/// ```
#[derive(Debug)]
pub struct InMemoryEmployeeRepository {
    store: Mutex<Store>,
}

impl Default for InMemoryEmployeeRepository {
    fn default() -> Self {
        Self {
            store: Mutex::new(Store {
                next_id: Some(1),
                records: BTreeMap::new(),
            }),
        }
    }
}

impl InMemoryEmployeeRepository {
    /// Create an empty repository whose first identifier is `1`.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, EmployeeRepositoryError> {
        self.store
            .lock()
            .map_err(|_| EmployeeRepositoryError::query("in-memory employee store poisoned"))
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn insert(&self, profile: &EmployeeProfile) -> Result<Employee, EmployeeRepositoryError> {
        let mut store = self.lock()?;
        if store.email_taken_by_other(&profile.email, None) {
            return Err(EmployeeRepositoryError::duplicate_email(&profile.email));
        }
        let raw = store
            .next_id
            .ok_or_else(|| EmployeeRepositoryError::query("employee id space exhausted"))?;
        store.next_id = raw.checked_add(1);
        let id = EmployeeId::new(raw);
        store.records.insert(id, profile.clone());
        Ok(Employee::new(id, profile.clone()))
    }

    async fn save(&self, employee: &Employee) -> Result<Employee, EmployeeRepositoryError> {
        let mut store = self.lock()?;
        if store.email_taken_by_other(employee.email(), Some(employee.id())) {
            return Err(EmployeeRepositoryError::duplicate_email(employee.email()));
        }
        let id = employee.id();
        if store.next_id.is_some_and(|next| id.get() >= next) {
            store.next_id = id.get().checked_add(1);
        }
        store.records.insert(id, employee.profile().clone());
        Ok(employee.clone())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        let store = self.lock()?;
        Ok(store
            .records
            .iter()
            .map(|(id, profile)| Employee::new(*id, profile.clone()))
            .collect())
    }

    async fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let store = self.lock()?;
        Ok(store
            .records
            .get(&id)
            .map(|profile| Employee::new(id, profile.clone())))
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let store = self.lock()?;
        Ok(store
            .records
            .iter()
            .find(|(_, profile)| profile.email == email)
            .map(|(id, profile)| Employee::new(*id, profile.clone())))
    }

    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let store = self.lock()?;
        Ok(store
            .records
            .iter()
            .find(|(_, profile)| profile.first_name == first_name && profile.last_name == last_name)
            .map(|(id, profile)| Employee::new(*id, profile.clone())))
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), EmployeeRepositoryError> {
        let mut store = self.lock()?;
        store.records.remove(&id);
        Ok(())
    }
}
