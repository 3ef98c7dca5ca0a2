mod memory;

pub use memory::MemoryStore;

use std::fmt;

use crate::models::employee::Employee;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    NotFound(u32),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "employee with id {} does not exist", id),
        }
    }
}

impl std::error::Error for StoreError {}

/// The five storage operations the handlers are written against. Any
/// conforming implementation can be injected; `MemoryStore` is the only one
/// shipped.
pub trait EmployeeStore: Send + Sync {
    /// Assigns the next free id (ignoring whatever id the record carries),
    /// stores a copy and returns it. Cannot fail.
    fn insert(&self, employee: Employee) -> Employee;

    fn get(&self, id: u32) -> Result<Employee, StoreError>;

    /// Every current record, in no particular order. Empty store gives an
    /// empty vec.
    fn list(&self) -> Vec<Employee>;

    /// Full overwrite of an existing record. The stored id always equals the
    /// `id` argument, regardless of what the record carries.
    fn update(&self, id: u32, employee: Employee) -> Result<Employee, StoreError>;

    fn delete(&self, id: u32) -> Result<(), StoreError>;
}
