use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::employee::Employee;
use crate::storage::{EmployeeStore, StoreError};

struct Inner {
    counter: u32,
    data: HashMap<u32, Employee>,
}

/// In-memory employee store: a counter plus a map behind one readers-writer
/// lock. Writers hold the write guard across the whole check-then-write
/// section, so ids are never handed out twice and an update/delete pair on the
/// same id cannot interleave.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            inner: RwLock::new(Inner {
                counter: 1,
                data: HashMap::new(),
            }),
        }
    }

    // Every critical section leaves the map consistent, so a guard from a
    // panicked holder is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeStore for MemoryStore {
    fn insert(&self, mut employee: Employee) -> Employee {
        let mut inner = self.write();
        employee.id = inner.counter;
        inner.counter += 1;
        inner.data.insert(employee.id, employee.clone());
        employee
    }

    fn get(&self, id: u32) -> Result<Employee, StoreError> {
        self.read()
            .data
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn list(&self) -> Vec<Employee> {
        self.read().data.values().cloned().collect()
    }

    fn update(&self, id: u32, mut employee: Employee) -> Result<Employee, StoreError> {
        let mut inner = self.write();
        if !inner.data.contains_key(&id) {
            return Err(StoreError::NotFound(id));
        }
        employee.id = id;
        inner.data.insert(id, employee.clone());
        Ok(employee)
    }

    fn delete(&self, id: u32) -> Result<(), StoreError> {
        self.write()
            .data
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use super::*;

    fn employee(name: &str, age: i32, salary: f64) -> Employee {
        Employee {
            id: 0,
            name: name.to_string(),
            sex: String::new(),
            age,
            salary,
            phone_number: None,
        }
    }

    #[test]
    fn insert_assigns_ascending_ids_from_one() {
        let store = MemoryStore::new();
        assert_eq!(store.insert(employee("Ann", 30, 1000.0)).id, 1);
        assert_eq!(store.insert(employee("Bo", 40, 2000.0)).id, 2);
        assert_eq!(store.insert(employee("Cy", 50, 3000.0)).id, 3);
    }

    #[test]
    fn insert_ignores_caller_supplied_id() {
        let store = MemoryStore::new();
        let mut record = employee("Ann", 30, 1000.0);
        record.id = 99;
        let stored = store.insert(record);
        assert_eq!(stored.id, 1);
        assert!(store.get(99).is_err());
    }

    #[test]
    fn get_round_trips_the_inserted_record() {
        let store = MemoryStore::new();
        let mut record = employee("Ann", 30, 1000.0);
        record.phone_number = Some("+79990001122".to_string());
        let stored = store.insert(record.clone());

        let fetched = store.get(stored.id).unwrap();
        record.id = stored.id;
        assert_eq!(fetched, record);
    }

    #[test]
    fn returned_copies_are_independent_of_stored_state() {
        let store = MemoryStore::new();
        let stored = store.insert(employee("Ann", 30, 1000.0));

        let mut copy = store.get(stored.id).unwrap();
        copy.name = "Mallory".to_string();

        assert_eq!(store.get(stored.id).unwrap().name, "Ann");
    }

    #[test]
    fn update_overwrites_the_whole_record() {
        let store = MemoryStore::new();
        let mut record = employee("Ann", 30, 1000.0);
        record.phone_number = Some("+79990001122".to_string());
        let id = store.insert(record).id;

        // No phone on the replacement; a merge would keep the old one.
        let updated = store.update(id, employee("Ann", 31, 1100.0)).unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.age, 31);
        assert_eq!(updated.phone_number, None);
        assert_eq!(store.get(id).unwrap(), updated);
    }

    #[test]
    fn update_forces_id_to_match_the_target() {
        let store = MemoryStore::new();
        let id = store.insert(employee("Ann", 30, 1000.0)).id;

        let mut replacement = employee("Ann", 31, 1100.0);
        replacement.id = 7;
        let updated = store.update(id, replacement).unwrap();
        assert_eq!(updated.id, id);
        assert!(store.get(7).is_err());
    }

    #[test]
    fn missing_id_fails_with_not_found_everywhere() {
        let store = MemoryStore::new();
        assert_eq!(store.get(42), Err(StoreError::NotFound(42)));
        assert_eq!(
            store.update(42, employee("X", 1, 1.0)),
            Err(StoreError::NotFound(42))
        );
        assert_eq!(store.delete(42), Err(StoreError::NotFound(42)));
    }

    #[test]
    fn delete_is_final() {
        let store = MemoryStore::new();
        let id = store.insert(employee("Ann", 30, 1000.0)).id;

        assert!(store.delete(id).is_ok());
        assert_eq!(store.delete(id), Err(StoreError::NotFound(id)));
        assert_eq!(store.get(id), Err(StoreError::NotFound(id)));
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let store = MemoryStore::new();
        let id = store.insert(employee("Ann", 30, 1000.0)).id;
        store.delete(id).unwrap();
        assert_eq!(store.insert(employee("Bo", 40, 2000.0)).id, id + 1);
    }

    #[test]
    fn list_returns_exactly_the_surviving_records() {
        let store = MemoryStore::new();
        let a = store.insert(employee("A", 1, 1.0));
        let b = store.insert(employee("B", 2, 2.0));
        let c = store.insert(employee("C", 3, 3.0));
        store.delete(b.id).unwrap();

        let listed = store.list();
        assert_eq!(listed.len(), 2);
        // Order is unspecified, compare as a set.
        let ids: HashSet<u32> = listed.iter().map(|e| e.id).collect();
        assert_eq!(ids, HashSet::from([a.id, c.id]));
    }

    #[test]
    fn list_on_empty_store_is_empty() {
        assert!(MemoryStore::new().list().is_empty());
    }

    #[test]
    fn concurrent_inserts_assign_unique_ids() {
        let store = Arc::new(MemoryStore::new());
        let threads = 8;
        let per_thread = 50;

        let handles: Vec<_> = (0..threads)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..per_thread)
                        .map(|i| {
                            store
                                .insert(employee(&format!("w{}-{}", t, i), 20, 100.0))
                                .id
                        })
                        .collect::<Vec<u32>>()
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(ids.insert(id), "id {} assigned twice", id);
            }
        }
        assert_eq!(ids.len(), threads * per_thread);
        assert_eq!(store.list().len(), threads * per_thread);
    }
}
