//! Process-local entity table backing the in-memory stores.
//!
//! Nothing is persisted: contents live as long as the process.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use domain::{DomainError, DomainResult, Entity};

/// Identifier-keyed map of entities guarded by a `RwLock`.
#[derive(Debug)]
pub struct MemoryTable<T> {
    rows: RwLock<HashMap<String, T>>,
}

impl<T: Entity> MemoryTable<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }

    /// Insert or overwrite by identifier (last write wins).
    pub fn put(&self, row: T) -> DomainResult<T> {
        if row.id().is_empty() {
            return Err(DomainError::EmptyIdentifier);
        }
        self.write()?.insert(row.id().to_string(), row.clone());
        Ok(row)
    }

    /// Overwrite only while the stored version still equals `expected`.
    pub fn put_if_version(&self, row: T, expected: u64) -> DomainResult<T> {
        if row.id().is_empty() {
            return Err(DomainError::EmptyIdentifier);
        }

        let mut rows = self.write()?;
        let current = rows
            .get(row.id())
            .ok_or_else(|| DomainError::not_found(T::KIND))?;
        if current.version() != expected {
            return Err(DomainError::version_conflict(format!(
                "{} {} is at version {}, expected {}",
                T::KIND,
                row.id(),
                current.version(),
                expected
            )));
        }

        rows.insert(row.id().to_string(), row.clone());
        Ok(row)
    }

    pub fn get(&self, id: &str) -> DomainResult<T> {
        self.read()?
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(T::KIND))
    }

    /// Physically remove a row.
    pub fn remove(&self, id: &str) -> DomainResult<()> {
        self.write()?
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(T::KIND))
    }

    /// Owned copy of every row, in no particular order.
    pub fn snapshot(&self) -> DomainResult<Vec<T>> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, HashMap<String, T>>> {
        self.rows
            .read()
            .map_err(|_| DomainError::storage(format!("{} table lock poisoned", T::KIND)))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, HashMap<String, T>>> {
        self.rows
            .write()
            .map_err(|_| DomainError::storage(format!("{} table lock poisoned", T::KIND)))
    }
}

impl<T: Entity> Default for MemoryTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{CreateUser, User};

    fn user() -> User {
        User::new(CreateUser {
            name: "Ana".to_string(),
            address: "Main St".to_string(),
            nickname: None,
        })
    }

    #[test]
    fn test_put_and_get() {
        let table = MemoryTable::new();
        let stored = table.put(user()).unwrap();

        assert_eq!(table.get(&stored.id).unwrap(), stored);
        assert_eq!(table.snapshot().unwrap().len(), 1);
    }

    #[test]
    fn test_put_rejects_empty_id() {
        let table = MemoryTable::new();
        let mut row = user();
        row.id.clear();

        assert_eq!(table.put(row.clone()), Err(DomainError::EmptyIdentifier));
        assert_eq!(table.put_if_version(row, 1), Err(DomainError::EmptyIdentifier));
    }

    #[test]
    fn test_put_overwrites() {
        let table = MemoryTable::new();
        let mut row = table.put(user()).unwrap();
        row.name = "Bea".to_string();
        table.put(row.clone()).unwrap();

        assert_eq!(table.get(&row.id).unwrap().name, "Bea");
        assert_eq!(table.snapshot().unwrap().len(), 1);
    }

    #[test]
    fn test_get_missing() {
        let table: MemoryTable<User> = MemoryTable::new();

        assert_eq!(table.get("nope"), Err(DomainError::not_found("user")));
        assert!(table.snapshot().unwrap().is_empty());
    }

    #[test]
    fn test_put_if_version_detects_stale_write() {
        let table = MemoryTable::new();
        let original = table.put(user()).unwrap();

        let mut first = original.clone();
        first.version += 1;
        table.put_if_version(first, original.version).unwrap();

        let mut second = original.clone();
        second.version += 1;
        let err = table.put_if_version(second, original.version).unwrap_err();
        assert!(matches!(err, DomainError::VersionConflict(_)));
    }

    #[test]
    fn test_put_if_version_requires_existing_row() {
        let table = MemoryTable::new();

        assert!(table.put_if_version(user(), 1).unwrap_err().is_not_found());
    }

    #[test]
    fn test_remove() {
        let table = MemoryTable::new();
        let row = table.put(user()).unwrap();

        table.remove(&row.id).unwrap();
        assert!(table.remove(&row.id).unwrap_err().is_not_found());
        assert!(table.snapshot().unwrap().is_empty());
    }
}
