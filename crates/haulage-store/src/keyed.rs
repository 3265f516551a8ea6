//! Generic ID-keyed collection

use std::collections::HashSet;

use haulage_domain::{Parcel, Vehicle};
use haulage_types::StorageError;
use indexmap::IndexMap;

/// Something that carries its own storage key
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Parcel {
    fn key(&self) -> &str {
        self.id()
    }
}

impl Keyed for Vehicle {
    fn key(&self) -> &str {
        self.id()
    }
}

/// Insertion-ordered map from ID to item.
///
/// Every stored item's own key equals its map key, and keys are unique.
#[derive(Debug)]
pub struct KeyedStore<T> {
    entity: &'static str,
    items: IndexMap<String, T>,
}

impl<T: Keyed> KeyedStore<T> {
    /// Create an empty store. `entity` names the item kind in error messages.
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            items: IndexMap::new(),
        }
    }

    pub fn entity(&self) -> &'static str {
        self.entity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    fn already_exists(&self, id: &str) -> StorageError {
        StorageError::AlreadyExists {
            entity: self.entity,
            id: id.to_string(),
        }
    }

    fn not_found(&self, id: &str) -> StorageError {
        StorageError::NotFound {
            entity: self.entity,
            id: id.to_string(),
        }
    }

    pub fn add(&mut self, item: T) -> Result<&T, StorageError> {
        let id = item.key().to_string();
        if self.items.contains_key(&id) {
            return Err(self.already_exists(&id));
        }
        let (index, _) = self.items.insert_full(id, item);
        Ok(&self.items[index])
    }

    /// Add every item or none.
    ///
    /// Rejected if any ID is already stored or appears twice in `items`.
    pub fn add_batch(&mut self, items: Vec<T>) -> Result<Vec<&T>, StorageError> {
        {
            let mut seen = HashSet::with_capacity(items.len());
            for item in &items {
                let id = item.key();
                if self.items.contains_key(id) || !seen.insert(id) {
                    return Err(self.already_exists(id));
                }
            }
        }

        let start = self.items.len();
        for item in items {
            self.items.insert(item.key().to_string(), item);
        }
        Ok(self.items.values().skip(start).collect())
    }

    pub fn get(&self, id: &str) -> Result<&T, StorageError> {
        self.items.get(id).ok_or_else(|| self.not_found(id))
    }

    pub fn get_mut(&mut self, id: &str) -> Result<&mut T, StorageError> {
        let entity = self.entity;
        self.items.get_mut(id).ok_or_else(|| StorageError::NotFound {
            entity,
            id: id.to_string(),
        })
    }

    /// All items in insertion order
    pub fn list(&self) -> Vec<&T> {
        self.items.values().collect()
    }

    pub fn delete(&mut self, id: &str) -> Result<T, StorageError> {
        if !self.items.contains_key(id) {
            return Err(self.not_found(id));
        }
        self.items.shift_remove(id).ok_or_else(|| {
            StorageError::Internal(format!(
                "unable to delete {} with id {} from in-memory map",
                self.entity, id
            ))
        })
    }

    /// Remove everything, returning the removed items in insertion order
    pub fn delete_all(&mut self) -> Vec<T> {
        std::mem::take(&mut self.items).into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        value: u32,
    }

    impl Keyed for Item {
        fn key(&self) -> &str {
            &self.id
        }
    }

    fn item(id: &str, value: u32) -> Item {
        Item {
            id: id.to_string(),
            value,
        }
    }

    #[test]
    fn test_add_and_get() {
        let mut store = KeyedStore::new("item");
        store.add(item("a", 1)).unwrap();
        assert_eq!(store.get("a").unwrap(), &item("a", 1));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_duplicate_keeps_first() {
        let mut store = KeyedStore::new("item");
        store.add(item("a", 1)).unwrap();

        let err = store.add(item("a", 2)).unwrap_err();
        assert_eq!(
            err,
            StorageError::AlreadyExists {
                entity: "item",
                id: "a".to_string()
            }
        );
        assert_eq!(store.get("a").unwrap().value, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_missing() {
        let store: KeyedStore<Item> = KeyedStore::new("item");
        let err = store.get("nope").unwrap_err();
        assert_eq!(err.to_string(), "unable to find item with id nope");
    }

    #[test]
    fn test_add_batch_inserts_all() {
        let mut store = KeyedStore::new("item");
        store.add(item("a", 1)).unwrap();

        let added = store.add_batch(vec![item("b", 2), item("c", 3)]).unwrap();
        assert_eq!(added, vec![&item("b", 2), &item("c", 3)]);

        let ids: Vec<_> = store.list().iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_add_batch_collision_with_existing_inserts_nothing() {
        let mut store = KeyedStore::new("item");
        store.add(item("a", 1)).unwrap();

        let err = store
            .add_batch(vec![item("b", 2), item("a", 9)])
            .unwrap_err();
        assert!(matches!(err, StorageError::AlreadyExists { ref id, .. } if id == "a"));
        assert!(!store.contains("b"));
        assert_eq!(store.get("a").unwrap().value, 1);
    }

    #[test]
    fn test_add_batch_rejects_duplicate_within_batch() {
        let mut store = KeyedStore::new("item");

        let err = store
            .add_batch(vec![item("x", 1), item("y", 2), item("x", 3)])
            .unwrap_err();
        assert!(matches!(err, StorageError::AlreadyExists { ref id, .. } if id == "x"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete() {
        let mut store = KeyedStore::new("item");
        store
            .add_batch(vec![item("a", 1), item("b", 2), item("c", 3)])
            .unwrap();

        assert_eq!(store.delete("b").unwrap(), item("b", 2));
        let ids: Vec<_> = store.list().iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids, vec!["a", "c"]);

        assert!(matches!(
            store.delete("b"),
            Err(StorageError::NotFound { .. })
        ));
    }

    #[test]
    fn test_delete_all() {
        let mut store = KeyedStore::new("item");
        assert!(store.delete_all().is_empty());

        store.add_batch(vec![item("a", 1), item("b", 2)]).unwrap();
        let removed = store.delete_all();
        assert_eq!(removed, vec![item("a", 1), item("b", 2)]);
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_get_mut() {
        let mut store = KeyedStore::new("item");
        store.add(item("a", 1)).unwrap();
        store.get_mut("a").unwrap().value = 7;
        assert_eq!(store.get("a").unwrap().value, 7);
        assert!(store.get_mut("z").is_err());
    }
}
