//! In-memory store implementations for tests and the demo wiring.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::RwLock;

use crate::tables::{AppendStore, KeyedStore};

/// In-memory natural-key table.
#[derive(Debug)]
pub struct InMemoryKeyedStore<K, V> {
    inner: RwLock<HashMap<K, V>>,
}

impl<K, V> InMemoryKeyedStore<K, V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl<K, V> Default for InMemoryKeyedStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> KeyedStore<K, V> for InMemoryKeyedStore<K, V>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().ok()?;
        map.get(key).cloned()
    }

    fn upsert(&self, key: K, value: V) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(key, value);
        }
    }

    fn list(&self) -> Vec<V> {
        match self.inner.read() {
            Ok(map) => map.values().cloned().collect(),
            Err(_) => vec![],
        }
    }

    fn remove(&self, key: &K) -> bool {
        match self.inner.write() {
            Ok(mut map) => map.remove(key).is_some(),
            Err(_) => false,
        }
    }
}

/// In-memory append-only table.
#[derive(Debug)]
pub struct InMemoryAppendStore<V> {
    inner: RwLock<Vec<V>>,
}

impl<V> InMemoryAppendStore<V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }
}

impl<V> Default for InMemoryAppendStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> AppendStore<V> for InMemoryAppendStore<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn append(&self, value: V) {
        if let Ok(mut rows) = self.inner.write() {
            rows.push(value);
        }
    }

    fn list(&self) -> Vec<V> {
        match self.inner.read() {
            Ok(rows) => rows.clone(),
            Err(_) => vec![],
        }
    }

    fn len(&self) -> usize {
        match self.inner.read() {
            Ok(rows) => rows.len(),
            Err(_) => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn upsert_replaces_by_natural_key() {
        let store: InMemoryKeyedStore<String, i64> = InMemoryKeyedStore::new();
        store.upsert("PY-2211".to_string(), 1);
        store.upsert("PY-2211".to_string(), 2);

        assert_eq!(store.get(&"PY-2211".to_string()), Some(2));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn remove_reports_presence() {
        let store: InMemoryKeyedStore<String, i64> = InMemoryKeyedStore::new();
        store.upsert("P1".to_string(), 40_000);

        assert!(store.remove(&"P1".to_string()));
        assert!(!store.remove(&"P1".to_string()));
        assert_eq!(store.get(&"P1".to_string()), None);
    }

    #[test]
    fn append_keeps_every_submission() {
        let store: InMemoryAppendStore<i64> = InMemoryAppendStore::new();
        store.append(1);
        store.append(1);
        store.append(2);

        assert_eq!(store.len(), 3);
        assert_eq!(store.list(), vec![1, 1, 2]);
    }

    #[test]
    fn stores_work_behind_shared_handles() {
        let keyed = Arc::new(InMemoryKeyedStore::<String, i64>::new());
        let appender = Arc::new(InMemoryAppendStore::<i64>::new());

        KeyedStore::upsert(&keyed, "k".to_string(), 7);
        AppendStore::append(&appender, 7);

        assert_eq!(KeyedStore::get(&keyed, &"k".to_string()), Some(7));
        assert_eq!(AppendStore::len(&appender), 1);
        assert!(!AppendStore::is_empty(&appender));
    }
}
