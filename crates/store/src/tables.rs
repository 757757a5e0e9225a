//! Store abstractions.

use std::sync::Arc;

/// Natural-key table: one row per key, re-registering a key updates the row.
///
/// Shipments key by PY tracking code, order totals by order number, products
/// by SKU.
pub trait KeyedStore<K, V>: Send + Sync {
    fn get(&self, key: &K) -> Option<V>;
    fn upsert(&self, key: K, value: V);
    fn list(&self) -> Vec<V>;
    /// Remove a row; `true` when something was there.
    fn remove(&self, key: &K) -> bool;
}

/// Append-only table: every submission is a new historical row, never edited
/// in place. Purchase lines and sales live here.
pub trait AppendStore<V>: Send + Sync {
    fn append(&self, value: V);
    fn list(&self) -> Vec<V>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V, S> KeyedStore<K, V> for Arc<S>
where
    S: KeyedStore<K, V> + ?Sized,
{
    fn get(&self, key: &K) -> Option<V> {
        (**self).get(key)
    }

    fn upsert(&self, key: K, value: V) {
        (**self).upsert(key, value)
    }

    fn list(&self) -> Vec<V> {
        (**self).list()
    }

    fn remove(&self, key: &K) -> bool {
        (**self).remove(key)
    }
}

impl<V, S> AppendStore<V> for Arc<S>
where
    S: AppendStore<V> + ?Sized,
{
    fn append(&self, value: V) {
        (**self).append(value)
    }

    fn list(&self) -> Vec<V> {
        (**self).list()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
