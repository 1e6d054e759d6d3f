use std::{
    collections::{hash_map::Entry, HashMap},
    hash::Hash,
    sync::Arc,
};
use tokio::sync::RwLock;

/// Generic in-memory key-value map guarded by a `RwLock`.
///
/// Every accessor takes the guard for the shortest possible span and hands
/// back owned clones, so callers never serialize or do I/O while holding it.
#[derive(Clone)]
pub struct MemoryMapStore<K, V> {
    inner: Arc<RwLock<HashMap<K, V>>>,
}

impl<K, V> Default for MemoryMapStore<K, V> {
    fn default() -> Self {
        Self { inner: Arc::new(RwLock::new(HashMap::new())) }
    }
}

impl<K, V> MemoryMapStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with the given entries.
    pub fn with_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self { inner: Arc::new(RwLock::new(entries.into_iter().collect())) }
    }

    /// Snapshot of all values, in map iteration order.
    pub async fn values(&self) -> Vec<V> {
        let map = self.inner.read().await;
        map.values().cloned().collect()
    }

    /// Get value by key.
    pub async fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }

    /// Insert only if the key is vacant. Returns `false` and leaves the
    /// existing value untouched when the key is taken.
    pub async fn insert_new(&self, key: K, value: V) -> bool {
        let mut map = self.inner.write().await;
        match map.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_map_store_basic_ops() {
        let store = MemoryMapStore::<String, u32>::new();
        assert_eq!(store.len().await, 0);

        assert!(store.insert_new("a".into(), 1).await);
        assert!(store.insert_new("b".into(), 2).await);
        assert_eq!(store.get(&"a".into()).await, Some(1));
        assert_eq!(store.get(&"missing".into()).await, None);

        // occupied key is not overwritten
        assert!(!store.insert_new("a".into(), 10).await);
        assert_eq!(store.get(&"a".into()).await, Some(1));

        let mut values = store.values().await;
        values.sort();
        assert_eq!(values, vec![1, 2]);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn clones_share_the_same_map() {
        let store = MemoryMapStore::with_entries([(1u8, "x".to_string())]);
        let other = store.clone();
        assert!(other.insert_new(2, "y".into()).await);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_inserts_are_not_lost() {
        let store = MemoryMapStore::<u32, u32>::new();
        let mut handles = Vec::new();
        for i in 0..200u32 {
            let s = store.clone();
            handles.push(tokio::spawn(async move { s.insert_new(i, i * 2).await }));
        }
        for h in handles {
            assert!(h.await.unwrap());
        }
        assert_eq!(store.len().await, 200);
    }
}
