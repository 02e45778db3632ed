//! # Points Store
//!
//! Ephemeral, process-lifetime mapping from receipt identifier to points.
//!
//! ## Thread Safety
//! The map is wrapped in `tokio::sync::RwLock` because requests run
//! concurrently on the multi-threaded runtime. Each `put`/`get` is atomic
//! under the lock; different identifiers impose no ordering on each other.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Points Store Operations                             │
//! │                                                                         │
//! │  Ingest  ───────► put(points) ───► fresh UUID v4, insert, return id    │
//! │                                                                         │
//! │  Retrieve ──────► get(id) ───────► Some(points) | None                 │
//! │                                                                         │
//! │  There is NO update and NO delete: an issued identifier resolves to    │
//! │  exactly one immutable points value for the life of the process.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory identifier -> points mapping.
#[derive(Debug, Default)]
pub struct PointsStore {
    scores: RwLock<HashMap<String, u64>>,
}

impl PointsStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        PointsStore::default()
    }

    /// Stores a points value under a freshly generated identifier and
    /// returns the identifier.
    ///
    /// UUID v4 collisions are negligible (122 random bits), and a collision
    /// would only ever overwrite within this process's ephemeral map.
    pub async fn put(&self, points: u64) -> String {
        let id = Uuid::new_v4().to_string();
        self.scores.write().await.insert(id.clone(), points);
        id
    }

    /// Looks up the points for an identifier. Unknown identifiers, however
    /// malformed, are simply absent.
    pub async fn get(&self, id: &str) -> Option<u64> {
        self.scores.read().await.get(id).copied()
    }

    /// Returns the number of stored receipts.
    pub async fn len(&self) -> usize {
        self.scores.read().await.len()
    }

    /// Checks whether the store has no entries.
    pub async fn is_empty(&self) -> bool {
        self.scores.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn test_put_then_get() {
        let store = PointsStore::new();

        let id = store.put(109).await;
        assert_eq!(store.get(&id).await, Some(109));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_unknown_id() {
        let store = PointsStore::new();
        assert!(store.is_empty().await);
        assert_eq!(store.get("fake_id").await, None);
    }

    #[tokio::test]
    async fn test_identifiers_are_unique() {
        let store = PointsStore::new();

        let first = store.put(1).await;
        let second = store.put(1).await;

        assert_ne!(first, second);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_points_never_change() {
        let store = PointsStore::new();

        let id = store.put(12).await;
        store.put(99).await;

        assert_eq!(store.get(&id).await, Some(12));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_puts_lose_nothing() {
        let store = Arc::new(PointsStore::new());

        let handles: Vec<_> = (0..32u64)
            .map(|points| {
                let store = store.clone();
                tokio::spawn(async move { (points, store.put(points).await) })
            })
            .collect();

        for handle in handles {
            let (points, id) = handle.await.unwrap();
            assert_eq!(store.get(&id).await, Some(points));
        }

        assert_eq!(store.len().await, 32);
    }
}
