//! Shared application state.
//!
//! The state is cloned into every handler; the points store itself is
//! behind an `Arc`, so clones share the one map for the life of the
//! process.

use std::sync::Arc;

use crate::store::PointsStore;

/// Shared state for the rewards API.
#[derive(Clone)]
pub struct AppState {
    /// The process-lifetime points store.
    pub store: Arc<PointsStore>,
}

impl AppState {
    /// Creates fresh state with an empty store.
    pub fn new() -> Self {
        AppState {
            store: Arc::new(PointsStore::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_the_store() {
        let state = AppState::new();
        let clone = state.clone();

        let id = state.store.put(42).await;
        assert_eq!(clone.store.get(&id).await, Some(42));
    }
}
