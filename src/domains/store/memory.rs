//! Ordered in-memory resource store.
//!
//! Records live in a `Vec` in insertion order and are located by linear scan.
//! Every operation takes the store lock for its whole duration, so id
//! allocation and insertion can never interleave.

use tokio::sync::RwLock;
use tracing::debug;

use super::error::{StoreError, StoreResult};
use super::record::Record;

/// In-memory store for one resource kind.
pub struct ResourceStore<R: Record> {
    state: RwLock<StoreState<R>>,
}

struct StoreState<R> {
    /// Records in insertion order.
    records: Vec<R>,

    /// Next store-assigned identifier. Never decremented.
    next_id: u64,
}

impl<R: Record> ResourceStore<R> {
    /// Create an empty store whose id counter starts at 1.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Append a record carrying a caller-supplied identifier.
    ///
    /// Uniqueness of the identifier is the caller's responsibility.
    pub async fn insert(&self, record: R) -> R {
        let mut state = self.state.write().await;
        debug!(id = %record.id(), "Inserting record");
        state.records.push(record.clone());
        record
    }

    /// Snapshot of all records in insertion order.
    pub async fn list(&self) -> Vec<R> {
        self.state.read().await.records.clone()
    }

    /// Number of records currently stored.
    pub async fn len(&self) -> usize {
        self.state.read().await.records.len()
    }

    /// Append a record carrying a caller-supplied identifier, reporting
    /// whether that identifier was already taken.
    ///
    /// The check and the append happen under one write lock.
    pub async fn insert_noting_duplicate(&self, record: R) -> (R, bool) {
        let mut state = self.state.write().await;
        let duplicate = state.records.iter().any(|existing| existing.id() == record.id());
        debug!(id = %record.id(), duplicate, "Inserting record");
        state.records.push(record.clone());
        (record, duplicate)
    }

    /// Fetch a record by identifier.
    pub async fn get(&self, id: &R::Id) -> StoreResult<R> {
        self.state
            .read()
            .await
            .records
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(R::NOT_FOUND))
    }

    /// Overwrite the mutable fields of the record with this identifier.
    ///
    /// The record keeps its identifier and its position.
    pub async fn replace(&self, id: &R::Id, changes: R::Changes) -> StoreResult<R> {
        self.modify(id, |record| {
            record.apply(changes);
            record.clone()
        })
        .await
    }

    /// Run `f` against the record with this identifier under the write lock.
    pub async fn modify<T, F>(&self, id: &R::Id, f: F) -> StoreResult<T>
    where
        F: FnOnce(&mut R) -> T,
    {
        let mut state = self.state.write().await;
        let record = state
            .records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| StoreError::not_found(R::NOT_FOUND))?;
        Ok(f(record))
    }

    /// Remove the record with this identifier and return it.
    pub async fn remove(&self, id: &R::Id) -> StoreResult<R> {
        let mut state = self.state.write().await;
        let position = state
            .records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| StoreError::not_found(R::NOT_FOUND))?;
        debug!(%id, position, "Removing record");
        Ok(state.records.remove(position))
    }
}

impl<R: Record<Id = u64>> ResourceStore<R> {
    /// Append a record built around the next store-assigned identifier.
    ///
    /// The counter advances by exactly one per call, including after
    /// deletions, so identifiers are never reused.
    pub async fn insert_with_next_id<F>(&self, build: F) -> R
    where
        F: FnOnce(u64) -> R,
    {
        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id += 1;

        let record = build(id);
        debug!(id, "Inserting record with assigned id");
        state.records.push(record.clone());
        record
    }

    /// The identifier the next assigned insert will receive.
    pub async fn peek_next_id(&self) -> u64 {
        self.state.read().await.next_id
    }
}

impl<R: Record> Default for ResourceStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: u64,
        text: String,
    }

    impl Record for Note {
        type Id = u64;
        type Changes = String;
        const NOT_FOUND: &'static str = "note not found";

        fn id(&self) -> &u64 {
            &self.id
        }

        fn apply(&mut self, changes: String) {
            self.text = changes;
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Tag {
        id: String,
        label: String,
    }

    impl Record for Tag {
        type Id = String;
        type Changes = String;
        const NOT_FOUND: &'static str = "tag not found";

        fn id(&self) -> &String {
            &self.id
        }

        fn apply(&mut self, changes: String) {
            self.label = changes;
        }
    }

    fn note(id: u64, text: &str) -> Note {
        Note {
            id,
            text: text.to_string(),
        }
    }

    async fn store_with(texts: &[&str]) -> ResourceStore<Note> {
        let store = ResourceStore::new();
        for text in texts {
            store.insert_with_next_id(|id| note(id, text)).await;
        }
        store
    }

    #[tokio::test]
    async fn test_list_preserves_creation_order() {
        let store = store_with(&["a", "b", "c", "d"]).await;

        let texts: Vec<_> = store.list().await.into_iter().map(|n| n.text).collect();
        assert_eq!(texts, vec!["a", "b", "c", "d"]);
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let store: ResourceStore<Note> = ResourceStore::new();
        assert!(store.list().await.is_empty());
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_assigned_ids_are_never_reused() {
        let store = store_with(&["one", "two", "three"]).await;
        store.remove(&2).await.unwrap();

        let created = store.insert_with_next_id(|id| note(id, "four")).await;
        assert_eq!(created.id, 4);
        assert_eq!(store.peek_next_id().await, 5);

        let ids: Vec<_> = store.list().await.into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[tokio::test]
    async fn test_get_and_remove_missing_id() {
        let store = store_with(&["a"]).await;

        let err = store.get(&42).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "note not found");

        assert!(store.remove(&42).await.unwrap_err().is_not_found());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_delete_then_get_scenario() {
        let store = store_with(&["A", "B"]).await;
        store.remove(&1).await.unwrap();

        assert!(store.get(&1).await.unwrap_err().is_not_found());
        assert_eq!(store.get(&2).await.unwrap(), note(2, "B"));
    }

    #[tokio::test]
    async fn test_replace_keeps_position_and_id() {
        let store = store_with(&["a", "b", "c"]).await;

        let updated = store.replace(&2, "B".to_string()).await.unwrap();
        assert_eq!(updated, note(2, "B"));

        let again = store.replace(&2, "B".to_string()).await.unwrap();
        assert_eq!(again, updated);

        let all = store.list().await;
        assert_eq!(all, vec![note(1, "a"), note(2, "B"), note(3, "c")]);
    }

    #[tokio::test]
    async fn test_replace_missing_id_leaves_store_unchanged() {
        let store = store_with(&["a"]).await;

        let err = store.replace(&9, "x".to_string()).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.list().await, vec![note(1, "a")]);
    }

    #[tokio::test]
    async fn test_remove_isolates_other_records() {
        let store = store_with(&["a", "b", "c"]).await;

        let removed = store.remove(&2).await.unwrap();
        assert_eq!(removed, note(2, "b"));
        assert_eq!(store.list().await, vec![note(1, "a"), note(3, "c")]);
    }

    #[tokio::test]
    async fn test_caller_supplied_ids() {
        let store: ResourceStore<Tag> = ResourceStore::new();
        store
            .insert(Tag {
                id: "x".into(),
                label: "first".into(),
            })
            .await;

        let (_, duplicate) = store
            .insert_noting_duplicate(Tag {
                id: "y".into(),
                label: "second".into(),
            })
            .await;
        assert!(!duplicate);

        let fetched = store.get(&"x".to_string()).await.unwrap();
        assert_eq!(fetched.label, "first");
        assert_eq!(
            store.get(&"y".to_string()).await.unwrap_err().to_string(),
            "tag not found"
        );
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_inserts_flag_all_but_one() {
        let store: Arc<ResourceStore<Tag>> = Arc::new(ResourceStore::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    let tag = Tag {
                        id: "same".into(),
                        label: format!("copy {}", i),
                    };
                    store.insert_noting_duplicate(tag).await.1
                })
            })
            .collect();

        let mut flagged = 0;
        for handle in handles {
            if handle.await.unwrap() {
                flagged += 1;
            }
        }

        assert_eq!(flagged, 15);
        assert_eq!(store.len().await, 16);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_get_distinct_ids() {
        let store: Arc<ResourceStore<Note>> = Arc::new(ResourceStore::new());

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.insert_with_next_id(|id| note(id, "x")).await.id })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=32).collect::<Vec<_>>());
        assert_eq!(store.peek_next_id().await, 33);
    }
}
