//! The event store.
//!
//! Every operation reads `events.json` in full; mutations rewrite it in full.
//! Mutations are serialized per store with an async mutex held across the
//! whole read-modify-write cycle.

use std::path::PathBuf;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::document::JsonDocument;
use crate::error::{EventDirError, EventDirResult};
use crate::event::{Event, EventInput, EventSummary};
use crate::query::ListQuery;

pub struct EventStore {
    document: JsonDocument<Vec<Event>>,
    write_lock: Mutex<()>,
}

impl EventStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        EventStore {
            document: JsonDocument::new(path),
            write_lock: Mutex::new(()),
        }
    }

    pub fn document(&self) -> &JsonDocument<Vec<Event>> {
        &self.document
    }

    /// All events, in stored order.
    pub async fn all(&self) -> EventDirResult<Vec<Event>> {
        self.document.load().await
    }

    pub async fn list(&self, query: &ListQuery) -> EventDirResult<Vec<EventSummary>> {
        let events = self.document.load().await?;
        Ok(query.apply(&events))
    }

    pub async fn get(&self, id: &str) -> EventDirResult<Event> {
        self.document
            .load()
            .await?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| EventDirError::NotFound(id.to_string()))
    }

    pub async fn create(&self, input: Option<EventInput>) -> EventDirResult<Event> {
        let fields = input.ok_or(EventDirError::MissingEvent)?.validate()?;

        let _guard = self.write_lock.lock().await;
        let mut events = self.document.load().await?;

        let event = Event::new(unique_id(&events), fields);
        events.push(event.clone());
        self.document.save(&events).await?;

        tracing::info!(id = %event.id, title = %event.fields.title, "event created");
        Ok(event)
    }

    /// Replace the event at `id` with `{id, ...input}`. Nothing from the old
    /// record survives except its id and position.
    pub async fn update(&self, id: &str, input: Option<EventInput>) -> EventDirResult<Event> {
        let fields = input.ok_or(EventDirError::MissingEvent)?.validate()?;

        let _guard = self.write_lock.lock().await;
        let mut events = self.document.load().await?;

        let slot = events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| EventDirError::NotFound(id.to_string()))?;
        *slot = Event::new(id, fields);
        let event = slot.clone();

        self.document.save(&events).await?;

        tracing::info!(id = %event.id, "event replaced");
        Ok(event)
    }

    pub async fn delete(&self, id: &str) -> EventDirResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut events = self.document.load().await?;

        let index = events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| EventDirError::NotFound(id.to_string()))?;
        events.remove(index);

        self.document.save(&events).await?;

        tracing::info!(id, "event deleted");
        Ok(())
    }
}

/// Draw a v4 UUID not already used in `events`.
fn unique_id(events: &[Event]) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !events.iter().any(|e| e.id == id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    async fn empty_store() -> (TempDir, EventStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = EventStore::new(dir.path().join("events.json"));
        store.document().ensure_exists(&Vec::new()).await.unwrap();
        (dir, store)
    }

    fn input(title: &str, description: &str, location: &str) -> EventInput {
        EventInput::new()
            .with("title", title)
            .with("description", description)
            .with("date", "2024-01-01")
            .with("time", "10:00")
            .with("image", "img.png")
            .with("location", location)
    }

    fn launch() -> EventInput {
        input("Launch", "Kickoff event", "HQ")
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let (_dir, store) = empty_store().await;

        let created = store.create(Some(launch())).await.unwrap();
        assert!(!created.id.is_empty());

        let fetched = store.get(&created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.fields, launch().validate().unwrap());
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let (_dir, store) = empty_store().await;

        let a = store.create(Some(launch())).await.unwrap();
        let b = store.create(Some(launch())).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_ignores_client_id_and_keeps_extras() {
        let (_dir, store) = empty_store().await;

        let created = store
            .create(Some(launch().with("id", "mine").with("tags", json!(["a"]))))
            .await
            .unwrap();
        assert_ne!(created.id, "mine");

        let fetched = store.get(&created.id).await.unwrap();
        assert_eq!(fetched.fields.extra.get("tags"), Some(&json!(["a"])));
    }

    #[tokio::test]
    async fn test_create_validation() {
        let (_dir, store) = empty_store().await;

        assert!(matches!(
            store.create(None).await,
            Err(EventDirError::MissingEvent)
        ));
        assert!(matches!(
            store.create(Some(launch().with("title", ""))).await,
            Err(EventDirError::InvalidInput(_))
        ));
        assert!(store.all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_whole_record() {
        let (_dir, store) = empty_store().await;

        let created = store
            .create(Some(launch().with("capacity", 40)))
            .await
            .unwrap();
        let other = store.create(Some(input("Other", "x", "y"))).await.unwrap();

        let replacement = input("Relaunch", "Second try", "Annex");
        let updated = store
            .update(&created.id, Some(replacement.clone()))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);

        let fetched = store.get(&created.id).await.unwrap();
        assert_eq!(fetched.fields, replacement.validate().unwrap());
        assert!(fetched.fields.extra.get("capacity").is_none());

        // Position is kept and neighbours are untouched
        let all = store.all().await.unwrap();
        assert_eq!(all[0].id, created.id);
        assert_eq!(all[1], other);
    }

    #[tokio::test]
    async fn test_update_validates_before_lookup() {
        let (_dir, store) = empty_store().await;

        assert!(matches!(
            store.update("nonexistent-id", None).await,
            Err(EventDirError::MissingEvent)
        ));
        assert!(matches!(
            store.update("nonexistent-id", Some(launch())).await,
            Err(EventDirError::NotFound(id)) if id == "nonexistent-id"
        ));
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_fields_and_keeps_record() {
        let (_dir, store) = empty_store().await;
        let created = store.create(Some(launch())).await.unwrap();

        assert!(matches!(
            store
                .update(&created.id, Some(launch().with("title", "  ")))
                .await,
            Err(EventDirError::InvalidInput(_))
        ));

        let without_image = EventInput::new()
            .with("title", "Launch")
            .with("description", "Kickoff event")
            .with("date", "2024-01-01")
            .with("time", "10:00")
            .with("location", "HQ");
        assert!(matches!(
            store.update(&created.id, Some(without_image)).await,
            Err(EventDirError::InvalidInput(_))
        ));

        assert_eq!(store.get(&created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let (_dir, store) = empty_store().await;

        let a = store.create(Some(launch())).await.unwrap();
        let b = store.create(Some(launch())).await.unwrap();

        store.delete(&a.id).await.unwrap();

        let all = store.all().await.unwrap();
        assert_eq!(all, vec![b]);
        assert!(matches!(
            store.get(&a.id).await,
            Err(EventDirError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_not_found_boundary() {
        let (_dir, store) = empty_store().await;
        store.create(Some(launch())).await.unwrap();

        assert!(matches!(
            store.get("nonexistent-id").await,
            Err(EventDirError::NotFound(_))
        ));
        assert!(matches!(
            store.delete("nonexistent-id").await,
            Err(EventDirError::NotFound(_))
        ));
        assert_eq!(store.all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_search_and_max() {
        let (_dir, store) = empty_store().await;

        let launch = store.create(Some(launch())).await.unwrap();
        store.create(Some(input("Dinner", "Team food", "Cafe"))).await.unwrap();

        let found = store.list(&ListQuery::new().search("kickoff")).await.unwrap();
        assert_eq!(found, vec![launch.summary()]);

        assert!(store.list(&ListQuery::new().search("nomatch")).await.unwrap().is_empty());

        let last = store.list(&ListQuery::new().max(1)).await.unwrap();
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].title, "Dinner");
    }

    #[tokio::test]
    async fn test_missing_document_propagates_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = EventStore::new(dir.path().join("events.json"));

        assert!(matches!(
            store.list(&ListQuery::new()).await,
            Err(EventDirError::Io(_))
        ));
        assert!(matches!(
            store.create(Some(launch())).await,
            Err(EventDirError::Io(_))
        ));
    }

    #[tokio::test]
    async fn test_concurrent_creates_are_not_lost() {
        let (_dir, store) = empty_store().await;
        let store = Arc::new(store);

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .create(Some(input(&format!("Event {i}"), "d", "l")))
                        .await
                        .unwrap()
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.all().await.unwrap().len(), 16);
    }
}
