//! Event records and their client-facing shapes.
//!
//! An [`Event`] is stored as a flat JSON object: the store-assigned `id`, the
//! six required string fields, and whatever other keys the client sent.
//! Unknown keys are carried through untouched.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{EventDirError, EventDirResult};

/// Fields every event must carry as non-blank strings.
pub const REQUIRED_FIELDS: [&str; 6] = ["title", "description", "date", "time", "image", "location"];

const INVALID_DATA: &str = "Invalid data provided.";

/// A stored event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    #[serde(flatten)]
    pub fields: EventFields,
}

/// Validated event content (everything except the id).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventFields {
    // Missing or null values load as "" so one partial record does not
    // fail the whole document.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub time: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,

    /// Free-form fields preserved opaquely
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The list view of an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    pub id: String,
    pub title: String,
    pub image: String,
    pub date: String,
    pub location: String,
}

/// Unvalidated event content as sent by a client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventInput(Map<String, Value>);

impl Event {
    pub fn new(id: impl Into<String>, fields: EventFields) -> Self {
        Event {
            id: id.into(),
            fields,
        }
    }

    pub fn summary(&self) -> EventSummary {
        EventSummary {
            id: self.id.clone(),
            title: self.fields.title.clone(),
            image: self.fields.image.clone(),
            date: self.fields.date.clone(),
            location: self.fields.location.clone(),
        }
    }

    /// Text matched by list searches.
    pub fn searchable_text(&self) -> String {
        format!(
            "{} {} {}",
            self.fields.title, self.fields.description, self.fields.location
        )
    }
}

impl EventInput {
    pub fn new() -> Self {
        EventInput(Map::new())
    }

    /// Set a field, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Check the required fields and split the input into typed fields plus
    /// extras. Values are kept as sent; only the blank check trims.
    ///
    /// Any `id` key is dropped: ids belong to the store.
    pub fn validate(self) -> EventDirResult<EventFields> {
        let mut map = self.0;
        map.remove("id");

        let mut take = |key: &str| -> EventDirResult<String> {
            match map.remove(key) {
                Some(Value::String(s)) if !s.trim().is_empty() => Ok(s),
                _ => Err(EventDirError::InvalidInput(INVALID_DATA.to_string())),
            }
        };

        let title = take("title")?;
        let description = take("description")?;
        let date = take("date")?;
        let time = take("time")?;
        let image = take("image")?;
        let location = take("location")?;

        Ok(EventFields {
            title,
            description,
            date,
            time,
            image,
            location,
            extra: map,
        })
    }
}

impl From<Map<String, Value>> for EventInput {
    fn from(map: Map<String, Value>) -> Self {
        EventInput(map)
    }
}

impl From<EventFields> for EventInput {
    fn from(fields: EventFields) -> Self {
        let mut map = fields.extra;
        map.insert("title".into(), fields.title.into());
        map.insert("description".into(), fields.description.into());
        map.insert("date".into(), fields.date.into());
        map.insert("time".into(), fields.time.into());
        map.insert("image".into(), fields.image.into());
        map.insert("location".into(), fields.location.into());
        EventInput(map)
    }
}

/// Image metadata from the read-only catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageMeta {
    pub path: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
