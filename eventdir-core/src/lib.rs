//! Core types for eventdir.
//!
//! This crate holds everything the server and the CLI share:
//! - `Event`, `EventInput`, `EventSummary` and `ImageMeta`
//! - `EventStore` and `ImageCatalog`, backed by whole-document JSON files
//! - configuration and the data directory lock

pub mod catalog;
pub mod config;
pub mod document;
pub mod error;
pub mod event;
pub mod eventdir;
pub mod lock;
pub mod query;
pub mod store;

pub use catalog::ImageCatalog;
pub use config::EventDirConfig;
pub use error::{EventDirError, EventDirResult};
pub use event::{Event, EventFields, EventInput, EventSummary, ImageMeta};
pub use eventdir::EventDir;
pub use query::ListQuery;
pub use store::EventStore;
