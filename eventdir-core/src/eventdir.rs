//! eventdir data directory management.

use std::path::{Path, PathBuf};

use crate::catalog::ImageCatalog;
use crate::config::EventDirConfig;
use crate::error::EventDirResult;
use crate::event::{Event, ImageMeta};
use crate::lock::DataDirLock;
use crate::store::EventStore;

pub const EVENTS_FILE: &str = "events.json";
pub const IMAGES_FILE: &str = "images.json";

/// A data directory with its event store and image catalog.
pub struct EventDir {
    config: EventDirConfig,
    events: EventStore,
    images: ImageCatalog,
}

impl EventDir {
    /// Open the data directory named by the user's config.
    pub fn load() -> EventDirResult<Self> {
        Ok(Self::open(EventDirConfig::load()?))
    }

    pub fn open(config: EventDirConfig) -> Self {
        let data_path = config.data_path();

        EventDir {
            events: EventStore::new(data_path.join(EVENTS_FILE)),
            images: ImageCatalog::new(data_path.join(IMAGES_FILE)),
            config,
        }
    }

    /// Open a data directory directly, with default settings otherwise.
    pub fn at(data_dir: impl Into<PathBuf>) -> Self {
        Self::open(EventDirConfig {
            data_dir: data_dir.into(),
            ..Default::default()
        })
    }

    /// Create empty documents for whichever of events.json and images.json
    /// is missing. Existing documents are left alone.
    pub async fn init(&self) -> EventDirResult<()> {
        self.events.document().ensure_exists(&Vec::<Event>::new()).await?;
        self.images.document().ensure_exists(&Vec::<ImageMeta>::new()).await?;
        Ok(())
    }

    pub fn lock(&self) -> EventDirResult<DataDirLock> {
        DataDirLock::acquire(&self.data_path())
    }

    pub fn config(&self) -> &EventDirConfig {
        &self.config
    }

    pub fn data_path(&self) -> PathBuf {
        self.config.data_path()
    }

    pub fn public_path(&self) -> PathBuf {
        self.config.public_path()
    }

    pub fn events(&self) -> &EventStore {
        &self.events
    }

    pub fn images(&self) -> &ImageCatalog {
        &self.images
    }

    pub fn events_path(&self) -> &Path {
        self.events.document().path()
    }
}
