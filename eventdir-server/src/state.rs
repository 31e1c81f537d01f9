use std::sync::Arc;

use eventdir_core::EventDir;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    // Stores re-read their documents on each request; nothing is cached here
    eventdir: Arc<EventDir>,
}

impl AppState {
    pub fn new(eventdir: EventDir) -> Self {
        AppState {
            eventdir: Arc::new(eventdir),
        }
    }

    pub fn eventdir(&self) -> &EventDir {
        &self.eventdir
    }
}
