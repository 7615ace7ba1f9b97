use std::sync::Arc;

use trackapi_core::TrackCatalog;

#[derive(Clone)]
pub struct AppState {
    tracks: Arc<dyn TrackCatalog>,
}

impl AppState {
    pub fn new(tracks: Arc<dyn TrackCatalog>) -> Self {
        Self { tracks }
    }

    pub fn tracks(&self) -> &dyn TrackCatalog {
        self.tracks.as_ref()
    }
}
