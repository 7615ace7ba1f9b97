use crate::error::TrackServiceError;
use crate::track::{Track, TrackDraft, TrackId};
use async_trait::async_trait;

type Result<T> = std::result::Result<T, TrackServiceError>;

/// Business operations on the track catalog.
///
/// Implementations own the identity rules: ids and creation dates are
/// assigned by the catalog, never taken from the caller.
#[async_trait]
pub trait TrackCatalog: Send + Sync + 'static {
    /// Lists every track.
    async fn get_all_tracks(&self) -> Result<Vec<Track>>;

    /// Looks up a single track. Returns `None` if it does not exist.
    async fn get_track_by_id(&self, id: &TrackId) -> Result<Option<Track>>;

    /// Creates a track with a freshly generated id and the current time as
    /// its creation date.
    async fn create_track(&self, draft: TrackDraft) -> Result<Track>;

    /// Replaces every editable field of an existing track.
    /// Returns `None` if the track does not exist.
    async fn update_track(&self, id: &TrackId, draft: TrackDraft) -> Result<Option<Track>>;

    /// Deletes a track. Returns `true` if it existed and was removed.
    async fn delete_track(&self, id: &TrackId) -> Result<bool>;

    /// Checks whether a track exists.
    async fn exists(&self, id: &TrackId) -> Result<bool>;
}
