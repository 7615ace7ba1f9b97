use crate::error::StorageError;
use crate::track::{Track, TrackId};
use async_trait::async_trait;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A read-only view of a track repository.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Returns every stored track, oldest first.
    async fn find_all(&self) -> Result<Vec<Track>>;

    /// Retrieves the track with the given id.
    /// Returns `None` if the id does not exist.
    async fn find_by_id(&self, id: &TrackId) -> Result<Option<Track>>;

    /// Checks whether a track with the given id exists.
    async fn exists_by_id(&self, id: &TrackId) -> Result<bool>;

    /// Returns the number of stored tracks.
    async fn count(&self) -> Result<u64>;
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Inserts or overwrites the track keyed by `track.id` and returns the
    /// persisted value.
    async fn save(&self, track: Track) -> Result<Track>;

    /// Overwrites the title, artist and duration of an existing track.
    ///
    /// Never inserts and never touches `creation_date`. Returns `None` if no
    /// track with `track.id` exists at the time of the write.
    async fn replace(&self, track: Track) -> Result<Option<Track>>;

    /// Deletes the track with the given id.
    /// Returns `true` if the track existed and was removed.
    async fn delete_by_id(&self, id: &TrackId) -> Result<bool>;
}
