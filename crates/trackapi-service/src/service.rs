use async_trait::async_trait;
use jiff::Timestamp;
use std::sync::Arc;
use tracing::{debug, trace};
use trackapi_core::{Repository, Track, TrackCatalog, TrackDraft, TrackId, TrackServiceError};
use trackapi_generator::Generator;

type Result<T> = std::result::Result<T, TrackServiceError>;

/// A concrete implementation of the `TrackCatalog` trait.
///
/// This service wraps a `Repository` and a `Generator` and owns the identity
/// rules of a track:
/// - the id is generated once, at creation
/// - the creation date is stamped once, at creation, and carried over on
///   every update
///
/// Note: The `Generator` implementation is responsible for ensuring
/// uniqueness of generated ids. No collision retry is performed.
#[derive(Debug)]
pub struct TrackService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
}

impl<R, G> Clone for TrackService<R, G> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            generator: Arc::clone(&self.generator),
        }
    }
}

impl<R: Repository, G: Generator> TrackService<R, G> {
    pub fn new(repository: R, generator: G) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
        }
    }

    pub(crate) fn repository(&self) -> &R {
        &self.repository
    }

    pub(crate) fn generate_id(&self) -> TrackId {
        self.generator.generate().into()
    }
}

#[async_trait]
impl<R: Repository, G: Generator> TrackCatalog for TrackService<R, G> {
    async fn get_all_tracks(&self) -> Result<Vec<Track>> {
        Ok(self.repository.find_all().await?)
    }

    async fn get_track_by_id(&self, id: &TrackId) -> Result<Option<Track>> {
        trace!(id = %id, "looking up track");
        Ok(self.repository.find_by_id(id).await?)
    }

    async fn create_track(&self, draft: TrackDraft) -> Result<Track> {
        let track = Track::from_draft(self.generate_id(), Timestamp::now(), draft);
        let saved = self.repository.save(track).await?;

        debug!(id = %saved.id, title = %saved.title, "created track");
        Ok(saved)
    }

    async fn update_track(&self, id: &TrackId, draft: TrackDraft) -> Result<Option<Track>> {
        let Some(existing) = self.repository.find_by_id(id).await? else {
            trace!(id = %id, "update target not found");
            return Ok(None);
        };

        let track = Track::from_draft(id.clone(), existing.creation_date, draft);
        let updated = self.repository.replace(track).await?;

        match &updated {
            Some(track) => debug!(id = %track.id, "updated track"),
            // removed between the lookup and the write
            None => debug!(id = %id, "track vanished before update"),
        }
        Ok(updated)
    }

    async fn delete_track(&self, id: &TrackId) -> Result<bool> {
        if !self.repository.exists_by_id(id).await? {
            trace!(id = %id, "delete target not found");
            return Ok(false);
        }

        let deleted = self.repository.delete_by_id(id).await?;
        debug!(id = %id, deleted, "deleted track");
        Ok(deleted)
    }

    async fn exists(&self, id: &TrackId) -> Result<bool> {
        Ok(self.repository.exists_by_id(id).await?)
    }
}
