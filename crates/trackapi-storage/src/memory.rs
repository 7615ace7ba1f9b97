use async_trait::async_trait;
use dashmap::DashMap;
use trackapi_core::repository::{ReadRepository, Repository, Result};
use trackapi_core::{Track, TrackId};

/// In-memory implementation of the Repository trait using DashMap.
///
/// DashMap provides better concurrency than RwLock<HashMap> because it
/// uses sharded locks, allowing concurrent reads and writes to different
/// buckets without blocking. Every write holds the shard lock for its key,
/// so concurrent writes to the same track resolve as last-writer-wins.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    storage: DashMap<TrackId, Track>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
        }
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn find_all(&self) -> Result<Vec<Track>> {
        let mut tracks: Vec<Track> = self
            .storage
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        tracks.sort_by(|a, b| {
            a.creation_date
                .cmp(&b.creation_date)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(tracks)
    }

    async fn find_by_id(&self, id: &TrackId) -> Result<Option<Track>> {
        Ok(self.storage.get(id).map(|entry| entry.value().clone()))
    }

    async fn exists_by_id(&self, id: &TrackId) -> Result<bool> {
        Ok(self.storage.contains_key(id))
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.storage.len() as u64)
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn save(&self, track: Track) -> Result<Track> {
        self.storage.insert(track.id.clone(), track.clone());
        Ok(track)
    }

    async fn replace(&self, track: Track) -> Result<Option<Track>> {
        let Some(mut existing) = self.storage.get_mut(&track.id) else {
            return Ok(None);
        };

        existing.title = track.title;
        existing.artist = track.artist;
        existing.duration = track.duration;

        Ok(Some(existing.clone()))
    }

    async fn delete_by_id(&self, id: &TrackId) -> Result<bool> {
        Ok(self.storage.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::{SignedDuration, Timestamp};

    fn id(s: &str) -> TrackId {
        TrackId::new(s)
    }

    fn track(id: &str, title: &str, created: Timestamp) -> Track {
        Track {
            id: TrackId::new(id),
            title: title.to_string(),
            artist: "Queen".to_string(),
            duration: 355,
            creation_date: created,
        }
    }

    #[tokio::test]
    async fn save_and_find() {
        let repo = InMemoryRepository::new();
        let now = Timestamp::now();

        let saved = repo.save(track("t1", "Bohemian Rhapsody", now)).await.unwrap();
        assert_eq!(saved.title, "Bohemian Rhapsody");

        let found = repo.find_by_id(&id("t1")).await.unwrap().unwrap();
        assert_eq!(found, saved);
    }

    #[tokio::test]
    async fn find_nonexistent() {
        let repo = InMemoryRepository::new();

        assert!(repo.find_by_id(&id("nope")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_overwrites_existing_id() {
        let repo = InMemoryRepository::new();
        let now = Timestamp::now();

        repo.save(track("t1", "Old", now)).await.unwrap();
        repo.save(track("t1", "New", now)).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
        let found = repo.find_by_id(&id("t1")).await.unwrap().unwrap();
        assert_eq!(found.title, "New");
    }

    #[tokio::test]
    async fn find_all_is_oldest_first() {
        let repo = InMemoryRepository::new();
        let now = Timestamp::now();

        repo.save(track("b", "Second", now)).await.unwrap();
        repo.save(track("c", "Third", now + SignedDuration::from_secs(10)))
            .await
            .unwrap();
        repo.save(track("a", "First", now - SignedDuration::from_secs(10)))
            .await
            .unwrap();

        let titles: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn replace_keeps_creation_date() {
        let repo = InMemoryRepository::new();
        let created = Timestamp::now() - SignedDuration::from_hours(48);

        repo.save(track("t1", "Imagine", created)).await.unwrap();

        let mut update = track("t1", "Imagine (Remastered)", Timestamp::now());
        update.duration = 184;
        let replaced = repo.replace(update).await.unwrap().unwrap();

        assert_eq!(replaced.title, "Imagine (Remastered)");
        assert_eq!(replaced.duration, 184);
        assert_eq!(replaced.creation_date, created);
        assert_eq!(repo.find_by_id(&id("t1")).await.unwrap().unwrap(), replaced);
    }

    #[tokio::test]
    async fn replace_never_inserts() {
        let repo = InMemoryRepository::new();

        let result = repo
            .replace(track("ghost", "Nothing", Timestamp::now()))
            .await
            .unwrap();

        assert!(result.is_none());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn replace_after_delete_is_not_found() {
        let repo = InMemoryRepository::new();

        repo.save(track("t1", "Imagine", Timestamp::now()))
            .await
            .unwrap();
        assert!(repo.delete_by_id(&id("t1")).await.unwrap());

        let result = repo
            .replace(track("t1", "Imagine (Live)", Timestamp::now()))
            .await
            .unwrap();

        assert!(result.is_none());
        assert!(!repo.exists_by_id(&id("t1")).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn delete_existing() {
        let repo = InMemoryRepository::new();

        repo.save(track("t1", "Imagine", Timestamp::now()))
            .await
            .unwrap();

        assert!(repo.delete_by_id(&id("t1")).await.unwrap());
        assert!(repo.find_by_id(&id("t1")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_nonexistent() {
        let repo = InMemoryRepository::new();

        assert!(!repo.delete_by_id(&id("nope")).await.unwrap());
    }

    #[tokio::test]
    async fn exists_and_count() {
        let repo = InMemoryRepository::with_capacity(4);

        assert!(!repo.exists_by_id(&id("t1")).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 0);

        repo.save(track("t1", "Imagine", Timestamp::now()))
            .await
            .unwrap();

        assert!(repo.exists_by_id(&id("t1")).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn concurrent_access() {
        use std::sync::Arc;

        let repo = Arc::new(InMemoryRepository::new());
        let mut handles = vec![];

        for i in 0..10u64 {
            let repo = Arc::clone(&repo);
            let handle = tokio::spawn(async move {
                let t = track(&format!("track-{:03}", i), &format!("Song {i}"), Timestamp::now());
                repo.save(t).await.unwrap();
            });
            handles.push(handle);
        }

        for i in 0..10u64 {
            let repo = Arc::clone(&repo);
            let handle = tokio::spawn(async move {
                let _ = repo.find_by_id(&TrackId::new(format!("track-{:03}", i))).await;
            });
            handles.push(handle);
        }

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(repo.count().await.unwrap(), 10);
        for i in 0..10u64 {
            let found = repo
                .find_by_id(&TrackId::new(format!("track-{:03}", i)))
                .await
                .unwrap()
                .unwrap();
            assert_eq!(found.title, format!("Song {i}"));
        }
    }
}
