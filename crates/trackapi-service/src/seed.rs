use crate::service::TrackService;
use jiff::{SignedDuration, Timestamp};
use tracing::info;
use trackapi_core::{Repository, Track, TrackDraft, TrackServiceError};
use trackapi_generator::Generator;

/// Sample catalog: title, artist, duration in seconds, age at seeding time.
const SAMPLE_TRACKS: [(&str, &str, i32, SignedDuration); 5] = [
    (
        "Bohemian Rhapsody",
        "Queen",
        355,
        SignedDuration::from_hours(5 * 24),
    ),
    (
        "Hotel California",
        "Eagles",
        391,
        SignedDuration::from_hours(3 * 24),
    ),
    (
        "Imagine",
        "John Lennon",
        183,
        SignedDuration::from_hours(2 * 24),
    ),
    (
        "Sweet Child O' Mine",
        "Guns N' Roses",
        356,
        SignedDuration::from_hours(24),
    ),
    (
        "Stairway to Heaven",
        "Led Zeppelin",
        482,
        SignedDuration::from_hours(12),
    ),
];

/// What a seeding run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store was empty and this many sample tracks were inserted.
    Seeded(usize),
    /// The store already held this many tracks; nothing was inserted.
    AlreadyPopulated(u64),
}

impl<R: Repository, G: Generator> TrackService<R, G> {
    /// Fills an empty store with a small sample catalog.
    ///
    /// Sample tracks get generated ids and creation dates staggered into the
    /// past. A store that already holds any track is left untouched.
    pub async fn seed_sample_tracks(&self) -> Result<SeedOutcome, TrackServiceError> {
        let existing = self.repository().count().await?;
        if existing > 0 {
            info!(count = existing, "store already contains tracks, skipping sample data");
            return Ok(SeedOutcome::AlreadyPopulated(existing));
        }

        let now = Timestamp::now();
        for (title, artist, duration, age) in SAMPLE_TRACKS {
            let track = Track::from_draft(
                self.generate_id(),
                now - age,
                TrackDraft::new(title, artist, duration),
            );
            self.repository().save(track).await?;
        }

        info!(count = SAMPLE_TRACKS.len(), "sample tracks initialized");
        Ok(SeedOutcome::Seeded(SAMPLE_TRACKS.len()))
    }
}
