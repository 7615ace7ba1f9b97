use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use trackapi_core::{Track, TrackDraft};

/// Body of `POST /api/tracks` and `PUT /api/tracks/{id}`.
///
/// Clients may echo back a full track, but `id` and `creationDate` are
/// server-owned and silently dropped.
#[derive(Debug, Deserialize)]
pub struct TrackRequest {
    pub title: String,
    pub artist: String,
    pub duration: i32,
}

impl From<TrackRequest> for TrackDraft {
    fn from(request: TrackRequest) -> Self {
        TrackDraft::new(request.title, request.artist, request.duration)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackResponse {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub duration: i32,
    pub creation_date: Timestamp,
}

impl From<Track> for TrackResponse {
    fn from(track: Track) -> Self {
        Self {
            id: track.id.into_string(),
            title: track.title,
            artist: track.artist,
            duration: track.duration,
            creation_date: track.creation_date,
        }
    }
}
