use jiff::Timestamp;
use std::fmt::Display;

/// An opaque, server-assigned track identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(String);

impl TrackId {
    /// Wraps an identifier without any validation.
    ///
    /// Ids are opaque: anything a generator produces, or a client sends in
    /// a request path, is accepted as-is.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TrackId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TrackId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// A persisted track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Assigned once at creation, never changes.
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    /// Length in seconds.
    pub duration: i32,
    /// Assigned once at creation, preserved across updates.
    pub creation_date: Timestamp,
}

impl Track {
    /// Builds a track from its client-editable fields plus the
    /// server-owned identity.
    pub fn from_draft(id: TrackId, creation_date: Timestamp, draft: TrackDraft) -> Self {
        Self {
            id,
            title: draft.title,
            artist: draft.artist,
            duration: draft.duration,
            creation_date,
        }
    }
}

/// The client-editable part of a track.
///
/// Used as input for both creation and full replacement. It deliberately has
/// no `id` or `creation_date`: those belong to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackDraft {
    pub title: String,
    pub artist: String,
    pub duration: i32,
}

impl TrackDraft {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, duration: i32) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_draft_keeps_server_fields() {
        let created = Timestamp::from_second(1_700_000_000).unwrap();
        let draft = TrackDraft::new("Imagine", "John Lennon", 183);

        let track = Track::from_draft(TrackId::new("u1"), created, draft);

        assert_eq!(track.id.as_str(), "u1");
        assert_eq!(track.title, "Imagine");
        assert_eq!(track.artist, "John Lennon");
        assert_eq!(track.duration, 183);
        assert_eq!(track.creation_date, created);
    }

    #[test]
    fn track_id_display() {
        let id = TrackId::from("some-id");
        assert_eq!(id.to_string(), "some-id");
        assert_eq!(id.into_string(), "some-id");
    }
}
