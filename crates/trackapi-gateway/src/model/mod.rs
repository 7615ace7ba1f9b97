mod health;
mod track;

pub use health::HealthResponse;
pub use track::{TrackRequest, TrackResponse};
