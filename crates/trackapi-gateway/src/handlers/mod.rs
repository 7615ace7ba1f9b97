mod health;
mod track;

pub use health::health_handler;
pub use track::{
    create_track_handler, delete_track_handler, get_track_handler, list_tracks_handler,
    update_track_handler,
};
