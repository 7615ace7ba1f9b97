use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_track_handler, delete_track_handler, get_track_handler, health_handler,
    list_tracks_handler, update_track_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .nest(
                "/api/tracks",
                Router::new()
                    .route("/", get(list_tracks_handler).post(create_track_handler))
                    .route(
                        "/{id}",
                        get(get_track_handler)
                            .put(update_track_handler)
                            .delete(delete_track_handler),
                    ),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
