//! HTTP gateway for the track catalog.
//!
//! Exposes the [`TrackCatalog`](trackapi_core::TrackCatalog) operations as a
//! JSON REST API under `/api/tracks`.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;
