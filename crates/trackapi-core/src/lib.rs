//! Core types and traits for the track catalog.
//!
//! This crate provides the shared domain model, the repository contract
//! implemented by the storage backends, and the [`TrackCatalog`] service
//! trait consumed by the HTTP gateway.

pub mod catalog;
pub mod error;
pub mod repository;
pub mod track;

pub use catalog::TrackCatalog;
pub use error::{StorageError, TrackServiceError};
pub use repository::{ReadRepository, Repository};
pub use track::{Track, TrackDraft, TrackId};
