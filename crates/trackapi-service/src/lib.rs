//! Track catalog service implementation.
//!
//! [`TrackService`] implements [`trackapi_core::TrackCatalog`] on top of any
//! [`trackapi_core::Repository`] and id [`trackapi_generator::Generator`].

pub mod seed;
pub mod service;

pub use seed::SeedOutcome;
pub use service::TrackService;
