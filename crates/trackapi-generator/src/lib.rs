pub mod random;
pub mod seq;

pub use crate::random::UuidGenerator;
pub use crate::seq::SeqGenerator;

use trackapi_core::TrackId;

/// Trait for generating track ids.
///
/// Implementations are pure generators that don't interact with storage,
/// and are expected to never repeat an id. No collision retry is performed
/// by callers.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<TrackId>;

    /// Generates a value that can be converted into a unique track id.
    fn generate(&self) -> Self::Output;
}

impl<G: Generator> Generator for std::sync::Arc<G> {
    type Output = G::Output;

    fn generate(&self) -> Self::Output {
        (**self).generate()
    }
}
