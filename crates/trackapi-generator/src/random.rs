use crate::Generator;
use trackapi_core::TrackId;
use uuid::Uuid;

/// Generates ids from random (version 4) UUIDs.
///
/// 122 random bits per id, rendered in the hyphenated lowercase form,
/// e.g. `67e55044-10b1-426f-9247-bb680e5fe0c8`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl UuidGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Generator for UuidGenerator {
    type Output = TrackId;

    fn generate(&self) -> TrackId {
        TrackId::new(Uuid::new_v4().to_string())
    }
}
