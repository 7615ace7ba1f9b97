use crate::Generator;
use std::sync::atomic::{AtomicU64, Ordering};
use trackapi_core::TrackId;

/// A sequential id generator.
///
/// Produces ids like "trk000000", "trk000001", etc. Ids are unique within a
/// single instance only, which makes this generator suitable for tests and
/// single-process local runs.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
    prefix: String,
}

impl Clone for SeqGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: AtomicU64::new(self.counter.load(Ordering::SeqCst)),
            prefix: self.prefix.clone(),
        }
    }
}

impl SeqGenerator {
    /// Creates a new sequential generator with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::with_offset(prefix, 0)
    }

    /// Creates a new sequential generator starting from a specific counter value.
    pub fn with_offset(prefix: impl Into<String>, offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
            prefix: prefix.into(),
        }
    }
}

impl Generator for SeqGenerator {
    type Output = TrackId;

    fn generate(&self) -> TrackId {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        TrackId::new(format!("{}{:06}", self.prefix, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_sequential_ids() {
        let generator = SeqGenerator::with_prefix("trk");

        assert_eq!(generator.generate().as_str(), "trk000000");
        assert_eq!(generator.generate().as_str(), "trk000001");
        assert_eq!(generator.generate().as_str(), "trk000002");
    }

    #[test]
    fn with_offset() {
        let generator = SeqGenerator::with_offset("trk", 1000);

        assert_eq!(generator.generate().as_str(), "trk001000");
        assert_eq!(generator.generate().as_str(), "trk001001");
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SeqGenerator>();
    }

    #[test]
    fn clone_preserves_counter_state() {
        let generator = SeqGenerator::with_prefix("trk");
        generator.generate();
        generator.generate();

        let cloned = generator.clone();

        assert_eq!(generator.generate().as_str(), "trk000002");
        assert_eq!(cloned.generate().as_str(), "trk000002");
    }

    #[test]
    fn shared_through_arc() {
        let generator = std::sync::Arc::new(SeqGenerator::with_prefix("u"));
        let shared = std::sync::Arc::clone(&generator);

        assert_eq!(generator.generate().as_str(), "u000000");
        assert_eq!(shared.generate().as_str(), "u000001");
    }
}
