//! Storage backends for the track catalog.
//!
//! Both backends implement the [`Repository`] contract from `trackapi_core`:
//! [`InMemoryRepository`] for tests and single-process runs, and
//! [`MySqlRepository`] for a persistent `tracks` table.

pub mod memory;
pub mod mysql;

pub use memory::InMemoryRepository;
pub use mysql::MySqlRepository;
pub use trackapi_core::repository::{ReadRepository, Repository, Result};
pub use trackapi_core::StorageError;
