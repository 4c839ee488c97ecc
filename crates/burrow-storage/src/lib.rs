//! Mapping store backends.

pub mod memory;
pub mod mysql;

pub use burrow_core::{InsertOutcome, MappingReader, MappingStore, StorageError};
pub use memory::InMemoryStore;
pub use mysql::MySqlStore;
