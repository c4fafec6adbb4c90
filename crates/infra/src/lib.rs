//! Storage infrastructure for the notekeep API.
//!
//! The store boundary lives here: async per-resource store traits, an
//! in-memory implementation for dev/test, and the Postgres implementation
//! used in production.

pub mod store;

pub use store::{FolderStore, MemoryStore, NoteStore, PostgresStore, StoreError};
