//! Table store boundary.
//!
//! One trait per resource, one method per router operation, each method a
//! single store operation. Absence is `Ok(None)` — never an error; delete
//! and update do not report whether a row existed. Anything the backend
//! raises (connectivity, constraint violations) surfaces as `StoreError`
//! and is the caller's problem.

use async_trait::async_trait;
use thiserror::Error;

use notekeep_core::{
    Folder, FolderChanges, FolderId, NewFolder, NewNote, Note, NoteChanges, NoteId,
};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

/// Error raised by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A shared in-memory lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    LockPoisoned,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Folder persistence operations.
#[async_trait]
pub trait FolderStore: Send + Sync {
    /// All folders in storage order.
    async fn list_folders(&self) -> StoreResult<Vec<Folder>>;
    /// Insert one folder; the store assigns the id.
    async fn insert_folder(&self, new: NewFolder) -> StoreResult<Folder>;
    /// One folder by id, or `None`.
    async fn get_folder(&self, id: FolderId) -> StoreResult<Option<Folder>>;
    /// Delete at most one folder.
    async fn delete_folder(&self, id: FolderId) -> StoreResult<()>;
    /// Apply the supplied fields to at most one folder.
    async fn update_folder(&self, id: FolderId, changes: FolderChanges) -> StoreResult<()>;
}

/// Note persistence operations.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// All notes in storage order.
    async fn list_notes(&self) -> StoreResult<Vec<Note>>;
    /// Insert one note; the store assigns id and modified.
    async fn insert_note(&self, new: NewNote) -> StoreResult<Note>;
    /// One note by id, or `None`.
    async fn get_note(&self, id: NoteId) -> StoreResult<Option<Note>>;
    /// Delete at most one note.
    async fn delete_note(&self, id: NoteId) -> StoreResult<()>;
    /// Apply the supplied fields to at most one note, refreshing modified.
    async fn update_note(&self, id: NoteId, changes: NoteChanges) -> StoreResult<()>;
}
