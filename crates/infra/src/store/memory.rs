//! In-memory store for tests and database-less dev runs.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use notekeep_core::{
    Folder, FolderChanges, FolderId, NewFolder, NewNote, Note, NoteChanges, NoteId,
};

use super::{FolderStore, NoteStore, StoreError, StoreResult};

/// In-memory table store. Rows keep insertion order, which is the storage
/// order the list operations expose.
#[derive(Debug, Default)]
pub struct MemoryStore {
    folders: RwLock<Vec<Folder>>,
    notes: RwLock<Vec<Note>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FolderStore for MemoryStore {
    async fn list_folders(&self) -> StoreResult<Vec<Folder>> {
        let rows = self.folders.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(rows.clone())
    }

    async fn insert_folder(&self, new: NewFolder) -> StoreResult<Folder> {
        let folder = Folder {
            id: FolderId::new(),
            name: new.name,
        };
        let mut rows = self.folders.write().map_err(|_| StoreError::LockPoisoned)?;
        rows.push(folder.clone());
        Ok(folder)
    }

    async fn get_folder(&self, id: FolderId) -> StoreResult<Option<Folder>> {
        let rows = self.folders.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(rows.iter().find(|f| f.id == id).cloned())
    }

    async fn delete_folder(&self, id: FolderId) -> StoreResult<()> {
        let mut rows = self.folders.write().map_err(|_| StoreError::LockPoisoned)?;
        if let Some(pos) = rows.iter().position(|f| f.id == id) {
            rows.remove(pos);
        }
        Ok(())
    }

    async fn update_folder(&self, id: FolderId, changes: FolderChanges) -> StoreResult<()> {
        let mut rows = self.folders.write().map_err(|_| StoreError::LockPoisoned)?;
        if let Some(folder) = rows.iter_mut().find(|f| f.id == id) {
            if let Some(name) = changes.name {
                folder.name = name;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn list_notes(&self) -> StoreResult<Vec<Note>> {
        let rows = self.notes.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(rows.clone())
    }

    async fn insert_note(&self, new: NewNote) -> StoreResult<Note> {
        let note = Note {
            id: NoteId::new(),
            name: new.name,
            content: new.content,
            folder_id: new.folder_id,
            modified: Utc::now(),
        };
        let mut rows = self.notes.write().map_err(|_| StoreError::LockPoisoned)?;
        rows.push(note.clone());
        Ok(note)
    }

    async fn get_note(&self, id: NoteId) -> StoreResult<Option<Note>> {
        let rows = self.notes.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(rows.iter().find(|n| n.id == id).cloned())
    }

    async fn delete_note(&self, id: NoteId) -> StoreResult<()> {
        let mut rows = self.notes.write().map_err(|_| StoreError::LockPoisoned)?;
        if let Some(pos) = rows.iter().position(|n| n.id == id) {
            rows.remove(pos);
        }
        Ok(())
    }

    async fn update_note(&self, id: NoteId, changes: NoteChanges) -> StoreResult<()> {
        let mut rows = self.notes.write().map_err(|_| StoreError::LockPoisoned)?;
        if let Some(note) = rows.iter_mut().find(|n| n.id == id) {
            if let Some(name) = changes.name {
                note.name = name;
            }
            if let Some(content) = changes.content {
                note.content = content;
            }
            if let Some(folder_id) = changes.folder_id {
                note.folder_id = folder_id;
            }
            note.modified = Utc::now();
        }
        Ok(())
    }
}
