//! Note entity and its write payloads.

use chrono::{DateTime, Utc};

use crate::id::{FolderId, NoteId};

/// A note as stored.
///
/// `folder_id` is a plain reference; nothing at this layer checks that the
/// folder exists. `modified` is maintained by the store on every write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub name: String,
    pub content: String,
    pub folder_id: FolderId,
    pub modified: DateTime<Utc>,
}

/// Fields required to insert a note. The store assigns id and modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub name: String,
    pub content: String,
    pub folder_id: FolderId,
}

/// Partial update applied to a note; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteChanges {
    pub name: Option<String>,
    pub content: Option<String>,
    pub folder_id: Option<FolderId>,
}

impl NoteChanges {
    /// True when the change set would not touch any column.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.content.is_none() && self.folder_id.is_none()
    }
}
