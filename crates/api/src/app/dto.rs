use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use notekeep_core::{Folder, FolderId, Note, NoteId};

use crate::app::errors;
use crate::app::sanitize::sanitize;

// -------------------------
// Request DTOs
// -------------------------
//
// Required fields are `Option` on purpose: presence is checked by
// `require_field` so a missing field produces the contract's message
// instead of a serde rejection. Unknown fields are ignored by default and
// never reach the store.

#[derive(Debug, Deserialize)]
pub struct CreateFolderRequest {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateFolderRequest {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    pub name: Option<String>,
    pub content: Option<String>,
    pub folder_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteRequest {
    pub name: Option<String>,
    pub content: Option<String>,
    pub folder_id: Option<String>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct FolderPayload {
    pub id: FolderId,
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePayload {
    pub id: NoteId,
    pub name: String,
    pub content: String,
    pub folder_id: FolderId,
    pub modified: DateTime<Utc>,
}

/// Wire view of a folder. Every user-supplied string passes through the
/// sanitizer on the way out.
pub fn folder_payload(folder: Folder) -> FolderPayload {
    FolderPayload {
        id: folder.id,
        name: sanitize(&folder.name),
    }
}

/// Wire view of a note; `name` and `content` are sanitized, generated
/// fields pass through untouched.
pub fn note_payload(note: Note) -> NotePayload {
    NotePayload {
        id: note.id,
        name: sanitize(&note.name),
        content: sanitize(&note.content),
        folder_id: note.folder_id,
        modified: note.modified,
    }
}

// -------------------------
// Field checks
// -------------------------

/// Presence + non-blank check for a required create field.
///
/// The 400 names exactly the failing field; callers check fields in
/// declaration order so the first failure wins and nothing is written.
pub fn require_field<'a>(
    value: Option<&'a str>,
    field: &str,
) -> Result<&'a str, axum::response::Response> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(errors::json_error(
            StatusCode::BAD_REQUEST,
            format!("Missing '{field}' in request body"),
        )),
    }
}

/// A PATCH field counts only when supplied and non-blank after trimming.
pub fn supplied(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}
