use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use notekeep_core::{FolderId, NewNote, Note, NoteChanges, NoteId};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_notes).post(create_note))
        .route(
            "/:id",
            get(get_note).patch(update_note).delete(delete_note),
        )
}

const NOT_FOUND: &str = "Note doesn't exist";
const INVALID_FOLDER_REF: &str = "Invalid 'folderId' in request body";

/// Existence probe shared by the id-scoped handlers.
async fn lookup_note(services: &AppServices, id: &str) -> Result<Note, axum::response::Response> {
    let Ok(note_id) = id.parse::<NoteId>() else {
        return Err(errors::json_error(StatusCode::NOT_FOUND, NOT_FOUND));
    };
    match services.notes_get(note_id).await {
        Ok(Some(note)) => Ok(note),
        Ok(None) => Err(errors::json_error(StatusCode::NOT_FOUND, NOT_FOUND)),
        Err(e) => Err(errors::store_error_to_response(e)),
    }
}

pub async fn list_notes(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.notes_list().await {
        Ok(notes) => {
            let items = notes.into_iter().map(dto::note_payload).collect::<Vec<_>>();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn create_note(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateNoteRequest>,
) -> axum::response::Response {
    // Required fields, checked in declaration order; the first failure wins.
    let name = match dto::require_field(body.name.as_deref(), "name") {
        Ok(v) => v.to_string(),
        Err(resp) => return resp,
    };
    let content = match dto::require_field(body.content.as_deref(), "content") {
        Ok(v) => v.to_string(),
        Err(resp) => return resp,
    };
    let folder_raw = match dto::require_field(body.folder_id.as_deref(), "folderId") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    // The reference is only parsed, not resolved: whether the folder exists
    // is the store's concern.
    let folder_id = match folder_raw.parse::<FolderId>() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, INVALID_FOLDER_REF),
    };

    match services
        .notes_insert(NewNote {
            name,
            content,
            folder_id,
        })
        .await
    {
        Ok(note) => {
            let location = format!("/notes/{}", note.id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(dto::note_payload(note)),
            )
                .into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_note(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match lookup_note(&services, &id).await {
        Ok(note) => (StatusCode::OK, Json(dto::note_payload(note))).into_response(),
        Err(resp) => resp,
    }
}

pub async fn delete_note(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let note = match lookup_note(&services, &id).await {
        Ok(n) => n,
        Err(resp) => return resp,
    };

    match services.notes_delete(note.id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn update_note(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateNoteRequest>,
) -> axum::response::Response {
    let note = match lookup_note(&services, &id).await {
        Ok(n) => n,
        Err(resp) => return resp,
    };

    let folder_id = match dto::supplied(body.folder_id.as_deref()) {
        Some(raw) => match raw.parse::<FolderId>() {
            Ok(v) => Some(v),
            Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, INVALID_FOLDER_REF),
        },
        None => None,
    };
    let changes = NoteChanges {
        name: dto::supplied(body.name.as_deref()),
        content: dto::supplied(body.content.as_deref()),
        folder_id,
    };

    if changes.is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "Request body must contain either 'name', 'content', or 'folderId'",
        );
    }

    match services.notes_update(note.id, changes).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
