use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use notekeep_core::{Folder, FolderChanges, FolderId, NewFolder};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_folders).post(create_folder))
        .route(
            "/:id",
            get(get_folder).patch(update_folder).delete(delete_folder),
        )
}

const NOT_FOUND: &str = "Folder doesn't exist";

/// Existence probe shared by the id-scoped handlers: resolves the path id
/// to the folder, or short-circuits with the resource's 404. An id that is
/// not a UUID cannot name a folder and takes the same path.
async fn lookup_folder(
    services: &AppServices,
    id: &str,
) -> Result<Folder, axum::response::Response> {
    let Ok(folder_id) = id.parse::<FolderId>() else {
        return Err(errors::json_error(StatusCode::NOT_FOUND, NOT_FOUND));
    };
    match services.folders_get(folder_id).await {
        Ok(Some(folder)) => Ok(folder),
        Ok(None) => Err(errors::json_error(StatusCode::NOT_FOUND, NOT_FOUND)),
        Err(e) => Err(errors::store_error_to_response(e)),
    }
}

pub async fn list_folders(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.folders_list().await {
        Ok(folders) => {
            let items = folders
                .into_iter()
                .map(dto::folder_payload)
                .collect::<Vec<_>>();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn create_folder(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateFolderRequest>,
) -> axum::response::Response {
    let name = match dto::require_field(body.name.as_deref(), "name") {
        Ok(v) => v.to_string(),
        Err(resp) => return resp,
    };

    match services.folders_insert(NewFolder { name }).await {
        Ok(folder) => {
            let location = format!("/folders/{}", folder.id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(dto::folder_payload(folder)),
            )
                .into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_folder(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match lookup_folder(&services, &id).await {
        Ok(folder) => (StatusCode::OK, Json(dto::folder_payload(folder))).into_response(),
        Err(resp) => resp,
    }
}

pub async fn delete_folder(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let folder = match lookup_folder(&services, &id).await {
        Ok(f) => f,
        Err(resp) => return resp,
    };

    match services.folders_delete(folder.id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn update_folder(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateFolderRequest>,
) -> axum::response::Response {
    let folder = match lookup_folder(&services, &id).await {
        Ok(f) => f,
        Err(resp) => return resp,
    };

    let Some(name) = dto::supplied(body.name.as_deref()) else {
        return errors::json_error(StatusCode::BAD_REQUEST, "Request body must contain 'name'");
    };

    match services
        .folders_update(folder.id, FolderChanges { name: Some(name) })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
