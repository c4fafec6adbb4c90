//! Postgres-backed table store.
//!
//! Works against a pre-existing schema (migrations are managed outside this
//! service):
//!
//! ```sql
//! CREATE TABLE folders (
//!     id   uuid PRIMARY KEY DEFAULT gen_random_uuid(),
//!     name text NOT NULL
//! );
//! CREATE TABLE notes (
//!     id        uuid PRIMARY KEY DEFAULT gen_random_uuid(),
//!     name      text NOT NULL,
//!     content   text NOT NULL,
//!     folder_id uuid NOT NULL REFERENCES folders (id),
//!     modified  timestamptz NOT NULL DEFAULT now()
//! );
//! ```
//!
//! Ids and `modified` are assigned by the database; inserts read them back
//! with `RETURNING`. Constraint violations (e.g. a note pointing at a
//! missing folder) come back as `StoreError::Database` for the caller's
//! generic error path.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use notekeep_core::{
    Folder, FolderChanges, FolderId, NewFolder, NewNote, Note, NoteChanges, NoteId,
};

use super::{FolderStore, NoteStore, StoreResult};

/// Table store over a shared connection pool.
///
/// `PgPool` is internally reference-counted and thread-safe; the pool is
/// the process-wide store handle and this struct is cheap to clone.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: Arc<PgPool>,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }
}

fn folder_from_row(row: &PgRow) -> Result<Folder, sqlx::Error> {
    Ok(Folder {
        id: FolderId::from_uuid(row.try_get("id")?),
        name: row.try_get("name")?,
    })
}

fn note_from_row(row: &PgRow) -> Result<Note, sqlx::Error> {
    Ok(Note {
        id: NoteId::from_uuid(row.try_get("id")?),
        name: row.try_get("name")?,
        content: row.try_get("content")?,
        folder_id: FolderId::from_uuid(row.try_get("folder_id")?),
        modified: row.try_get("modified")?,
    })
}

#[async_trait]
impl FolderStore for PostgresStore {
    async fn list_folders(&self) -> StoreResult<Vec<Folder>> {
        let rows = sqlx::query("SELECT id, name FROM folders ORDER BY id")
            .fetch_all(&*self.pool)
            .await?;

        let mut folders = Vec::with_capacity(rows.len());
        for row in &rows {
            folders.push(folder_from_row(row)?);
        }
        Ok(folders)
    }

    async fn insert_folder(&self, new: NewFolder) -> StoreResult<Folder> {
        let row = sqlx::query("INSERT INTO folders (name) VALUES ($1) RETURNING id, name")
            .bind(&new.name)
            .fetch_one(&*self.pool)
            .await?;
        Ok(folder_from_row(&row)?)
    }

    async fn get_folder(&self, id: FolderId) -> StoreResult<Option<Folder>> {
        let row = sqlx::query("SELECT id, name FROM folders WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&*self.pool)
            .await?;
        row.as_ref().map(folder_from_row).transpose().map_err(Into::into)
    }

    async fn delete_folder(&self, id: FolderId) -> StoreResult<()> {
        sqlx::query("DELETE FROM folders WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&*self.pool)
            .await?;
        Ok(())
    }

    async fn update_folder(&self, id: FolderId, changes: FolderChanges) -> StoreResult<()> {
        sqlx::query("UPDATE folders SET name = COALESCE($2, name) WHERE id = $1")
            .bind(id.as_uuid())
            .bind(changes.name)
            .execute(&*self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl NoteStore for PostgresStore {
    async fn list_notes(&self) -> StoreResult<Vec<Note>> {
        let rows = sqlx::query(
            "SELECT id, name, content, folder_id, modified FROM notes ORDER BY id",
        )
        .fetch_all(&*self.pool)
        .await?;

        let mut notes = Vec::with_capacity(rows.len());
        for row in &rows {
            notes.push(note_from_row(row)?);
        }
        Ok(notes)
    }

    async fn insert_note(&self, new: NewNote) -> StoreResult<Note> {
        let row = sqlx::query(
            "INSERT INTO notes (name, content, folder_id)
             VALUES ($1, $2, $3)
             RETURNING id, name, content, folder_id, modified",
        )
        .bind(&new.name)
        .bind(&new.content)
        .bind(new.folder_id.as_uuid())
        .fetch_one(&*self.pool)
        .await?;
        Ok(note_from_row(&row)?)
    }

    async fn get_note(&self, id: NoteId) -> StoreResult<Option<Note>> {
        let row = sqlx::query(
            "SELECT id, name, content, folder_id, modified FROM notes WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&*self.pool)
        .await?;
        row.as_ref().map(note_from_row).transpose().map_err(Into::into)
    }

    async fn delete_note(&self, id: NoteId) -> StoreResult<()> {
        sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&*self.pool)
            .await?;
        Ok(())
    }

    async fn update_note(&self, id: NoteId, changes: NoteChanges) -> StoreResult<()> {
        sqlx::query(
            "UPDATE notes
             SET name = COALESCE($2, name),
                 content = COALESCE($3, content),
                 folder_id = COALESCE($4, folder_id),
                 modified = now()
             WHERE id = $1",
        )
        .bind(id.as_uuid())
        .bind(changes.name)
        .bind(changes.content)
        .bind(changes.folder_id.map(Uuid::from))
        .execute(&*self.pool)
        .await?;
        Ok(())
    }
}
