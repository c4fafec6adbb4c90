use std::sync::Arc;

use sqlx::PgPool;

use notekeep_core::{
    Folder, FolderChanges, FolderId, NewFolder, NewNote, Note, NoteChanges, NoteId,
};
use notekeep_infra::{FolderStore, MemoryStore, NoteStore, PostgresStore, StoreError};

/// Store wiring selected at startup.
///
/// Handlers receive this through `Extension<Arc<AppServices>>`; it is the
/// only shared state in the process. The in-memory variant doubles as the
/// test store.
pub enum AppServices {
    InMemory { store: Arc<MemoryStore> },
    Persistent { store: Arc<PostgresStore> },
}

/// Build services from the environment: in-memory by default, Postgres when
/// `USE_PERSISTENT_STORE=true`.
pub async fn build_services() -> AppServices {
    let use_persistent = std::env::var("USE_PERSISTENT_STORE")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or(false);

    if use_persistent {
        let database_url = std::env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set when USE_PERSISTENT_STORE=true");
        let pool = PgPool::connect(&database_url)
            .await
            .expect("failed to connect to Postgres");
        return AppServices::Persistent {
            store: Arc::new(PostgresStore::new(pool)),
        };
    }

    AppServices::InMemory {
        store: Arc::new(MemoryStore::new()),
    }
}

impl AppServices {
    /// Fresh in-memory services (dev/test).
    pub fn in_memory() -> Self {
        AppServices::InMemory {
            store: Arc::new(MemoryStore::new()),
        }
    }

    pub async fn folders_list(&self) -> Result<Vec<Folder>, StoreError> {
        match self {
            AppServices::InMemory { store } => store.list_folders().await,
            AppServices::Persistent { store } => store.list_folders().await,
        }
    }

    pub async fn folders_insert(&self, new: NewFolder) -> Result<Folder, StoreError> {
        match self {
            AppServices::InMemory { store } => store.insert_folder(new).await,
            AppServices::Persistent { store } => store.insert_folder(new).await,
        }
    }

    pub async fn folders_get(&self, id: FolderId) -> Result<Option<Folder>, StoreError> {
        match self {
            AppServices::InMemory { store } => store.get_folder(id).await,
            AppServices::Persistent { store } => store.get_folder(id).await,
        }
    }

    pub async fn folders_delete(&self, id: FolderId) -> Result<(), StoreError> {
        match self {
            AppServices::InMemory { store } => store.delete_folder(id).await,
            AppServices::Persistent { store } => store.delete_folder(id).await,
        }
    }

    pub async fn folders_update(
        &self,
        id: FolderId,
        changes: FolderChanges,
    ) -> Result<(), StoreError> {
        match self {
            AppServices::InMemory { store } => store.update_folder(id, changes).await,
            AppServices::Persistent { store } => store.update_folder(id, changes).await,
        }
    }

    pub async fn notes_list(&self) -> Result<Vec<Note>, StoreError> {
        match self {
            AppServices::InMemory { store } => store.list_notes().await,
            AppServices::Persistent { store } => store.list_notes().await,
        }
    }

    pub async fn notes_insert(&self, new: NewNote) -> Result<Note, StoreError> {
        match self {
            AppServices::InMemory { store } => store.insert_note(new).await,
            AppServices::Persistent { store } => store.insert_note(new).await,
        }
    }

    pub async fn notes_get(&self, id: NoteId) -> Result<Option<Note>, StoreError> {
        match self {
            AppServices::InMemory { store } => store.get_note(id).await,
            AppServices::Persistent { store } => store.get_note(id).await,
        }
    }

    pub async fn notes_delete(&self, id: NoteId) -> Result<(), StoreError> {
        match self {
            AppServices::InMemory { store } => store.delete_note(id).await,
            AppServices::Persistent { store } => store.delete_note(id).await,
        }
    }

    pub async fn notes_update(&self, id: NoteId, changes: NoteChanges) -> Result<(), StoreError> {
        match self {
            AppServices::InMemory { store } => store.update_note(id, changes).await,
            AppServices::Persistent { store } => store.update_note(id, changes).await,
        }
    }
}
