mod backend;
mod model;
mod repository;
mod util;

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::warn;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use model::{MAX_NOTES_PER_PROJECT, NewNote, Note, NoteKind, Project};
pub use repository::{Deleted, NoteAdded, ProjectRepository, StoreError, StoreResult};
pub use util::{generate_id, shorten_address};

use time::OffsetDateTime;

/// The project store: one serialized JSON array of projects behind an
/// injected backend. Every operation runs its whole read-modify-write cycle
/// under the state lock, so each call is atomic with respect to the others.
#[derive(Debug)]
pub struct ProjectStore<B: StorageBackend> {
    state: Arc<StoreState<B>>,
}

impl<B: StorageBackend> Clone for ProjectStore<B> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

#[derive(Debug)]
struct StoreState<B> {
    backend: RwLock<B>,
}

impl<B: StorageBackend> ProjectStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            state: Arc::new(StoreState {
                backend: RwLock::new(backend),
            }),
        }
    }
}

/// Deserialize the persisted collection. A corrupt payload is treated as
/// "no data yet" and never surfaced to the caller.
async fn read_collection<B: StorageBackend>(backend: &B) -> StoreResult<Vec<Project>> {
    let Some(payload) = backend.read().await.map_err(StoreError::Backend)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&payload) {
        Ok(projects) => Ok(projects),
        Err(e) => {
            warn!(error = %e, "persisted project data is corrupt, starting empty");
            Ok(Vec::new())
        }
    }
}

async fn write_collection<B: StorageBackend>(
    backend: &B,
    projects: &[Project],
) -> StoreResult<()> {
    let payload = serde_json::to_string(projects)
        .map_err(|e| StoreError::Backend(anyhow::Error::new(e)))?;
    backend.write(&payload).await.map_err(StoreError::Backend)
}

impl<B: StorageBackend> ProjectRepository for ProjectStore<B> {
    async fn load_all(&self) -> StoreResult<Vec<Project>> {
        let backend = self.state.backend.read().await;
        read_collection(&*backend).await
    }

    async fn save_all(&self, projects: &[Project]) -> StoreResult<()> {
        let backend = self.state.backend.write().await;
        write_collection(&*backend, projects).await
    }

    async fn add_note(&self, project_id: &str, note: NewNote) -> StoreResult<NoteAdded> {
        // Write lock for the whole read-modify-write cycle.
        let backend = self.state.backend.write().await;
        let mut projects = read_collection(&*backend).await?;
        let Some(project) = projects.iter_mut().find(|p| p.id == project_id) else {
            return Err(StoreError::ProjectNotFound {
                id: project_id.to_string(),
            });
        };
        if project.is_full() {
            return Err(StoreError::NoteLimitReached {
                id: project_id.to_string(),
                max: MAX_NOTES_PER_PROJECT,
            });
        }
        let note = note.into_note(util::generate_id());
        project.notes.push(note.clone());
        project.updated_at = OffsetDateTime::now_utc().max(project.created_at);
        write_collection(&*backend, &projects).await?;
        Ok(NoteAdded { note, projects })
    }

    async fn delete_project(&self, project_id: &str) -> StoreResult<Deleted> {
        let backend = self.state.backend.write().await;
        let mut projects = read_collection(&*backend).await?;
        let before = projects.len();
        projects.retain(|p| p.id != project_id);
        write_collection(&*backend, &projects).await?;
        Ok(Deleted {
            removed: projects.len() != before,
            projects,
        })
    }
}
