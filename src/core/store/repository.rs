use thiserror::Error;

use crate::core::store::model::{NewNote, Note, Project};

#[derive(Debug, Error)]
pub enum StoreError {
    /// The given project ID matched nothing in the collection.
    #[error("no project with id '{id}'")]
    ProjectNotFound { id: String },

    /// The project already holds the maximum number of notes.
    #[error("project '{id}' already has the maximum of {max} notes")]
    NoteLimitReached { id: String, max: usize },

    /// The storage backend failed to read or write the collection.
    #[error("storage backend error: {0}")]
    Backend(#[source] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Result of appending a note: the note as stored (with its assigned ID)
/// and the full collection after the write.
#[derive(Debug, Clone)]
pub struct NoteAdded {
    pub note: Note,
    pub projects: Vec<Project>,
}

/// Result of a delete: whether anything matched, and the collection after
/// the write. Deleting an unknown ID is still a successful (idempotent)
/// operation; `removed` makes the no-op case visible to callers.
#[derive(Debug, Clone)]
pub struct Deleted {
    pub removed: bool,
    pub projects: Vec<Project>,
}

/// Durable CRUD over the project collection. The persisted form is the sole
/// source of truth; every returned collection is a read-through copy.
pub trait ProjectRepository {
    /// Load the whole collection. Missing or corrupt persisted data is
    /// treated as "no data yet" and yields an empty collection.
    fn load_all(&self) -> impl Future<Output = StoreResult<Vec<Project>>>;

    /// Overwrite the whole persisted collection. Last writer wins.
    fn save_all(&self, projects: &[Project]) -> impl Future<Output = StoreResult<()>>;

    /// Assign an ID to the note, append it to the project, bump the
    /// project's `updated_at` and persist. Unknown project IDs and full
    /// projects are explicit errors; persisted state is left untouched.
    fn add_note(
        &self,
        project_id: &str,
        note: NewNote,
    ) -> impl Future<Output = StoreResult<NoteAdded>>;

    /// Remove the project with the given ID, persist the filtered
    /// collection and return it.
    fn delete_project(&self, project_id: &str) -> impl Future<Output = StoreResult<Deleted>>;
}
