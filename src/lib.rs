pub mod api;
pub mod config;
pub mod core;
pub mod geocode;
pub mod logging;
pub mod report;

pub use api::{ApiClient, ChatResponse, HealthStatus, UploadResponse};
pub use config::Config;
pub use core::store::{
    Deleted, FileBackend, MemoryBackend, NewNote, Note, NoteAdded, NoteKind, Project,
    ProjectRepository, ProjectStore, StorageBackend, StoreError,
};
pub use geocode::{AddressSuggestion, GeocodeClient};
pub use logging::{Verbosity, init_logging};
