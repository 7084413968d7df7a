#![allow(dead_code)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from sitelog for tests
pub use sitelog::core::store::{
    Deleted, FileBackend, MAX_NOTES_PER_PROJECT, MemoryBackend, NewNote, Note, NoteAdded,
    NoteKind, Project, ProjectRepository, ProjectStore, StoreError, shorten_address,
};
