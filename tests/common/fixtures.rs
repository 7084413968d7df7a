use sitelog::core::store::{
    FileBackend, MemoryBackend, NewNote, NoteKind, Project, ProjectRepository, ProjectStore,
};
use time::OffsetDateTime;
use time::macros::datetime;

/// A store over a volatile in-memory slot.
pub fn memory_store() -> ProjectStore<MemoryBackend> {
    ProjectStore::new(MemoryBackend::new())
}

/// A store over a JSON file inside the given temp directory.
pub fn file_store(dir: &tempfile::TempDir) -> ProjectStore<FileBackend> {
    ProjectStore::new(FileBackend::new(dir.path().join("projects.json")))
}

/// A fresh project with test metadata (location already has three segments,
/// so shortening leaves it alone).
pub fn make_project(name: &str) -> Project {
    Project::new(
        name,
        "Storgatan 1, 11122 Stockholm, Sverige",
        datetime!(2024-01-01 0:00 UTC),
        "X",
    )
}

pub fn make_text_note(content: &str) -> NewNote {
    NewNote::text(content)
}

pub fn make_photo_note(content: &str) -> NewNote {
    NewNote {
        kind: NoteKind::Photo,
        content: content.to_string(),
        transcription: None,
        timestamp: OffsetDateTime::now_utc(),
        file_url: Some("https://example.com/media/photo_001.jpg".to_string()),
        file_name: Some("photo_001.jpg".to_string()),
        file_size: Some(2_456_789),
    }
}

pub fn make_video_note(content: &str, transcription: &str) -> NewNote {
    NewNote {
        kind: NoteKind::Video,
        content: content.to_string(),
        transcription: Some(transcription.to_string()),
        timestamp: OffsetDateTime::now_utc(),
        file_url: Some("https://example.com/media/video_001.mp4".to_string()),
        file_name: Some("video_001.mp4".to_string()),
        file_size: Some(8_934_567),
    }
}

/// Memory store seeded with one saved project; returns the project as stored.
pub async fn store_with_project(name: &str) -> (ProjectStore<MemoryBackend>, Project) {
    let store = memory_store();
    let project = make_project(name);
    store
        .save_all(std::slice::from_ref(&project))
        .await
        .expect("save should succeed");
    (store, project)
}
