//! Integration tests for the file-backed store.
//!
//! Tests cover:
//! - Round-tripping the collection through the JSON file, dates included
//! - Missing and corrupt payloads degrading to an empty collection
//! - Whole-collection overwrite semantics (last writer wins)
//! - The persisted JSON keeping the original storage layout

mod common;

use common::*;

#[tokio::test]
async fn test_missing_file_is_empty_collection() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let store = file_store(&dir);

    assert!(store.load_all().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_round_trip_preserves_collection() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let store = file_store(&dir);

    let mut project = make_project("Round trip");
    project.ai_summary = Some("Sammanfattning.".to_string());
    let other = make_project("Other");
    store.save_all(&[project.clone(), other.clone()]).await?;
    store
        .add_note(&project.id, make_video_note("fläktljud", "Fläkten låter högt."))
        .await?;
    let saved = store.load_all().await?;

    // A second store over the same file sees exactly the same collection.
    let reopened = file_store(&dir);
    let loaded = reopened.load_all().await?;

    assert_eq!(saved, loaded);
    assert_eq!(loaded[0].created_at, project.created_at);
    assert_eq!(loaded[0].date, project.date);
    assert_eq!(loaded[0].ai_summary.as_deref(), Some("Sammanfattning."));
    assert_eq!(
        loaded[0].notes[0].transcription.as_deref(),
        Some("Fläkten låter högt.")
    );

    Ok(())
}

#[tokio::test]
async fn test_corrupt_payload_degrades_to_empty() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("projects.json");
    tokio::fs::write(&path, "{ this is not json ]").await?;

    let store = ProjectStore::new(FileBackend::new(&path));
    assert!(store.load_all().await?.is_empty());

    // The store stays usable: the next save replaces the corrupt payload.
    let project = make_project("Recovered");
    store.save_all(std::slice::from_ref(&project)).await?;
    assert_eq!(store.load_all().await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_save_all_overwrites_whole_collection() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let store = file_store(&dir);

    store
        .save_all(&[make_project("First"), make_project("Second")])
        .await?;
    let replacement = make_project("Only one");
    store.save_all(std::slice::from_ref(&replacement)).await?;

    let loaded = store.load_all().await?;
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "Only one");

    Ok(())
}

#[tokio::test]
async fn test_persisted_json_keeps_original_layout() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let store = file_store(&dir);

    let project = make_project("Layout");
    store.save_all(std::slice::from_ref(&project)).await?;
    store.add_note(&project.id, make_photo_note("foto")).await?;

    let raw = tokio::fs::read_to_string(dir.path().join("projects.json")).await?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;

    let stored = &value.as_array().expect("top level is an array")[0];
    assert!(stored.get("createdAt").is_some());
    assert!(stored.get("updatedAt").is_some());
    // Unset optionals are omitted, not null.
    assert!(stored.get("aiSummary").is_none());
    // Dates are RFC 3339 strings.
    let created_at = stored["createdAt"].as_str().expect("createdAt is a string");
    assert!(created_at.contains('T'));

    let note = &stored["notes"][0];
    assert_eq!(note["type"], "photo");
    assert_eq!(note["fileUrl"], "https://example.com/media/photo_001.jpg");
    assert_eq!(note["fileSize"], 2_456_789);
    assert!(note.get("transcription").is_none());

    Ok(())
}

#[tokio::test]
async fn test_memory_and_file_backends_agree() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let file = file_store(&dir);
    let memory = memory_store();

    let project = make_project("Parity");
    file.save_all(std::slice::from_ref(&project)).await?;
    memory.save_all(std::slice::from_ref(&project)).await?;
    file.add_note(&project.id, make_text_note("same")).await?;
    memory.add_note(&project.id, make_text_note("same")).await?;

    let from_file = file.load_all().await?;
    let from_memory = memory.load_all().await?;
    assert_eq!(from_file[0].notes.len(), from_memory[0].notes.len());
    assert_eq!(from_file[0].name, from_memory[0].name);

    Ok(())
}
