//! Integration tests for the paginated text export.

mod common;

use common::*;
use sitelog::report::{self, LINE_WIDTH, PAGE_LINES};

#[tokio::test]
async fn test_report_contains_metadata_and_notes() -> anyhow::Result<()> {
    let (store, project) = store_with_project("Kontorsbyggnad A").await;
    store.add_note(&project.id, make_photo_note("Foto av fläkt")).await?;
    store
        .add_note(
            &project.id,
            make_video_note("Fläktljud", "Fläkten låter ovanligt högt."),
        )
        .await?;
    let projects = store.load_all().await?;

    let rendered = report::render_report(&projects[0]);

    assert!(rendered.starts_with("Inspektionsrapport"));
    assert!(rendered.contains("Projekt: Kontorsbyggnad A"));
    assert!(rendered.contains("Plats: Storgatan 1, 11122 Stockholm, Sverige"));
    assert!(rendered.contains("Anteckningar:"));
    assert!(rendered.contains("1. [PHOTO] Foto av fläkt"));
    // Transcription wins over the short label.
    assert!(rendered.contains("2. [VIDEO] Fläkten låter ovanligt högt."));
    assert!(!rendered.contains("2. [VIDEO] Fläktljud"));

    Ok(())
}

#[tokio::test]
async fn test_report_includes_ai_summary_when_present() -> anyhow::Result<()> {
    let mut project = make_project("Med sammanfattning");
    project.ai_summary = Some("Övergripande status: Godkänd".to_string());

    let rendered = report::render_report(&project);
    assert!(rendered.contains("AI-Sammanfattning:"));
    assert!(rendered.contains("Övergripande status: Godkänd"));

    let without = make_project("Utan sammanfattning");
    assert!(!report::render_report(&without).contains("AI-Sammanfattning:"));

    Ok(())
}

#[tokio::test]
async fn test_report_wraps_and_paginates() -> anyhow::Result<()> {
    let mut project = make_project("Lång rapport");
    let long_line = "ord ".repeat(200);
    project.ai_summary = Some(
        (0..PAGE_LINES * 2)
            .map(|i| format!("rad {i}: {long_line}"))
            .collect::<Vec<_>>()
            .join("\n"),
    );

    let rendered = report::render_report(&project);

    assert!(rendered.contains('\u{0c}'), "long report should paginate");
    for page in rendered.split('\u{0c}') {
        let lines: Vec<&str> = page.lines().collect();
        assert!(lines.len() <= PAGE_LINES);
        for line in lines {
            assert!(line.chars().count() <= LINE_WIDTH);
        }
    }

    Ok(())
}

#[tokio::test]
async fn test_export_writes_named_file() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let project = make_project("Testprojekt");

    let path = report::export_project(&project, dir.path()).await?;

    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("Testprojekt_inspection_report.txt")
    );
    let contents = tokio::fs::read_to_string(&path).await?;
    assert!(contents.contains("Projekt: Testprojekt"));

    Ok(())
}
