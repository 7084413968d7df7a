//! One-time sample-data bootstrap. Deliberately not a store responsibility:
//! callers opt in (the `seed` subcommand), and a non-empty collection is
//! never touched.

use time::macros::datetime;
use tracing::info;

use crate::core::store::{
    Note, NoteKind, Project, ProjectRepository, ProjectStore, StorageBackend, StoreResult,
};

/// Populate the store with two sample inspections if, and only if, the
/// collection is empty. Returns the collection either way.
pub async fn populate_if_empty<B: StorageBackend>(
    store: &ProjectStore<B>,
) -> StoreResult<Vec<Project>> {
    let projects = store.load_all().await?;
    if !projects.is_empty() {
        return Ok(projects);
    }
    let seeded = sample_projects();
    store.save_all(&seeded).await?;
    info!(projects = seeded.len(), "seeded empty store with sample data");
    Ok(seeded)
}

fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: "mock-project-1".to_string(),
            name: "Kontorsbyggnad A - Ventilationsinspektion".to_string(),
            location: "Falköpingsvägen 8, Hammarbyhöjden".to_string(),
            date: datetime!(2024-12-15 0:00 UTC),
            inspector: "Anna Andersson".to_string(),
            created_at: datetime!(2024-12-15 08:30 UTC),
            updated_at: datetime!(2024-12-15 14:45 UTC),
            ai_summary: Some(
                "**INSPEKTIONSSAMMANFATTNING**\n\n\
                 **Övergripande status:** Godkänd med mindre åtgärder\n\n\
                 **Identifierade problem:**\n\
                 • Ventilationsfläkt i källaren (Fläkt B-02) visar onormala vibrationer\n\
                 • Filter i trapphus C behöver bytas inom 2 veckor\n\
                 • Mindre läckage upptäckt vid rörgenomföring på våning 3\n\n\
                 **Rekommenderade åtgärder:**\n\
                 1. Byt filter i trapphus C (prioritet: hög)\n\
                 2. Service av fläkt B-02 (prioritet: medium)\n\
                 3. Täta rörgenomföring våning 3 (prioritet: låg)\n\n\
                 **Nästa inspektion:** Rekommenderas inom 6 månader"
                    .to_string(),
            ),
            notes: vec![
                Note {
                    id: "note-1".to_string(),
                    kind: NoteKind::Photo,
                    content: "Foto av ventilationsfläkt".to_string(),
                    transcription: None,
                    timestamp: datetime!(2024-12-15 09:15 UTC),
                    file_url: Some(
                        "https://example.com/media/ventilation_flakt_001.jpg".to_string(),
                    ),
                    file_name: Some("ventilation_flakt_001.jpg".to_string()),
                    file_size: Some(2_456_789),
                },
                Note {
                    id: "note-2".to_string(),
                    kind: NoteKind::Video,
                    content: "Videoinspelning av fläktljud".to_string(),
                    transcription: Some(
                        "Här hör vi fläkten som låter ovanligt högt. Det verkar vara \
                         vibrationer från lagret. Jag rekommenderar att vi byter ut lagret \
                         inom de närmaste veckorna."
                            .to_string(),
                    ),
                    timestamp: datetime!(2024-12-15 09:30 UTC),
                    file_url: Some("https://example.com/media/flakt_ljud_inspektion.mp4".to_string()),
                    file_name: Some("flakt_ljud_inspektion.mp4".to_string()),
                    file_size: Some(8_934_567),
                },
                Note {
                    id: "note-3".to_string(),
                    kind: NoteKind::Photo,
                    content: "Filter som behöver bytas".to_string(),
                    transcription: None,
                    timestamp: datetime!(2024-12-15 10:45 UTC),
                    file_url: Some("https://example.com/media/filter_trapphus_c.jpg".to_string()),
                    file_name: Some("filter_trapphus_c.jpg".to_string()),
                    file_size: Some(1_876_543),
                },
            ],
        },
        Project {
            id: "mock-project-2".to_string(),
            name: "Restaurang Kök - Säkerhetsinspektion".to_string(),
            location: "Drottninggatan 42, Stockholm".to_string(),
            date: datetime!(2024-12-10 0:00 UTC),
            inspector: "Erik Johansson".to_string(),
            created_at: datetime!(2024-12-10 07:00 UTC),
            updated_at: datetime!(2024-12-10 16:30 UTC),
            ai_summary: None,
            notes: vec![
                Note {
                    id: "note-8".to_string(),
                    kind: NoteKind::Photo,
                    content: "Köksutrustning översikt".to_string(),
                    transcription: None,
                    timestamp: datetime!(2024-12-10 08:00 UTC),
                    file_url: Some("https://example.com/media/kok_oversikt.jpg".to_string()),
                    file_name: Some("kok_oversikt.jpg".to_string()),
                    file_size: Some(3_234_567),
                },
                Note {
                    id: "note-9".to_string(),
                    kind: NoteKind::Video,
                    content: "Brandskyddssystem test".to_string(),
                    transcription: Some(
                        "Vi testar nu sprinklersystemet i köket. Systemet aktiveras korrekt \
                         vid 68 grader och vattentrycket är optimalt."
                            .to_string(),
                    ),
                    timestamp: datetime!(2024-12-10 09:30 UTC),
                    file_url: Some("https://example.com/media/sprinkler_test.mp4".to_string()),
                    file_name: Some("sprinkler_test.mp4".to_string()),
                    file_size: Some(9_876_543),
                },
            ],
        },
    ]
}
