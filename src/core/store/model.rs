use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::core::store::util::{generate_id, shorten_address};

/// Hard cap on notes per project, matching the capture UI limit.
pub const MAX_NOTES_PER_PROJECT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    Photo,
    Video,
    Text,
}

impl NoteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteKind::Photo => "photo",
            NoteKind::Video => "video",
            NoteKind::Text => "text",
        }
    }
}

/// One captured observation inside a project.
///
/// Serialized with the persisted storage layout: camelCase keys, `type` for
/// the kind, optional fields omitted entirely when absent, RFC 3339 dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NoteKind,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcription: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

/// A note as handed to the store, before an ID is assigned.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub kind: NoteKind,
    pub content: String,
    pub transcription: Option<String>,
    pub timestamp: OffsetDateTime,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<u64>,
}

impl NewNote {
    /// A plain text note captured right now.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: NoteKind::Text,
            content: content.into(),
            transcription: None,
            timestamp: OffsetDateTime::now_utc(),
            file_url: None,
            file_name: None,
            file_size: None,
        }
    }

    pub(super) fn into_note(self, id: String) -> Note {
        Note {
            id,
            kind: self.kind,
            content: self.content,
            transcription: self.transcription,
            timestamp: self.timestamp,
            file_url: self.file_url,
            file_name: self.file_name,
            file_size: self.file_size,
        }
    }
}

/// One inspection engagement with metadata and an ordered list of notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub inspector: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub notes: Vec<Note>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
}

impl Project {
    /// Build a fresh project: new ID, shortened location, empty notes,
    /// `created_at == updated_at == now`. Does not persist anything.
    pub fn new(
        name: impl Into<String>,
        location: &str,
        date: OffsetDateTime,
        inspector: impl Into<String>,
    ) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            id: generate_id(),
            name: name.into(),
            location: shorten_address(location),
            date,
            inspector: inspector.into(),
            created_at: now,
            updated_at: now,
            notes: Vec::new(),
            ai_summary: None,
        }
    }

    pub fn is_full(&self) -> bool {
        self.notes.len() >= MAX_NOTES_PER_PROJECT
    }
}
