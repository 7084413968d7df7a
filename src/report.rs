//! Paginated text export of a single project: title, metadata, the AI
//! summary when present, then the numbered note list. Pages are fixed-size
//! blocks of wrapped lines separated by form feeds, and the output file is
//! named from the project.

use std::path::{Path, PathBuf};

use anyhow::Context;
use time::macros::format_description;
use tokio::fs as async_fs;
use tracing::info;

use crate::core::store::Project;

/// Maximum characters per line before wrapping.
pub const LINE_WIDTH: usize = 90;

/// Lines per page.
pub const PAGE_LINES: usize = 54;

const PAGE_BREAK: char = '\u{0c}';

/// Render the full report, pages joined by form feed.
pub fn render_report(project: &Project) -> String {
    paginate(layout_lines(project))
        .into_iter()
        .collect::<Vec<_>>()
        .join(&PAGE_BREAK.to_string())
}

/// Write the report next to other exports in `dir`, returning the path.
pub async fn export_project(project: &Project, dir: &Path) -> anyhow::Result<PathBuf> {
    let path = dir.join(report_file_name(&project.name));
    async_fs::write(&path, render_report(project))
        .await
        .with_context(|| format!("failed to write report {path:?}"))?;
    info!(report = %path.display(), "exported project report");
    Ok(path)
}

/// `<name>_inspection_report.txt`, with path separators made harmless.
pub fn report_file_name(project_name: &str) -> String {
    let safe: String = project_name
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | ':') { '_' } else { c })
        .collect();
    format!("{safe}_inspection_report.txt")
}

fn layout_lines(project: &Project) -> Vec<String> {
    let date_format = format_description!("[year]-[month]-[day]");
    let mut lines = vec!["Inspektionsrapport".to_string(), String::new()];

    lines.extend(wrap(&format!("Projekt: {}", project.name)));
    lines.extend(wrap(&format!("Plats: {}", project.location)));
    lines.push(format!(
        "Datum: {}",
        project
            .created_at
            .format(date_format)
            .unwrap_or_else(|_| project.created_at.to_string())
    ));
    lines.push(format!("Inspektör: {}", project.inspector));
    lines.push(String::new());

    if let Some(summary) = &project.ai_summary {
        lines.push("AI-Sammanfattning:".to_string());
        for paragraph in summary.lines() {
            lines.extend(wrap(paragraph));
        }
        lines.push(String::new());
    }

    if !project.notes.is_empty() {
        lines.push("Anteckningar:".to_string());
        for (index, note) in project.notes.iter().enumerate() {
            // Prefer the transcription over the short label, like the
            // on-screen note view; an empty transcription does not count.
            let body = note
                .transcription
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or(&note.content);
            let entry = format!(
                "{}. [{}] {}",
                index + 1,
                note.kind.as_str().to_uppercase(),
                body
            );
            lines.extend(wrap(&entry));
            lines.push(String::new());
        }
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

fn paginate(lines: Vec<String>) -> Vec<String> {
    if lines.is_empty() {
        return vec![String::new()];
    }
    lines
        .chunks(PAGE_LINES)
        .map(|page| page.join("\n"))
        .collect()
}

/// Greedy word wrap. Words longer than the width get a line of their own.
fn wrap(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= LINE_WIDTH {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
