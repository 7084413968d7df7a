//! Client for the optional remote backend: media upload with transcription,
//! chat over the whole collection, note summarization and the health probe
//! that gates AI features. No configured base URL means every AI feature
//! degrades gracefully instead of failing the process.

use std::path::Path;

use anyhow::{Context, bail};
use reqwest::multipart;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

use crate::core::store::{NoteKind, Project};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub file_url: String,
    #[serde(default)]
    pub transcription: Option<String>,
    pub filename: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub response: String,
    pub chat_history: Vec<ChatTurn>,
}

#[derive(Debug, Clone, Deserialize)]
struct SummarizeResponse {
    summary: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub openai: Option<bool>,
}

impl HealthStatus {
    /// AI features are on only when the backend is up and has an OpenAI key.
    pub fn ai_enabled(&self) -> bool {
        self.status == "ok" && self.openai.unwrap_or(false)
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Option<String>,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base_url: base_url.map(|u| u.trim_end_matches('/').to_string()),
            http: reqwest::Client::new(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.base_url.is_some()
    }

    fn endpoint(&self, path: &str) -> anyhow::Result<String> {
        match &self.base_url {
            Some(base) => Ok(format!("{base}{path}")),
            None => bail!("remote API is not configured, set api_base_url or SITELOG_API_BASE_URL"),
        }
    }

    /// Upload a media file for a note. The backend stores the file and, for
    /// audio/video, returns a transcription alongside the file reference.
    pub async fn upload(
        &self,
        file: &Path,
        project_id: &str,
        note_kind: NoteKind,
    ) -> anyhow::Result<UploadResponse> {
        let url = self.endpoint("/upload")?;
        let bytes = tokio::fs::read(file)
            .await
            .with_context(|| format!("failed to read upload file {file:?}"))?;
        let file_name = file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.bin")
            .to_string();
        debug!(file = %file_name, size = bytes.len(), "starting upload");

        let form = multipart::Form::new()
            .part("file", multipart::Part::bytes(bytes).file_name(file_name))
            .text("projectId", project_id.to_string())
            .text("noteType", note_kind.as_str());
        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .context("network error during upload")?
            .error_for_status()
            .context("upload failed")?
            .json::<UploadResponse>()
            .await
            .context("invalid upload response format")?;
        debug!(file_url = %response.file_url, size = response.size, "upload complete");
        Ok(response)
    }

    /// Ask the backend a question over the full project collection.
    pub async fn chat(
        &self,
        message: &str,
        projects: &[Project],
        user_id: Option<&str>,
    ) -> anyhow::Result<ChatResponse> {
        let url = self.endpoint("/chat")?;
        let body = json!({
            "message": message,
            "projects": projects,
            "userId": user_id,
        });
        self.http
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("chat request failed")?
            .error_for_status()
            .context("chat request failed")?
            .json::<ChatResponse>()
            .await
            .context("invalid chat response format")
    }

    /// Summarize the given note texts into a free-text inspection digest.
    pub async fn summarize(
        &self,
        notes: &[String],
        project_name: &str,
        project_location: &str,
    ) -> anyhow::Result<String> {
        let url = self.endpoint("/summarize")?;
        let body = json!({
            "notes": notes,
            "projectName": project_name,
            "projectLocation": project_location,
        });
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("summarization request failed")?
            .error_for_status()
            .context("summarization failed")?
            .json::<SummarizeResponse>()
            .await
            .context("invalid summarize response format")?;
        Ok(response.summary)
    }

    /// Probe the backend. Never errors: an unconfigured or unreachable
    /// backend reports itself as such so callers can gate AI features.
    pub async fn health(&self) -> HealthStatus {
        let Ok(url) = self.endpoint("/health") else {
            return HealthStatus {
                status: "unavailable".to_string(),
                openai: None,
            };
        };
        let result = async {
            self.http
                .get(&url)
                .send()
                .await?
                .error_for_status()?
                .json::<HealthStatus>()
                .await
        }
        .await;
        match result {
            Ok(status) => status,
            Err(e) => {
                warn!(error = %e, "health check failed");
                HealthStatus {
                    status: "error".to_string(),
                    openai: None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_client_is_unavailable() {
        let client = ApiClient::new(None);
        assert!(!client.is_available());
        assert!(client.endpoint("/upload").is_err());
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new(Some("http://localhost:3001/api/".to_string()));
        assert_eq!(
            client.endpoint("/chat").unwrap(),
            "http://localhost:3001/api/chat"
        );
    }

    #[tokio::test]
    async fn unconfigured_health_reports_unavailable() {
        let client = ApiClient::new(None);
        let health = client.health().await;
        assert_eq!(health.status, "unavailable");
        assert!(!health.ai_enabled());
    }

    #[test]
    fn ai_enabled_requires_ok_and_openai() {
        let up = HealthStatus {
            status: "ok".to_string(),
            openai: Some(true),
        };
        assert!(up.ai_enabled());
        let no_key = HealthStatus {
            status: "ok".to_string(),
            openai: Some(false),
        };
        assert!(!no_key.ai_enabled());
        let down = HealthStatus {
            status: "error".to_string(),
            openai: Some(true),
        };
        assert!(!down.ai_enabled());
    }

    #[test]
    fn upload_response_parses_backend_shape() {
        let raw = r#"{
            "success": true,
            "fileUrl": "/uploads/abc.webm",
            "transcription": "Fläkten låter högt.",
            "filename": "abc.webm",
            "originalName": "note.webm",
            "mimeType": "video/webm",
            "size": 12345
        }"#;
        let parsed: UploadResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.file_url, "/uploads/abc.webm");
        assert_eq!(parsed.transcription.as_deref(), Some("Fläkten låter högt."));
        assert_eq!(parsed.size, 12345);
    }
}
