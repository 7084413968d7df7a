use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use tokio::fs as async_fs;

/// A single key-value slot holding the serialized project collection.
///
/// `read` returns `None` when the slot has never been written; any other
/// failure is a real IO error and propagates.
pub trait StorageBackend {
    fn read(&self) -> impl Future<Output = anyhow::Result<Option<String>>>;
    fn write(&self, payload: &str) -> impl Future<Output = anyhow::Result<()>>;
}

/// Volatile backend for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slot: Mutex<Option<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    async fn read(&self) -> anyhow::Result<Option<String>> {
        Ok(self.slot.lock().expect("slot lock poisoned").clone())
    }

    async fn write(&self, payload: &str) -> anyhow::Result<()> {
        *self.slot.lock().expect("slot lock poisoned") = Some(payload.to_string());
        Ok(())
    }
}

/// File-backed slot: the whole collection lives in one JSON document.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for FileBackend {
    async fn read(&self) -> anyhow::Result<Option<String>> {
        match async_fs::read_to_string(&self.path).await {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(e).with_context(|| format!("failed to read project store {:?}", self.path))
            }
        }
    }

    async fn write(&self, payload: &str) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create store directory {:?}", parent))?;
        }
        // Write to a sibling temp file first so a crash mid-write cannot
        // leave a truncated collection behind.
        let tmp = self.path.with_extension("json.tmp");
        async_fs::write(&tmp, payload)
            .await
            .with_context(|| format!("failed to write project store {:?}", tmp))?;
        async_fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("failed to replace project store {:?}", self.path))?;
        Ok(())
    }
}
