//! File-based draft repository
//!
//! Persists the single onboarding draft slot as a JSON file in the console's
//! data directory. Writes go to a sibling temp file first and are renamed into
//! place, so a crash mid-write never leaves a truncated draft behind.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, debug_span, Instrument};
use wf_core::ports::{DraftStoreError, DraftStorePort};

pub const DEFAULT_DRAFT_FILE: &str = "officer_onboarding_draft.json";

pub struct FileDraftRepository {
    draft_file_path: PathBuf,
}

impl FileDraftRepository {
    /// Create repository with custom file path
    pub fn new(draft_file_path: PathBuf) -> Self {
        Self { draft_file_path }
    }

    /// Create repository with defaults
    pub fn with_defaults(base_dir: impl AsRef<Path>) -> Self {
        Self {
            draft_file_path: base_dir.as_ref().join(DEFAULT_DRAFT_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.draft_file_path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .draft_file_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_DRAFT_FILE.into());
        name.push(".tmp");
        self.draft_file_path.with_file_name(name)
    }

    async fn ensure_parent_dir(&self) -> Result<(), DraftStoreError> {
        if let Some(parent) = self.draft_file_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl DraftStorePort for FileDraftRepository {
    async fn load(&self) -> Result<Option<String>, DraftStoreError> {
        match fs::read_to_string(&self.draft_file_path).await {
            Ok(content) if content.trim().is_empty() => Ok(None),
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, raw: &str) -> Result<(), DraftStoreError> {
        let span = debug_span!(
            "infra.fs.save_draft",
            path = %self.draft_file_path.display(),
            size_bytes = raw.len(),
        );
        async {
            self.ensure_parent_dir().await?;
            let temp_path = self.temp_path();

            let mut file = fs::File::create(&temp_path).await?;
            file.write_all(raw.as_bytes()).await?;
            file.sync_all().await?;
            drop(file);

            fs::rename(&temp_path, &self.draft_file_path)
                .await
                .map_err(|e| {
                    DraftStoreError::Storage(format!("Failed to move draft into place: {}", e))
                })?;
            debug!("draft written");
            Ok(())
        }
        .instrument(span)
        .await
    }

    async fn clear(&self) -> Result<(), DraftStoreError> {
        match fs::remove_file(&self.draft_file_path).await {
            Ok(()) => {
                debug!(path = %self.draft_file_path.display(), "draft removed");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
