use std::path::{Path, PathBuf};

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::application::ports::{ScratchStore, ScratchStoreError};
use crate::domain::ScratchFile;

const FALLBACK_NAME: &str = "upload";

/// Scratch files in a local directory, named `{uuid}_{suggested name}`.
pub struct LocalScratchStore {
    base_path: PathBuf,
}

impl LocalScratchStore {
    pub fn new(base_path: PathBuf) -> Result<Self, ScratchStoreError> {
        std::fs::create_dir_all(&base_path).map_err(ScratchStoreError::Io)?;
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

/// Keeps the final path component and replaces anything outside
/// `[A-Za-z0-9._-]`, so client names cannot escape the scratch directory.
pub fn sanitize_file_name(suggested: &str) -> String {
    let last = suggested
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    let cleaned: String = last
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        cleaned.to_string()
    }
}

#[async_trait::async_trait]
impl ScratchStore for LocalScratchStore {
    async fn acquire(&self, suggested_name: &str) -> Result<ScratchFile, ScratchStoreError> {
        let file_name = format!("{}_{}", Uuid::new_v4(), sanitize_file_name(suggested_name));
        let path = self.base_path.join(file_name);

        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| ScratchStoreError::CreateFailed(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), "Scratch file acquired");
        Ok(ScratchFile::new(path))
    }

    async fn persist(
        &self,
        suggested_name: &str,
        data: &[u8],
    ) -> Result<ScratchFile, ScratchStoreError> {
        let scratch = self.acquire(suggested_name).await?;

        let mut file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(scratch.path())
            .await
            .map_err(|e| ScratchStoreError::WriteFailed(e.to_string()))?;
        file.write_all(data)
            .await
            .map_err(|e| ScratchStoreError::WriteFailed(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| ScratchStoreError::WriteFailed(e.to_string()))?;

        Ok(scratch)
    }
}
