use std::io;

use crate::domain::ScratchFile;

/// Allocates request-scoped files that are deleted when their handle goes away.
#[async_trait::async_trait]
pub trait ScratchStore: Send + Sync {
    /// Creates an empty file whose name embeds `suggested_name` behind a
    /// random token. Never returns a name held by another live handle.
    async fn acquire(&self, suggested_name: &str) -> Result<ScratchFile, ScratchStoreError>;

    /// Acquires a file and fills it with `data`. The file is removed again if
    /// the write fails.
    async fn persist(
        &self,
        suggested_name: &str,
        data: &[u8],
    ) -> Result<ScratchFile, ScratchStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ScratchStoreError {
    #[error("create failed: {0}")]
    CreateFailed(String),
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
