use std::path::Path;

use bytes::Bytes;

/// An audio file received from a client, held in memory until it is
/// written to scratch storage.
#[derive(Debug, Clone)]
pub struct AudioUpload {
    pub filename: String,
    pub data: Bytes,
}

impl AudioUpload {
    pub fn new(filename: impl Into<String>, data: Bytes) -> Self {
        Self {
            filename: filename.into(),
            data,
        }
    }

    /// True when the browser sent the field without choosing a file.
    pub fn is_empty(&self) -> bool {
        self.filename.trim().is_empty() || self.data.is_empty()
    }

    pub fn extension(&self) -> Option<String> {
        Path::new(self.filename.trim())
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }
}
