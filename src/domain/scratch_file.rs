use std::io;
use std::path::{Path, PathBuf};

/// Handle to a uniquely named file in scratch storage.
///
/// Owners hand the file back with [`ScratchFile::release`] once they are done
/// with it. A handle dropped without being released (an aborted download, a
/// cancelled request) still removes its file synchronously. Removal errors are
/// swallowed: a file that is already gone is not a problem for the owner.
#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
    released: bool,
}

impl ScratchFile {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            released: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes the file without blocking the runtime.
    pub async fn release(mut self) {
        log_removal(&self.path, tokio::fs::remove_file(&self.path).await);
        self.released = true;
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        if !self.released {
            log_removal(&self.path, std::fs::remove_file(&self.path));
        }
    }
}

fn log_removal(path: &Path, result: io::Result<()>) {
    match result {
        Ok(()) => tracing::debug!(path = %path.display(), "Scratch file removed"),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Scratch file cleanup failed")
        }
    }
}
