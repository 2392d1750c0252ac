use crate::foundation::error::{HueforgeError, HueforgeResult};
use std::path::{Path, PathBuf};

/// One encoded export, ready to hand to a download or file writer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Suggested file name, e.g. `gradient-16x9.jpg`.
    pub file_name: String,
    /// MIME type of `bytes`.
    pub mime: &'static str,
    /// Encoded payload.
    pub bytes: Vec<u8>,
}

/// Receiver for finished exports (the file-download collaborator).
pub trait ExportSink {
    /// Take ownership of one artifact.
    fn deliver(&mut self, artifact: ExportArtifact) -> HueforgeResult<()>;
}

/// In-memory sink for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemorySink {
    pub(crate) artifacts: Vec<ExportArtifact>,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the delivered artifacts in delivery order.
    pub fn artifacts(&self) -> &[ExportArtifact] {
        &self.artifacts
    }
}

impl ExportSink for InMemorySink {
    fn deliver(&mut self, artifact: ExportArtifact) -> HueforgeResult<()> {
        self.artifacts.push(artifact);
        Ok(())
    }
}

/// Writes each artifact as `<dir>/<file_name>`, replacing existing files.
#[derive(Debug, Clone)]
pub struct DirSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DirSink {
    /// Sink writing into `dir`; the directory is created on first delivery.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    /// Target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ExportSink for DirSink {
    fn deliver(&mut self, artifact: ExportArtifact) -> HueforgeResult<()> {
        if artifact.file_name.is_empty()
            || artifact.file_name.contains(['/', '\\'])
            || artifact.file_name == ".."
        {
            return Err(HueforgeError::validation(format!(
                "export file name '{}' must be a plain file name",
                artifact.file_name
            )));
        }
        let path = self.dir.join(&artifact.file_name);
        ensure_parent_dir(&path)?;
        std::fs::write(&path, &artifact.bytes)
            .map_err(|e| HueforgeError::io(format!("write '{}': {e}", path.display())))?;
        tracing::debug!(path = %path.display(), bytes = artifact.bytes.len(), "export written");
        self.written.push(path);
        Ok(())
    }
}

/// Create the parent directory of `path` if it does not exist.
pub fn ensure_parent_dir(path: &Path) -> HueforgeResult<()> {
    if let Some(parent) = path.parent() {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent).with_context(|| {
            format!("failed to create output directory '{}'", parent.display())
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/export/sink.rs"]
mod tests;
