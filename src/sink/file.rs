use std::fs;
use std::path::{Path, PathBuf};

use super::{CsvSink, ExportError};

/// Sink that materializes artifacts as files in a target directory.
///
/// The directory is created on first write if it does not exist. The MIME
/// type has no filesystem representation and is ignored.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    /// Create a sink writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl CsvSink for FileSink {
    fn write(&mut self, bytes: &[u8], _mime_type: &str, filename: &str) -> Result<(), ExportError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(filename), bytes)?;
        Ok(())
    }
}
