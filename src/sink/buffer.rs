use super::{CsvSink, ExportError};

/// An exported artifact held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Resolved filename.
    pub filename: String,
    /// MIME type the artifact was tagged with.
    pub mime_type: String,
    /// UTF-8 bytes, including the BOM when one was requested.
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// The artifact content as text.
    pub fn text(&self) -> &str {
        // Written from a String by export_csv, so always valid UTF-8.
        std::str::from_utf8(&self.bytes).unwrap_or("")
    }
}

/// Sink that collects artifacts in memory instead of touching the host.
///
/// This is the "return bytes to the caller" variant, and doubles as the
/// test double for export behavior.
#[derive(Debug, Default)]
pub struct BufferSink {
    /// Artifacts in write order.
    pub artifacts: Vec<Artifact>,
}

impl BufferSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently written artifact.
    pub fn last(&self) -> Option<&Artifact> {
        self.artifacts.last()
    }
}

impl CsvSink for BufferSink {
    fn write(&mut self, bytes: &[u8], mime_type: &str, filename: &str) -> Result<(), ExportError> {
        self.artifacts.push(Artifact {
            filename: filename.to_string(),
            mime_type: mime_type.to_string(),
            bytes: bytes.to_vec(),
        });
        Ok(())
    }
}
