//! Export layer: hand generated CSV text to a sink, tagged with the
//! encoding metadata spreadsheet applications need.
//!
//! Generation itself is total; everything that can fail lives behind the
//! [`CsvSink`] capability trait, so export is best-effort and
//! environment-dependent. Sink failures surface directly as
//! [`ExportError`] — nothing is caught or wrapped on the way up.

mod buffer;
mod error;
mod file;

pub use buffer::{Artifact, BufferSink};
pub use error::ExportError;
pub use file::FileSink;

use serde::{Deserialize, Serialize};

use crate::csv::{CsvOptions, Field, generate_csv};

/// MIME type attached to every exported artifact.
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8;";

/// UTF-8 byte order mark. Prepended so spreadsheet applications detect
/// UTF-8 instead of misreading multi-byte characters.
pub const UTF8_BOM: char = '\u{FEFF}';

/// Destination capability for exported artifacts.
///
/// Implementations decide what "materialize a named artifact" means for
/// their host: a file on disk ([`FileSink`]), bytes held for the caller
/// ([`BufferSink`]), an HTTP response body, a browser download.
pub trait CsvSink {
    /// Materialize one artifact.
    fn write(&mut self, bytes: &[u8], mime_type: &str, filename: &str) -> Result<(), ExportError>;
}

/// Options for [`export_csv`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Generation options passed through to [`generate_csv`].
    #[serde(flatten)]
    pub csv: CsvOptions,
    /// Artifact filename; `None` resolves to `export_<YYYY-MM-DD>.csv`
    /// using the local date at call time.
    #[serde(default)]
    pub filename: Option<String>,
    /// Prepend the UTF-8 byte order mark.
    #[serde(default = "default_include_bom")]
    pub include_bom: bool,
}

fn default_include_bom() -> bool {
    true
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            csv: CsvOptions::default(),
            filename: None,
            include_bom: true,
        }
    }
}

/// Builder for [`ExportOptions`].
///
/// # Example
///
/// ```
/// use csvout::ExportOptionsBuilder;
///
/// let options = ExportOptionsBuilder::new()
///     .filename("registrations.csv")
///     .line_terminator("\r\n")
///     .build();
/// assert!(options.include_bom);
/// ```
#[derive(Debug, Default)]
pub struct ExportOptionsBuilder {
    options: ExportOptions,
}

impl ExportOptionsBuilder {
    /// Create a builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the artifact filename.
    pub fn filename(mut self, name: impl Into<String>) -> Self {
        self.options.filename = Some(name.into());
        self
    }

    /// Enable or disable the BOM prefix.
    pub fn include_bom(mut self, include: bool) -> Self {
        self.options.include_bom = include;
        self
    }

    /// Quote every field regardless of content.
    pub fn always_quote(mut self, quote: bool) -> Self {
        self.options.csv.always_quote = quote;
        self
    }

    /// Set the line terminator.
    pub fn line_terminator(mut self, terminator: impl Into<String>) -> Self {
        self.options.csv.line_terminator = terminator.into();
        self
    }

    /// Build the options.
    pub fn build(self) -> ExportOptions {
        self.options
    }
}

/// Generate a CSV document and hand it to `sink` as a named artifact.
///
/// The text is the exact output of [`generate_csv`] for the same headers,
/// rows, and generation options, optionally prefixed with [`UTF8_BOM`], and
/// is always tagged [`CSV_MIME_TYPE`].
pub fn export_csv<H: AsRef<str>, S: CsvSink>(
    headers: &[H],
    rows: &[Vec<Field>],
    options: &ExportOptions,
    sink: &mut S,
) -> Result<(), ExportError> {
    let filename = options
        .filename
        .clone()
        .unwrap_or_else(default_filename);

    let mut text = generate_csv(headers, rows, &options.csv);
    if options.include_bom {
        text.insert(0, UTF8_BOM);
    }

    sink.write(text.as_bytes(), CSV_MIME_TYPE, &filename)
}

fn default_filename() -> String {
    format!("export_{}.csv", chrono::Local::now().format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filename_shape() {
        let name = default_filename();
        assert!(name.starts_with("export_"));
        assert!(name.ends_with(".csv"));
        // export_YYYY-MM-DD.csv
        assert_eq!(name.len(), "export_2024-01-01.csv".len());
    }

    #[test]
    fn builder_defaults() {
        let options = ExportOptionsBuilder::new().build();
        assert!(options.include_bom);
        assert!(options.filename.is_none());
        assert!(!options.csv.always_quote);
        assert_eq!(options.csv.line_terminator, "\n");
    }
}
