//! # csvout
//!
//! RFC 4180 CSV generation and export: a field escaper, a document
//! generator, and an export layer that tags the result with the metadata
//! spreadsheet applications need (UTF-8 BOM, `text/csv` MIME type).
//!
//! Generation is total — it never fails, never validates row shapes, and
//! never reorders or drops rows. Every field passes through the escaper
//! before joining, so embedded commas, quotes, and newlines can not corrupt
//! row or column boundaries.
//!
//! ## Quick Start
//!
//! ```rust
//! use csvout::{generate_csv, CsvOptions, Field};
//!
//! let headers = ["Name", "Email"];
//! let rows = vec![
//!     vec![Field::from("John Doe"), Field::from("john@example.com")],
//!     vec![Field::from("Ada, Countess"), Field::Empty],
//! ];
//!
//! let csv = generate_csv(&headers, &rows, &CsvOptions::default());
//! assert_eq!(csv, "Name,Email\nJohn Doe,john@example.com\n\"Ada, Countess\",");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Field model, escaper, generator |
//! | `sink` (default) | Export layer: [`CsvSink`], [`FileSink`], [`BufferSink`], BOM/MIME handling |

#[cfg(feature = "core")]
pub mod csv;

#[cfg(feature = "sink")]
pub mod sink;

// Re-export the main surface at the crate root for convenience
#[cfg(feature = "core")]
pub use crate::csv::*;

#[cfg(feature = "sink")]
pub use crate::sink::*;
