use serde::{Deserialize, Serialize};

use super::escape::escape_field;
use super::field::Field;

/// Options for [`generate_csv`].
///
/// Constructed fresh per call; nothing here is long-lived state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvOptions {
    /// Quote every field regardless of content.
    #[serde(default)]
    pub always_quote: bool,
    /// Terminator between the header line and data lines. The default is
    /// `"\n"`; strict RFC 4180 output wants `"\r\n"`.
    #[serde(default = "default_line_terminator")]
    pub line_terminator: String,
}

fn default_line_terminator() -> String {
    "\n".into()
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            always_quote: false,
            line_terminator: default_line_terminator(),
        }
    }
}

/// Generate a complete CSV document: one header line followed by one line
/// per row, joined by the configured terminator.
///
/// Every header and every field is routed through [`escape_field`] before
/// joining, so embedded commas, quotes, and newlines never shift row or
/// column boundaries. Row and column order are preserved exactly. The comma
/// delimiter is fixed.
///
/// Total function: no validation, no errors. Header/row arity is not
/// enforced — a short or long row simply produces that many fields on its
/// line. There is no trailing terminator after the last line.
pub fn generate_csv<H: AsRef<str>>(
    headers: &[H],
    rows: &[Vec<Field>],
    options: &CsvOptions,
) -> String {
    let mut out = String::new();

    for (i, h) in headers.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape_field(h.as_ref(), options.always_quote));
    }

    for row in rows {
        out.push_str(&options.line_terminator);
        for (i, field) in row.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&escape_field(&field.to_text(), options.always_quote));
        }
    }

    out
}

/// [`generate_csv`] with every field quoted, for downstream consumers with
/// strict or non-conformant CSV parsers.
pub fn generate_csv_all_quoted<H: AsRef<str>>(
    headers: &[H],
    rows: &[Vec<Field>],
    line_terminator: &str,
) -> String {
    generate_csv(
        headers,
        rows,
        &CsvOptions {
            always_quote: true,
            line_terminator: line_terminator.into(),
        },
    )
}
