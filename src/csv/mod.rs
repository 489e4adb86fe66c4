//! RFC 4180 CSV generation: field model, escaper, and document generator.

mod escape;
mod field;
mod generate;

pub use escape::escape_field;
pub use field::Field;
pub use generate::{CsvOptions, generate_csv, generate_csv_all_quoted};
