#![no_main]

use csvout::{CsvOptions, Field, generate_csv};
use libfuzzer_sys::fuzz_target;

/// Field count per record, tracking quote state.
fn record_field_counts(doc: &str) -> Vec<usize> {
    let mut counts = Vec::new();
    let mut fields = 1usize;
    let mut in_quotes = false;
    let mut chars = doc.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => fields += 1,
                '\n' => {
                    counts.push(fields);
                    fields = 1;
                }
                _ => {}
            }
        }
    }
    counts.push(fields);
    counts
}

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Interpret the input as NUL-separated fields, three per row.
        let fields: Vec<&str> = s.split('\0').collect();
        let rows: Vec<Vec<Field>> = fields
            .chunks(3)
            .map(|chunk| chunk.iter().map(|f| Field::from(*f)).collect())
            .collect();

        let headers = ["a", "b", "c"];
        let csv = generate_csv(&headers, &rows, &CsvOptions::default());

        // Hostile field content must never shift row or column boundaries.
        let counts = record_field_counts(&csv);
        assert_eq!(counts.len(), rows.len() + 1);
        assert_eq!(counts[0], headers.len());
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(counts[i + 1], row.len());
        }
    }
});
