use csvout::{CsvOptions, Field, generate_csv, generate_csv_all_quoted};
use rust_decimal_macros::dec;

fn main() {
    let headers = ["Name", "Email", "Shifts", "Fee", "Notes"];
    let rows = vec![
        vec![
            Field::from("John Doe"),
            Field::from("john@example.com"),
            Field::from(3i64),
            Field::from(dec!(24.95)),
            Field::from("License A-123\nCoach rating"),
        ],
        vec![
            Field::from("Doe, Jane"),
            Field::from("jane@example.com"),
            Field::from(1i64),
            Field::from(dec!(12.50)),
            Field::Empty,
        ],
    ];

    let csv = generate_csv(&headers, &rows, &CsvOptions::default());
    println!("--- default quoting ---\n{csv}\n");

    let quoted = generate_csv_all_quoted(&headers, &rows, "\r\n");
    println!("--- all quoted, CRLF ---\n{quoted}");
}
