use csvout::{ExportOptionsBuilder, Field, FileSink, export_csv};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let headers = ["Name", "Email"];
    let rows = vec![
        vec![Field::from("John Doe"), Field::from("john@example.com")],
        vec![Field::from("Doe, Jane"), Field::from("jane@example.com")],
    ];

    let options = ExportOptionsBuilder::new()
        .filename("registrations.csv")
        .line_terminator("\r\n")
        .build();

    let mut sink = FileSink::new("exports");
    export_csv(&headers, &rows, &options, &mut sink)?;

    println!("wrote exports/registrations.csv (BOM-prefixed, text/csv)");
    Ok(())
}
