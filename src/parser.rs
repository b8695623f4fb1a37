// 📂 Member Export Loader
// Reads the whole CSV export into memory as positional rows

use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One data row, fields by position
pub type Row = Vec<String>;

/// Load every data row of a member export
///
/// The first physical line is the header and is discarded, even when it is
/// blank. Rows may have any number of fields; length checks happen in the
/// transformer.
///
/// # Returns
/// * `Ok(Vec<Row>)` - Data rows in file order
/// * `Err(anyhow::Error)` - File missing, no header, bad UTF-8 or malformed CSV
pub fn load_rows(file_path: &Path) -> Result<Vec<Row>> {
    let file = File::open(file_path)
        .with_context(|| format!("Failed to open file: {}", file_path.display()))?;

    // The csv reader skips blank lines, so the header is consumed here
    let mut input = BufReader::new(file);
    let mut header = String::new();
    let header_len = input
        .read_line(&mut header)
        .with_context(|| format!("Failed to read header of {}", file_path.display()))?;
    if header_len == 0 {
        bail!("No header row in {}", file_path.display());
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut rows = Vec::new();

    for (line_num, result) in reader.records().enumerate() {
        let record = result.with_context(|| {
            format!(
                "Failed to parse CSV line {} in {}",
                line_num + 2, // +2 because: 1-indexed + header row
                file_path.display()
            )
        })?;

        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(rows)
}
