use anyhow::{Context, Result};
use std::path::Path;
use thiserror::Error;
use volby_model::ResultsTable;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("output file name must contain '.csv', got '{0}'")]
    BadOutputName(String),
}

/// Check the output path carries the literal `.csv` substring.
///
/// The binary calls this before any network activity, so a bad name never
/// costs a scrape.
pub fn check_output_path(path: &str) -> Result<(), ExportError> {
    if path.contains(".csv") {
        Ok(())
    } else {
        Err(ExportError::BadOutputName(path.to_string()))
    }
}

/// Write the header and all rows to `path` as UTF-8 comma-delimited text.
///
/// Truncates any existing file. The writer closes on every exit path; a
/// mid-stream failure leaves a truncated file and propagates the error,
/// which ends the run anyway.
pub fn write_table(path: &Path, table: &ResultsTable) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to open {} for writing", path.display()))?;

    writer
        .write_record(table.schema.header())
        .context("Failed to write header")?;
    for row in &table.rows {
        writer
            .write_record(row.record())
            .with_context(|| format!("Failed to write row for municipality {}", row.code))?;
    }
    writer.flush().context("Failed to flush output file")?;

    tracing::info!(
        path = %path.display(),
        rows = table.rows.len(),
        columns = table.schema.width(),
        "Wrote results table"
    );

    Ok(())
}
