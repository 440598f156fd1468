use aurex_core::error::AurexError;
use aurex_core::extraction::pdftotext::PdftotextExtractor;
use std::path::{Path, PathBuf};

use crate::commands::resolve_table;
use crate::output;

pub fn run(
    file: &Path,
    table_file: Option<PathBuf>,
    output_format: &str,
) -> Result<(), AurexError> {
    let table = resolve_table(table_file)?;
    let pdf_bytes = std::fs::read(file)?;
    let extractor = PdftotextExtractor::new();
    let name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());

    let record = aurex_core::extract_pdf(&pdf_bytes, &extractor, &table, &name)?;

    match output_format {
        "json" => println!("{}", serde_json::to_string_pretty(&record)?),
        _ => output::table::print_record(&record, &table),
    }

    Ok(())
}
