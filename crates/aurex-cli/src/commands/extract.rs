use aurex_core::error::AurexError;
use aurex_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

use crate::commands::resolve_table;
use crate::output;

pub fn run(
    files: &[PathBuf],
    table_file: Option<PathBuf>,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), AurexError> {
    let table = resolve_table(table_file)?;
    let extractor = PdftotextExtractor::new();
    let result = aurex_core::extract_files(files, &extractor, &table);

    // failures go to stderr; successful rows are still emitted below
    for (file, reason) in result.failures() {
        eprintln!("Failed {file}: {reason}");
    }

    let output_str = match output_format {
        "json" => serde_json::to_string_pretty(&result)?,
        _ => output::csv::format_batch(&result, &table)?,
    };

    match output_file {
        Some(path) => {
            std::fs::write(&path, &output_str)?;
            eprintln!(
                "Extracted {} of {} document(s), written to {}",
                result.records().count(),
                files.len(),
                path.display()
            );
        }
        None => {
            print!("{output_str}");
            if !output_str.ends_with('\n') {
                println!();
            }
        }
    }

    Ok(())
}
