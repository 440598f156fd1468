pub mod builtin;
pub mod schema;

use crate::error::AurexError;
use schema::SectionTableDef;
use std::collections::HashSet;
use std::path::Path;

/// Load a section table from a JSON file.
pub fn load_table(path: &Path) -> Result<SectionTableDef, AurexError> {
    let content = std::fs::read_to_string(path).map_err(|e| AurexError::TableLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_table(&content, path)
}

/// Parse a section table from a JSON string.
pub fn parse_table(json: &str, source: &Path) -> Result<SectionTableDef, AurexError> {
    let table: SectionTableDef = serde_json::from_str(json).map_err(|e| AurexError::TableLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_table(&table)?;
    Ok(table)
}

/// Parse a section table from a JSON string (no file path context).
pub fn parse_table_str(json: &str) -> Result<SectionTableDef, AurexError> {
    let table: SectionTableDef = serde_json::from_str(json).map_err(AurexError::Json)?;
    validate_table(&table)?;
    Ok(table)
}

/// Validate that a section table is well-formed.
pub fn validate_table(table: &SectionTableDef) -> Result<(), AurexError> {
    if table.sections.is_empty() {
        return Err(AurexError::TableInvalid(
            "sections must not be empty".into(),
        ));
    }

    let mut codes = HashSet::new();
    let mut titles = HashSet::new();
    for section in &table.sections {
        if section.title.trim().is_empty() {
            return Err(AurexError::TableInvalid(
                "section title must not be empty".into(),
            ));
        }

        if section.code.trim().is_empty() {
            return Err(AurexError::TableInvalid(format!(
                "section '{}' has an empty code",
                section.title
            )));
        }

        if !codes.insert(section.code.as_str()) {
            return Err(AurexError::TableInvalid(format!(
                "duplicate section code '{}'",
                section.code
            )));
        }

        if !titles.insert(section.title.as_str()) {
            return Err(AurexError::TableInvalid(format!(
                "duplicate section title '{}'",
                section.title
            )));
        }
    }

    Ok(())
}
