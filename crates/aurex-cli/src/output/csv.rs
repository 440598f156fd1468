use aurex_core::error::AurexError;
use aurex_core::model::{AssessmentRecord, BatchResult};
use aurex_core::sections::schema::SectionTableDef;
use csv::Writer;

/// Per-section value columns, in output order.
const SECTION_FIELDS: [&str; 4] = ["F95", "F50", "F5", "MN"];

/// Column names for the flat export: AU identity, four value columns per
/// section in table order, then the source file tag.
pub fn header_row(table: &SectionTableDef) -> Vec<String> {
    let mut columns = vec!["AU_Name".to_string(), "AU_Number".to_string()];
    for section in &table.sections {
        for field in SECTION_FIELDS {
            columns.push(format!("{}_{}_{}", section.code, field, section.unit));
        }
    }
    columns.push("_file".to_string());
    columns
}

/// One row per record. Absent values become empty cells, never zero.
fn record_row(record: &AssessmentRecord) -> Vec<String> {
    let mut row = vec![
        record.au_name.clone().unwrap_or_default(),
        record.au_number.clone().unwrap_or_default(),
    ];
    for section in &record.sections {
        match section.fractiles {
            Some(f) => {
                row.push(f.f95.to_string());
                row.push(f.f50.to_string());
                row.push(f.f5.to_string());
            }
            None => row.extend([String::new(), String::new(), String::new()]),
        }
        row.push(section.mean.map(|m| m.to_string()).unwrap_or_default());
    }
    row.push(record.source_file.clone());
    row
}

/// Render the extracted records of a batch as CSV. Failed documents carry no
/// row; they are reported on stderr by the caller.
pub fn format_batch(result: &BatchResult, table: &SectionTableDef) -> Result<String, AurexError> {
    let mut writer = Writer::from_writer(Vec::new());
    writer
        .write_record(header_row(table))
        .map_err(|e| AurexError::Output(e.to_string()))?;
    for record in result.records() {
        writer
            .write_record(record_row(record))
            .map_err(|e| AurexError::Output(e.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AurexError::Output(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurex_core::model::{DocumentOutcome, Fractiles, SectionValues};
    use aurex_core::sections::builtin::load_preset;
    use rust_decimal_macros::dec;

    fn sample_record() -> AssessmentRecord {
        let mut sections: Vec<SectionValues> = ["OIL", "AG", "AGL", "NAGAS", "NAGL"]
            .iter()
            .map(|code| SectionValues::empty(code))
            .collect();
        sections[0].page = Some(4);
        sections[0].mean = Some(dec!(964.21));
        sections[0].fractiles = Some(Fractiles {
            f95: dec!(0.42),
            f50: dec!(18.37),
            f5: dec!(125.94),
        });
        AssessmentRecord {
            au_name: Some("Frontier Sandstone Oil".into()),
            au_number: Some("50012".into()),
            sections,
            source_file: "frontier.pdf".into(),
        }
    }

    #[test]
    fn test_header_row_order() {
        let table = load_preset("usgs").unwrap();
        let header = header_row(&table);
        assert_eq!(header.len(), 23);
        assert_eq!(header[0], "AU_Name");
        assert_eq!(header[1], "AU_Number");
        assert_eq!(header[2], "OIL_F95_MMB");
        assert_eq!(header[5], "OIL_MN_MMB");
        assert_eq!(header[6], "AG_F95_MMB");
        assert_eq!(header[21], "NAGL_MN_MMB");
        assert_eq!(header[22], "_file");
    }

    #[test]
    fn test_record_row_values_and_blanks() {
        let row = record_row(&sample_record());
        assert_eq!(row.len(), 23);
        assert_eq!(row[0], "Frontier Sandstone Oil");
        assert_eq!(row[1], "50012");
        assert_eq!(row[2], "0.42");
        assert_eq!(row[3], "18.37");
        assert_eq!(row[4], "125.94");
        assert_eq!(row[5], "964.21");
        // sections without values stay blank
        assert!(row[6..22].iter().all(|cell| cell.is_empty()));
        assert_eq!(row[22], "frontier.pdf");
    }

    #[test]
    fn test_format_batch_quotes_embedded_commas() {
        let table = load_preset("usgs").unwrap();
        let mut record = sample_record();
        record.au_name = Some("Delta, East Flank".into());
        let result = BatchResult {
            outcomes: vec![DocumentOutcome::Extracted { record }],
        };
        let out = format_batch(&result, &table).unwrap();
        let mut lines = out.lines();
        assert!(lines.next().unwrap().starts_with("AU_Name,AU_Number,OIL_F95_MMB"));
        assert!(lines.next().unwrap().starts_with("\"Delta, East Flank\",50012,"));
    }

    #[test]
    fn test_format_batch_header_only_when_no_records() {
        let table = load_preset("usgs").unwrap();
        let result = BatchResult::default();
        let out = format_batch(&result, &table).unwrap();
        assert_eq!(out.lines().count(), 1);
    }
}
