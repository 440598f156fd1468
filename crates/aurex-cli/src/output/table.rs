use aurex_core::model::AssessmentRecord;
use aurex_core::sections::schema::SectionTableDef;

/// Aligned per-section view of one record, for `aurex inspect`.
pub fn print_record(record: &AssessmentRecord, table: &SectionTableDef) {
    println!("File:      {}", record.source_file);
    println!("AU Number: {}", record.au_number.as_deref().unwrap_or("-"));
    println!("AU Name:   {}", record.au_name.as_deref().unwrap_or("-"));
    println!();

    let max_title = table
        .sections
        .iter()
        .map(|s| s.title.len())
        .max()
        .unwrap_or(10);

    println!(
        "  {:<width$}  {:<7}  {:>4}  {:>12}  {:>12}  {:>12}  {:>12}",
        "Section",
        "Code",
        "Page",
        "F95",
        "F50",
        "F5",
        "Mean",
        width = max_title
    );
    println!("  {}", "-".repeat(max_title + 73));

    for (def, values) in table.sections.iter().zip(&record.sections) {
        let page = values
            .page
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".into());
        let (f95, f50, f5) = match values.fractiles {
            Some(f) => (f.f95.to_string(), f.f50.to_string(), f.f5.to_string()),
            None => ("-".into(), "-".into(), "-".into()),
        };
        let mean = values
            .mean
            .map(|m| m.to_string())
            .unwrap_or_else(|| "-".into());
        println!(
            "  {:<width$}  {:<7}  {:>4}  {:>12}  {:>12}  {:>12}  {:>12}",
            def.title,
            values.code,
            page,
            f95,
            f50,
            f5,
            mean,
            width = max_title
        );
    }
}
