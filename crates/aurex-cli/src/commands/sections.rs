use aurex_core::error::AurexError;
use aurex_core::sections::{builtin, load_table};
use std::path::Path;

pub fn list() -> Result<(), AurexError> {
    println!("Available predefined section tables:\n");
    for name in builtin::PRESETS {
        let table = builtin::load_preset(name)?;
        println!(
            "  {:<8} {} (v{}), {} sections",
            name,
            table.name,
            table.version,
            table.sections.len()
        );
        if let Some(ref desc) = table.description {
            println!("           {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), AurexError> {
    let table = builtin::load_preset(preset)?;

    println!("{} (version {})\n", table.name, table.version);
    if let Some(ref desc) = table.description {
        println!("{}\n", desc);
    }

    let max_title = table
        .sections
        .iter()
        .map(|s| s.title.len())
        .max()
        .unwrap_or(20);

    println!("  {:<width$}  {:<8}  Unit", "Title", "Code", width = max_title);
    println!("  {}", "-".repeat(max_title + 16));
    for section in &table.sections {
        println!(
            "  {:<width$}  {:<8}  {}",
            section.title,
            section.code,
            section.unit,
            width = max_title
        );
    }

    println!();
    println!("Per section, the flat export carries four columns:");
    println!("  <CODE>_F95_<UNIT>  <CODE>_F50_<UNIT>  <CODE>_F5_<UNIT>  <CODE>_MN_<UNIT>");

    Ok(())
}

pub fn schema() -> Result<(), AurexError> {
    print!(
        r#"JSON Section Table Schema
=========================

A section table tells `aurex extract` which report sections to mine and
how to name their output columns.

Top-level fields:
  name          (string, required)  Human-readable name of the table
  description   (string, optional)  What this table is for
  version       (string, required)  Version identifier (e.g., "2019")
  sections      (array, required)   Ordered list of sections (see below).
                                    The flat export emits columns in this
                                    order.

Each entry in the "sections" array:
  title         (string, required)  Section title as printed in the report.
                                    Matched case-insensitively with flexible
                                    whitespace, so a title broken across two
                                    lines still matches. Must be unique.
  code          (string, required)  Short code used to build column names,
                                    e.g. "OIL" -> OIL_F95_MMB, OIL_F50_MMB,
                                    OIL_F5_MMB, OIL_MN_MMB. Must be unique.
  unit          (string, optional)  Unit suffix for column names.
                                    Default: "MMB"

Example:
{{
  "name": "My custom table",
  "version": "1.0",
  "sections": [
    {{ "title": "Oil in Oil Fields", "code": "OIL" }},
    {{ "title": "Coalbed Gas", "code": "CBG", "unit": "BCF" }}
  ]
}}
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), AurexError> {
    let table = load_table(file)?;

    println!(
        "Section table '{}' (v{}) is valid.",
        table.name, table.version
    );
    println!("  Sections: {}", table.sections.len());

    let mut warnings = Vec::new();
    for section in &table.sections {
        if section.code.chars().any(|c| c.is_ascii_lowercase()) {
            warnings.push(format!("code '{}' is not uppercase", section.code));
        }
        if section.title.split_whitespace().count() < 2 {
            warnings.push(format!(
                "title '{}' is a single word and may match unrelated pages",
                section.title
            ));
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
