pub mod header;
pub mod number;
pub mod percentiles;
pub mod scan;
pub mod statistics;

use crate::extraction::PageContent;
use crate::model::{AssessmentRecord, Fractiles, SectionValues};
use crate::sections::schema::SectionTableDef;
use header::parse_header;

/// Find the first page whose text contains the section title, whitespace and
/// case insensitive. Returns an index into `pages`.
pub fn find_section_page(pages: &[PageContent], title: &str) -> Option<usize> {
    let words: Vec<&str> = title.split_whitespace().collect();
    pages
        .iter()
        .position(|page| scan::contains_words_bounded(&page.text(), &words))
}

/// Recover one record from extracted pages.
///
/// AU identity comes from the first page; each section of the table is then
/// located by title and mined for its mean and percentile row. Sections that
/// cannot be found, or whose values cannot be recovered, stay empty rather
/// than failing the document.
pub fn extract_record(
    pages: &[PageContent],
    table: &SectionTableDef,
    file_name: &str,
) -> AssessmentRecord {
    let first_page_lines: Vec<&str> = pages
        .first()
        .map(|p| p.lines.iter().map(String::as_str).collect())
        .unwrap_or_default();
    let au = parse_header(&first_page_lines);

    let mut sections = Vec::with_capacity(table.sections.len());
    for def in &table.sections {
        let mut values = SectionValues::empty(&def.code);
        match find_section_page(pages, &def.title) {
            Some(idx) => {
                let page = &pages[idx];
                let text = page.text();
                values.page = Some(page.page_number);
                values.mean = statistics::statistics_mean(&text);
                values.fractiles = Fractiles::from_run(&percentiles::percentile_run(&text));
                log::debug!(
                    "{file_name}: section '{}' on page {} (mean: {}, fractiles: {})",
                    def.title,
                    page.page_number,
                    values.mean.is_some(),
                    values.fractiles.is_some(),
                );
            }
            None => {
                log::debug!("{file_name}: section '{}' not found", def.title);
            }
        }
        sections.push(values);
    }

    AssessmentRecord {
        au_name: au.au_name,
        au_number: au.au_number,
        sections,
        source_file: file_name.to_string(),
    }
}
