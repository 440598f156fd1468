pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod sections;

use error::AurexError;
use extraction::{PageContent, PdfExtractor};
use model::{AssessmentRecord, BatchResult, DocumentOutcome, DocumentSource};
use sections::schema::SectionTableDef;
use std::path::PathBuf;

/// Main API entry point: recover an assessment record from one PDF.
///
/// Extraction failures (unreadable bytes, missing backend) surface as
/// errors; missing sections or values within a readable document do not,
/// they simply leave the record sparse.
pub fn extract_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    table: &SectionTableDef,
    file_name: &str,
) -> Result<AssessmentRecord, AurexError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    extract_pages(&pages, table, file_name)
}

/// Recover an assessment record from already-extracted pages.
pub fn extract_pages(
    pages: &[PageContent],
    table: &SectionTableDef,
    file_name: &str,
) -> Result<AssessmentRecord, AurexError> {
    if pages.is_empty() {
        return Err(AurexError::EmptyDocument);
    }
    Ok(parsing::extract_record(pages, table, file_name))
}

/// Extract every document of a batch, one outcome per document in input
/// order. A failing document becomes a `Failed` outcome and never aborts
/// the rest of the batch.
pub fn extract_batch(
    documents: &[DocumentSource],
    extractor: &dyn PdfExtractor,
    table: &SectionTableDef,
) -> BatchResult {
    let outcomes = documents
        .iter()
        .map(|doc| {
            let result = extract_pdf(&doc.bytes, extractor, table, &doc.name);
            if let Err(e) = &result {
                log::warn!("extraction failed for {}: {}", doc.name, e);
            }
            DocumentOutcome::from_result(&doc.name, result)
        })
        .collect();
    BatchResult { outcomes }
}

/// Read and extract a batch of PDF files. An unreadable file becomes a
/// `Failed` outcome like any other per-document error.
pub fn extract_files(
    paths: &[PathBuf],
    extractor: &dyn PdfExtractor,
    table: &SectionTableDef,
) -> BatchResult {
    let outcomes = paths
        .iter()
        .map(|path| {
            let name = display_name(path);
            let result = std::fs::read(path)
                .map_err(AurexError::from)
                .and_then(|bytes| extract_pdf(&bytes, extractor, table, &name));
            if let Err(e) = &result {
                log::warn!("extraction failed for {}: {}", name, e);
            }
            DocumentOutcome::from_result(&name, result)
        })
        .collect();
    BatchResult { outcomes }
}

fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
