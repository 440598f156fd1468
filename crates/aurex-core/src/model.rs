use crate::error::AurexError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Length of a complete percentile row in the assessment form: F95 through F5
/// in 5% steps, so 19 values with the median at index 9.
pub const PERCENTILE_RUN_LEN: usize = 19;

/// Identity fields from the first page of a report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuHeader {
    pub au_number: Option<String>,
    pub au_name: Option<String>,
}

/// The three fractiles read out of a percentile run. Recovered together or
/// not at all; a partial triple is never produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fractiles {
    pub f95: Decimal,
    pub f50: Decimal,
    pub f5: Decimal,
}

impl Fractiles {
    /// Reads the fractiles from a complete percentile run. Returns `None`
    /// unless the run has exactly [`PERCENTILE_RUN_LEN`] values.
    pub fn from_run(run: &[Decimal]) -> Option<Fractiles> {
        if run.len() != PERCENTILE_RUN_LEN {
            return None;
        }
        Some(Fractiles {
            f95: run[0],
            f50: run[PERCENTILE_RUN_LEN / 2],
            f5: run[PERCENTILE_RUN_LEN - 1],
        })
    }
}

/// Values recovered for one resource section of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionValues {
    /// Column code from the section table (e.g. "OIL").
    pub code: String,
    /// Page number (1-based) where the section title was found.
    pub page: Option<usize>,
    pub mean: Option<Decimal>,
    pub fractiles: Option<Fractiles>,
}

impl SectionValues {
    pub fn empty(code: &str) -> SectionValues {
        SectionValues {
            code: code.to_string(),
            page: None,
            mean: None,
            fractiles: None,
        }
    }
}

/// Everything recovered from one report document. Sections appear in table
/// order regardless of how much was found for each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub au_name: Option<String>,
    pub au_number: Option<String>,
    pub sections: Vec<SectionValues>,
    pub source_file: String,
}

/// One input document: a name for reporting plus its raw bytes.
#[derive(Debug, Clone)]
pub struct DocumentSource {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl DocumentSource {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> DocumentSource {
        DocumentSource {
            name: name.into(),
            bytes,
        }
    }
}

/// Per-document result within a batch. A failed document never aborts the
/// batch; it is carried here instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DocumentOutcome {
    Extracted { record: AssessmentRecord },
    Failed { file: String, reason: String },
}

impl DocumentOutcome {
    pub fn from_result(file: &str, result: Result<AssessmentRecord, AurexError>) -> DocumentOutcome {
        match result {
            Ok(record) => DocumentOutcome::Extracted { record },
            Err(e) => DocumentOutcome::Failed {
                file: file.to_string(),
                reason: e.to_string(),
            },
        }
    }
}

/// Outcome of a batch run, one entry per input document in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    pub outcomes: Vec<DocumentOutcome>,
}

impl BatchResult {
    pub fn records(&self) -> impl Iterator<Item = &AssessmentRecord> {
        self.outcomes.iter().filter_map(|o| match o {
            DocumentOutcome::Extracted { record } => Some(record),
            DocumentOutcome::Failed { .. } => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.outcomes.iter().filter_map(|o| match o {
            DocumentOutcome::Extracted { .. } => None,
            DocumentOutcome::Failed { file, reason } => Some((file.as_str(), reason.as_str())),
        })
    }
}
