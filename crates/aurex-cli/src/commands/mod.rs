pub mod extract;
pub mod inspect;
pub mod sections;

use aurex_core::error::AurexError;
use aurex_core::sections::{builtin, load_table, schema::SectionTableDef};
use std::path::PathBuf;

/// Load the --table file when given, otherwise the default preset.
pub(crate) fn resolve_table(path: Option<PathBuf>) -> Result<SectionTableDef, AurexError> {
    match path {
        Some(p) => load_table(&p),
        None => builtin::load_preset(builtin::DEFAULT_PRESET),
    }
}
