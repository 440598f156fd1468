use crate::error::AurexError;
use crate::sections::schema::SectionTableDef;

const USGS_AU_JSON: &str = include_str!("../../../../sections/usgs-au.json");

/// Available predefined section tables.
pub const PRESETS: &[&str] = &["usgs"];

/// Preset used when no table is given explicitly.
pub const DEFAULT_PRESET: &str = "usgs";

/// Load a predefined section table by name.
pub fn load_preset(name: &str) -> Result<SectionTableDef, AurexError> {
    match name {
        "usgs" => {
            let table: SectionTableDef = serde_json::from_str(USGS_AU_JSON)?;
            Ok(table)
        }
        _ => Err(AurexError::TableInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}
