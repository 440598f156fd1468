use serde::{Deserialize, Serialize};

/// A section table: which report sections to mine, in output column order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionTableDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Ordered list of sections; the flat export emits columns in this order.
    pub sections: Vec<SectionDef>,
}

/// A single section of the report form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionDef {
    /// Title text as printed in the report (matched loosely against pages).
    pub title: String,
    /// Short code used to build output column names (e.g. "OIL").
    pub code: String,
    /// Unit suffix for output column names.
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_unit() -> String {
    "MMB".to_string()
}
