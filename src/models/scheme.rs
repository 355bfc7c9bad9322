use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SchemeEntry — One row of the scheme directory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemeEntry {
    pub code: String,
    pub name: String,
}

impl SchemeEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// SchemeMeta — Descriptive metadata shipped with a NAV history payload
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SchemeMeta {
    #[serde(default)]
    pub fund_house: Option<String>,
    #[serde(default)]
    pub scheme_type: Option<String>,
    #[serde(default)]
    pub scheme_category: Option<String>,
    #[serde(default, deserialize_with = "code_as_string")]
    pub scheme_code: Option<String>,
    #[serde(default)]
    pub scheme_name: Option<String>,
    #[serde(default)]
    pub isin_growth: Option<String>,
    #[serde(default)]
    pub isin_div_reinvestment: Option<String>,
}

impl SchemeMeta {
    /// True when the upstream sent an empty `meta` object (unknown code).
    pub fn is_empty(&self) -> bool {
        *self == SchemeMeta::default()
    }
}

/// mfapi.in sends `scheme_code` as a number; keep it as a string like
/// every other code in the SDK.
fn code_as_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
