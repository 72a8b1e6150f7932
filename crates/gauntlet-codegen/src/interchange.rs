//! Loosely-typed view of the YAML interchange document.
//!
//! Every field is optional at parse time; required-field enforcement happens
//! during emission so errors can cite the offending day and entry instead of
//! a serde path. The emitter trusts the document's semantics otherwise (it
//! does not re-check the login/signup correlation).

use crate::error::CodegenError;
use serde::Deserialize;

/// One day record as it appears in the interchange document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDay {
    pub day: Option<u32>,
    #[serde(default)]
    pub signups: Option<Vec<RawEntry>>,
    #[serde(default)]
    pub logins: Option<Vec<RawEntry>>,
}

/// One signup or login entry as it appears in the interchange document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEntry {
    pub id: Option<u32>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
}

/// Parse an interchange document into day records.
///
/// An empty document parses as an empty sequence, matching a zero-day run.
pub fn parse_document(yaml: &str) -> Result<Vec<RawDay>, CodegenError> {
    if yaml.trim().is_empty() {
        return Ok(Vec::new());
    }
    let days: Option<Vec<RawDay>> = serde_yaml::from_str(yaml)?;
    Ok(days.unwrap_or_default())
}
