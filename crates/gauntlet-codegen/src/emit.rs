//! Rust source emission.
//!
//! Renders interchange day records as a compilable Rust source file so the
//! downstream harness links the fixture data directly instead of parsing
//! YAML at runtime. The emitted code targets the harness's external
//! `DayData` / `UserEntry` types.

use crate::error::CodegenError;
use crate::escape::escape_rust_string;
use crate::interchange::{parse_document, RawDay, RawEntry};

const HEADER: &str = "// Auto-generated from YAML data - DO NOT EDIT MANUALLY\n\
                      use crate::{UserEntry, DayData};\n\n\
                      pub fn get_days_data() -> Vec<DayData> {\n    vec![\n";

const FOOTER: &str = "    ]\n}\n";

/// Emits literal Rust data structures for interchange documents.
pub struct RustEmitter;

impl RustEmitter {
    /// Create a new emitter.
    pub fn new() -> Self {
        Self
    }

    /// Parse a YAML interchange document and render it as Rust source.
    pub fn render_document(&self, yaml: &str) -> Result<String, CodegenError> {
        let days = parse_document(yaml)?;
        self.render_days(&days)
    }

    /// Render day records as Rust source.
    ///
    /// Every day must carry `day`, and every entry `username` and
    /// `password`; anything else missing renders as `None`. Batch semantics
    /// are trusted, not re-checked.
    pub fn render_days(&self, days: &[RawDay]) -> Result<String, CodegenError> {
        let mut out = String::from(HEADER);

        for (position, record) in days.iter().enumerate() {
            let day = record
                .day
                .ok_or_else(|| CodegenError::missing_day_field(position + 1, "day"))?;

            out.push_str("        DayData {\n");
            out.push_str(&format!("            day: {},\n", day));
            self.render_batch(&mut out, "signups", day, &record.signups, true)?;
            self.render_batch(&mut out, "logins", day, &record.logins, false)?;
            out.push_str("        },\n");
        }

        out.push_str(FOOTER);
        Ok(out)
    }

    /// Render one batch field. An absent or empty batch becomes `None`,
    /// never an empty `vec![]`.
    fn render_batch(
        &self,
        out: &mut String,
        name: &'static str,
        day: u32,
        batch: &Option<Vec<RawEntry>>,
        with_email: bool,
    ) -> Result<(), CodegenError> {
        let entries = match batch.as_deref() {
            Some(entries) if !entries.is_empty() => entries,
            _ => {
                out.push_str(&format!("            {}: None,\n", name));
                return Ok(());
            }
        };

        out.push_str(&format!("            {}: Some(vec![\n", name));
        for (position, entry) in entries.iter().enumerate() {
            self.render_entry(out, name, day, position + 1, entry, with_email)?;
        }
        out.push_str("            ]),\n");
        Ok(())
    }

    fn render_entry(
        &self,
        out: &mut String,
        batch: &'static str,
        day: u32,
        position: usize,
        entry: &RawEntry,
        with_email: bool,
    ) -> Result<(), CodegenError> {
        let username = entry
            .username
            .as_deref()
            .ok_or_else(|| CodegenError::missing_entry_field(day, batch, position, "username"))?;
        let password = entry
            .password
            .as_deref()
            .ok_or_else(|| CodegenError::missing_entry_field(day, batch, position, "password"))?;

        // Login entries never carry an email, whatever the document says.
        let email = if with_email {
            entry.email.as_deref()
        } else {
            None
        };

        out.push_str("                UserEntry {\n");
        out.push_str(&format!(
            "                    email: {},\n",
            render_opt_string(email)
        ));
        out.push_str(&format!(
            "                    username: \"{}\".to_string(),\n",
            escape_rust_string(username)
        ));
        out.push_str(&format!(
            "                    password: \"{}\".to_string(),\n",
            escape_rust_string(password)
        ));
        out.push_str(&format!(
            "                    id: {},\n",
            render_opt_u32(entry.id)
        ));
        out.push_str("                },\n");
        Ok(())
    }
}

impl Default for RustEmitter {
    fn default() -> Self {
        Self::new()
    }
}

fn render_opt_string(value: Option<&str>) -> String {
    match value {
        Some(v) => format!("Some(\"{}\".to_string())", escape_rust_string(v)),
        None => "None".to_string(),
    }
}

fn render_opt_u32(value: Option<u32>) -> String {
    match value {
        Some(v) => format!("Some({})", v),
        None => "None".to_string(),
    }
}
