//! Aggregated lookup table: every generated icon in one file, keyed by code.
//!
//! Consumers that bundle the icons into code rather than serving files use
//! this. Entries are always sorted by language code so regenerating with the
//! same input gives byte-identical output.

use crate::error::IconError;
use crate::render::GeneratedIcon;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;
use std::str::FromStr;

const GENERATED_HEADER: &str = "Generated by language-icons. Do not edit.";

/// Output format of the lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupFormat {
    /// A JSON object `{ "<code>": "<svg>" }`
    #[default]
    Json,
    /// A Rust module exposing `pub static ICONS: &[(&str, &str)]`
    Rust,
    /// A TypeScript module exporting `icons: Record<string, string>`
    TypeScript,
}

impl FromStr for LookupFormat {
    type Err = IconError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LookupFormat::Json),
            "rust" | "rs" => Ok(LookupFormat::Rust),
            "typescript" | "ts" => Ok(LookupFormat::TypeScript),
            _ => Err(IconError::InvalidConfig {
                key: "LOOKUP_FORMAT",
                value: value.to_string(),
            }),
        }
    }
}

/// Render the lookup table source for `icons`.
pub fn render_lookup(icons: &[GeneratedIcon], format: LookupFormat) -> Result<String> {
    let sorted: BTreeMap<&str, &str> = icons
        .iter()
        .map(|icon| (icon.code.as_str(), icon.svg.as_str()))
        .collect();

    match format {
        LookupFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(&sorted).context("Failed to serialize lookup table")?;
            json.push('\n');
            Ok(json)
        }
        LookupFormat::Rust => {
            let mut out = format!("// {}\n\npub static ICONS: &[(&str, &str)] = &[\n", GENERATED_HEADER);
            for (code, svg) in &sorted {
                // Debug formatting of str yields a valid Rust string literal
                writeln!(out, "    ({:?}, {:?}),", code, svg)?;
            }
            out.push_str("];\n");
            Ok(out)
        }
        LookupFormat::TypeScript => {
            let mut out = format!(
                "// {}\n\nexport const icons: Record<string, string> = {{\n",
                GENERATED_HEADER
            );
            for (code, svg) in &sorted {
                writeln!(
                    out,
                    "  {}: {},",
                    serde_json::to_string(code)?,
                    serde_json::to_string(svg)?
                )?;
            }
            out.push_str("};\n");
            Ok(out)
        }
    }
}

/// Write the lookup table for `icons` to `path`.
pub async fn write_lookup(path: &Path, icons: &[GeneratedIcon], format: LookupFormat) -> Result<()> {
    let contents = render_lookup(icons, format)?;
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write lookup table {}", path.display()))
}
