//! Result Formatting
//!
//! Converts raw exercise rows into display-ready records: numbered
//! instructions, resolved image URLs and title-cased text. List fields
//! arrive JSON-serialized; a field that fails to decode becomes an empty
//! list and never surfaces as an error.

use serde::Serialize;

use crate::database::models::ExerciseRow;

/// Resolves an image filename to a display URL.
pub trait AssetResolver: Send + Sync {
    fn image_url(&self, filename: &str) -> String;
}

/// Resolver for the conventional `<base>/images/<filename>` static layout.
#[derive(Debug, Clone)]
pub struct StaticAssetResolver {
    base: String,
}

impl StaticAssetResolver {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl AssetResolver for StaticAssetResolver {
    fn image_url(&self, filename: &str) -> String {
        format!("{}/images/{}", self.base.trim_end_matches('/'), filename)
    }
}

/// Display-ready exercise record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    pub name: String,
    pub category: String,
    /// Instructions numbered from 1, newline-joined, trimmed.
    pub instructions: String,
    /// Resolved image URLs in storage order.
    pub images: Vec<String>,
}

/// Formats storage rows into [`DisplayRecord`]s.
pub struct ResultFormatter {
    assets: Box<dyn AssetResolver>,
}

impl ResultFormatter {
    pub fn new(assets: Box<dyn AssetResolver>) -> Self {
        Self { assets }
    }

    /// Format rows one-to-one, preserving input order.
    pub fn format_rows(&self, rows: &[ExerciseRow]) -> Vec<DisplayRecord> {
        rows.iter().map(|row| self.format_row(row)).collect()
    }

    pub fn format_row(&self, row: &ExerciseRow) -> DisplayRecord {
        let instructions = decode_list(row.instructions_raw());
        let numbered: Vec<String> = instructions
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}", i + 1, step))
            .collect();

        let images = decode_list(row.images_raw())
            .iter()
            .map(|filename| self.assets.image_url(filename))
            .collect();

        DisplayRecord {
            name: title_case(row.name()),
            category: title_case(row.category()),
            instructions: numbered.join("\n").trim().to_string(),
            images,
        }
    }
}

/// Decode a JSON-serialized string list; anything malformed yields an empty
/// list.
fn decode_list(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default()
}

/// Title-case a string: each letter following a non-letter is uppercased,
/// the rest are lowercased.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_alpha = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            out.push(c);
            prev_is_alpha = false;
        }
    }

    out
}
