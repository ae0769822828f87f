//! Export serializer.
//!
//! Turns a selection of records into JSON, CSV or plain text. Nothing in
//! here touches the clipboard or the filesystem; callers hand the string
//! to a [`crate::traits::Clipboard`] or [`crate::traits::FileDownload`].

mod csv;
mod format;
mod text;

use thiserror::Error;

use crate::models::UserRecord;
use crate::state::FavoritesStore;

pub use format::ExportFormat;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// What to export: a format plus the favorites-only selection flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportRequest {
    pub format: ExportFormat,
    pub favorites_only: bool,
}

impl Default for ExportRequest {
    fn default() -> Self {
        Self {
            format: ExportFormat::Json,
            favorites_only: true,
        }
    }
}

impl ExportRequest {
    pub fn new(format: ExportFormat, favorites_only: bool) -> Self {
        Self {
            format,
            favorites_only,
        }
    }

    /// Select from `records` and serialize.
    pub fn render(
        &self,
        records: &[UserRecord],
        favorites: &FavoritesStore,
    ) -> Result<String, ExportError> {
        let selected = select_for_export(records, favorites, self.favorites_only);
        serialize(&selected, self.format, favorites)
    }
}

/// Records to export, in record-set order.
pub fn select_for_export<'a>(
    records: &'a [UserRecord],
    favorites: &FavoritesStore,
    favorites_only: bool,
) -> Vec<&'a UserRecord> {
    records
        .iter()
        .filter(|r| !favorites_only || favorites.contains(r.id))
        .collect()
}

/// Render `records` in `format`. The favorite flag in CSV and text output
/// is read from `favorites` at call time.
pub fn serialize(
    records: &[&UserRecord],
    format: ExportFormat,
    favorites: &FavoritesStore,
) -> Result<String, ExportError> {
    let output = match format {
        ExportFormat::Json => serde_json::to_string_pretty(records)?,
        ExportFormat::Csv => csv::render(records, favorites),
        ExportFormat::Text => text::render(records, favorites),
    };
    tracing::debug!(
        "Serialized {} records as {} ({} bytes)",
        records.len(),
        format,
        output.len()
    );
    Ok(output)
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
