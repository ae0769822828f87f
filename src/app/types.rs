//! Type definitions for the application state.
//!
//! - [`Focus`] - which component receives typed characters
//! - [`Overlay`] - dialog drawn above the card list
//! - [`ExportDialog`] - export options being edited

use crate::export::{ExportFormat, ExportRequest};

/// Which UI component has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Cards,
    Search,
}

/// Dialog drawn above the card list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    /// Detail view for the user with this id.
    Detail(u64),
    Export(ExportDialog),
    Help,
}

impl Overlay {
    pub fn is_open(&self) -> bool {
        !matches!(self, Overlay::None)
    }
}

/// Export dialog state. Defaults to JSON with favorites only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportDialog {
    pub request: ExportRequest,
}

impl ExportDialog {
    pub fn format(&self) -> ExportFormat {
        self.request.format
    }

    pub fn next_format(&mut self) {
        self.request.format = self.request.format.next();
    }

    pub fn previous_format(&mut self) {
        self.request.format = self.request.format.previous();
    }

    pub fn select_format(&mut self, format: ExportFormat) {
        self.request.format = format;
    }

    pub fn toggle_favorites_only(&mut self) {
        self.request.favorites_only = !self.request.favorites_only;
    }
}
