//! Color theme for the userdeck UI
//!
//! Two palettes share one set of semantic slots; `t` in the card view flips
//! between them.

use ratatui::style::Color;

// ============================================================================
// Fixed Colors
// ============================================================================

/// Favorite marker - amber
pub const COLOR_FAVORITE: Color = Color::Rgb(245, 158, 11); // #F59E0B

/// Success toast - green
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // #04B575

/// Error toast and fetch error line
pub const COLOR_ERROR: Color = Color::Red;

/// Info toast - blue
pub const COLOR_INFO: Color = Color::Rgb(0, 122, 204); // #007ACC

// ============================================================================
// Palettes
// ============================================================================

/// Semantic colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    pub border: Color,
    pub accent: Color,
    /// Background of the selected card
    pub highlight: Color,
    pub dialog_bg: Color,
}

pub const DARK: Palette = Palette {
    background: Color::Reset,
    text: Color::White,
    dim: Color::DarkGray,
    border: Color::DarkGray,
    accent: Color::LightCyan,
    highlight: Color::Rgb(30, 35, 55),
    dialog_bg: Color::Rgb(10, 15, 35),
};

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(248, 250, 252),
    text: Color::Rgb(15, 23, 42),
    dim: Color::Rgb(100, 116, 139),
    border: Color::Rgb(148, 163, 184),
    accent: Color::Rgb(79, 70, 229),
    highlight: Color::Rgb(224, 231, 255),
    dialog_bg: Color::Rgb(255, 255, 255),
};

pub fn palette(dark_mode: bool) -> &'static Palette {
    if dark_mode {
        &DARK
    } else {
        &LIGHT
    }
}
