//! Responsive layout helpers
//!
//! `LayoutContext` wraps the terminal size and answers the few sizing
//! questions the card view needs.

/// Terminal width breakpoints
pub mod breakpoints {
    /// Narrow terminal (< 80 columns): stats collapse to one line
    pub const SM_WIDTH: u16 = 80;
    /// Short terminal (< 24 rows): cards drop the company line
    pub const SM_HEIGHT: u16 = 24;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: ratatui::layout::Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Width as a percentage of the terminal.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage.min(100) as u32) / 100) as u16
    }

    /// Percentage width bounded to `[min, max]` and to the terminal itself.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage)
            .clamp(min, max)
            .min(self.width)
    }

    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Rows per card: name line, contact line, optional company line,
    /// plus a spacer.
    pub fn card_height(&self) -> u16 {
        if self.is_short() {
            2
        } else {
            3
        }
    }
}
