//! Dialog Frame Component
//!
//! A centered dialog frame with rounded borders. Clears the background and
//! sizes itself to the terminal.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::helpers::centered_rect;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::Palette;

/// Configuration for rendering a dialog frame
#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title displayed in the border
    pub title: &'a str,
    /// Content height (not including borders)
    pub content_height: u16,
    /// Optional fixed width (otherwise responsive)
    pub fixed_width: Option<u16>,
    pub min_width: u16,
    pub max_width: u16,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            fixed_width: None,
            min_width: 30,
            max_width: 60,
        }
    }

    pub fn fixed_width(mut self, width: u16) -> Self {
        self.fixed_width = Some(width);
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }
}

fn calculate_dialog_width(ctx: &LayoutContext, config: &DialogFrameConfig) -> u16 {
    if let Some(fixed) = config.fixed_width {
        return fixed.min(ctx.width.saturating_sub(4));
    }
    if ctx.is_narrow() {
        ctx.bounded_width(90, config.min_width, config.max_width)
    } else {
        ctx.bounded_width(50, config.min_width, config.max_width)
    }
}

/// Render a dialog frame and return the inner content area.
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    config: &DialogFrameConfig,
) -> Rect {
    let ctx = LayoutContext::from_rect(area);
    let dialog_area = centered_rect(
        area,
        calculate_dialog_width(&ctx, config),
        config.content_height + 2,
    );

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.dialog_bg).fg(palette.text));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_frame_config_new() {
        let config = DialogFrameConfig::new("Export", 10);
        assert_eq!(config.title, "Export");
        assert_eq!(config.content_height, 10);
        assert!(config.fixed_width.is_none());
        assert_eq!(config.min_width, 30);
        assert_eq!(config.max_width, 60);
    }

    #[test]
    fn test_calculate_dialog_width_fixed_clamped() {
        let ctx = LayoutContext::new(40, 20);
        let config = DialogFrameConfig::new("Test", 10).fixed_width(50);
        assert_eq!(calculate_dialog_width(&ctx, &config), 36);
    }

    #[test]
    fn test_calculate_dialog_width_normal() {
        let ctx = LayoutContext::new(120, 40);
        let config = DialogFrameConfig::new("Test", 10);
        assert_eq!(calculate_dialog_width(&ctx, &config), 60);
        let config = config.max_width(50);
        assert_eq!(calculate_dialog_width(&ctx, &config), 50);
    }
}
