//! Page strip under the card list.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::view_state::{visible_pages, Page, PageMarker};

use super::theme::Palette;

/// Spans for the strip, e.g. `‹ 1 … 4 [5] 6 … 9 ›`. Empty for a single page.
pub fn strip_spans(page: &Page, palette: &Palette) -> Vec<Span<'static>> {
    let markers = visible_pages(page.number, page.total_pages);
    if markers.is_empty() {
        return Vec::new();
    }

    let arrow = |enabled: bool, glyph: &'static str| {
        Span::styled(
            glyph,
            Style::default().fg(if enabled { palette.text } else { palette.border }),
        )
    };

    let mut spans = vec![arrow(page.has_previous(), "‹"), Span::raw(" ")];
    for marker in markers {
        match marker {
            PageMarker::Number(n) if n == page.number => spans.push(Span::styled(
                format!("[{}]", n),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            PageMarker::Number(n) => {
                spans.push(Span::styled(n.to_string(), Style::default().fg(palette.dim)))
            }
            PageMarker::Gap => spans.push(Span::styled("…", Style::default().fg(palette.dim))),
        }
        spans.push(Span::raw(" "));
    }
    spans.push(arrow(page.has_next(), "›"));
    spans
}

pub fn render_pagination(frame: &mut Frame, area: Rect, page: &Page, palette: &Palette) {
    let spans = strip_spans(page, palette);
    if spans.is_empty() {
        return;
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::DARK;

    fn text(page: Page) -> String {
        strip_spans(&page, &DARK)
            .iter()
            .map(|s| s.content.as_ref())
            .collect()
    }

    #[test]
    fn test_single_page_has_no_strip() {
        assert!(text(Page::resolve(1, 5, 3)).is_empty());
    }

    #[test]
    fn test_strip_marks_current_page() {
        assert_eq!(text(Page::resolve(2, 5, 12)), "‹ 1 [2] 3 ›");
    }

    #[test]
    fn test_strip_with_gaps() {
        // 50 items -> 10 pages
        assert_eq!(text(Page::resolve(5, 5, 50)), "‹ 1 … 3 4 [5] 6 7 … 10 ›");
    }
}
