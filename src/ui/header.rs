//! Header: title, stats tiles and the search/sort/filter bar.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::stats::DeckStats;
use crate::view_state::DerivedView;

use super::helpers::spinner_frame;
use super::layout::LayoutContext;
use super::theme::{Palette, COLOR_FAVORITE};

/// Rows used by [`render_header`] for a terminal of this size.
pub fn header_height(ctx: &LayoutContext) -> u16 {
    if ctx.is_narrow() {
        2
    } else {
        4
    }
}

/// Title line plus the stats tiles.
pub fn render_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let ctx = LayoutContext::from_rect(area);
    let stats = DeckStats::collect(&app.records, &app.favorites);

    let mut title = vec![Span::styled(
        " userdeck ",
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )];
    if app.is_loading() {
        title.push(Span::styled(
            format!("{} loading", spinner_frame(app.tick_count)),
            Style::default().fg(palette.dim),
        ));
    }

    if ctx.is_narrow() {
        let compact = stats
            .tiles()
            .iter()
            .map(|(label, value)| format!("{} {}", label, value))
            .collect::<Vec<_>>()
            .join(" · ");
        let lines = vec![
            Line::from(title),
            Line::from(Span::styled(
                format!(" {}", compact),
                Style::default().fg(palette.dim),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }

    let [title_area, tiles_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(3)]).areas(area);
    frame.render_widget(Paragraph::new(Line::from(title)), title_area);

    let tiles = stats.tiles();
    let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(tiles_area);
    for ((label, value), column) in tiles.iter().zip(columns.iter()) {
        render_tile(frame, *column, label, *value, palette);
    }
}

fn render_tile(frame: &mut Frame, area: Rect, label: &str, value: usize, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border));
    let line = Line::from(vec![
        Span::styled(
            value.to_string(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(label.to_string(), Style::default().fg(palette.dim)),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// One-line search, sort and filter bar with the "N of M users" summary.
pub fn render_controls(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    view: &DerivedView<'_>,
    palette: &Palette,
) {
    let query = &app.view.query;
    let searching = app.focus == Focus::Search;

    let search_style = if searching {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.text)
    };
    let mut spans = vec![
        Span::styled(" / ", Style::default().fg(palette.dim)),
        Span::styled(
            if query.search_term.is_empty() && !searching {
                "Search users...".to_string()
            } else {
                query.search_term.clone()
            },
            if query.search_term.is_empty() && !searching {
                Style::default().fg(palette.dim)
            } else {
                search_style
            },
        ),
    ];
    if searching {
        spans.push(Span::styled("▏", Style::default().fg(palette.accent)));
    }

    spans.push(Span::styled("  Sort: ", Style::default().fg(palette.dim)));
    spans.push(Span::styled(
        format!(
            "{} {}",
            query.sort_key.label(),
            query.sort_direction.symbol()
        ),
        Style::default().fg(palette.text),
    ));

    spans.push(Span::styled("  Show: ", Style::default().fg(palette.dim)));
    if query.favorites_only {
        spans.push(Span::styled("★ Favorites", Style::default().fg(COLOR_FAVORITE)));
    } else {
        spans.push(Span::styled("All", Style::default().fg(palette.text)));
    }

    if app.fetch.has_loaded() {
        spans.push(Span::styled(
            format!("  {}", view.summary()),
            Style::default().fg(palette.dim),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_height() {
        assert_eq!(header_height(&LayoutContext::new(60, 24)), 2);
        assert_eq!(header_height(&LayoutContext::new(100, 30)), 4);
    }
}
