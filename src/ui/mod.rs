//! UI rendering for userdeck
//!
//! Layout, top to bottom:
//! - Header with title and stats tiles
//! - Search / sort / filter bar with the "N of M users" summary
//! - Card list for the current page (or an empty/loading hint)
//! - Page strip
//! - Keybind hints
//!
//! Overlays (detail, export, help) and the toast are drawn last. Rendering
//! reads [`App`] only; the displayed list comes from [`App::view`].

mod cards;
mod components;
mod header;
mod helpers;
mod layout;
mod overlays;
mod pagination;
mod theme;

pub use layout::LayoutContext;
pub use theme::{palette, Palette, DARK, LIGHT};

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::{App, Focus, Overlay};

use theme::COLOR_ERROR;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = palette(app.dark_mode);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let ctx = LayoutContext::from_rect(area);
    let error_rows = u16::from(app.fetch.last_error().is_some() && !app.records.is_empty());
    let [header_area, controls_area, error_area, body_area, pages_area, footer_area] =
        Layout::vertical([
            Constraint::Length(header::header_height(&ctx)),
            Constraint::Length(1),
            Constraint::Length(error_rows),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

    let view = app.view();

    header::render_header(frame, header_area, app, palette);
    header::render_controls(frame, controls_area, app, &view, palette);

    if let Some(err) = app.fetch.last_error().filter(|_| error_rows > 0) {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {}", err.user_message()),
                Style::default().fg(COLOR_ERROR),
            )),
            error_area,
        );
    }

    cards::render_body(frame, body_area, app, &view, palette);
    if app.users_visible {
        pagination::render_pagination(frame, pages_area, &view.page, palette);
    }
    render_footer(frame, footer_area, app, palette);

    overlays::render_overlays(frame, area, app, palette);
}

/// Context-sensitive keybind hints.
fn render_footer(frame: &mut Frame, area: ratatui::layout::Rect, app: &App, palette: &Palette) {
    let hints = match (app.overlay, app.focus) {
        (Overlay::Export(_), _) | (Overlay::Detail(_), _) => "",
        (Overlay::Help, _) => " any key to close",
        (Overlay::None, Focus::Search) => " type to search · ctrl+u clear · enter done",
        (Overlay::None, Focus::Cards) if !app.users_visible => {
            " f fetch · t theme · ? help · q quit"
        }
        (Overlay::None, Focus::Cards) => {
            " f reload · / search · s sort · v favorites · space ★ · enter details · e export · ? help · q quit"
        }
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(hints, Style::default().fg(palette.dim)))),
        area,
    );
}
