//! Card list for the current page and the empty/loading states.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::models::UserRecord;
use crate::view_state::DerivedView;

use super::helpers::{spinner_frame, truncate_string};
use super::layout::LayoutContext;
use super::theme::{Palette, COLOR_ERROR, COLOR_FAVORITE};

/// Render the body: cards when there is something to show, a centered
/// hint otherwise.
pub fn render_body(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    view: &DerivedView<'_>,
    palette: &Palette,
) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    if let Some(message) = empty_state(app, view) {
        let y = area.y + area.height / 2;
        let line_area = Rect::new(area.x, y.min(area.bottom().saturating_sub(1)), area.width, 1);
        let style = if app.fetch.last_error().is_some() && app.records.is_empty() {
            Style::default().fg(COLOR_ERROR)
        } else {
            Style::default().fg(palette.dim)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(message, style)).alignment(Alignment::Center),
            line_area,
        );
        return;
    }

    let ctx = LayoutContext::from_rect(area);
    let card_height = ctx.card_height();
    let selected = app.selected.min(view.page_items().len().saturating_sub(1));

    for (index, user) in view.page_items().iter().enumerate() {
        let y = area.y + index as u16 * (card_height + 1);
        if y + card_height > area.bottom() {
            break;
        }
        let card_area = Rect::new(area.x, y, area.width, card_height);
        let is_favorite = app.favorites.contains(user.id);
        render_card(
            frame,
            card_area,
            user,
            is_favorite,
            index == selected,
            palette,
        );
    }
}

/// Message shown instead of cards, if any.
fn empty_state(app: &App, view: &DerivedView<'_>) -> Option<String> {
    if !app.users_visible {
        return Some(if app.records.is_empty() {
            "Press f to fetch users".to_string()
        } else {
            "Users hidden. Press f to show them again".to_string()
        });
    }
    if app.records.is_empty() {
        if app.is_loading() {
            return Some(format!("{} Loading users...", spinner_frame(app.tick_count)));
        }
        if let Some(err) = app.fetch.last_error() {
            return Some(if err.is_retryable() {
                format!("{} (press f to retry)", err.user_message())
            } else {
                err.user_message()
            });
        }
        if app.fetch.has_loaded() {
            return Some("No users available".to_string());
        }
    }
    if view.filtered.is_empty() {
        return Some(if app.view.query.favorites_only && app.favorites.is_empty() {
            "No favorites yet. Press space on a card to add one".to_string()
        } else {
            "No users match your search".to_string()
        });
    }
    None
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    user: &UserRecord,
    is_favorite: bool,
    is_selected: bool,
    palette: &Palette,
) {
    let width = area.width.saturating_sub(4) as usize;
    let base = if is_selected {
        Style::default().bg(palette.highlight)
    } else {
        Style::default()
    };
    let marker = if is_selected { "▌ " } else { "  " };
    let star = if is_favorite { "★ " } else { "☆ " };

    let mut lines = vec![Line::from(vec![
        Span::styled(marker, Style::default().fg(palette.accent)),
        Span::styled(
            star,
            Style::default().fg(if is_favorite {
                COLOR_FAVORITE
            } else {
                palette.dim
            }),
        ),
        Span::styled(
            truncate_string(&user.name, width.saturating_sub(2)),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" @{}", user.username),
            Style::default().fg(palette.dim),
        ),
    ])];

    let contact = format!("{} · {} · {}", user.email, user.phone, user.address.city);
    lines.push(Line::from(vec![
        Span::raw("    "),
        Span::styled(
            truncate_string(&contact, width),
            Style::default().fg(palette.text),
        ),
    ]));

    if area.height > 2 {
        let company = if user.company.catch_phrase.is_empty() {
            user.company.name.clone()
        } else {
            format!("{} · \"{}\"", user.company.name, user.company.catch_phrase)
        };
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(truncate_string(&company, width), Style::default().fg(palette.dim)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).style(base), area);
}
