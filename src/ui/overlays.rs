//! Overlays drawn above the card list: user detail, export dialog, help
//! and the toast.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, ExportDialog, Toast, ToastKind};
use crate::export::ExportFormat;
use crate::models::UserRecord;

use super::components::{render_dialog_frame, DialogFrameConfig};
use super::helpers::yes_no;
use super::theme::{Palette, COLOR_ERROR, COLOR_FAVORITE, COLOR_INFO, COLOR_SUCCESS};

fn field<'a>(label: &'a str, value: String, palette: &Palette) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<10}", label), Style::default().fg(palette.dim)),
        Span::styled(value, Style::default().fg(palette.text)),
    ])
}

fn hint<'a>(text: &'a str, palette: &Palette) -> Line<'a> {
    Line::from(Span::styled(text, Style::default().fg(palette.dim)))
}

// ============================================================================
// Detail
// ============================================================================

pub fn render_detail(
    frame: &mut Frame,
    area: Rect,
    user: &UserRecord,
    is_favorite: bool,
    palette: &Palette,
) {
    let address = &user.address;
    let mut street = address.street.clone();
    if !address.suite.is_empty() {
        street = format!("{}, {}", street, address.suite);
    }

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                user.name.clone(),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  @{}", user.username),
                Style::default().fg(palette.dim),
            ),
        ]),
        Line::default(),
        field("Email", user.email.clone(), palette),
        field("Phone", user.phone.clone(), palette),
        field("Website", user.website.clone(), palette),
        field("Address", street, palette),
        field("", format!("{} {}", address.city, address.zipcode), palette),
    ];
    if !address.country.is_empty() {
        lines.push(field("", address.country.clone(), palette));
    }
    lines.push(field("Company", user.company.name.clone(), palette));
    if !user.company.catch_phrase.is_empty() {
        lines.push(field("", format!("\"{}\"", user.company.catch_phrase), palette));
    }
    if !user.company.bs.is_empty() {
        lines.push(field("", user.company.bs.clone(), palette));
    }
    lines.push(Line::from(vec![
        Span::styled(format!("{:<10}", "Favorite"), Style::default().fg(palette.dim)),
        Span::styled(
            yes_no(is_favorite),
            Style::default().fg(if is_favorite {
                COLOR_FAVORITE
            } else {
                palette.text
            }),
        ),
    ]));
    lines.push(Line::default());
    lines.push(hint(
        "space favorite · c email · p phone · S share · w web · m map · esc",
        palette,
    ));

    let config = DialogFrameConfig::new("User", lines.len() as u16).max_width(72);
    let inner = render_dialog_frame(frame, area, palette, &config);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

// ============================================================================
// Export
// ============================================================================

pub fn render_export_dialog(
    frame: &mut Frame,
    area: Rect,
    dialog: &ExportDialog,
    selected_count: usize,
    palette: &Palette,
) {
    let mut lines = vec![hint("Format", palette)];
    for format in ExportFormat::ALL {
        let active = format == dialog.format();
        let (marker, style) = if active {
            (
                "● ",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("○ ", Style::default().fg(palette.text))
        };
        lines.push(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(format!("{:<6}", format.label()), style),
            Span::styled(format.description(), Style::default().fg(palette.dim)),
        ]));
    }
    lines.push(Line::default());
    let check = if dialog.request.favorites_only {
        "[x]"
    } else {
        "[ ]"
    };
    lines.push(Line::from(vec![
        Span::styled(format!("{} ", check), Style::default().fg(palette.accent)),
        Span::styled("Favorites only", Style::default().fg(palette.text)),
    ]));
    lines.push(Line::from(Span::styled(
        format!(
            "{} user{} will be exported to {}",
            selected_count,
            if selected_count == 1 { "" } else { "s" },
            dialog.format().file_name()
        ),
        Style::default().fg(palette.dim),
    )));
    lines.push(Line::default());
    lines.push(hint("tab format · space favorites · enter save · c copy · esc", palette));

    let config = DialogFrameConfig::new("Export Users", lines.len() as u16).max_width(64);
    let inner = render_dialog_frame(frame, area, palette, &config);
    frame.render_widget(Paragraph::new(lines), inner);
}

// ============================================================================
// Help
// ============================================================================

const HELP_ROWS: &[(&str, &str)] = &[
    ("f", "Fetch users"),
    ("h", "Hide users"),
    ("/", "Search by name, email or username"),
    ("s / o", "Cycle sort field / flip order"),
    ("v", "Show favorites only"),
    ("j k ↑ ↓", "Select card"),
    ("← → [ ] 1-9", "Change page"),
    ("space", "Toggle favorite"),
    ("enter", "User details"),
    ("c / S", "Copy email / share"),
    ("w / m", "Open website / map"),
    ("e", "Export"),
    ("t / F", "Theme / fullscreen"),
    ("q", "Quit"),
];

pub fn render_help(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines: Vec<Line> = HELP_ROWS
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!("{:<13}", keys), Style::default().fg(palette.accent)),
                Span::styled(*action, Style::default().fg(palette.text)),
            ])
        })
        .collect();
    let config = DialogFrameConfig::new("Keys", lines.len() as u16);
    let inner = render_dialog_frame(frame, area, palette, &config);
    frame.render_widget(Paragraph::new(lines), inner);
}

// ============================================================================
// Toast
// ============================================================================

/// Toast in the bottom-right corner, above the footer.
pub fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast, palette: &Palette) {
    let color = match toast.kind {
        ToastKind::Success => COLOR_SUCCESS,
        ToastKind::Error => COLOR_ERROR,
        ToastKind::Info => COLOR_INFO,
    };
    let width = (toast.message.chars().count() as u16 + 4).min(area.width);
    if width == 0 || area.height < 4 {
        return;
    }
    let toast_area = Rect {
        x: area.right().saturating_sub(width + 1),
        y: area.bottom().saturating_sub(4),
        width,
        height: 3,
    };
    frame.render_widget(Clear, toast_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(palette.dialog_bg));
    frame.render_widget(
        Paragraph::new(Span::styled(
            toast.message.clone(),
            Style::default().fg(color),
        ))
        .block(block),
        toast_area,
    );
}

/// Overlay entry point.
pub fn render_overlays(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    use crate::app::Overlay;

    match app.overlay {
        Overlay::None => {}
        Overlay::Detail(id) => {
            if let Some(user) = app.records.get(id) {
                render_detail(frame, area, user, app.favorites.contains(id), palette);
            }
        }
        Overlay::Export(dialog) => {
            let count = crate::export::select_for_export(
                &app.records,
                &app.favorites,
                dialog.request.favorites_only,
            )
            .len();
            render_export_dialog(frame, area, &dialog, count, palette);
        }
        Overlay::Help => render_help(frame, area, palette),
    }

    if let Some(toast) = &app.toast {
        render_toast(frame, area, toast, palette);
    }
}
