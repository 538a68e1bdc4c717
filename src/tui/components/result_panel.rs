// Result panel component
//
// Shown only while a short URL is in the slot: the success banner, the
// short URL, and the Copy / Visit / Generate New controls.

use crate::shortener::presenter::ResultPresenter;
use crate::theme::Theme;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const SUCCESS_HEADING: &str = "Short URL Generated Successfully!";

/// Rows the panel needs, borders included
pub const HEIGHT: u16 = 7;

/// Label of the copy control for the presenter's clipboard state
pub fn copy_label(presenter: &ResultPresenter) -> &'static str {
    if presenter.is_copied() {
        "Copied!"
    } else {
        "Copy"
    }
}

fn control<'a>(label: &'a str, hint: &'a str, theme: &Theme, active: bool) -> Vec<Span<'a>> {
    let bg = if active { theme.success } else { theme.button_bg };
    vec![
        Span::styled(
            format!(" {} ", label),
            Style::default()
                .fg(theme.button_fg)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}   ", hint), Style::default().fg(theme.muted)),
    ]
}

/// Render the result panel; draws nothing when no short URL is displayed
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let Some(presenter) = app.orchestrator.presenter() else {
        return;
    };
    let theme = &app.theme;

    let mut controls = vec![Span::raw("   ")];
    controls.extend(control(
        copy_label(presenter),
        "Ctrl+Y",
        theme,
        presenter.is_copied(),
    ));
    controls.extend(control("Generate New", "Ctrl+N", theme, false));

    let text = vec![
        Line::from(Span::styled(
            format!(" ✓ {}", SUCCESS_HEADING),
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(vec![
            Span::raw("   "),
            Span::styled(
                presenter.short_url(),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
        ]),
        Line::from(vec![
            Span::styled("   Visit ↗ ", Style::default().fg(theme.muted)),
            Span::styled(presenter.visit(), Style::default().fg(theme.info)),
        ]),
        Line::from(controls),
    ];

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.success))
            .title(" Result "),
    );

    f.render_widget(paragraph, area);
}
