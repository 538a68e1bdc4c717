// Title bar component
//
// App name with a spinner while a request is in flight, and the subtitle.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const TITLE: &str = "ShortURL Generator";
pub const SUBTITLE: &str = "Convert long URLs into short, easy-to-share links.";

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let mut title = vec![Span::styled(
        format!(" 🔗 {}", TITLE),
        Style::default()
            .fg(theme.title)
            .add_modifier(Modifier::BOLD),
    )];
    if app.is_pending() {
        title.push(Span::styled(
            format!("  {} generating", app.spinner_char()),
            Style::default().fg(theme.primary),
        ));
    }

    let text = vec![
        Line::from(title),
        Line::from(Span::styled(
            format!(" {}", SUBTITLE),
            Style::default().fg(theme.muted),
        )),
    ];

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title_top(Line::from(" ? help ").right_aligned()),
    );

    f.render_widget(paragraph, area);
}
