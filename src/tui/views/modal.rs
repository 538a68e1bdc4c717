// Modal overlay rendering
//
// - Help modal: keyboard shortcuts and current theme/endpoint
// - Alert modal: blocking notice (clipboard failures)

use crate::tui::app::App;
use crate::tui::modal::Modal;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::Alert { title, message } => render_alert(f, app, title, message),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render the help modal overlay
fn render_help(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let key_style = Style::default().fg(theme.primary);
    let desc_style = Style::default().fg(theme.foreground);
    let header_style = Style::default()
        .fg(theme.highlight)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(theme.border);

    // "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Input", header_style)),
        kb("Type/paste", "Edit the long URL"),
        kb("Backspace", "Delete last character"),
        kb("Ctrl+U", "Clear the field"),
        kb("Enter", "Generate short URL"),
        Line::raw(""),
        Line::from(Span::styled("  Result", header_style)),
        kb("Ctrl+Y, y", "Copy short URL"),
        kb("Ctrl+N, n", "Generate new"),
        Line::from(Span::styled(
            "    (y / n work when the field is empty)",
            Style::default().fg(theme.muted),
        )),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("?", "Toggle this help"),
        kb("Esc", "Quit / close dialog"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(theme.name.as_str(), key_style),
        ]),
        Line::from(vec![
            Span::styled("  Endpoint: ", desc_style),
            Span::styled(app.endpoint.as_str(), key_style),
        ]),
    ]);

    let area = centered_rect(48, 24, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.highlight))
                .border_type(theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}

/// Render a blocking alert
fn render_alert(f: &mut Frame, app: &App, title: &str, message: &str) {
    let theme = &app.theme;
    let area = centered_rect(44, 7, f.area());
    f.render_widget(Clear, area);

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled(
            message,
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled("[ OK ]", Style::default().fg(theme.foreground))),
    ]);

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.error))
                .border_type(theme.border_type)
                .title(format!(" {} ", title))
                .title_bottom(Line::from(" Enter or Esc to dismiss ").centered()),
        );

    f.render_widget(paragraph, area);
}
