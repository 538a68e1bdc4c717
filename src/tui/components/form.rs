// Form component
//
// URL input field, the Generate button and the validation/request error line.

use crate::theme::Theme;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const PLACEHOLDER: &str = "Enter your long URL here (e.g., https://www.google.com)";

/// Rows the form needs, borders included
pub const HEIGHT: u16 = 6;

/// Label of the submit control for the current state
pub fn button_label(pending: bool) -> &'static str {
    if pending {
        "Generating..."
    } else {
        "Generate"
    }
}

/// The tail of `text` that fits in `width` columns
fn visible_tail(text: &str, width: usize) -> &str {
    if text.width() <= width {
        return text;
    }
    let mut used = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

fn button<'a>(label: &'a str, enabled: bool, theme: &Theme) -> Span<'a> {
    let style = if enabled {
        Style::default()
            .fg(theme.button_fg)
            .bg(theme.button_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted).bg(theme.button_disabled)
    };
    Span::styled(format!(" {} ", label), style)
}

/// Render the input form
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let pending = app.is_pending();
    let error = app.state().error_message();

    let border_color = if error.is_some() {
        theme.error
    } else {
        theme.highlight
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border_color))
        .title(" Long URL ");
    let inner = block.inner(area);

    // One column stays free for the cursor
    let field_width = inner.width.saturating_sub(3) as usize;
    let input_line = if app.input.is_empty() {
        Line::from(vec![
            Span::raw(" › "),
            Span::styled(PLACEHOLDER, Style::default().fg(theme.muted)),
        ])
    } else {
        Line::from(vec![
            Span::raw(" › "),
            Span::styled(
                visible_tail(&app.input, field_width.saturating_sub(1)),
                Style::default().fg(theme.foreground),
            ),
        ])
    };

    let button_line = Line::from(vec![
        Span::raw("   "),
        button(button_label(pending), !pending, theme),
        Span::styled("  Enter", Style::default().fg(theme.muted)),
    ]);

    let message_line = match error {
        Some(message) => Line::from(Span::styled(
            format!("   {}", message),
            Style::default().fg(theme.error),
        )),
        None => Line::raw(""),
    };

    let paragraph = Paragraph::new(vec![input_line, Line::raw(""), button_line, message_line])
        .style(Style::default().fg(theme.foreground))
        .block(block);
    f.render_widget(paragraph, area);

    // Cursor at the end of the typed text, hidden while a modal is open
    if app.modal.is_none() && inner.height > 0 {
        let typed = visible_tail(&app.input, field_width.saturating_sub(1)).width() as u16;
        let x = (inner.x + 3 + typed).min(inner.right().saturating_sub(1));
        f.set_cursor_position((x, inner.y));
    }
}
