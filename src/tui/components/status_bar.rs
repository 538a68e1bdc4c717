// Status bar component
//
// Uptime, session counters and the endpoint requests go to.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar with session statistics
///
/// Narrow terminals get the compact icon-only format.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let stats = &app.stats;
    let bp = Breakpoint::from_width(area.width);

    let status_text = if bp.at_least(Breakpoint::Wide) {
        format!(
            " {} │ ✅ {} shortened │ ✗ {} failed │ 📋 {} copied │ → {}",
            app.uptime(),
            stats.shortened,
            stats.failed,
            stats.copied,
            app.endpoint,
        )
    } else if bp.at_least(Breakpoint::Normal) {
        format!(
            " {} │ ✅ {} │ ✗ {} │ 📋 {} │ → {}",
            app.uptime(),
            stats.shortened,
            stats.failed,
            stats.copied,
            app.endpoint,
        )
    } else {
        format!(
            " {} │ ✅ {} │ ✗ {}",
            app.uptime(),
            stats.shortened,
            stats.failed
        )
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
