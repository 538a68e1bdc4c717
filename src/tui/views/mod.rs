// Views module - screen-level rendering logic
//
// A single screen stacked top to bottom: title, form, result (only while a
// short URL is displayed), system logs, status bar. Modals and toasts are
// overlays drawn last.

mod modal;

use super::app::App;
use crate::tui::components::{self, form, result_panel};
use crate::tui::layout::ScreenLayout;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let screen = ScreenLayout::compute(f.area(), app.has_result());

    components::title_bar::render(f, screen.title, app);
    form::render(f, screen.form, app);
    if let Some(area) = screen.result {
        result_panel::render(f, area, app);
    }
    if let Some(area) = screen.logs {
        components::logs_panel::render(f, area, app);
    }
    components::status_bar::render(f, screen.status, app);

    if let Some(modal_state) = &app.modal {
        modal::render(f, modal_state, app);
    }

    // Toast on top of modal too
    if let Some(ref toast) = app.toast {
        let area = f.area();
        toast.render(f, area, &app.theme);
    }

    app.clear_expired_toast();
}
