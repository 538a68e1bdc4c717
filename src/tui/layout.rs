// Screen layout - width breakpoints and the vertical panel split
//
// All size thresholds live here so render code has no magic numbers.

use super::components::{form, result_panel};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

const TITLE_HEIGHT: u16 = 4;
const STATUS_HEIGHT: u16 = 2;
/// Below this the logs panel is dropped to keep the form and result visible
const MIN_LOGS_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 60 cols: split pane
    Compact,
    /// 60-99 cols
    Normal,
    /// 100+ cols
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        *self >= min
    }
}

/// Areas for each panel of the single screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub form: Rect,
    /// Present only while a short URL is displayed
    pub result: Option<Rect>,
    /// Dropped when the terminal is too short
    pub logs: Option<Rect>,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn compute(area: Rect, has_result: bool) -> Self {
        let result_height = if has_result { result_panel::HEIGHT } else { 0 };
        let fixed = TITLE_HEIGHT + form::HEIGHT + result_height + STATUS_HEIGHT;
        let show_logs = area.height >= fixed + MIN_LOGS_HEIGHT;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TITLE_HEIGHT),
                Constraint::Length(form::HEIGHT),
                Constraint::Length(result_height),
                if show_logs {
                    Constraint::Min(MIN_LOGS_HEIGHT)
                } else {
                    Constraint::Min(0)
                },
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(area);

        Self {
            title: chunks[0],
            form: chunks[1],
            result: has_result.then_some(chunks[2]),
            logs: show_logs.then_some(chunks[3]),
            status: chunks[4],
        }
    }
}
