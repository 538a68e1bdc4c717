// Theme support for the TUI
//
// Two built-in palettes selected by name from config. Unknown names fall
// back to dark.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ─── Semantic Colors ─────────────────────────────────────
    pub primary: Color,
    pub success: Color,
    pub error: Color,
    pub warn: Color,
    pub info: Color,

    // ─── UI Element Colors ───────────────────────────────────
    pub title: Color,
    pub status_bar: Color,
    pub border: Color,
    pub highlight: Color,
    pub panel_logs: Color,

    // ─── Terminal Colors ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,

    // ─── Button Colors ───────────────────────────────────────
    pub button_bg: Color,
    pub button_fg: Color,
    pub button_disabled: Color,

    pub border_type: BorderType,
}

impl Theme {
    /// Load theme by name ("dark" or "light")
    pub fn by_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "light" => Self::light(),
            "dark" => Self::dark(),
            other => {
                tracing::warn!("Unknown theme {:?}, using dark", other);
                Self::dark()
            }
        }
    }

    /// Dark palette: slate background, blue accents
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            primary: Color::Rgb(0x60, 0xa5, 0xfa),  // blue-400
            success: Color::Rgb(0x4a, 0xde, 0x80),  // green-400
            error: Color::Rgb(0xf8, 0x71, 0x71),    // red-400
            warn: Color::Rgb(0xfa, 0xcc, 0x15),     // yellow-400
            info: Color::Rgb(0x93, 0xc5, 0xfd),     // blue-300
            title: Color::Rgb(0xf1, 0xf5, 0xf9),
            status_bar: Color::Rgb(0x4a, 0xde, 0x80),
            border: Color::Rgb(0x47, 0x55, 0x69),   // slate-600
            highlight: Color::Rgb(0x60, 0xa5, 0xfa),
            panel_logs: Color::Rgb(0x64, 0x74, 0x8b),
            background: Color::Rgb(0x0f, 0x17, 0x2a), // slate-900
            foreground: Color::Rgb(0xe2, 0xe8, 0xf0),
            muted: Color::Rgb(0x94, 0xa3, 0xb8),
            button_bg: Color::Rgb(0x25, 0x63, 0xeb), // blue-600
            button_fg: Color::Rgb(0xff, 0xff, 0xff),
            button_disabled: Color::Rgb(0x33, 0x41, 0x55),
            border_type: BorderType::Rounded,
        }
    }

    /// Light palette: white background, blue accents
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            primary: Color::Rgb(0x25, 0x63, 0xeb),
            success: Color::Rgb(0x16, 0xa3, 0x4a),
            error: Color::Rgb(0xdc, 0x26, 0x26),
            warn: Color::Rgb(0xca, 0x8a, 0x04),
            info: Color::Rgb(0x1d, 0x4e, 0xd8),
            title: Color::Rgb(0x1f, 0x29, 0x37),
            status_bar: Color::Rgb(0x16, 0xa3, 0x4a),
            border: Color::Rgb(0xd1, 0xd5, 0xdb),
            highlight: Color::Rgb(0x25, 0x63, 0xeb),
            panel_logs: Color::Rgb(0x6b, 0x72, 0x80),
            background: Color::Rgb(0xf9, 0xfa, 0xfb),
            foreground: Color::Rgb(0x11, 0x18, 0x27),
            muted: Color::Rgb(0x6b, 0x72, 0x80),
            button_bg: Color::Rgb(0x25, 0x63, 0xeb),
            button_fg: Color::Rgb(0xff, 0xff, 0xff),
            button_disabled: Color::Rgb(0x9c, 0xa3, 0xaf),
            border_type: BorderType::Rounded,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
