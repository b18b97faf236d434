//! Color palette for the dashboard.

use ratatui::style::Color;
use soyroute_core::{parse_hex_color, LineKind};

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;

/// Background of the scenario terminals
pub const TERMINAL_BG: Color = Color::Rgb(12, 14, 18);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

/// Foreground on accent backgrounds (active menu entry)
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Terminal narration ---
pub const TERMINAL_PROGRESS: Color = Color::Rgb(0, 255, 65);
pub const TERMINAL_WARNING: Color = Color::Yellow;
pub const TERMINAL_SUCCESS: Color = Color::LightGreen;
pub const TERMINAL_FAILURE: Color = Color::LightRed;

/// Color of a narration line of the given kind
pub fn line_kind_color(kind: LineKind) -> Color {
    match kind {
        LineKind::Progress => TERMINAL_PROGRESS,
        LineKind::Warning => TERMINAL_WARNING,
        LineKind::Success => TERMINAL_SUCCESS,
        LineKind::Failure => TERMINAL_FAILURE,
    }
}

/// Convert a `#RRGGBB` chart color, falling back to the accent color
pub fn hex_color(hex: &str) -> Color {
    parse_hex_color(hex)
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(ACCENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_parses_severity_colors() {
        assert_eq!(hex_color("#27AE60"), Color::Rgb(0x27, 0xAE, 0x60));
        assert_eq!(hex_color("#C0392B"), Color::Rgb(0xC0, 0x39, 0x2B));
    }

    #[test]
    fn test_hex_color_fallback() {
        assert_eq!(hex_color("green"), ACCENT);
        assert_eq!(hex_color(""), ACCENT);
    }

    #[test]
    fn test_line_kinds_have_distinct_colors() {
        let colors = [
            line_kind_color(LineKind::Progress),
            line_kind_color(LineKind::Warning),
            line_kind_color(LineKind::Success),
            line_kind_color(LineKind::Failure),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
