//! Semantic style builders for the dashboard.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use soyroute_core::{AppPhase, LineKind};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - the active menu entry
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

// --- Narration lines ---

/// Style of a narration line; hidden lines are drawn invisible
pub fn narration_line(kind: LineKind, visible: bool) -> Style {
    if !visible {
        return Style::default()
            .fg(palette::TERMINAL_BG)
            .bg(palette::TERMINAL_BG);
    }
    let style = Style::default()
        .fg(palette::line_kind_color(kind))
        .bg(palette::TERMINAL_BG);
    match kind {
        LineKind::Success | LineKind::Failure => style.add_modifier(Modifier::BOLD),
        LineKind::Progress | LineKind::Warning => style,
    }
}

// --- Phase indicator mapping ---

/// Phase indicator for the header and status bar.
///
/// Returns `(icon_char, label, Style)` for the given AppPhase.
pub fn phase_indicator(phase: &AppPhase) -> (&'static str, &'static str, Style) {
    match phase {
        AppPhase::Running => (
            "●",
            "Pronto",
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        AppPhase::Initializing => ("○", "Carregando", Style::default().fg(palette::TEXT_MUTED)),
        AppPhase::Quitting => ("✗", "Encerrando", Style::default().fg(palette::STATUS_RED)),
    }
}
