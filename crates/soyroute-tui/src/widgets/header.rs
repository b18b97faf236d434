//! Header bar widget
//!
//! Provides the main header with the dashboard title, page phase and
//! keybindings.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use soyroute_core::AppPhase;

use crate::theme::{palette, styles};

pub const APP_TITLE: &str = "SoyRoute";
pub const APP_SUBTITLE: &str = "Logística de Soja · Sorriso (MT)";

const SHORTCUTS: [(&str, &str); 5] = [
    ("1-6", "Views"),
    ("←→", "Navegar"),
    ("t", "Gráfico"),
    ("R", "Recarregar"),
    ("q", "Sair"),
];

/// Main header showing the title, phase indicator and keybindings
pub struct MainHeader<'a> {
    phase: &'a AppPhase,
    show_shortcuts: bool,
}

impl<'a> MainHeader<'a> {
    pub fn new(phase: &'a AppPhase) -> Self {
        Self {
            phase,
            show_shortcuts: true,
        }
    }

    pub fn show_shortcuts(mut self, show: bool) -> Self {
        self.show_shortcuts = show;
        self
    }

    fn title_line(&self) -> Line<'static> {
        let (icon, _label, status_style) = styles::phase_indicator(self.phase);
        Line::from(vec![
            Span::raw(" "),
            Span::styled(icon, status_style),
            Span::raw(" "),
            Span::styled(APP_TITLE, styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", Style::default().fg(palette::TEXT_MUTED)),
            Span::raw(" "),
            Span::styled(APP_SUBTITLE, styles::text_secondary()),
        ])
    }

    fn shortcuts_line() -> Line<'static> {
        let mut spans = Vec::new();
        for (i, (key, label)) in SHORTCUTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!("] {}", label), styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = self.title_line();
        let title_width = title.width() as u16;
        buf.set_line(inner.x, inner.y, &title, inner.width);

        if !self.show_shortcuts {
            return;
        }

        // Right-align shortcuts when they fit next to the title
        let shortcuts = Self::shortcuts_line();
        let shortcuts_width = shortcuts.width() as u16;
        if title_width + shortcuts_width + 2 <= inner.width {
            let x = inner.right() - shortcuts_width - 1;
            buf.set_line(x, inner.y, &shortcuts, shortcuts_width);
        }
    }
}
