//! Status bar widget
//!
//! Displays the page phase, the visible view, the chart presentation, how
//! many scenarios have finished narrating, and optional key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use soyroute_app::AppState;

use crate::theme::{palette, styles};

const KEY_HINTS: &str = "←→/Tab navegar · Enter abrir · t tipo · R recarregar · q sair";

/// Status bar widget showing application state
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn state_indicator(&self) -> Span<'static> {
        let (icon, label, style) = styles::phase_indicator(&self.state.phase);
        Span::styled(format!("{} {}", icon, label), style)
    }

    fn current_view(&self) -> Span<'static> {
        match self.state.views.registry().visible_view() {
            Some(view) => Span::styled(view.title.clone(), styles::text_primary()),
            None => Span::styled("—", styles::text_muted()),
        }
    }

    /// Chart presentation, once the chart exists
    fn chart_type(&self) -> Option<Span<'static>> {
        self.state.chart.options().map(|options| {
            Span::styled(
                format!("Gráfico: {}", options.kind.label()),
                styles::accent(),
            )
        })
    }

    fn narration_progress(&self) -> Span<'static> {
        let total = self.state.narrator.containers().count();
        let typed = self.state.narrator.containers().filter(|c| c.typed).count();
        let style = if total > 0 && typed == total {
            Style::default().fg(palette::STATUS_GREEN)
        } else {
            styles::text_secondary()
        };
        Span::styled(format!("Cenários {}/{}", typed, total), style)
    }

    fn build_segments(&self) -> Vec<Span<'static>> {
        let separator = Span::styled(" │ ", styles::border_inactive());

        let mut segments = vec![Span::raw(" "), self.state_indicator()];

        segments.push(separator.clone());
        segments.push(self.current_view());

        if let Some(chart) = self.chart_type() {
            segments.push(separator.clone());
            segments.push(chart);
        }

        segments.push(separator);
        segments.push(self.narration_progress());
        segments
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        buf.set_style(area, Style::default().bg(palette::DEEPEST_BG));

        let left = Line::from(self.build_segments());
        let left_width = left.width() as u16;
        buf.set_line(area.x, area.y, &left, area.width);

        if !self.state.settings.ui.show_key_hints {
            return;
        }
        let hints = Line::from(Span::styled(KEY_HINTS, styles::text_muted()));
        let hints_width = hints.width() as u16;
        if left_width + hints_width + 2 <= area.width {
            let x = area.right() - hints_width - 1;
            buf.set_line(x, area.y, &hints, hints_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_state, create_test_state_on, TestTerminal};

    #[test]
    fn test_status_bar_shows_phase_and_view() {
        let state = create_test_state();
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("Pronto"));
        assert!(term.buffer_contains("Sobre o Projeto"));
        assert!(term.buffer_contains("Cenários 0/4"));
        assert!(!term.buffer_contains("Gráfico:"));
    }

    #[test]
    fn test_status_bar_before_load() {
        let state = AppState::new();
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("Carregando"));
        assert!(term.buffer_contains("—"));
    }

    #[test]
    fn test_status_bar_shows_chart_type_after_dashboard() {
        let state = create_test_state_on("dashboard");
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("Dashboard Financeiro"));
        assert!(term.buffer_contains("Gráfico: Barras"));
    }

    #[test]
    fn test_status_bar_key_hints_follow_settings() {
        let mut state = create_test_state();
        let mut term = TestTerminal::with_size(140, 1);
        term.render_widget(StatusBar::new(&state), term.area());
        assert!(term.buffer_contains("q sair"));

        state.settings.ui.show_key_hints = false;
        term.render_widget(StatusBar::new(&state), term.area());
        assert!(!term.buffer_contains("q sair"));
    }
}
