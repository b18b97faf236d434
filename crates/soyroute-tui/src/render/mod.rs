//! Main render/view function (View in TEA pattern)


use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use soyroute_app::AppState;
use soyroute_core::{classify_view, terminal_container_id, ViewKind};

use super::{layout, widgets};
use crate::theme::{palette, styles};

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function; only the visible view is drawn.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(
        widgets::MainHeader::new(&state.phase).show_shortcuts(state.settings.ui.show_key_hints),
        areas.header,
    );
    frame.render_widget(widgets::MenuTabs::new(state.views.registry()), areas.menu);
    render_content(frame, areas.content, state);
    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}

fn render_content(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(visible) = state.views.registry().visible_view() else {
        render_message(frame, area, "Carregando…");
        return;
    };

    match classify_view(&visible.id) {
        ViewKind::Default => frame.render_widget(widgets::AboutView, area),
        ViewKind::Dashboard => render_dashboard(frame, area, state),
        ViewKind::Scenario(key) => {
            match state.narrator.container(&terminal_container_id(key)) {
                Some(container) => frame.render_widget(widgets::TerminalLog::new(container), area),
                None => render_message(frame, area, &visible.title),
            }
        }
        ViewKind::Plain => render_message(frame, area, &visible.title),
    }
}

fn render_dashboard(frame: &mut Frame, area: Rect, state: &AppState) {
    let (chart_area, legend_area) = layout::dashboard(area);
    match state.chart.options() {
        Some(options) => {
            frame.render_widget(widgets::CostChart::new(options), chart_area);
            frame.render_widget(widgets::CostLegend::new(options), legend_area);
        }
        None => frame.render_widget(widgets::ChartPlaceholder, area),
    }
}

/// Centered one-line message inside a plain card
fn render_message(frame: &mut Frame, area: Rect, message: &str) {
    let block = styles::glass_block(false);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }
    let line = Line::from(Span::styled(message.to_string(), styles::text_muted()));
    let row = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), row);
}
