//! Cost comparison chart widget
//!
//! Draws the merged [`ChartOptions`] of the dashboard chart as bars or as a
//! radar polygon, plus a one-line legend that plays the tooltip role: every
//! category with its color and the tooltip-formatted value.

mod bars;
mod braille_canvas;
mod radar;


use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use soyroute_core::{ChartOptions, ChartType};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::{palette, styles};

/// The rendered dashboard chart
pub struct CostChart<'a> {
    options: &'a ChartOptions,
}

impl<'a> CostChart<'a> {
    pub fn new(options: &'a ChartOptions) -> Self {
        Self { options }
    }
}

impl Widget for CostChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.options.series.first() {
            Some(series) => format!(" {} · {} ", series.name, self.options.kind.label()),
            None => format!(" {} ", self.options.kind.label()),
        };
        let block = styles::glass_block(true).title(Span::styled(title, styles::accent_bold()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        match self.options.kind {
            ChartType::Bar => self.render_bars(inner, buf),
            ChartType::Radar => self.render_radar(inner, buf),
        }
    }
}

/// Placeholder for the chart mount before the chart exists
pub struct ChartPlaceholder;

impl Widget for ChartPlaceholder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }
        let y = inner.y + inner.height / 2;
        Paragraph::new(Line::styled("Gráfico não carregado", styles::text_muted()))
            .alignment(Alignment::Center)
            .render(Rect::new(inner.x, y, inner.width, 1), buf);
    }
}

/// Legend row with the tooltip values of every category
pub struct CostLegend<'a> {
    options: &'a ChartOptions,
}

impl<'a> CostLegend<'a> {
    pub fn new(options: &'a ChartOptions) -> Self {
        Self { options }
    }

    /// One span group per category
    fn entries(&self) -> Vec<Vec<Span<'static>>> {
        let Some(series) = self.options.series.first() else {
            return Vec::new();
        };
        series
            .data
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let color = self
                    .options
                    .color_for(i)
                    .map(palette::hex_color)
                    .unwrap_or(palette::ACCENT);
                let category = self
                    .options
                    .categories
                    .get(i)
                    .map(String::as_str)
                    .unwrap_or("");
                vec![
                    Span::styled("■ ", Style::default().fg(color)),
                    Span::styled(short_category(category), styles::text_secondary()),
                    Span::raw(" "),
                    Span::styled(self.options.tooltip.format(value), Style::default().fg(color)),
                ]
            })
            .collect()
    }
}

impl Widget for CostLegend<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let entries = self.entries();
        let per_row = entries.len().div_ceil(inner.height as usize).max(1);
        for (row, chunk) in entries.chunks(per_row).enumerate() {
            let mut spans = Vec::new();
            for (i, entry) in chunk.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw("   "));
                }
                spans.extend(entry.iter().cloned());
            }
            let y = inner.y + row as u16;
            if y >= inner.bottom() {
                break;
            }
            buf.set_line(inner.x + 1, y, &Line::from(spans), inner.width.saturating_sub(1));
        }
    }
}

/// Category label up to its parenthesized detail: `2. Contingência (1 Falha)` → `2. Contingência`
fn short_category(category: &str) -> String {
    category
        .split_once(" (")
        .map(|(head, _)| head)
        .unwrap_or(category)
        .to_string()
}

/// Truncate to a display width, adding an ellipsis when cut
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}
