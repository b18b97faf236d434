//! Radar presentation of [`CostChart`].
//!
//! One axis per category, evenly spaced clockwise from the top. The series
//! polygon is drawn on a braille canvas; axis ends carry the category label
//! and the formatted value.

use std::f64::consts::{FRAC_PI_2, TAU};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::UnicodeWidthStr;

use super::braille_canvas::BrailleCanvas;
use super::{truncate_to_width, CostChart};
use crate::theme::{palette, styles};

/// Rows reserved above and below the plot for axis labels
const LABEL_ROWS: u16 = 1;

impl CostChart<'_> {
    pub(super) fn render_radar(&self, area: Rect, buf: &mut Buffer) {
        let options = self.options;
        let Some(series) = options.series.first() else {
            return;
        };
        let axes = series.data.len();
        if axes < 3 || area.width < 8 || area.height < 2 * LABEL_ROWS + 3 {
            return;
        }

        let plot = Rect::new(
            area.x,
            area.y + LABEL_ROWS,
            area.width,
            area.height - 2 * LABEL_ROWS,
        );
        let mut grid = BrailleCanvas::new(plot.width as usize, plot.height as usize);
        let mut shape = BrailleCanvas::new(plot.width as usize, plot.height as usize);

        let cx = (grid.dot_width() / 2) as f64;
        let cy = (grid.dot_height() / 2) as f64;
        // Terminal cells are roughly twice as tall as wide; braille dots are square-ish
        let radius = cx.min(cy) - 1.0;
        let max = options.max_value().max(1) as f64;

        let angle = |i: usize| -FRAC_PI_2 + TAU * i as f64 / axes as f64;
        let point = |i: usize, r: f64| {
            let a = angle(i);
            (
                (cx + r * a.cos()).round() as i64,
                (cy + r * a.sin()).round() as i64,
            )
        };

        let center = (cx.round() as i64, cy.round() as i64);
        let outer: Vec<(i64, i64)> = (0..axes).map(|i| point(i, radius)).collect();
        for &end in &outer {
            grid.line(center, end);
        }
        grid.polygon(&outer);

        let vertices: Vec<(i64, i64)> = series
            .data
            .iter()
            .enumerate()
            .map(|(i, &value)| point(i, radius * value as f64 / max))
            .collect();
        shape.polygon(&vertices);

        let series_color = options
            .color_for(0)
            .map(palette::hex_color)
            .unwrap_or(palette::ACCENT);
        grid.render_to_buffer(buf, plot, styles::border_inactive());
        shape.render_to_buffer(buf, plot, Style::default().fg(series_color));

        for (i, &value) in series.data.iter().enumerate() {
            let mut text = options.data_labels.format(value);
            if options.show_category_labels {
                if let Some(category) = options.categories.get(i) {
                    text = format!("{} {}", category, text);
                }
            }
            self.place_axis_label(i, &text, area, plot, point(i, radius + 2.0), buf);
        }
    }

    fn place_axis_label(
        &self,
        index: usize,
        text: &str,
        area: Rect,
        plot: Rect,
        (dot_x, dot_y): (i64, i64),
        buf: &mut Buffer,
    ) {
        let col = plot.x as i64 + dot_x / 2;
        let row = (plot.y as i64 + dot_y / 4).clamp(area.y as i64, area.bottom() as i64 - 1);

        let available = area.width as usize;
        let label = truncate_to_width(text, available / 2);
        let width = label.width() as i64;

        let x = if col <= area.x as i64 + area.width as i64 / 3 {
            // left side: label ends at the axis
            col - width
        } else if col >= area.x as i64 + 2 * area.width as i64 / 3 {
            col + 1
        } else {
            col - width / 2
        };
        let x = x.clamp(area.x as i64, (area.right() as i64 - width).max(area.x as i64));

        let color = self
            .options
            .color_for(index)
            .map(palette::hex_color)
            .unwrap_or(palette::ACCENT);
        buf.set_string(x as u16, row as u16, label, Style::default().fg(color));
    }
}
