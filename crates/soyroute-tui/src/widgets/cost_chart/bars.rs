//! Bar presentation of [`CostChart`].

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Widget};

use super::{truncate_to_width, CostChart};
use crate::theme::{palette, styles};

const BAR_GAP: u16 = 2;

impl CostChart<'_> {
    pub(super) fn render_bars(&self, area: Rect, buf: &mut Buffer) {
        let options = self.options;
        let Some(series) = options.series.first() else {
            return;
        };
        if series.data.is_empty() || area.width == 0 || area.height == 0 {
            return;
        }

        let count = series.data.len() as u16;
        let bar_width = (area.width.saturating_sub(BAR_GAP * count) / count).max(1);

        let bars: Vec<Bar> = series
            .data
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let color = options
                    .color_for(i)
                    .map(palette::hex_color)
                    .unwrap_or(palette::ACCENT);
                let mut bar = Bar::default()
                    .value(value)
                    .text_value(options.data_labels.format(value))
                    .style(Style::default().fg(color))
                    .value_style(
                        Style::default()
                            .fg(palette::CONTRAST_FG)
                            .bg(color)
                            .add_modifier(Modifier::BOLD),
                    );
                if options.show_category_labels {
                    if let Some(category) = options.categories.get(i) {
                        let label = truncate_to_width(category, bar_width as usize);
                        bar = bar.label(Line::from(label));
                    }
                }
                bar
            })
            .collect();

        BarChart::default()
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width)
            .bar_gap(BAR_GAP)
            .max(options.max_value())
            .label_style(styles::text_secondary())
            .render(area, buf);
    }
}
