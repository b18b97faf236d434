//! Scenario terminal widget
//!
//! Renders one narration container: the scenario title as the block title,
//! then every appended line in the order it arrived. Lines that are appended
//! but not yet revealed occupy their row with foreground equal to background.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use soyroute_app::{NarratedLine, TerminalContainer};

use crate::theme::{palette, styles};

const CURSOR: &str = "█";

pub struct TerminalLog<'a> {
    container: &'a TerminalContainer,
}

impl<'a> TerminalLog<'a> {
    pub fn new(container: &'a TerminalContainer) -> Self {
        Self { container }
    }

    fn status(&self) -> Span<'static> {
        if self.container.playing {
            Span::styled(" executando… ", styles::keybinding())
        } else if self.container.typed {
            Span::styled(" concluído ", Style::default().fg(palette::STATUS_GREEN))
        } else {
            Span::styled(" aguardando ", styles::text_muted())
        }
    }

    fn line(narrated: &NarratedLine) -> Line<'static> {
        let bg = Style::default().bg(palette::TERMINAL_BG);
        let stamp = if narrated.visible {
            styles::text_muted().bg(palette::TERMINAL_BG)
        } else {
            styles::narration_line(narrated.kind, false)
        };
        Line::from(vec![
            Span::styled(narrated.appended_at.format("%H:%M:%S ").to_string(), stamp),
            Span::styled(
                narrated.text.clone(),
                styles::narration_line(narrated.kind, narrated.visible),
            ),
        ])
        .style(bg)
    }
}

impl Widget for TerminalLog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.container.playing)
            .title(Span::styled(
                format!(" {} ", self.container.script.title),
                styles::accent_bold(),
            ))
            .title_bottom(Line::from(self.status()).right_aligned())
            .style(Style::default().bg(palette::TERMINAL_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let mut lines: Vec<Line> = self.container.lines.iter().map(Self::line).collect();
        if self.container.playing {
            lines.push(Line::styled(
                CURSOR,
                Style::default()
                    .fg(palette::TERMINAL_PROGRESS)
                    .bg(palette::TERMINAL_BG),
            ));
        }

        // Keep the newest lines in view
        let overflow = lines.len().saturating_sub(inner.height as usize) as u16;
        Paragraph::new(lines)
            .scroll((overflow, 0))
            .render(inner, buf);
    }
}
