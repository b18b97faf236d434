//! Menu tabs widget
//!
//! One tab per menu selector, numbered for the digit shortcuts. The active
//! selector is highlighted; with no active selector nothing is.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};
use soyroute_app::ViewRegistry;

use crate::theme::styles;

const DIVIDER: &str = "│";

/// Widget displaying the menu selectors as tabs
pub struct MenuTabs<'a> {
    registry: &'a ViewRegistry,
}

impl<'a> MenuTabs<'a> {
    pub fn new(registry: &'a ViewRegistry) -> Self {
        Self { registry }
    }

    /// Create tab titles from selectors, truncated to share `width`
    fn tab_titles(&self, width: u16) -> Vec<Line<'static>> {
        let selectors = self.registry.selectors();
        let count = selectors.len().max(1);
        let natural: usize = selectors
            .iter()
            .map(|s| s.label.chars().count() + 4)
            .sum::<usize>()
            + count.saturating_sub(1);
        let max_name_len = if natural <= width as usize {
            usize::MAX
        } else {
            (width as usize / count).saturating_sub(5).max(3)
        };

        selectors
            .iter()
            .enumerate()
            .map(|(i, selector)| {
                Line::from(vec![
                    Span::styled(format!("{}", i + 1), styles::keybinding()),
                    Span::raw(format!(" {}", truncate_name(&selector.label, max_name_len))),
                ])
            })
            .collect()
    }
}

impl Widget for MenuTabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 || self.registry.selectors().is_empty() {
            return;
        }

        let selected = self.registry.active_selector().map(|id| id.0);
        Tabs::new(self.tab_titles(inner.width))
            .select(selected)
            .style(styles::text_secondary())
            .highlight_style(styles::focused_selected())
            .divider(DIVIDER)
            .render(inner, buf);
    }
}

/// Truncate a name to max length, adding ellipsis if needed
fn truncate_name(name: &str, max_len: usize) -> String {
    if name.chars().count() <= max_len {
        name.to_string()
    } else if max_len <= 1 {
        "…".to_string()
    } else {
        let truncated: String = name.chars().take(max_len - 1).collect();
        format!("{}…", truncated)
    }
}
