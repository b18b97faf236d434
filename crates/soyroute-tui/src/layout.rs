//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar (glass container)
    pub header: Rect,

    /// Menu selectors, one tab per view
    pub menu: Rect,

    /// The visible view
    pub content: Rect,

    /// Phase, selection and key hints
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Length(3), // Menu
        Constraint::Min(3),    // Content
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        menu: chunks[1],
        content: chunks[2],
        status: chunks[3],
    }
}

/// Split the dashboard view into chart and a two-row legend
pub fn dashboard(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(4)]).split(area);
    (chunks[0], chunks[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_standard() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.menu.y, 3);
        assert_eq!(layout.content.y, 6);
        assert_eq!(layout.content.height, 17); // 24 - 3 - 3 - 1
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = create(area);
        assert_eq!(
            layout.header.height + layout.menu.height + layout.content.height + layout.status.height,
            area.height
        );
    }

    #[test]
    fn test_dashboard_split() {
        let (chart, legend) = dashboard(Rect::new(0, 0, 80, 17));
        assert_eq!(legend.height, 4);
        assert_eq!(chart.height + legend.height, 17);
    }
}
