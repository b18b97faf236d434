//! View naming rules shared by the page registry and the controller
//!
//! Views are addressed by string ids. Two ids are special (the default
//! "about" view and the financial dashboard); every other id of the form
//! `<prefix>-<key>` is a scenario view whose key selects a narration script
//! and its `terminal-<key>` container.

/// View shown when nothing has been persisted yet
pub const DEFAULT_VIEW_ID: &str = "view-0";

/// View that hosts the cost comparison chart
pub const DASHBOARD_VIEW_ID: &str = "dashboard";

/// Separator between a view prefix and its scenario key
pub const VIEW_ID_SEPARATOR: char = '-';

/// Prefix of every scenario narration container id
pub const TERMINAL_CONTAINER_PREFIX: &str = "terminal-";

/// Mount point id of the cost chart
pub const CHART_MOUNT_ID: &str = "cost-chart";

/// Id of the control that switches the chart presentation type
pub const CHART_TYPE_SELECTOR_ID: &str = "chart-type";

/// What selecting a view implies beyond the visibility swap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind<'a> {
    /// The default view; no side effect
    Default,
    /// The dashboard; the chart must be rendered
    Dashboard,
    /// A scenario view carrying its scenario key
    Scenario(&'a str),
    /// Any other id; no side effect
    Plain,
}

/// Classify a view id by naming convention.
///
/// The classification is purely textual: an id that was never declared on
/// the page still classifies (and `view-9` still yields scenario key `9`).
pub fn classify_view(view_id: &str) -> ViewKind<'_> {
    if view_id == DEFAULT_VIEW_ID {
        return ViewKind::Default;
    }
    if view_id == DASHBOARD_VIEW_ID {
        return ViewKind::Dashboard;
    }
    match view_id.rsplit_once(VIEW_ID_SEPARATOR) {
        Some((_, key)) if !key.is_empty() => ViewKind::Scenario(key),
        _ => ViewKind::Plain,
    }
}

/// Scenario key of a view id, if it names a scenario view
pub fn scenario_key(view_id: &str) -> Option<&str> {
    match classify_view(view_id) {
        ViewKind::Scenario(key) => Some(key),
        _ => None,
    }
}

/// Container id holding the narration of a scenario
pub fn terminal_container_id(scenario_key: &str) -> String {
    format!("{TERMINAL_CONTAINER_PREFIX}{scenario_key}")
}
