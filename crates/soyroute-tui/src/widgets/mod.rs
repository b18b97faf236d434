//! Custom widget components

mod about;
mod cost_chart;
mod header;
mod status_bar;
mod tabs;
mod terminal_log;

pub use about::AboutView;
pub use cost_chart::{ChartPlaceholder, CostChart, CostLegend};
pub use header::MainHeader;
pub use status_bar::StatusBar;
pub use tabs::MenuTabs;
pub use terminal_log::TerminalLog;
