//! Chart instances mounted on the page
//!
//! The presenter never touches rendering directly: it asks a [`ChartFactory`]
//! for a [`ChartHandle`] bound to a mount point, then only calls `render` and
//! `update_options` on it.

use soyroute_core::{ChartOptions, ChartOptionsPatch};

/// A constructed chart living in a mount point
pub trait ChartHandle: Send + std::fmt::Debug {
    /// Draw the chart into its mount point
    fn render(&mut self);

    /// Merge a partial options update into the live chart
    fn update_options(&mut self, patch: &ChartOptionsPatch);

    fn options(&self) -> &ChartOptions;

    fn is_rendered(&self) -> bool;
}

/// Constructs chart instances
#[cfg_attr(test, mockall::automock)]
pub trait ChartFactory: Send {
    fn create(&mut self, mount_id: &str, options: ChartOptions) -> Box<dyn ChartHandle>;
}

/// Chart drawn by the terminal renderer from its current options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalChart {
    mount_id: String,
    options: ChartOptions,
    rendered: bool,
}

impl TerminalChart {
    pub fn new(mount_id: &str, options: ChartOptions) -> Self {
        Self {
            mount_id: mount_id.to_string(),
            options,
            rendered: false,
        }
    }

    pub fn mount_id(&self) -> &str {
        &self.mount_id
    }
}

impl ChartHandle for TerminalChart {
    fn render(&mut self) {
        self.rendered = true;
    }

    fn update_options(&mut self, patch: &ChartOptionsPatch) {
        self.options.apply(patch);
    }

    fn options(&self) -> &ChartOptions {
        &self.options
    }

    fn is_rendered(&self) -> bool {
        self.rendered
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalChartFactory;

impl ChartFactory for TerminalChartFactory {
    fn create(&mut self, mount_id: &str, options: ChartOptions) -> Box<dyn ChartHandle> {
        Box::new(TerminalChart::new(mount_id, options))
    }
}
