//! Lazily constructed cost-comparison chart
//!
//! The presenter owns at most one [`ChartHandle`] for its lifetime. The first
//! [`ChartPresenter::ensure_rendered`] call constructs and renders it; later
//! calls return immediately. Type changes reconfigure the same instance.

use soyroute_core::prelude::*;
use soyroute_core::{ChartOptions, ChartOptionsPatch, ChartType};

use crate::chart::{ChartFactory, ChartHandle};
use crate::registry::ViewRegistry;

pub struct ChartPresenter {
    factory: Box<dyn ChartFactory>,
    handle: Option<Box<dyn ChartHandle>>,
}

impl std::fmt::Debug for ChartPresenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartPresenter")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

impl ChartPresenter {
    pub fn new(factory: Box<dyn ChartFactory>) -> Self {
        Self {
            factory,
            handle: None,
        }
    }

    /// Construct and render the chart once.
    ///
    /// Without a mount point in `registry` nothing happens. After
    /// construction the chart type selector (if declared) is bound so its
    /// changes reach [`ChartPresenter::set_type`].
    pub fn ensure_rendered(&mut self, registry: &mut ViewRegistry) {
        if self.handle.is_some() {
            return;
        }

        let Some(mount_id) = registry.chart_mount() else {
            debug!("No chart mount point declared, skipping render");
            return;
        };

        let options = ChartOptions::cost_comparison();
        match serde_json::to_string(&options) {
            Ok(json) => debug!("Constructing chart in {:?}: {}", mount_id, json),
            Err(e) => debug!("Constructing chart in {:?} ({})", mount_id, e),
        }

        let mut handle = self.factory.create(mount_id, options);
        handle.render();
        self.handle = Some(handle);

        if let Some(selector) = registry.chart_type_selector_mut() {
            selector.listener_bound = true;
            trace!("Bound chart type selector {:?}", selector.id);
        }

        info!("Cost chart rendered");
    }

    /// Switch presentation type in place. No-op before the chart exists.
    pub fn set_type(&mut self, kind: ChartType) {
        let Some(handle) = self.handle.as_mut() else {
            debug!("set_type({}) before render, ignoring", kind);
            return;
        };
        handle.update_options(&ChartOptionsPatch::for_type(kind));
        debug!("Chart type set to {}", kind);
    }

    /// The type selector changed to `value`.
    ///
    /// The selector always reflects the new value; it only reaches the chart
    /// once the listener has been bound by [`ChartPresenter::ensure_rendered`].
    /// Unknown values are ignored.
    pub fn handle_type_selector_change(&mut self, registry: &mut ViewRegistry, value: &str) {
        let Some(kind) = ChartType::from_value(value) else {
            debug!("Unknown chart type {:?}", value);
            return;
        };
        let Some(selector) = registry.chart_type_selector_mut() else {
            return;
        };
        selector.value = kind;
        if selector.listener_bound {
            self.set_type(kind);
        }
    }

    pub fn options(&self) -> Option<&ChartOptions> {
        self.handle.as_ref().map(|h| h.options())
    }

    pub fn is_rendered(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| h.is_rendered())
    }

    /// Forget the chart, as when the page is loaded again
    pub fn reset(&mut self) {
        self.handle = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{MockChartFactory, TerminalChart, TerminalChartFactory};

    fn presenter() -> ChartPresenter {
        ChartPresenter::new(Box::new(TerminalChartFactory))
    }

    #[test]
    fn test_ensure_rendered_constructs_exactly_once() {
        let mut factory = MockChartFactory::new();
        factory
            .expect_create()
            .withf(|mount_id, options| {
                mount_id == "cost-chart" && options.series[0].data == vec![180, 350, 580, 770]
            })
            .times(1)
            .returning(|mount_id, options| Box::new(TerminalChart::new(mount_id, options)));

        let mut presenter = ChartPresenter::new(Box::new(factory));
        let mut registry = ViewRegistry::standard();
        presenter.ensure_rendered(&mut registry);
        presenter.ensure_rendered(&mut registry);

        assert!(presenter.is_rendered());
    }

    #[test]
    fn test_ensure_rendered_without_mount_is_noop() {
        let mut factory = MockChartFactory::new();
        factory.expect_create().times(0);

        let mut presenter = ChartPresenter::new(Box::new(factory));
        let mut registry = ViewRegistry::builder().view("dashboard", "D").build();
        presenter.ensure_rendered(&mut registry);

        assert!(!presenter.is_rendered());
        assert!(presenter.options().is_none());
    }

    #[test]
    fn test_default_options_are_distributed_bars() {
        let mut presenter = presenter();
        let mut registry = ViewRegistry::standard();
        presenter.ensure_rendered(&mut registry);

        let options = presenter.options().unwrap();
        assert_eq!(options.kind, ChartType::Bar);
        assert!(options.distributed);
        assert_eq!(options.colors.len(), 4);
    }

    #[test]
    fn test_set_type_before_render_is_noop() {
        let mut presenter = presenter();
        presenter.set_type(ChartType::Radar);
        assert!(presenter.options().is_none());
        assert!(!presenter.is_rendered());
    }

    #[test]
    fn test_radar_then_bar_restores_distributed_coloring() {
        let mut presenter = presenter();
        let mut registry = ViewRegistry::standard();
        presenter.ensure_rendered(&mut registry);

        presenter.set_type(ChartType::Radar);
        let options = presenter.options().unwrap();
        assert_eq!(options.kind, ChartType::Radar);
        assert!(!options.distributed);
        assert!(options.show_category_labels);

        presenter.set_type(ChartType::Bar);
        let options = presenter.options().unwrap();
        assert_eq!(options.kind, ChartType::Bar);
        assert!(options.distributed);
        assert!(options.show_category_labels);
    }

    #[test]
    fn test_render_binds_type_selector() {
        let mut presenter = presenter();
        let mut registry = ViewRegistry::standard();
        assert!(!registry.chart_type_selector().unwrap().listener_bound);

        presenter.ensure_rendered(&mut registry);
        assert!(registry.chart_type_selector().unwrap().listener_bound);
    }

    #[test]
    fn test_selector_change_forwarded_only_when_bound() {
        let mut presenter = presenter();
        let mut registry = ViewRegistry::standard();

        presenter.handle_type_selector_change(&mut registry, "radar");
        assert_eq!(
            registry.chart_type_selector().unwrap().value,
            ChartType::Radar
        );
        assert!(presenter.options().is_none());

        presenter.ensure_rendered(&mut registry);
        presenter.handle_type_selector_change(&mut registry, "radar");
        assert_eq!(presenter.options().unwrap().kind, ChartType::Radar);
    }

    #[test]
    fn test_selector_change_ignores_unknown_value() {
        let mut presenter = presenter();
        let mut registry = ViewRegistry::standard();
        presenter.ensure_rendered(&mut registry);

        presenter.handle_type_selector_change(&mut registry, "pie");
        assert_eq!(presenter.options().unwrap().kind, ChartType::Bar);
        assert_eq!(registry.chart_type_selector().unwrap().value, ChartType::Bar);
    }

    #[test]
    fn test_missing_type_selector_still_renders() {
        let mut presenter = presenter();
        let mut registry = ViewRegistry::builder()
            .view("dashboard", "D")
            .chart_mount("cost-chart")
            .build();
        presenter.ensure_rendered(&mut registry);
        assert!(presenter.is_rendered());

        presenter.handle_type_selector_change(&mut registry, "radar");
        assert_eq!(presenter.options().unwrap().kind, ChartType::Bar);
    }
}
