//! Application state (Model in TEA pattern)

use soyroute_core::prelude::*;
use soyroute_core::AppPhase;

use crate::chart::{ChartFactory, TerminalChartFactory};
use crate::chart_presenter::ChartPresenter;
use crate::config::Settings;
use crate::narrator::{NarrationTiming, TerminalNarrator};
use crate::registry::ViewRegistry;
use crate::storage::{KeyValueStore, MemoryStore};
use crate::view_controller::ViewController;

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Lifecycle phase of the page
    pub phase: AppPhase,

    pub settings: Settings,

    /// Views, selectors and the persisted selection
    pub views: ViewController,

    pub chart: ChartPresenter,

    pub narrator: TerminalNarrator,

    /// View requested on the command line; consumed by the first page load
    pub startup_view: Option<String>,

    /// Page declarations rebuilt on every reload
    page: ViewRegistry,
}

impl AppState {
    /// Standard page over an in-memory store
    pub fn new() -> Self {
        Self::with_store(Settings::default(), Box::new(MemoryStore::new()))
    }

    /// Standard page with the terminal chart
    pub fn with_store(settings: Settings, store: Box<dyn KeyValueStore>) -> Self {
        Self::with_parts(
            settings,
            ViewRegistry::standard(),
            store,
            Box::new(TerminalChartFactory),
        )
    }

    pub fn with_parts(
        settings: Settings,
        page: ViewRegistry,
        store: Box<dyn KeyValueStore>,
        chart_factory: Box<dyn ChartFactory>,
    ) -> Self {
        Self {
            phase: AppPhase::Initializing,
            settings,
            views: ViewController::new(page.clone(), store),
            chart: ChartPresenter::new(chart_factory),
            narrator: TerminalNarrator::from_registry(&page),
            startup_view: None,
            page,
        }
    }

    pub fn with_startup_view(mut self, view_id: Option<String>) -> Self {
        self.startup_view = view_id;
        self
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn narration_timing(&self) -> NarrationTiming {
        self.settings.narrator.timing()
    }

    /// Drop all in-memory page state, keeping only durable storage.
    ///
    /// Views, selectors, the chart and every narration start over exactly as
    /// on a fresh load. The caller re-runs startup afterwards.
    pub fn reload_page(&mut self) {
        let placeholder = ViewController::new(ViewRegistry::default(), Box::new(MemoryStore::new()));
        let store = std::mem::replace(&mut self.views, placeholder).into_store();

        self.views = ViewController::new(self.page.clone(), store);
        self.chart.reset();
        self.narrator.rebuild(&self.page);
        self.phase = AppPhase::Initializing;

        info!("Page reloaded");
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
