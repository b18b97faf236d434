//! Page registry: the declared views, menu selectors and mount points
//!
//! The registry stands in for the page markup. It is built once (usually via
//! [`ViewRegistry::standard`]) and injected into the view controller, which
//! only flips visibility and active flags. Views and selectors are never
//! created or destroyed after construction.

use soyroute_core::{
    terminal_container_id, ChartType, CHART_MOUNT_ID, CHART_TYPE_SELECTOR_ID, DASHBOARD_VIEW_ID,
    DEFAULT_VIEW_ID,
};

/// Position of a menu selector in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectorId(pub usize);

/// A declared content region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEntry {
    pub id: String,
    pub title: String,
    pub visible: bool,
}

/// A menu control that switches views
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSelector {
    pub label: String,
    /// View opened when the selector is activated
    pub target_view: String,
    /// Free-form association attribute, e.g. `showView('view-1')`.
    /// Used to find the selector of a view when no trigger is known.
    pub action: String,
    pub active: bool,
}

/// The optional control that switches the chart presentation type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartTypeSelector {
    pub id: String,
    pub value: ChartType,
    /// Set once the chart presenter subscribed to changes
    pub listener_bound: bool,
}

/// Registry of everything the page declares
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewRegistry {
    views: Vec<ViewEntry>,
    selectors: Vec<MenuSelector>,
    chart_mount: Option<String>,
    chart_type_selector: Option<ChartTypeSelector>,
    terminal_containers: Vec<String>,
}

impl ViewRegistry {
    /// The full dashboard page: about, financial dashboard and four scenarios
    pub fn standard() -> Self {
        let mut builder = Self::builder()
            .view_with_selector(DEFAULT_VIEW_ID, "Sobre o Projeto")
            .view_with_selector(DASHBOARD_VIEW_ID, "Dashboard Financeiro")
            .chart_mount(CHART_MOUNT_ID)
            .chart_type_selector(CHART_TYPE_SELECTOR_ID);

        for script in &soyroute_core::SCENARIO_LOGS {
            let view_id = format!("view-{}", script.key);
            builder = builder
                .view_with_selector(&view_id, &format!("Cenário {}", script.key))
                .terminal(&terminal_container_id(script.key));
        }

        builder.build()
    }

    pub fn builder() -> ViewRegistryBuilder {
        ViewRegistryBuilder::default()
    }

    // ─────────────────────────────────────────────────────────
    // Views
    // ─────────────────────────────────────────────────────────

    pub fn views(&self) -> &[ViewEntry] {
        &self.views
    }

    pub fn view(&self, id: &str) -> Option<&ViewEntry> {
        self.views.iter().find(|v| v.id == id)
    }

    /// The currently visible view, if any
    pub fn visible_view(&self) -> Option<&ViewEntry> {
        self.views.iter().find(|v| v.visible)
    }

    pub fn hide_all_views(&mut self) {
        for view in &mut self.views {
            view.visible = false;
        }
    }

    /// Show the view with `id`. Returns `false` when no such view is declared.
    pub fn show_view(&mut self, id: &str) -> bool {
        match self.views.iter_mut().find(|v| v.id == id) {
            Some(view) => {
                view.visible = true;
                true
            }
            None => false,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Selectors
    // ─────────────────────────────────────────────────────────

    pub fn selectors(&self) -> &[MenuSelector] {
        &self.selectors
    }

    pub fn selector(&self, id: SelectorId) -> Option<&MenuSelector> {
        self.selectors.get(id.0)
    }

    /// First selector whose association attribute mentions `view_id`
    pub fn selector_for_view(&self, view_id: &str) -> Option<SelectorId> {
        if view_id.is_empty() {
            return None;
        }
        self.selectors
            .iter()
            .position(|s| s.action.contains(view_id))
            .map(SelectorId)
    }

    pub fn active_selector(&self) -> Option<SelectorId> {
        self.selectors.iter().position(|s| s.active).map(SelectorId)
    }

    pub fn clear_active_selectors(&mut self) {
        for selector in &mut self.selectors {
            selector.active = false;
        }
    }

    /// Mark a selector active. Returns `false` for unknown ids.
    pub fn activate_selector(&mut self, id: SelectorId) -> bool {
        match self.selectors.get_mut(id.0) {
            Some(selector) => {
                selector.active = true;
                true
            }
            None => false,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Chart and narration mount points
    // ─────────────────────────────────────────────────────────

    pub fn chart_mount(&self) -> Option<&str> {
        self.chart_mount.as_deref()
    }

    pub fn chart_type_selector(&self) -> Option<&ChartTypeSelector> {
        self.chart_type_selector.as_ref()
    }

    pub fn chart_type_selector_mut(&mut self) -> Option<&mut ChartTypeSelector> {
        self.chart_type_selector.as_mut()
    }

    pub fn has_terminal_container(&self, id: &str) -> bool {
        self.terminal_containers.iter().any(|c| c == id)
    }

    pub fn terminal_containers(&self) -> &[String] {
        &self.terminal_containers
    }
}

/// Incremental construction of a [`ViewRegistry`]
#[derive(Debug, Default)]
pub struct ViewRegistryBuilder {
    registry: ViewRegistry,
}

impl ViewRegistryBuilder {
    /// Declare a view without a menu selector
    pub fn view(mut self, id: &str, title: &str) -> Self {
        self.registry.views.push(ViewEntry {
            id: id.to_string(),
            title: title.to_string(),
            visible: false,
        });
        self
    }

    /// Declare a menu selector with an explicit association attribute
    pub fn selector(mut self, label: &str, target_view: &str, action: &str) -> Self {
        self.registry.selectors.push(MenuSelector {
            label: label.to_string(),
            target_view: target_view.to_string(),
            action: action.to_string(),
            active: false,
        });
        self
    }

    /// Declare a view together with its `showView('<id>')` selector
    pub fn view_with_selector(self, id: &str, title: &str) -> Self {
        let action = format!("showView('{id}')");
        self.view(id, title).selector(title, id, &action)
    }

    pub fn chart_mount(mut self, id: &str) -> Self {
        self.registry.chart_mount = Some(id.to_string());
        self
    }

    pub fn chart_type_selector(mut self, id: &str) -> Self {
        self.registry.chart_type_selector = Some(ChartTypeSelector {
            id: id.to_string(),
            value: ChartType::default(),
            listener_bound: false,
        });
        self
    }

    pub fn terminal(mut self, id: &str) -> Self {
        self.registry.terminal_containers.push(id.to_string());
        self
    }

    pub fn build(self) -> ViewRegistry {
        self.registry
    }
}
