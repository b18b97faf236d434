//! Exclusive view selection
//!
//! Every call to [`ViewController::select_view`] hides all views, clears all
//! selectors, shows the target view (if declared), marks one selector active,
//! runs the view's side effect, and persists the requested id. Transitions
//! are total: unknown ids leave every view hidden but are still persisted.

use soyroute_core::prelude::*;
use soyroute_core::{classify_view, ViewKind};

use crate::registry::{SelectorId, ViewRegistry};
use crate::storage::{KeyValueStore, LAST_VIEW_KEY};

/// Collaborators invoked after the visibility swap
pub trait ViewEffects {
    /// The dashboard view became the selected view
    fn render_chart(&mut self, registry: &mut ViewRegistry);

    /// A scenario view became the selected view
    fn play_scenario(&mut self, registry: &ViewRegistry, scenario_key: &str);
}

/// Owns the page registry and the persisted selection
#[derive(Debug)]
pub struct ViewController {
    registry: ViewRegistry,
    store: Box<dyn KeyValueStore>,
}

impl ViewController {
    pub fn new(registry: ViewRegistry, store: Box<dyn KeyValueStore>) -> Self {
        Self { registry, store }
    }

    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ViewRegistry {
        &mut self.registry
    }

    /// Hand the store over, e.g. to a freshly loaded page
    pub fn into_store(self) -> Box<dyn KeyValueStore> {
        self.store
    }

    /// The persisted last view id, if any
    pub fn persisted_view(&self) -> Option<String> {
        self.store.get(LAST_VIEW_KEY)
    }

    /// Switch to `view_id`.
    ///
    /// `trigger` is the selector that initiated the change. Without one, the
    /// first selector whose association mentions `view_id` is marked active.
    /// Returns whether a declared view became visible.
    pub fn select_view(
        &mut self,
        view_id: &str,
        trigger: Option<SelectorId>,
        effects: &mut dyn ViewEffects,
    ) -> bool {
        self.registry.hide_all_views();
        self.registry.clear_active_selectors();

        let shown = self.registry.show_view(view_id);
        if !shown {
            debug!("No view declared with id {:?}", view_id);
        }

        let selector = trigger.or_else(|| self.registry.selector_for_view(view_id));
        if let Some(selector) = selector {
            if !self.registry.activate_selector(selector) {
                debug!("Trigger {:?} is not a declared selector", selector);
            }
        }

        match classify_view(view_id) {
            ViewKind::Dashboard => effects.render_chart(&mut self.registry),
            ViewKind::Scenario(key) => effects.play_scenario(&self.registry, key),
            ViewKind::Default | ViewKind::Plain => {}
        }

        if let Err(e) = self.store.set(LAST_VIEW_KEY, view_id) {
            warn!("Failed to persist last view {:?}: {}", view_id, e);
        }

        info!(view = view_id, shown, "View selected");
        shown
    }

    /// Startup: re-select the persisted view (or `fallback`) without a trigger
    pub fn restore_last_view(&mut self, fallback: &str, effects: &mut dyn ViewEffects) -> bool {
        let view_id = self
            .persisted_view()
            .unwrap_or_else(|| fallback.to_string());
        debug!("Restoring view {:?}", view_id);
        self.select_view(&view_id, None, effects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[derive(Default)]
    struct RecordingEffects {
        charts: usize,
        scenarios: Vec<String>,
    }

    impl ViewEffects for RecordingEffects {
        fn render_chart(&mut self, _registry: &mut ViewRegistry) {
            self.charts += 1;
        }

        fn play_scenario(&mut self, _registry: &ViewRegistry, scenario_key: &str) {
            self.scenarios.push(scenario_key.to_string());
        }
    }

    fn controller() -> ViewController {
        ViewController::new(ViewRegistry::standard(), Box::new(MemoryStore::new()))
    }

    fn visible_count(controller: &ViewController) -> usize {
        controller
            .registry()
            .views()
            .iter()
            .filter(|v| v.visible)
            .count()
    }

    fn active_count(controller: &ViewController) -> usize {
        controller
            .registry()
            .selectors()
            .iter()
            .filter(|s| s.active)
            .count()
    }

    #[test]
    fn test_every_declared_view_is_exclusive() {
        let mut controller = controller();
        let mut effects = RecordingEffects::default();
        let ids: Vec<String> = controller
            .registry()
            .views()
            .iter()
            .map(|v| v.id.clone())
            .collect();

        for id in ids {
            assert!(controller.select_view(&id, None, &mut effects));
            assert_eq!(visible_count(&controller), 1, "after selecting {id}");
            assert_eq!(controller.registry().visible_view().unwrap().id, id);
            assert!(active_count(&controller) <= 1);
        }
    }

    #[test]
    fn test_undeclared_view_hides_everything_and_still_persists() {
        let mut controller = controller();
        let mut effects = RecordingEffects::default();
        controller.select_view("view-0", None, &mut effects);

        for id in ["ghost", "", "view-99", "Dashboard"] {
            assert!(!controller.select_view(id, None, &mut effects));
            assert_eq!(visible_count(&controller), 0);
            assert_eq!(active_count(&controller), 0);
            assert_eq!(controller.persisted_view().as_deref(), Some(id));
        }
    }

    #[test]
    fn test_trigger_wins_over_association() {
        let mut controller = controller();
        let mut effects = RecordingEffects::default();
        controller.select_view("view-0", Some(SelectorId(3)), &mut effects);

        assert_eq!(
            controller.registry().active_selector(),
            Some(SelectorId(3))
        );
        assert_eq!(active_count(&controller), 1);
    }

    #[test]
    fn test_association_fallback_marks_matching_selector() {
        let mut controller = controller();
        let mut effects = RecordingEffects::default();
        controller.select_view("view-2", None, &mut effects);

        let active = controller.registry().active_selector().unwrap();
        assert_eq!(
            controller.registry().selector(active).unwrap().target_view,
            "view-2"
        );
    }

    #[test]
    fn test_dashboard_renders_chart() {
        let mut controller = controller();
        let mut effects = RecordingEffects::default();
        controller.select_view("dashboard", None, &mut effects);
        assert_eq!(effects.charts, 1);
        assert!(effects.scenarios.is_empty());
    }

    #[test]
    fn test_scenario_view_plays_its_key() {
        let mut controller = controller();
        let mut effects = RecordingEffects::default();
        controller.select_view("view-3", None, &mut effects);
        assert_eq!(effects.scenarios, vec!["3".to_string()]);
        assert_eq!(effects.charts, 0);
    }

    #[test]
    fn test_default_view_has_no_side_effect() {
        let mut controller = controller();
        let mut effects = RecordingEffects::default();
        controller.select_view("view-0", None, &mut effects);
        assert_eq!(effects.charts, 0);
        assert!(effects.scenarios.is_empty());
    }

    #[test]
    fn test_restore_uses_persisted_view() {
        let store = MemoryStore::new().with_value(LAST_VIEW_KEY, "view-4");
        let mut controller = ViewController::new(ViewRegistry::standard(), Box::new(store));
        let mut effects = RecordingEffects::default();

        assert!(controller.restore_last_view("view-0", &mut effects));
        assert_eq!(controller.registry().visible_view().unwrap().id, "view-4");
        assert!(controller.registry().active_selector().is_some());
    }

    #[test]
    fn test_restore_falls_back_to_default() {
        let mut controller = controller();
        let mut effects = RecordingEffects::default();
        controller.restore_last_view("view-0", &mut effects);
        assert_eq!(controller.registry().visible_view().unwrap().id, "view-0");
        assert_eq!(controller.persisted_view().as_deref(), Some("view-0"));
    }
}
