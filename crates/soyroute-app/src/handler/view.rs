//! Page load and view selection handlers

use soyroute_core::prelude::*;
use soyroute_core::AppPhase;

use crate::chart_presenter::ChartPresenter;
use crate::message::Message;
use crate::narrator::{NarrationPlan, TerminalNarrator};
use crate::registry::{SelectorId, ViewRegistry};
use crate::state::AppState;
use crate::view_controller::ViewEffects;

use super::{UpdateAction, UpdateResult};

/// Side effects of a view change, wired to the page's presenters
struct PageEffects<'a> {
    chart: &'a mut ChartPresenter,
    narrator: &'a mut TerminalNarrator,
    plan: Option<NarrationPlan>,
}

impl ViewEffects for PageEffects<'_> {
    fn render_chart(&mut self, registry: &mut ViewRegistry) {
        self.chart.ensure_rendered(registry);
    }

    fn play_scenario(&mut self, _registry: &ViewRegistry, scenario_key: &str) {
        self.plan = self.narrator.play(scenario_key);
    }
}

fn narration_result(state: &AppState, plan: Option<NarrationPlan>) -> UpdateResult {
    match plan {
        Some(plan) => UpdateResult::action(UpdateAction::StartNarration {
            plan,
            timing: state.narration_timing(),
        }),
        None => UpdateResult::none(),
    }
}

/// Document ready: show the startup view without a trigger
pub fn handle_page_loaded(state: &mut AppState) -> UpdateResult {
    let mut effects = PageEffects {
        chart: &mut state.chart,
        narrator: &mut state.narrator,
        plan: None,
    };
    let default_view = state.settings.behavior.default_view.clone();

    if let Some(view_id) = state.startup_view.take() {
        debug!("Starting on requested view {:?}", view_id);
        state.views.select_view(&view_id, None, &mut effects);
    } else if state.settings.behavior.restore_last_view {
        state.views.restore_last_view(&default_view, &mut effects);
    } else {
        state.views.select_view(&default_view, None, &mut effects);
    }

    let plan = effects.plan;
    state.phase = AppPhase::Running;
    narration_result(state, plan)
}

pub fn handle_select_view(
    state: &mut AppState,
    view_id: &str,
    trigger: Option<SelectorId>,
) -> UpdateResult {
    let mut effects = PageEffects {
        chart: &mut state.chart,
        narrator: &mut state.narrator,
        plan: None,
    };
    state.views.select_view(view_id, trigger, &mut effects);
    let plan = effects.plan;
    narration_result(state, plan)
}

/// Select the selector `offset` positions away from the active one
pub fn handle_move_selection(state: &mut AppState, offset: isize) -> UpdateResult {
    let registry = state.views.registry();
    let count = registry.selectors().len();
    if count == 0 {
        return UpdateResult::none();
    }

    let next = match registry.active_selector() {
        Some(SelectorId(current)) => (current as isize + offset).rem_euclid(count as isize) as usize,
        None if offset < 0 => count - 1,
        None => 0,
    };

    match registry.selector(SelectorId(next)) {
        Some(selector) => UpdateResult::message(Message::SelectView {
            view_id: selector.target_view.clone(),
            trigger: Some(SelectorId(next)),
        }),
        None => UpdateResult::none(),
    }
}
