//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;
use soyroute_core::prelude::*;
use soyroute_core::AppPhase;

use super::{keys::handle_key, narration, view, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Shutdown { signal } => {
            info!("Shutdown requested by {}", signal.name());
            state.phase = AppPhase::Quitting;
            UpdateResult::action(UpdateAction::CancelNarrations)
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Page lifecycle
        // ─────────────────────────────────────────────────────────
        Message::PageLoaded => view::handle_page_loaded(state),

        Message::ReloadPage => {
            state.reload_page();
            UpdateResult {
                message: Some(Message::PageLoaded),
                action: Some(UpdateAction::CancelNarrations),
            }
        }

        // ─────────────────────────────────────────────────────────
        // View selection
        // ─────────────────────────────────────────────────────────
        Message::SelectView { view_id, trigger } => {
            view::handle_select_view(state, &view_id, trigger)
        }

        Message::MoveSelection { offset } => view::handle_move_selection(state, offset),

        Message::ChartTypeSelectorChanged { value } => {
            state
                .chart
                .handle_type_selector_change(state.views.registry_mut(), &value);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Narration
        // ─────────────────────────────────────────────────────────
        Message::NarrationLineAppended {
            container_id,
            generation,
            index,
        } => narration::handle_line_appended(state, &container_id, generation, index),

        Message::NarrationLineRevealed {
            container_id,
            generation,
            index,
        } => narration::handle_line_revealed(state, &container_id, generation, index),

        Message::NarrationFinished {
            container_id,
            generation,
        } => narration::handle_finished(state, &container_id, generation),
    }
}
