//! Narration progress handlers
//!
//! Messages tagged with a generation that no longer matches the container
//! (cancelled or replaced playbacks) are dropped by the narrator.

use crate::state::AppState;

use super::UpdateResult;

pub fn handle_line_appended(
    state: &mut AppState,
    container_id: &str,
    generation: u64,
    index: usize,
) -> UpdateResult {
    state.narrator.append_line(container_id, generation, index);
    UpdateResult::none()
}

pub fn handle_line_revealed(
    state: &mut AppState,
    container_id: &str,
    generation: u64,
    index: usize,
) -> UpdateResult {
    state.narrator.reveal_line(container_id, generation, index);
    UpdateResult::none()
}

pub fn handle_finished(state: &mut AppState, container_id: &str, generation: u64) -> UpdateResult {
    state.narrator.finish(container_id, generation);
    UpdateResult::none()
}
