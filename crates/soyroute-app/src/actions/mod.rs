//! Action handlers: UpdateAction dispatch and background task spawning

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::message::Message;
use crate::UpdateAction;

pub mod narration;
pub use narration::spawn_narration;

/// Running narration tasks, keyed by terminal container id
pub type NarrationTaskMap = Arc<std::sync::Mutex<HashMap<String, tokio::task::JoinHandle<()>>>>;

/// Execute an action by spawning a background task
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    narration_tasks: NarrationTaskMap,
) {
    match action {
        UpdateAction::StartNarration { plan, timing } => {
            spawn_narration(plan, timing, msg_tx, narration_tasks);
        }

        UpdateAction::CancelNarrations => match narration_tasks.lock() {
            Ok(mut guard) => {
                for (container_id, handle) in guard.drain() {
                    handle.abort();
                    debug!("Aborted narration task for {}", container_id);
                }
            }
            Err(e) => warn!("Narration task map poisoned: {}", e),
        },
    }
}
