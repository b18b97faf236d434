//! Message processing
//!
//! Runs a message through the TEA update loop, following up chained
//! messages and dispatching actions to background tasks.

use tokio::sync::mpsc;

use crate::actions::{handle_action, NarrationTaskMap};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    narration_tasks: &NarrationTaskMap,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), narration_tasks.clone());
        }

        msg = result.message;
    }
}
