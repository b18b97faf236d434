//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `view`: Page load and view selection
//! - `narration`: Messages from the narration pacing task
//! - `keys`: Key event handlers

pub(crate) mod keys;
pub(crate) mod narration;
pub(crate) mod update;
pub(crate) mod view;


use crate::message::Message;
use crate::narrator::{NarrationPlan, NarrationTiming};

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Spawn the pacing task for a narration
    StartNarration {
        plan: NarrationPlan,
        timing: NarrationTiming,
    },

    /// Abort every running narration task (page reload)
    CancelNarrations,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
