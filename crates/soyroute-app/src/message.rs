//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::registry::SelectorId;
use crate::signals::ShutdownSignal;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Request to quit the application
    Quit,

    /// An OS signal asked the dashboard to stop
    Shutdown { signal: ShutdownSignal },

    // ─────────────────────────────────────────────────────────
    // Page lifecycle
    // ─────────────────────────────────────────────────────────
    /// Document ready: restore the persisted view
    PageLoaded,

    /// Discard in-memory page state and load it again
    ReloadPage,

    // ─────────────────────────────────────────────────────────
    // View selection
    // ─────────────────────────────────────────────────────────
    /// Select a view, optionally naming the selector that triggered it
    SelectView {
        view_id: String,
        trigger: Option<SelectorId>,
    },

    /// Move the menu by `offset` selectors (wrapping)
    MoveSelection { offset: isize },

    /// The chart type selector changed value
    ChartTypeSelectorChanged { value: String },

    // ─────────────────────────────────────────────────────────
    // Narration (from the pacing task)
    // ─────────────────────────────────────────────────────────
    NarrationLineAppended {
        container_id: String,
        generation: u64,
        index: usize,
    },

    NarrationLineRevealed {
        container_id: String,
        generation: u64,
        index: usize,
    },

    NarrationFinished {
        container_id: String,
        generation: u64,
    },
}
