//! Shared domain types

/// Lifecycle phase of the dashboard page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Page built, waiting for the load event to restore the last view
    #[default]
    Initializing,
    /// Page loaded and interactive
    Running,
    /// Shutting down
    Quitting,
}
