//! soyroute-app - Application state and orchestration for the soyroute dashboard
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the view registry and controller, the lazily built cost chart,
//! the scenario narrator, page storage, configuration loading, and the
//! background tasks that pace narrations.

pub mod actions;
pub mod chart;
pub mod chart_presenter;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod narrator;
pub mod process;
pub mod registry;
pub mod signals;
pub mod state;
pub mod storage;
pub mod view_controller;

// Re-export primary types
pub use chart::{ChartFactory, ChartHandle, TerminalChart, TerminalChartFactory};
pub use chart_presenter::ChartPresenter;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use narrator::{NarratedLine, NarrationPlan, NarrationTiming, TerminalContainer, TerminalNarrator};
pub use registry::{SelectorId, ViewRegistry};
pub use state::AppState;
pub use storage::{FileStore, KeyValueStore, MemoryStore, LAST_VIEW_KEY};
pub use view_controller::{ViewController, ViewEffects};
