//! soyroute-tui - Terminal UI for the soyroute dashboard
//!
//! This crate provides the ratatui-based terminal interface. It drives the
//! TEA loop of soyroute-app and adds terminal rendering, event polling, and
//! the dashboard widgets.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::{run, RunOptions};
