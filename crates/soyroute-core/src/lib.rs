//! # soyroute-core - Core Domain Types
//!
//! Foundation crate for the soyroute dashboard. Provides the static scenario
//! data, chart configuration, view naming rules, error handling, and logging.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Scenario data (`scenario`, `cost`)
//! - [`ScenarioScript`], [`SCENARIO_LOGS`] - Canned narration per scenario
//! - [`LineKind`] - Progress / warning / outcome classification of a line
//! - [`ScenarioCost`], [`scenario_costs()`] - Real cost per scenario
//!
//! ### Chart (`chart`)
//! - [`ChartOptions`], [`ChartOptionsPatch`] - Construction options and live updates
//! - [`ChartType`] - Bar or radar presentation
//!
//! ### Views (`view`)
//! - [`classify_view()`], [`ViewKind`] - Default / dashboard / scenario rules
//!
//! ### Error Handling (`error`)
//! - [`Error`], [`Result`]
//!
//! ## Prelude
//!
//! ```rust
//! use soyroute_core::prelude::*;
//! ```

pub mod chart;
pub mod cost;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod scenario;
pub mod types;
pub mod view;

pub use chart::{
    parse_hex_color, ChartOptions, ChartOptionsPatch, ChartType, Series, ValueFormat,
    COST_CATEGORIES, COST_SERIES_NAME, COST_VALUES, SEVERITY_COLORS,
};
pub use cost::{real_cost, scenario_costs, RouteAttempt, ScenarioCost, ROUTE_ATTEMPTS};
pub use error::{Error, Result};
pub use scenario::{scenario_log, LineKind, ScenarioScript, SCENARIO_LOGS};
pub use types::AppPhase;
pub use view::{
    classify_view, scenario_key, terminal_container_id, ViewKind, CHART_MOUNT_ID,
    CHART_TYPE_SELECTOR_ID, DASHBOARD_VIEW_ID, DEFAULT_VIEW_ID,
};
