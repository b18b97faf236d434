//! Configuration types for config.toml

use std::time::Duration;

use serde::{Deserialize, Serialize};
use soyroute_core::DEFAULT_VIEW_ID;

use crate::narrator::NarrationTiming;

fn default_true() -> bool {
    true
}

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub narrator: NarratorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Reopen the last selected view on startup
    #[serde(default = "default_true")]
    pub restore_last_view: bool,

    /// View shown when nothing was persisted
    #[serde(default = "default_view")]
    pub default_view: String,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            restore_last_view: true,
            default_view: default_view(),
        }
    }
}

fn default_view() -> String {
    DEFAULT_VIEW_ID.to_string()
}

/// Narration pacing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NarratorSettings {
    #[serde(default = "default_line_delay_ms")]
    pub line_delay_ms: u64,

    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: u64,
}

impl Default for NarratorSettings {
    fn default() -> Self {
        Self {
            line_delay_ms: default_line_delay_ms(),
            reveal_delay_ms: default_reveal_delay_ms(),
        }
    }
}

impl NarratorSettings {
    pub fn timing(&self) -> NarrationTiming {
        NarrationTiming {
            line_delay: Duration::from_millis(self.line_delay_ms),
            reveal_delay: Duration::from_millis(self.reveal_delay_ms),
        }
    }
}

fn default_line_delay_ms() -> u64 {
    600
}

fn default_reveal_delay_ms() -> u64 {
    40
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the key hint line in the status bar
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_key_hints: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert!(settings.behavior.restore_last_view);
        assert_eq!(settings.behavior.default_view, "view-0");
        assert_eq!(settings.narrator.line_delay_ms, 600);
        assert_eq!(settings.narrator.reveal_delay_ms, 40);
        assert!(settings.ui.show_key_hints);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let settings: Settings = toml::from_str("[narrator]\nline_delay_ms = 100\n").unwrap();
        assert_eq!(settings.narrator.line_delay_ms, 100);
        assert_eq!(settings.narrator.reveal_delay_ms, 40);
        assert!(settings.behavior.restore_last_view);
    }

    #[test]
    fn test_narrator_timing() {
        let timing = NarratorSettings {
            line_delay_ms: 250,
            reveal_delay_ms: 10,
        }
        .timing();
        assert_eq!(timing.line_delay, Duration::from_millis(250));
        assert_eq!(timing.reveal_delay, Duration::from_millis(10));
    }
}
