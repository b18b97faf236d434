//! Scenario narration state
//!
//! Each scenario view owns a terminal container that "types" the scenario's
//! canned log one line at a time. The narrator only tracks state; the pacing
//! itself runs in a spawned task (see `actions::spawn_narration`) that feeds
//! back `NarrationLine*` messages tagged with the playback generation.
//!
//! A container plays at most once per page lifetime. While a playback is in
//! flight further `play` calls are ignored as well, so reselecting a scenario
//! tab mid-animation never starts an overlapping narration.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Local};
use soyroute_core::prelude::*;
use soyroute_core::{scenario_log, terminal_container_id, LineKind, ScenarioScript};

use crate::registry::ViewRegistry;

/// A line appended to a terminal container
#[derive(Debug, Clone, PartialEq)]
pub struct NarratedLine {
    pub text: String,
    pub kind: LineKind,
    /// Lines are appended hidden and revealed shortly after
    pub visible: bool,
    pub appended_at: DateTime<Local>,
}

/// Playback state of one `terminal-<key>` container
#[derive(Debug, Clone)]
pub struct TerminalContainer {
    pub id: String,
    pub script: &'static ScenarioScript,
    pub lines: Vec<NarratedLine>,
    /// Set once every line was revealed; permanent for the page lifetime
    pub typed: bool,
    pub playing: bool,
    pub generation: u64,
}

impl TerminalContainer {
    fn new(id: String, script: &'static ScenarioScript) -> Self {
        Self {
            id,
            script,
            lines: Vec::new(),
            typed: false,
            playing: false,
            generation: 0,
        }
    }

    /// Index of the next line to append
    pub fn current_line(&self) -> usize {
        self.lines.len()
    }
}

/// Work order for the pacing task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrationPlan {
    pub container_id: String,
    pub generation: u64,
    pub line_count: usize,
}

/// Pacing of a narration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NarrationTiming {
    /// Delay between successive lines
    pub line_delay: Duration,
    /// Delay between appending a line and making it visible
    pub reveal_delay: Duration,
}

impl Default for NarrationTiming {
    fn default() -> Self {
        Self {
            line_delay: Duration::from_millis(600),
            reveal_delay: Duration::from_millis(40),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TerminalNarrator {
    containers: BTreeMap<String, TerminalContainer>,
    next_generation: u64,
}

impl TerminalNarrator {
    /// One container per declared `terminal-<key>` that has a script
    pub fn from_registry(registry: &ViewRegistry) -> Self {
        let mut containers = BTreeMap::new();
        for id in registry.terminal_containers() {
            let Some(key) = id.strip_prefix(soyroute_core::view::TERMINAL_CONTAINER_PREFIX) else {
                continue;
            };
            match scenario_log(key) {
                Some(script) => {
                    containers.insert(id.clone(), TerminalContainer::new(id.clone(), script));
                }
                None => debug!("Container {:?} has no scenario script", id),
            }
        }
        Self {
            containers,
            next_generation: 0,
        }
    }

    /// Rebuild every container from `registry`.
    ///
    /// Generations keep counting up, so messages from playbacks started
    /// before the rebuild never match a new playback.
    pub fn rebuild(&mut self, registry: &ViewRegistry) {
        let next_generation = self.next_generation;
        *self = Self::from_registry(registry);
        self.next_generation = next_generation;
    }

    pub fn container(&self, id: &str) -> Option<&TerminalContainer> {
        self.containers.get(id)
    }

    pub fn containers(&self) -> impl Iterator<Item = &TerminalContainer> {
        self.containers.values()
    }

    /// Whether the container of `scenario_key` has finished playing
    pub fn is_typed(&self, scenario_key: &str) -> bool {
        self.containers
            .get(&terminal_container_id(scenario_key))
            .is_some_and(|c| c.typed)
    }

    /// Start narrating `scenario_key`.
    ///
    /// Clears the container and returns the plan for the pacing task, or
    /// `None` when the container is missing, already typed, or playing.
    pub fn play(&mut self, scenario_key: &str) -> Option<NarrationPlan> {
        let id = terminal_container_id(scenario_key);
        let Some(container) = self.containers.get_mut(&id) else {
            debug!("No terminal container {:?}, skipping narration", id);
            return None;
        };
        if container.typed {
            trace!("{:?} already typed", id);
            return None;
        }
        if container.playing {
            trace!("{:?} already playing", id);
            return None;
        }

        self.next_generation += 1;
        container.generation = self.next_generation;
        container.playing = true;
        container.lines.clear();

        info!(container = %id, lines = container.script.lines.len(), "Narration started");
        Some(NarrationPlan {
            container_id: id,
            generation: container.generation,
            line_count: container.script.lines.len(),
        })
    }

    fn live_container(&mut self, id: &str, generation: u64) -> Option<&mut TerminalContainer> {
        let container = self.containers.get_mut(id)?;
        if !container.playing || container.generation != generation {
            trace!("Dropping stale narration message for {:?}", id);
            return None;
        }
        Some(container)
    }

    /// Append line `index` hidden. Only the next line in order is accepted.
    pub fn append_line(&mut self, id: &str, generation: u64, index: usize) -> bool {
        let Some(container) = self.live_container(id, generation) else {
            return false;
        };
        if index != container.current_line() {
            warn!(
                "Out of order narration line {} for {:?} (expected {})",
                index,
                id,
                container.current_line()
            );
            return false;
        }
        let Some(text) = container.script.lines.get(index) else {
            return false;
        };
        container.lines.push(NarratedLine {
            text: text.to_string(),
            kind: LineKind::classify(text),
            visible: false,
            appended_at: Local::now(),
        });
        true
    }

    pub fn reveal_line(&mut self, id: &str, generation: u64, index: usize) -> bool {
        let Some(container) = self.live_container(id, generation) else {
            return false;
        };
        match container.lines.get_mut(index) {
            Some(line) => {
                line.visible = true;
                true
            }
            None => false,
        }
    }

    /// Mark the playback complete; the container never plays again
    pub fn finish(&mut self, id: &str, generation: u64) -> bool {
        let Some(container) = self.live_container(id, generation) else {
            return false;
        };
        container.playing = false;
        container.typed = true;
        info!(container = %id, "Narration finished");
        true
    }
}
