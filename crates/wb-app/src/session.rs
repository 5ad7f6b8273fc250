//! Circuit session lifecycle.
//!
//! A session owns the placed-component list and, while running, a cached
//! analysis snapshot plus the per-LED visual records a renderer reads from.
//! Every edit while running triggers a full re-analysis; there is no
//! incremental update path.

use std::collections::BTreeMap;

use tracing::debug;
use wb_components::{ComponentType, PlacedComponent};
use wb_sim::{SimulationResult, simulate};

use crate::error::{AppError, AppResult};

/// Whether the battery is conceptually connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running,
}

/// Render-facing LED state, mirrored from the last analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedVisualState {
    pub lit: bool,
    pub burned: bool,
}

/// An editable circuit plus its analysis lifecycle.
#[derive(Debug)]
pub struct CircuitSession {
    components: Vec<PlacedComponent>,
    state: SessionState,
    result: Option<SimulationResult>,
    /// Keyed by LED component id. Populated for every LED in the circuit,
    /// whatever the session state; all-off while idle.
    led_states: BTreeMap<String, LedVisualState>,
}

impl CircuitSession {
    pub fn new(components: Vec<PlacedComponent>) -> Self {
        let mut session = Self {
            components,
            state: SessionState::Idle,
            result: None,
            led_states: BTreeMap::new(),
        };
        session.reset_led_states();
        session
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn components(&self) -> &[PlacedComponent] {
        &self.components
    }

    /// The cached snapshot of the last analysis, while running.
    pub fn result(&self) -> Option<&SimulationResult> {
        self.result.as_ref()
    }

    pub fn led_state(&self, id: &str) -> LedVisualState {
        self.led_states.get(id).copied().unwrap_or_default()
    }

    /// Connect the battery: analyze the circuit and cache the snapshot.
    pub fn run(&mut self) -> &SimulationResult {
        self.state = SessionState::Running;
        self.analyze()
    }

    /// Disconnect the battery. The cached result is discarded and every LED
    /// goes dark regardless of the last computed current.
    pub fn stop(&mut self) {
        debug!("session stopped");
        self.state = SessionState::Idle;
        self.result = None;
        self.reset_led_states();
    }

    /// Replace the circuit. Re-analyzes immediately when running.
    pub fn set_components(&mut self, components: Vec<PlacedComponent>) {
        self.components = components;
        match self.state {
            SessionState::Running => {
                self.analyze();
            }
            SessionState::Idle => self.reset_led_states(),
        }
    }

    /// Toggle a switch's contact state. Re-analyzes immediately when
    /// running.
    pub fn toggle_switch(&mut self, id: &str) -> AppResult<bool> {
        let comp = self
            .components
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::ComponentNotFound(id.to_string()))?;
        if comp.component_type != ComponentType::Switch {
            return Err(AppError::NotASwitch(id.to_string()));
        }
        comp.closed = !comp.closed;
        let closed = comp.closed;
        debug!(id, closed, "switch toggled");

        if self.state == SessionState::Running {
            self.analyze();
        }
        Ok(closed)
    }

    fn analyze(&mut self) -> &SimulationResult {
        let result = simulate(&self.components);

        self.led_states = self
            .components
            .iter()
            .filter(|c| c.component_type == ComponentType::Led)
            .map(|c| {
                let state = result
                    .component(&c.id)
                    .map(|s| LedVisualState {
                        lit: s.is_on,
                        burned: s.is_burned,
                    })
                    .unwrap_or_default();
                (c.id.clone(), state)
            })
            .collect();

        self.result.insert(result)
    }

    fn reset_led_states(&mut self) {
        self.led_states = self
            .components
            .iter()
            .filter(|c| c.component_type == ComponentType::Led)
            .map(|c| (c.id.clone(), LedVisualState::default()))
            .collect();
    }
}
