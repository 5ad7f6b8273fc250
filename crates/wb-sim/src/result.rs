//! Result snapshot types.
//!
//! Maps are `BTreeMap`-backed so a serialized result is byte-identical for
//! identical inputs; the simulation must never leak iteration order,
//! timestamps or counters into its output.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use wb_core::numeric::Real;

/// Electrical state of one component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentState {
    /// Amps. Placeholder nominal value for everything but LEDs.
    pub current: Real,
    /// Volts across the component (forced source voltage for LEDs).
    pub voltage: Real,
    /// Watts.
    pub power: Real,
    pub is_on: bool,
    pub is_burned: bool,
}

/// Voltage at one graph node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeState {
    pub voltage: Real,
}

/// Immutable snapshot of one analysis pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub is_complete: bool,
    pub has_short_circuit: bool,
    /// Keyed by the caller-assigned component id.
    pub components: BTreeMap<String, ComponentState>,
    /// Keyed by canonical node name ("battery-positive", "node-1.2-0.6-0").
    pub nodes: BTreeMap<String, NodeState>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl SimulationResult {
    /// Look up a component's state by its caller-assigned id.
    pub fn component(&self, id: &str) -> Option<&ComponentState> {
        self.components.get(id)
    }

    /// Look up a node's voltage by canonical name.
    pub fn node_voltage(&self, name: &str) -> Option<Real> {
        self.nodes.get(name).map(|n| n.voltage)
    }
}
