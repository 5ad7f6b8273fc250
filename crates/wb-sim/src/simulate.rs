//! Whole-circuit analysis pass.

use std::collections::BTreeMap;

use tracing::debug;
use wb_components::PlacedComponent;
use wb_core::Polarity;
use wb_graph::{CircuitGraph, path_components, reachable_from};

use crate::analyzer::analyze_component;
use crate::result::{NodeState, SimulationResult};
use crate::voltage::propagate_voltages;

/// Analyze a placed-component list and return a fresh result snapshot.
///
/// Pure: the same input list always yields the same result. The graph is
/// rebuilt from scratch on every call; nothing persists between calls.
pub fn simulate(components: &[PlacedComponent]) -> SimulationResult {
    let mut graph = CircuitGraph::from_components(components);
    propagate_voltages(&mut graph);

    // A terminal alone in its component counts as unconnected.
    let positive = graph.terminal(Polarity::Positive);
    let negative = graph.terminal(Polarity::Negative);
    let has_complete_path =
        reachable_from(&graph, positive).len() > 1 && reachable_from(&graph, negative).len() > 1;

    // Short circuit: some terminal-to-terminal path exists and every
    // component along the first one found is a bare conductor.
    let path = path_components(&graph, positive, negative);
    let has_short_circuit = !path.is_empty()
        && path.iter().all(|&comp| {
            graph
                .component(comp)
                .is_some_and(|c| c.kind.is_conductor())
        });

    let is_complete = has_complete_path && !has_short_circuit;
    debug!(
        components = components.len(),
        nodes = graph.nodes().len(),
        is_complete,
        has_short_circuit,
        "analysis pass"
    );

    let mut errors = Vec::new();
    if has_short_circuit {
        errors.push("Short circuit detected! Battery terminals are directly connected.".to_string());
    }
    // Keyed off registered components: a list of nothing but malformed
    // records behaves like an empty board.
    if !is_complete && !graph.components().is_empty() {
        errors.push(
            "Circuit is not complete. Make sure to connect positive and negative terminals."
                .to_string(),
        );
    }

    let mut warnings = Vec::new();
    let mut component_states = BTreeMap::new();
    for comp in graph.components() {
        let state = analyze_component(&graph, comp, &mut warnings);
        component_states.insert(comp.name.clone(), state);
    }

    let nodes = graph
        .nodes()
        .iter()
        .map(|node| {
            (
                node.key.to_string(),
                NodeState {
                    voltage: node.voltage,
                },
            )
        })
        .collect();

    SimulationResult {
        is_complete,
        has_short_circuit,
        components: component_states,
        nodes,
        errors,
        warnings,
    }
}
