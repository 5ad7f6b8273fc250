//! Equipotential voltage propagation.
//!
//! Voltages are not solved as a linear system. Each terminal's fixed voltage
//! floods across conductor-only edges (wires and closed switches), so every
//! wire-connected cluster shares one potential. Nodes separated from a
//! terminal by a resistor or LED stay at 0 V unless the other terminal's
//! flood reaches them — the expected, testable approximation of this model.

use std::collections::VecDeque;

use wb_core::{NodeId, Polarity};
use wb_graph::CircuitGraph;

/// Reset and re-propagate all node voltages.
pub fn propagate_voltages(graph: &mut CircuitGraph) {
    graph.reset_voltages();
    for polarity in [Polarity::Positive, Polarity::Negative] {
        let terminal = graph.terminal(polarity);
        flood(graph, terminal, polarity.voltage());
    }
}

/// Assign `voltage` to every node reachable from `start` without crossing a
/// non-conductor.
fn flood(graph: &mut CircuitGraph, start: NodeId, voltage: f64) {
    let mut visited = vec![false; graph.nodes().len()];
    let mut queue = VecDeque::from([start]);
    visited[start.index() as usize] = true;

    while let Some(node) = queue.pop_front() {
        graph.set_voltage(node, voltage);
        let conductor_neighbors: Vec<NodeId> = graph
            .neighbors(node)
            .iter()
            .filter(|(_, comp)| {
                graph
                    .component(*comp)
                    .is_some_and(|c| c.kind.is_conductor())
            })
            .map(|&(neighbor, _)| neighbor)
            .collect();
        for neighbor in conductor_neighbors {
            let idx = neighbor.index() as usize;
            if !visited[idx] {
                visited[idx] = true;
                queue.push_back(neighbor);
            }
        }
    }
}
