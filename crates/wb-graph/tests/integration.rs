//! Integration tests for wb-graph.

use proptest::prelude::*;
use wb_components::{ComponentType, PlacedComponent};
use wb_core::{Polarity, Position};
use wb_graph::{CircuitGraph, NodeKey, path_components, reachable_from};

fn part(id: &str, component_type: ComponentType, start: [f64; 3], end: [f64; 3]) -> PlacedComponent {
    PlacedComponent {
        id: id.into(),
        component_type,
        position: Position::new(start[0], start[1], start[2]),
        start_position: Some(Position::new(start[0], start[1], start[2])),
        end_position: Some(Position::new(end[0], end[1], end[2])),
        color: None,
        value: None,
        polarity: None,
        closed: false,
    }
}

#[test]
fn build_series_loop() {
    // + -> [w1] -> A -> [r1] -> B -> [led1] -> C -> [w2] -> -
    let graph = CircuitGraph::from_components(&[
        part("w1", ComponentType::Wire, [6.15, 1.07, 0.0], [1.0, 1.0, 0.0]),
        part(
            "r1",
            ComponentType::Resistor,
            [1.0, 1.0, 0.0],
            [2.0, 1.0, 0.0],
        ),
        part("led1", ComponentType::Led, [2.0, 1.0, 0.0], [2.3, 1.0, 0.0]),
        part("w2", ComponentType::Wire, [2.3, 1.0, 0.0], [5.85, 1.07, 0.0]),
    ]);

    // 2 terminals + 2 lead-coordinate nodes + 3 interior shared nodes
    assert_eq!(graph.nodes().len(), 7);
    assert_eq!(graph.components().len(), 4);
    // 4 component edges + 2 terminal splices
    assert_eq!(graph.edges().len(), 6);

    // shared endpoints resolve to one node
    let w1 = &graph.components()[0];
    let r1 = &graph.components()[1];
    assert_eq!(w1.end, r1.start);

    // the whole loop is one connected cluster containing both terminals
    let reached = reachable_from(&graph, graph.terminal(Polarity::Positive));
    assert_eq!(reached.len(), graph.nodes().len());
    assert!(reached.contains(&graph.terminal(Polarity::Negative)));
}

#[test]
fn terminal_path_walks_the_loop_in_order() {
    let graph = CircuitGraph::from_components(&[
        part("w1", ComponentType::Wire, [6.15, 1.07, 0.0], [1.0, 1.0, 0.0]),
        part(
            "r1",
            ComponentType::Resistor,
            [1.0, 1.0, 0.0],
            [2.0, 1.0, 0.0],
        ),
        part("w2", ComponentType::Wire, [2.0, 1.0, 0.0], [5.85, 1.07, 0.0]),
    ]);

    let path = path_components(
        &graph,
        graph.terminal(Polarity::Positive),
        graph.terminal(Polarity::Negative),
    );
    let names: Vec<&str> = path
        .iter()
        .map(|&c| graph.component(c).unwrap().name.as_str())
        .collect();
    assert_eq!(names, ["w1", "r1", "w2"]);
}

#[test]
fn branching_board_keeps_one_node_per_hole() {
    // Three wires fanning out of the same hole.
    let graph = CircuitGraph::from_components(&[
        part("w1", ComponentType::Wire, [1.0, 1.0, 0.0], [1.3, 1.0, 0.0]),
        part("w2", ComponentType::Wire, [1.0, 1.0, 0.0], [1.0, 1.3, 0.0]),
        part("w3", ComponentType::Wire, [1.0, 1.0, 0.0], [0.7, 1.0, 0.0]),
    ]);

    // 2 terminals + hub + 3 tips
    assert_eq!(graph.nodes().len(), 6);
    let hub = graph.components()[0].start;
    assert_eq!(graph.components()[1].start, hub);
    assert_eq!(graph.components()[2].start, hub);
    assert_eq!(graph.neighbors(hub).len(), 3);
}

proptest! {
    /// Node identity is a pure function of position: the same coordinates
    /// always produce the same key, and keys differing by at least one grid
    /// pitch never collide.
    #[test]
    fn node_key_is_pure(x in -10i64..40, y in -10i64..40, z in -2i64..2) {
        let pos = Position::new(x as f64 * 0.3, y as f64 * 0.3, z as f64 * 0.3);
        prop_assert_eq!(NodeKey::from_position(pos), NodeKey::from_position(pos));

        let shifted = Position::new((x + 1) as f64 * 0.3, y as f64 * 0.3, z as f64 * 0.3);
        prop_assert_ne!(NodeKey::from_position(pos), NodeKey::from_position(shifted));
    }
}
