//! Graph construction from placed components.

use std::collections::HashMap;

use tracing::debug;
use wb_components::{ComponentKind, PlacedComponent};
use wb_core::constants::TERMINAL_LINK_TOLERANCE;
use wb_core::position::Position;
use wb_core::{CompId, NodeId, Polarity};

use crate::graph::{CircuitComponent, CircuitGraph, Edge, Node};
use crate::key::NodeKey;

/// Builder for one analysis pass.
///
/// Seeds the two battery terminal nodes, then registers placed components via
/// `add_placed`. `link_terminals` splices terminal-touching wires, and
/// `build` freezes everything into a [`CircuitGraph`] with adjacency lists.
#[derive(Debug)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    components: Vec<CircuitComponent>,
    edges: Vec<Edge>,
    key_to_node: HashMap<NodeKey, NodeId>,
}

impl GraphBuilder {
    /// Create a builder with the two terminal nodes pre-seeded at their
    /// fixed positions and voltages.
    pub fn new() -> Self {
        let mut builder = Self {
            nodes: Vec::new(),
            components: Vec::new(),
            edges: Vec::new(),
            key_to_node: HashMap::new(),
        };
        for polarity in [Polarity::Positive, Polarity::Negative] {
            let id = NodeId::from_index(builder.nodes.len() as u32);
            builder.nodes.push(Node {
                id,
                key: NodeKey::Terminal(polarity),
                position: polarity.position(),
                voltage: polarity.voltage(),
                reached: true,
            });
            builder.key_to_node.insert(NodeKey::Terminal(polarity), id);
        }
        builder
    }

    /// Create-or-fetch the node for a position.
    fn node_at(&mut self, position: Position) -> NodeId {
        let key = NodeKey::from_position(position);
        if let Some(&id) = self.key_to_node.get(&key) {
            return id;
        }
        let id = NodeId::from_index(self.nodes.len() as u32);
        self.nodes.push(Node {
            id,
            key,
            position,
            voltage: 0.0,
            reached: false,
        });
        self.key_to_node.insert(key, id);
        id
    }

    /// Register a placed component: resolve its endpoint nodes, append its
    /// adjacency edge, and record its typed parameters.
    ///
    /// Records with missing endpoint data are skipped; the engine result
    /// stays silent about them (wb-project validation reports them
    /// explicitly for callers that care).
    pub fn add_placed(&mut self, placed: &PlacedComponent) -> Option<CompId> {
        let Some(endpoints) = placed.endpoints() else {
            debug!(id = %placed.id, "skipping placed component with missing endpoint data");
            return None;
        };

        let start = self.node_at(endpoints.start);
        let end = self.node_at(endpoints.end);
        let kind = ComponentKind::from_placed(placed);

        let comp_id = CompId::from_index(self.components.len() as u32);
        // Open switches register their nodes but contribute no edge.
        if kind.is_connected() {
            self.edges.push(Edge {
                a: start,
                b: end,
                comp: comp_id,
            });
        }
        self.components.push(CircuitComponent {
            id: comp_id,
            name: placed.id.clone(),
            kind,
            start,
            end,
        });
        Some(comp_id)
    }

    /// Splice terminal-touching wires into the battery terminals.
    ///
    /// A wire whose endpoint lies within the link tolerance of a battery
    /// lead gets an extra edge between its opposite endpoint and the
    /// terminal node, labeled with the wire itself. Only wires participate;
    /// a resistor or LED leg resting near a lead is not auto-linked (known
    /// limitation).
    pub fn link_terminals(&mut self) {
        let mut splices = Vec::new();
        for comp in &self.components {
            if !comp.kind.is_wire() {
                continue;
            }
            let start_pos = self.nodes[comp.start.index() as usize].position;
            let end_pos = self.nodes[comp.end.index() as usize].position;
            for polarity in [Polarity::Positive, Polarity::Negative] {
                let lead = polarity.position();
                if start_pos.distance_to(&lead) < TERMINAL_LINK_TOLERANCE {
                    splices.push((polarity, comp.end, comp.id, comp.name.clone()));
                }
                if end_pos.distance_to(&lead) < TERMINAL_LINK_TOLERANCE {
                    splices.push((polarity, comp.start, comp.id, comp.name.clone()));
                }
            }
        }
        for (polarity, opposite, comp, name) in splices {
            debug!(wire = %name, terminal = polarity.node_name(), "linked wire to battery terminal");
            self.edges.push(Edge {
                a: self.key_to_node[&NodeKey::Terminal(polarity)],
                b: opposite,
                comp,
            });
        }
    }

    /// Freeze the graph, computing per-node adjacency in edge insertion
    /// order (deterministic for a given component list).
    pub fn build(self) -> CircuitGraph {
        let mut adjacency: Vec<Vec<(NodeId, CompId)>> = vec![Vec::new(); self.nodes.len()];
        for edge in &self.edges {
            adjacency[edge.a.index() as usize].push((edge.b, edge.comp));
            adjacency[edge.b.index() as usize].push((edge.a, edge.comp));
        }
        CircuitGraph {
            nodes: self.nodes,
            components: self.components,
            edges: self.edges,
            adjacency,
        }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CircuitGraph {
    /// Build the full graph for a component list: register every placed
    /// component, then splice terminal-touching wires.
    pub fn from_components(placed: &[PlacedComponent]) -> CircuitGraph {
        let mut builder = GraphBuilder::new();
        for comp in placed {
            builder.add_placed(comp);
        }
        builder.link_terminals();
        builder.build()
    }
}
