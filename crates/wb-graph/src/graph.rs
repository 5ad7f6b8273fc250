//! Core graph data structures.

use wb_components::ComponentKind;
use wb_core::numeric::Real;
use wb_core::position::Position;
use wb_core::{CompId, NodeId, Polarity};

use crate::key::NodeKey;

/// A node in the electrical graph: one exact grid coordinate (or a battery
/// terminal), with working voltage state for the analysis pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub key: NodeKey,
    pub position: Position,
    /// Working voltage (volts), rewritten by the flood-fill each analysis.
    pub voltage: Real,
    /// Set when a terminal's equipotential flood reaches this node.
    pub reached: bool,
}

/// An undirected adjacency edge, labeled with the component that created it.
///
/// Terminal-link splices are labeled with the touching wire, which is what
/// lets the short-circuit path search step out of a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
    pub comp: CompId,
}

/// A registered component between two nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitComponent {
    pub id: CompId,
    /// Caller-assigned id string from the placed record.
    pub name: String,
    pub kind: ComponentKind,
    pub start: NodeId,
    pub end: NodeId,
}

impl CircuitComponent {
    /// The endpoint opposite to `node`, if `node` is an endpoint at all.
    pub fn opposite(&self, node: NodeId) -> Option<NodeId> {
        if node == self.start {
            Some(self.end)
        } else if node == self.end {
            Some(self.start)
        } else {
            None
        }
    }
}

/// The electrical graph: an arena of nodes, labeled edges, and typed
/// components, rebuilt from scratch for every analysis.
///
/// The two battery terminals are always present at fixed indices; adjacency
/// is stored flat per node in edge insertion order for determinism.
#[derive(Debug, Clone)]
pub struct CircuitGraph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) components: Vec<CircuitComponent>,
    pub(crate) edges: Vec<Edge>,

    /// Per-node neighbor list: (neighbor, component that connects us).
    pub(crate) adjacency: Vec<Vec<(NodeId, CompId)>>,
}

impl CircuitGraph {
    /// Return all nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Return all components, in registration order.
    pub fn components(&self) -> &[CircuitComponent] {
        &self.components
    }

    /// Return all edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get a node by ID (returns None if ID out of bounds).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index() as usize)
    }

    /// Get a component by ID (returns None if ID out of bounds).
    pub fn component(&self, id: CompId) -> Option<&CircuitComponent> {
        self.components.get(id.index() as usize)
    }

    /// The node for a battery terminal. Terminals are seeded before any
    /// placed component, so these always exist.
    pub fn terminal(&self, polarity: Polarity) -> NodeId {
        match polarity {
            Polarity::Positive => NodeId::from_index(0),
            Polarity::Negative => NodeId::from_index(1),
        }
    }

    /// Neighbors of a node with the connecting component, in edge insertion
    /// order.
    pub fn neighbors(&self, id: NodeId) -> &[(NodeId, CompId)] {
        self.adjacency
            .get(id.index() as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Working-voltage write access for the flood-fill.
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index() as usize]
    }

    /// Mark a node reached and pin its voltage.
    pub fn set_voltage(&mut self, id: NodeId, voltage: Real) {
        let node = self.node_mut(id);
        node.voltage = voltage;
        node.reached = true;
    }

    /// Reset all working voltage state before a propagation pass.
    pub fn reset_voltages(&mut self) {
        for node in &mut self.nodes {
            node.voltage = 0.0;
            node.reached = false;
        }
    }
}
