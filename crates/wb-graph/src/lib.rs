//! wb-graph: electrical graph construction and traversal.
//!
//! The pipeline, in dependency order:
//! 1. [`key::NodeKey`] — canonical node identity from a quantized position
//! 2. [`builder::GraphBuilder`] — fresh node/edge arena per analysis,
//!    pre-seeded with the two battery terminal nodes
//! 3. terminal linking — splices wires that touch a battery lead into the
//!    terminal's adjacency ([`builder::GraphBuilder::link_terminals`])
//! 4. [`traverse`] — breadth-first reachability and component-path search
//!
//! Graphs are built from nothing on every call and never mutated across
//! analyses; see DESIGN.md on the stale-graph class of bugs this avoids.

pub mod builder;
pub mod graph;
pub mod key;
pub mod traverse;

// Re-exports
pub use builder::GraphBuilder;
pub use graph::{CircuitComponent, CircuitGraph, Edge, Node};
pub use key::NodeKey;
pub use traverse::{is_reachable_to_terminal, path_components, reachable_from};
