//! wb-sim: the circuit analysis engine.
//!
//! The sole externally meaningful operation is [`simulate`]: given the
//! placed-component list, build a fresh electrical graph, check completeness
//! and short circuits, flood terminal voltages across conductors, and compute
//! an approximate per-component electrical state.
//!
//! The model is a deliberate teaching simplification, not a nodal solver:
//! - wires carry no voltage drop (equipotential flood-fill)
//! - only LEDs get a real current model, as a single series loop
//! - parallel branches and drop distribution are out of scope
//!
//! `simulate` is a pure function of its input plus the fixed battery
//! constants: no cross-call state, no I/O, bounded time in component count.

pub mod analyzer;
pub mod result;
pub mod simulate;
pub mod voltage;

// Re-exports
pub use analyzer::analyze_component;
pub use result::{ComponentState, NodeState, SimulationResult};
pub use simulate::simulate;
pub use voltage::propagate_voltages;
