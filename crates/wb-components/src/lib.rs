//! wb-components: component library for the protoboard circuit model.
//!
//! Provides:
//! - the placed-component input schema (`PlacedComponent`), as produced by a
//!   board editor and persisted to circuit JSON files
//! - the typed electrical parameter model (`ComponentKind`) the analysis
//!   engine works with
//! - resistor value parsing and LED color lookup
//!
//! The electrical model is deliberately simple: wires and closed switches are
//! ideal conductors, resistors are pure resistances, LEDs are a fixed series
//! resistance behind a color-dependent forward voltage. There is no diode
//! curve and no temperature dependence.

pub mod kind;
pub mod led;
pub mod placed;
pub mod resistor;

// Re-exports
pub use kind::ComponentKind;
pub use led::LedColor;
pub use placed::{ComponentType, Endpoints, PlacedComponent, Polarity as LedPolarity};
pub use resistor::parse_resistance;
