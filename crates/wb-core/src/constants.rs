//! Fixed physical constants of the protoboard model.
//!
//! The board carries a single 9 V battery whose two lead positions are part
//! of the board geometry, not of the user's circuit. Everything here is a
//! deliberate teaching-model simplification; see DESIGN.md.

use crate::numeric::Real;
use crate::position::Position;

/// Fixed DC source voltage (volts).
pub const SOURCE_VOLTAGE: Real = 9.0;

/// Hole-to-hole pitch of the protoboard grid (board units).
pub const GRID_PITCH: Real = 0.3;

/// Maximum distance at which a wire endpoint counts as touching a battery
/// lead. Placed wires rarely land exactly on the lead coordinates.
pub const TERMINAL_LINK_TOLERANCE: Real = 0.1;

/// Idealized wire resistance (ohms). Nominal only; wires never drop voltage.
pub const WIRE_RESISTANCE: Real = 0.01;

/// Default resistor value when the value string cannot be parsed (ohms).
pub const DEFAULT_RESISTANCE: Real = 220.0;

/// Internal series resistance of every LED (ohms).
pub const LED_INTERNAL_RESISTANCE: Real = 20.0;

/// Minimum current for an LED to visibly light (amps).
pub const LED_ON_THRESHOLD: Real = 0.001;

/// Safe-current ceiling above which an LED burns out (amps, 30 mA).
pub const LED_SAFE_CURRENT: Real = 0.030;

/// Voltage above which a dark LED is suspected of reverse bias (volts).
pub const REVERSE_BIAS_VOLTAGE: Real = 3.0;

/// Placeholder current reported for components without a real model (amps).
pub const NOMINAL_CURRENT: Real = 0.01;

/// One of the two fixed battery terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    /// Board position of this battery lead.
    pub fn position(self) -> Position {
        match self {
            Polarity::Positive => Position::new(6.15, 1.07, 0.0),
            Polarity::Negative => Position::new(5.85, 1.07, 0.0),
        }
    }

    /// Fixed voltage held at this terminal.
    pub fn voltage(self) -> Real {
        match self {
            Polarity::Positive => SOURCE_VOLTAGE,
            Polarity::Negative => 0.0,
        }
    }

    /// Canonical node name, matching the saved-circuit vocabulary.
    pub fn node_name(self) -> &'static str {
        match self {
            Polarity::Positive => "battery-positive",
            Polarity::Negative => "battery-negative",
        }
    }
}
