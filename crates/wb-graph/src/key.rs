//! Canonical node identity.

use std::fmt;

use wb_core::Polarity;
use wb_core::numeric::Real;
use wb_core::position::Position;

/// Coordinates are scaled by this factor and rounded before comparison, so
/// identity is exact value equality at millipitch resolution. Callers must
/// supply pre-quantized positions; the key never merges nearby holes.
const KEY_SCALE: Real = 1000.0;

/// Identity of a node in the electrical graph.
///
/// A pure function of position: two components sharing an exact endpoint
/// coordinate always resolve to the same key, which is what "connected"
/// means on this board. The two battery terminals are reserved identities,
/// distinct from any grid key even when coordinates coincide — a wire landing
/// exactly on a lead still goes through the terminal linker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKey {
    Terminal(Polarity),
    Grid([i64; 3]),
}

impl NodeKey {
    /// Derive the grid key for a position.
    pub fn from_position(pos: Position) -> Self {
        NodeKey::Grid([quantize(pos.x()), quantize(pos.y()), quantize(pos.z())])
    }
}

fn quantize(v: Real) -> i64 {
    (v * KEY_SCALE).round() as i64
}

fn coordinate(q: i64) -> Real {
    q as Real / KEY_SCALE
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Terminal(polarity) => f.write_str(polarity.node_name()),
            NodeKey::Grid([x, y, z]) => {
                write!(
                    f,
                    "node-{}-{}-{}",
                    coordinate(*x),
                    coordinate(*y),
                    coordinate(*z)
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_value_equality() {
        let a = NodeKey::from_position(Position::new(1.2, 0.6, 0.0));
        let b = NodeKey::from_position(Position::new(1.2, 0.6, 0.0));
        assert_eq!(a, b);

        // one pitch apart is a different node, always
        let c = NodeKey::from_position(Position::new(1.5, 0.6, 0.0));
        assert_ne!(a, c);
    }

    #[test]
    fn terminal_keys_are_reserved() {
        // A grid key at the exact lead coordinate is still not the terminal.
        let at_lead = NodeKey::from_position(Polarity::Positive.position());
        assert_ne!(at_lead, NodeKey::Terminal(Polarity::Positive));
    }

    #[test]
    fn display_names() {
        assert_eq!(
            NodeKey::Terminal(Polarity::Positive).to_string(),
            "battery-positive"
        );
        assert_eq!(
            NodeKey::Terminal(Polarity::Negative).to_string(),
            "battery-negative"
        );
        assert_eq!(
            NodeKey::from_position(Position::new(6.15, 1.07, 0.0)).to_string(),
            "node-6.15-1.07-0"
        );
    }
}
