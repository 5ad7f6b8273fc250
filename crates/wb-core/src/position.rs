//! Grid positions and distance helpers.

use serde::{Deserialize, Serialize};

use crate::numeric::Real;

/// A point on the protoboard grid, in board units.
///
/// Positions arrive pre-quantized to the grid pitch; the engine compares them
/// by value, never by proximity (the one exception is the terminal linker,
/// which uses [`Position::distance_to`] against the battery lead positions).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(pub [Real; 3]);

impl Position {
    pub fn new(x: Real, y: Real, z: Real) -> Self {
        Self([x, y, z])
    }

    pub fn x(&self) -> Real {
        self.0[0]
    }

    pub fn y(&self) -> Real {
        self.0[1]
    }

    pub fn z(&self) -> Real {
        self.0[2]
    }

    /// Absolute Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> Real {
        let dx = self.0[0] - other.0[0];
        let dy = self.0[1] - other.0[1];
        let dz = self.0[2] - other.0[2];
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl From<[Real; 3]> for Position {
    fn from(xyz: [Real; 3]) -> Self {
        Self(xyz)
    }
}
