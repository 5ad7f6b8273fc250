//! LED color lookup.

use wb_core::numeric::Real;

/// LED color, derived from the placed component's hex color string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedColor {
    Red,
    Green,
    Blue,
    Yellow,
    /// Unrecognized color string; modeled like a red LED.
    Other,
}

impl LedColor {
    /// Map a "#rrggbb" string onto a known color. Matching is exact apart
    /// from ASCII case, mirroring the board editor's fixed palette.
    pub fn from_hex(hex: &str) -> Self {
        match hex.to_ascii_lowercase().as_str() {
            "#ff0000" => LedColor::Red,
            "#00ff00" => LedColor::Green,
            "#0000ff" => LedColor::Blue,
            "#ffff00" => LedColor::Yellow,
            _ => LedColor::Other,
        }
    }

    /// Forward voltage: minimum volts before the LED conducts.
    pub fn forward_voltage(self) -> Real {
        match self {
            LedColor::Red | LedColor::Yellow | LedColor::Other => 2.0,
            LedColor::Green => 2.1,
            LedColor::Blue => 3.2,
        }
    }
}
