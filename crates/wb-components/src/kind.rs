//! Typed electrical parameter model.

use wb_core::constants::{LED_INTERNAL_RESISTANCE, WIRE_RESISTANCE};
use wb_core::numeric::Real;

use crate::led::LedColor;
use crate::placed::{ComponentType, PlacedComponent, Polarity};
use crate::resistor::parse_resistance;

/// Electrical parameters of a registered component.
///
/// Built once per analysis from the placed record; the battery is not a
/// variant here because it is represented structurally by the two terminal
/// nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentKind {
    /// Idealized conductor; resistance is nominal only.
    Wire { resistance: Real },
    Resistor { resistance: Real },
    Led {
        resistance: Real,
        forward_voltage: Real,
        color: LedColor,
        reversed: bool,
    },
    Switch { closed: bool },
}

impl ComponentKind {
    /// Derive electrical parameters from a placed record.
    pub fn from_placed(placed: &PlacedComponent) -> Self {
        match placed.component_type {
            ComponentType::Wire => ComponentKind::Wire {
                resistance: WIRE_RESISTANCE,
            },
            ComponentType::Resistor => ComponentKind::Resistor {
                resistance: parse_resistance(placed.value.as_deref()),
            },
            ComponentType::Led => {
                let color = LedColor::from_hex(placed.color.as_deref().unwrap_or("#ff0000"));
                ComponentKind::Led {
                    resistance: LED_INTERNAL_RESISTANCE,
                    forward_voltage: color.forward_voltage(),
                    color,
                    reversed: placed.polarity == Some(Polarity::Reversed),
                }
            }
            ComponentType::Switch => ComponentKind::Switch {
                closed: placed.closed,
            },
        }
    }

    /// Whether this component currently behaves as a zero-resistance
    /// conductor. Conductors carry the equipotential flood and make up
    /// short-circuit paths.
    pub fn is_conductor(&self) -> bool {
        matches!(
            self,
            ComponentKind::Wire { .. } | ComponentKind::Switch { closed: true }
        )
    }

    /// Whether this component contributes an adjacency edge at all.
    /// Everything does except an open switch.
    pub fn is_connected(&self) -> bool {
        !matches!(self, ComponentKind::Switch { closed: false })
    }

    pub fn is_wire(&self) -> bool {
        matches!(self, ComponentKind::Wire { .. })
    }

    pub fn is_resistor(&self) -> bool {
        matches!(self, ComponentKind::Resistor { .. })
    }

    pub fn is_led(&self) -> bool {
        matches!(self, ComponentKind::Led { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wb_core::Position;

    fn placed(component_type: ComponentType) -> PlacedComponent {
        PlacedComponent {
            id: "c1".into(),
            component_type,
            position: Position::new(0.0, 0.0, 0.0),
            start_position: Some(Position::new(0.0, 0.0, 0.0)),
            end_position: Some(Position::new(0.3, 0.0, 0.0)),
            color: None,
            value: None,
            polarity: None,
            closed: false,
        }
    }

    #[test]
    fn wire_is_conductor() {
        let kind = ComponentKind::from_placed(&placed(ComponentType::Wire));
        assert!(kind.is_conductor());
        assert!(kind.is_connected());
    }

    #[test]
    fn resistor_defaults_when_value_missing() {
        let kind = ComponentKind::from_placed(&placed(ComponentType::Resistor));
        assert_eq!(kind, ComponentKind::Resistor { resistance: 220.0 });
        assert!(!kind.is_conductor());
    }

    #[test]
    fn led_defaults_to_red() {
        let kind = ComponentKind::from_placed(&placed(ComponentType::Led));
        match kind {
            ComponentKind::Led {
                forward_voltage,
                color,
                reversed,
                ..
            } => {
                assert_eq!(color, LedColor::Red);
                assert_eq!(forward_voltage, 2.0);
                assert!(!reversed);
            }
            other => panic!("expected Led, got {other:?}"),
        }
    }

    #[test]
    fn switch_state_drives_connectivity() {
        let open = ComponentKind::from_placed(&placed(ComponentType::Switch));
        assert!(!open.is_conductor());
        assert!(!open.is_connected());

        let mut rec = placed(ComponentType::Switch);
        rec.closed = true;
        let closed = ComponentKind::from_placed(&rec);
        assert!(closed.is_conductor());
        assert!(closed.is_connected());
    }
}
