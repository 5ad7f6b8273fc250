//! Placed-component input schema.
//!
//! This is the record a board editor hands to the engine and the shape that
//! circuit JSON files round-trip unchanged. Field names follow the saved-file
//! vocabulary (camelCase).

use serde::{Deserialize, Serialize};
use wb_core::Position;

/// Kind tag of a placed component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    Wire,
    Resistor,
    Led,
    Switch,
}

/// Display-only LED orientation tag.
///
/// Carried through for rendering; the analyzer's reverse-bias detection is
/// current-based and never reads this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Normal,
    Reversed,
}

/// One component as placed on the board.
///
/// Wires span `start_position` → `end_position`; resistors, LEDs and
/// switches span `position` → `end_position`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedComponent {
    /// Caller-assigned unique id.
    pub id: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_position: Option<Position>,
    /// "#rrggbb" hex color; selects LED forward voltage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Resistor ohms as a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polarity: Option<Polarity>,
    /// Switch contact state. Switches are placed open.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub closed: bool,
}

/// Resolved electrical endpoints of a placed component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Endpoints {
    pub start: Position,
    pub end: Position,
}

impl PlacedComponent {
    /// Resolve the two electrical endpoints, or `None` when required
    /// position data is missing and the record cannot enter the graph.
    pub fn endpoints(&self) -> Option<Endpoints> {
        let end = self.end_position?;
        let start = match self.component_type {
            ComponentType::Wire => self.start_position?,
            _ => self.position,
        };
        Some(Endpoints { start, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_requires_start_position() {
        let wire = PlacedComponent {
            id: "w1".into(),
            component_type: ComponentType::Wire,
            position: Position::new(0.0, 0.0, 0.0),
            start_position: None,
            end_position: Some(Position::new(0.3, 0.0, 0.0)),
            color: None,
            value: None,
            polarity: None,
            closed: false,
        };
        assert!(wire.endpoints().is_none());

        let mut wired = wire.clone();
        wired.start_position = Some(Position::new(0.0, 0.0, 0.0));
        let eps = wired.endpoints().unwrap();
        assert_eq!(eps.start, Position::new(0.0, 0.0, 0.0));
        assert_eq!(eps.end, Position::new(0.3, 0.0, 0.0));
    }

    #[test]
    fn led_spans_position_to_end_position() {
        let led = PlacedComponent {
            id: "led1".into(),
            component_type: ComponentType::Led,
            position: Position::new(1.2, 0.6, 0.0),
            start_position: None,
            end_position: Some(Position::new(1.5, 0.6, 0.0)),
            color: Some("#ff0000".into()),
            value: None,
            polarity: Some(Polarity::Normal),
            closed: false,
        };
        let eps = led.endpoints().unwrap();
        assert_eq!(eps.start, led.position);
    }

    #[test]
    fn deserializes_saved_file_record() {
        let json = r##"{
            "id": "r1",
            "type": "resistor",
            "position": [1.2, 0.6, 0.0],
            "endPosition": [1.8, 0.6, 0.0],
            "value": "220"
        }"##;
        let comp: PlacedComponent = serde_json::from_str(json).unwrap();
        assert_eq!(comp.component_type, ComponentType::Resistor);
        assert_eq!(comp.value.as_deref(), Some("220"));
        assert!(comp.start_position.is_none());
        assert!(!comp.closed);
    }
}
