use wb_components::{ComponentType, PlacedComponent};
use wb_core::Position;
use wb_project::{load_circuit, save_circuit, validate_components};

fn sample_circuit() -> Vec<PlacedComponent> {
    let mut led = PlacedComponent {
        id: "led1".to_string(),
        component_type: ComponentType::Led,
        position: Position::new(2.0, 1.0, 0.0),
        start_position: Some(Position::new(2.0, 1.0, 0.0)),
        end_position: Some(Position::new(2.3, 1.0, 0.0)),
        color: None,
        value: None,
        polarity: None,
        closed: false,
    };
    led.color = Some("#ff0000".to_string());

    vec![
        PlacedComponent {
            id: "w1".to_string(),
            component_type: ComponentType::Wire,
            position: Position::new(6.15, 1.07, 0.0),
            start_position: Some(Position::new(6.15, 1.07, 0.0)),
            end_position: Some(Position::new(1.0, 1.0, 0.0)),
            color: None,
            value: None,
            polarity: None,
            closed: false,
        },
        PlacedComponent {
            id: "r1".to_string(),
            component_type: ComponentType::Resistor,
            position: Position::new(1.0, 1.0, 0.0),
            start_position: Some(Position::new(1.0, 1.0, 0.0)),
            end_position: Some(Position::new(2.0, 1.0, 0.0)),
            color: None,
            value: Some("220".to_string()),
            polarity: None,
            closed: false,
        },
        led,
    ]
}

#[test]
fn roundtrip_json_circuit() {
    let circuit = sample_circuit();
    assert!(validate_components(&circuit).is_empty());

    let temp_dir = std::env::temp_dir();
    let path = temp_dir.join("wb_project_roundtrip.json");

    save_circuit(&path, &circuit).unwrap();
    let loaded = load_circuit(&path).unwrap();

    assert_eq!(circuit, loaded);
}

#[test]
fn roundtrip_json_empty_circuit() {
    let temp_dir = std::env::temp_dir();
    let path = temp_dir.join("wb_project_roundtrip_empty.json");

    save_circuit(&path, &[]).unwrap();
    let loaded = load_circuit(&path).unwrap();

    assert!(loaded.is_empty());
}

#[test]
fn load_accepts_camel_case_records() {
    let json = r#"[
        {
            "id": "w1",
            "type": "wire",
            "position": [6.15, 1.07, 0],
            "startPosition": [6.15, 1.07, 0],
            "endPosition": [1.0, 1.0, 0]
        },
        {
            "id": "s1",
            "type": "switch",
            "position": [1.0, 1.0, 0],
            "endPosition": [1.3, 1.0, 0],
            "closed": true
        }
    ]"#;

    let temp_dir = std::env::temp_dir();
    let path = temp_dir.join("wb_project_camel_case.json");
    std::fs::write(&path, json).unwrap();

    let loaded = load_circuit(&path).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].component_type, ComponentType::Wire);
    assert!(loaded[1].closed);
}
