//! Per-component electrical state.
//!
//! Only LEDs get a real model: a single series loop at the full source
//! voltage, with at most one current-limiting resistor found anywhere in the
//! circuit. Everything else reports a nominal placeholder current — a
//! documented limitation of the teaching model, not a solver.

use tracing::debug;
use wb_components::ComponentKind;
use wb_core::Polarity;
use wb_core::constants::{
    LED_ON_THRESHOLD, LED_SAFE_CURRENT, NOMINAL_CURRENT, REVERSE_BIAS_VOLTAGE, SOURCE_VOLTAGE,
};
use wb_core::numeric::Real;
use wb_graph::{CircuitComponent, CircuitGraph, is_reachable_to_terminal};

use crate::result::ComponentState;

/// Compute one component's electrical state, pushing any diagnostic strings
/// onto `warnings`.
pub fn analyze_component(
    graph: &CircuitGraph,
    comp: &CircuitComponent,
    warnings: &mut Vec<String>,
) -> ComponentState {
    match &comp.kind {
        ComponentKind::Led {
            resistance,
            forward_voltage,
            ..
        } => analyze_led(graph, comp, *resistance, *forward_voltage, warnings),
        ComponentKind::Switch { closed: false } => ComponentState {
            current: 0.0,
            voltage: drop_across(graph, comp),
            power: 0.0,
            is_on: false,
            is_burned: false,
        },
        _ => {
            // Nominal placeholder; wires, resistors and closed switches are
            // not individually solved.
            let voltage = drop_across(graph, comp);
            ComponentState {
                current: NOMINAL_CURRENT,
                voltage,
                power: voltage * NOMINAL_CURRENT,
                is_on: false,
                is_burned: false,
            }
        }
    }
}

fn analyze_led(
    graph: &CircuitGraph,
    comp: &CircuitComponent,
    internal_resistance: Real,
    forward_voltage: Real,
    warnings: &mut Vec<String>,
) -> ComponentState {
    // Does this LED see both battery terminals from either leg?
    let to_positive = endpoint_reaches(graph, comp, Polarity::Positive);
    let to_negative = endpoint_reaches(graph, comp, Polarity::Negative);
    let complete = to_positive && to_negative;

    // Flood voltage across a resistor/LED boundary is meaningless under this
    // model, so the LED is always evaluated at the full source voltage.
    let voltage = SOURCE_VOLTAGE;

    let current = if !complete || voltage < forward_voltage {
        0.0
    } else {
        let series = series_resistor(graph);
        if series.is_none() {
            debug!(led = %comp.name, "no current-limiting resistor in circuit");
        }
        let total_resistance = internal_resistance + series.unwrap_or(0.0);
        (voltage - forward_voltage) / total_resistance
    };

    let is_on = complete && current > LED_ON_THRESHOLD && voltage >= forward_voltage;
    let is_burned = complete && current > LED_SAFE_CURRENT;

    if is_burned {
        warnings.push(format!(
            "LED '{}' burned out! Current too high: {:.1} mA (max: 30 mA)",
            comp.name,
            current * 1000.0
        ));
    }

    // Current-based symptom check; the polarity tag is display-only. The
    // check cannot distinguish a backwards LED from a missing return path
    // and does not try: any dark LED at full voltage draws the warning.
    let reverse_biased = voltage > REVERSE_BIAS_VOLTAGE && current < LED_ON_THRESHOLD;
    if reverse_biased {
        warnings.push(format!(
            "LED '{}' may be connected backwards! Check polarity.",
            comp.name
        ));
    }

    ComponentState {
        current,
        voltage,
        power: voltage * current,
        is_on,
        is_burned,
    }
}

/// Whether either endpoint of a component can reach the given terminal.
fn endpoint_reaches(graph: &CircuitGraph, comp: &CircuitComponent, terminal: Polarity) -> bool {
    is_reachable_to_terminal(graph, comp.start, terminal)
        || is_reachable_to_terminal(graph, comp.end, terminal)
}

/// Resistance of the first registered resistor connected to both terminals,
/// if any. The search is circuit-wide, not per-LED-path: one limiting
/// resistor is assumed to protect the whole series loop.
fn series_resistor(graph: &CircuitGraph) -> Option<Real> {
    for comp in graph.components() {
        let ComponentKind::Resistor { resistance } = comp.kind else {
            continue;
        };
        if endpoint_reaches(graph, comp, Polarity::Positive)
            && endpoint_reaches(graph, comp, Polarity::Negative)
        {
            return Some(resistance);
        }
    }
    None
}

/// Absolute voltage difference between a component's endpoint nodes, from
/// the flood-filled node voltages.
fn drop_across(graph: &CircuitGraph, comp: &CircuitComponent) -> Real {
    let start = graph.node(comp.start).map_or(0.0, |n| n.voltage);
    let end = graph.node(comp.end).map_or(0.0, |n| n.voltage);
    (start - end).abs()
}
