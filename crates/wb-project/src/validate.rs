//! Circuit validation logic.
//!
//! Advisory diagnostics over a placed-component list. Nothing here stops the
//! analysis engine; a record with issues is simply skipped by the graph
//! builder, and the issue list explains why.

use std::collections::HashSet;

use wb_components::{ComponentType, PlacedComponent};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    #[error("Duplicate ID: {id}")]
    DuplicateId { id: String },

    #[error("Missing endpoint data: {id} ({reason})")]
    MissingEndpoints { id: String, reason: String },

    #[error("Invalid value: {id} = {value:?} (falls back to 220 ohm)")]
    UnparseableResistance { id: String, value: String },
}

/// Scan a placed-component list for records the analysis engine will skip or
/// silently reinterpret.
pub fn validate_components(components: &[PlacedComponent]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let mut seen = HashSet::new();
    for comp in components {
        if !seen.insert(&comp.id) {
            issues.push(ValidationIssue::DuplicateId {
                id: comp.id.clone(),
            });
        }

        if comp.endpoints().is_none() {
            let reason = match comp.component_type {
                ComponentType::Wire => "wire without startPosition".to_string(),
                _ => "missing endPosition".to_string(),
            };
            issues.push(ValidationIssue::MissingEndpoints {
                id: comp.id.clone(),
                reason,
            });
        }

        // Same leading-digits rule the engine's fallback parser uses.
        if comp.component_type == ComponentType::Resistor
            && let Some(value) = &comp.value
            && !value.starts_with(|c: char| c.is_ascii_digit())
        {
            issues.push(ValidationIssue::UnparseableResistance {
                id: comp.id.clone(),
                value: value.clone(),
            });
        }
    }

    issues
}
