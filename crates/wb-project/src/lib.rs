//! wb-project: circuit file persistence and validation.
//!
//! A circuit file is nothing more than the JSON array of placed-component
//! records, saved and loaded unchanged. Validation is advisory: the analysis
//! engine silently skips records it cannot use, and `validate_components`
//! is how a front end surfaces those records to the user instead.

pub mod validate;

pub use validate::{ValidationIssue, validate_components};

use wb_components::PlacedComponent;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_circuit(path: &std::path::Path) -> ProjectResult<Vec<PlacedComponent>> {
    let content = std::fs::read_to_string(path)?;
    let components: Vec<PlacedComponent> = serde_json::from_str(&content)?;
    Ok(components)
}

pub fn save_circuit(path: &std::path::Path, components: &[PlacedComponent]) -> ProjectResult<()> {
    let content = serde_json::to_string_pretty(components)?;
    std::fs::write(path, content)?;
    Ok(())
}
