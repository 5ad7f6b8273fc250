//! wb-core: stable foundation for wirebench.
//!
//! Contains:
//! - constants (battery, grid and LED model constants)
//! - position (grid positions + distance helpers)
//! - numeric (Real + float helpers)
//! - ids (stable compact IDs for graph objects)

pub mod constants;
pub mod ids;
pub mod numeric;
pub mod position;

// Re-exports: nice ergonomics for downstream crates
pub use constants::Polarity;
pub use ids::*;
pub use numeric::*;
pub use position::*;
