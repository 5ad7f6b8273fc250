//! Shared application service layer for wirebench.
//!
//! Frontends (CLI today, a board renderer tomorrow) talk to the engine
//! through [`CircuitSession`] rather than calling `wb-sim` directly, so the
//! run/stop lifecycle and the per-LED visual state live in exactly one
//! place.

pub mod error;
pub mod session;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use session::{CircuitSession, LedVisualState, SessionState};
