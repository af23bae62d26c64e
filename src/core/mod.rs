//! Core automaton types.
//!
//! This module contains the pure pieces the recognizer is assembled from:
//! - The enumerated automaton states
//! - The alphabet encoding
//! - Scan traces
//!
//! Nothing here performs I/O or holds mutable shared state.

mod error;
mod state;
mod symbol;
mod trace;

pub use error::StateError;
pub use state::FloatState;
pub use symbol::{classify, SymbolClass};
pub use trace::{Step, Trace};
