//! Errors for converting raw state indices.

use thiserror::Error;

/// Errors that can occur when mapping an integer onto a [`FloatState`](super::FloatState).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The index does not name one of the eight automaton states
    #[error("State index {0} is out of range, expected 0..=7")]
    OutOfRange(u8),
}
