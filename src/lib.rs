//! Floatdfa: a table-driven recognizer for floating-point literals
//!
//! Floatdfa decides whether a string is a floating-point literal such as
//! `33`, `-3E+8` or `.390` using a deterministic finite automaton. All
//! grammar lives in a fixed transition table; the driver only classifies
//! characters and looks up successors.
//!
//! # Core Concepts
//!
//! - **States**: the eight automaton states as the `FloatState` enum
//! - **Symbol classes**: the alphabet encoding applied to every character
//! - **Transition table**: the total `(state, class) -> Option<state>` map
//! - **Recognizer**: the single-pass driver, with an optional step trace
//!
//! # Example
//!
//! ```rust
//! use floatdfa::recognize;
//!
//! assert!(recognize("+3.0"));
//! assert!(recognize("-3e+8"));
//! assert!(!recognize("E-9"));
//! assert!(!recognize(""));
//! ```

pub mod core;
pub mod recognizer;
pub mod table;

// Re-export commonly used types
pub use crate::core::{classify, FloatState, SymbolClass, Trace};
pub use recognizer::Recognizer;
pub use table::TransitionTable;

static FLOATING_POINT: Recognizer = Recognizer::new();

/// Check whether `input` is a floating-point literal.
///
/// Shorthand for [`Recognizer::recognize`] on the standard table.
pub fn recognize(input: &str) -> bool {
    FLOATING_POINT.recognize(input)
}
