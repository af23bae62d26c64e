//! The table-driven recognizer.
//!
//! A [`Recognizer`] folds its transition table over the input one character
//! at a time and answers whether the input is a floating-point literal.
//! Rejection is a normal `false`, never an error.

use crate::core::{classify, FloatState, Step, SymbolClass, Trace};
use crate::table::TransitionTable;

/// Decides membership of strings in the language of a transition table.
///
/// Recognizers are plain values: every call starts from
/// [`FloatState::INITIAL`] and keeps its current state on the stack, so one
/// recognizer can be shared freely across threads.
///
/// # Example
///
/// ```rust
/// use floatdfa::Recognizer;
///
/// let recognizer = Recognizer::new();
///
/// assert!(recognizer.recognize("-33.33E-9"));
/// assert!(recognizer.recognize(".390"));
/// assert!(!recognizer.recognize("+.3"));
/// assert!(!recognizer.recognize("nine"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Recognizer {
    table: TransitionTable,
}

impl Recognizer {
    /// Create a recognizer for floating-point literals.
    pub const fn new() -> Self {
        Self::with_table(TransitionTable::FLOATING_POINT)
    }

    /// Create a recognizer driven by `table`.
    pub const fn with_table(table: TransitionTable) -> Self {
        Self { table }
    }

    /// The table this recognizer consults.
    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Check whether `state` accepts end of input.
    pub const fn is_accepting(state: FloatState) -> bool {
        state.is_accepting()
    }

    /// Check whether `input` is a floating-point literal.
    ///
    /// Scans left to right in a single pass and stops at the first
    /// character that is outside the alphabet or has no transition.
    /// Empty input is rejected.
    pub fn recognize(&self, input: &str) -> bool {
        let mut state = FloatState::INITIAL;

        for (position, symbol) in input.chars().enumerate() {
            let class = classify(symbol);
            if class == SymbolClass::Invalid {
                log::trace!("{symbol:?} at {position} is outside the alphabet");
                return false;
            }

            match self.table.next(state, class) {
                Some(next) => state = next,
                None => {
                    log::trace!("No transition from {state} on {class:?} at {position}");
                    return false;
                }
            }
        }

        Self::is_accepting(state)
    }

    /// Scan `input` like [`recognize`](Self::recognize), recording each step.
    ///
    /// The trace stops at the same character `recognize` would stop at, and
    /// `trace(input).accepted()` always equals `recognize(input)`.
    pub fn trace(&self, input: &str) -> Trace {
        let mut trace = Trace::new();
        let mut state = FloatState::INITIAL;

        for (position, symbol) in input.chars().enumerate() {
            let class = classify(symbol);
            let to = self.table.next(state, class);

            trace.record(Step {
                position,
                symbol,
                class,
                from: state,
                to,
            });

            match to {
                Some(next) => state = next,
                None => break,
            }
        }

        trace
    }
}

impl Default for Recognizer {
    fn default() -> Self {
        Self::new()
    }
}
