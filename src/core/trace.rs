//! Recorded scans.
//!
//! A [`Trace`] is the ordered list of steps the recognizer took over one
//! input. It is built by [`Recognizer::trace`](crate::Recognizer::trace)
//! and is otherwise read-only.

use super::state::FloatState;
use super::symbol::SymbolClass;
use serde::{Deserialize, Serialize};

/// One character consumed by the automaton.
///
/// `to` is `None` when the step ended the scan: either the character was
/// outside the alphabet or the table has no transition for it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Step {
    /// Character offset of `symbol` in the input
    pub position: usize,
    /// The character read
    pub symbol: char,
    /// Its symbol class
    pub class: SymbolClass,
    /// State before reading `symbol`
    pub from: FloatState,
    /// State after reading `symbol`
    pub to: Option<FloatState>,
}

impl Step {
    pub fn is_reject(&self) -> bool {
        self.to.is_none()
    }
}

/// Ordered record of a single scan.
///
/// # Example
///
/// ```rust
/// use floatdfa::core::FloatState;
/// use floatdfa::Recognizer;
///
/// let trace = Recognizer::new().trace("-3E+8");
///
/// assert!(trace.accepted());
/// assert_eq!(
///     trace.path(),
///     vec![
///         FloatState::Start,
///         FloatState::Sign,
///         FloatState::Integer,
///         FloatState::Exponent,
///         FloatState::ExponentSign,
///         FloatState::ExponentDigits,
///     ]
/// );
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    /// Create an empty trace, as produced for empty input.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub(crate) fn record(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// All recorded steps in input order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Get the path of states traversed.
    ///
    /// Starts with the initial state, followed by the state reached after
    /// each step. A rejecting step contributes nothing.
    pub fn path(&self) -> Vec<FloatState> {
        std::iter::once(FloatState::INITIAL)
            .chain(self.steps.iter().filter_map(|step| step.to))
            .collect()
    }

    /// The state the scan finished in, or `None` if it was cut short.
    pub fn final_state(&self) -> Option<FloatState> {
        match self.steps.last() {
            Some(step) => step.to,
            None => Some(FloatState::INITIAL),
        }
    }

    /// The step that stopped the scan early, if any.
    pub fn rejected_at(&self) -> Option<&Step> {
        self.steps.last().filter(|step| step.is_reject())
    }

    /// Whether the scanned input belongs to the language.
    pub fn accepted(&self) -> bool {
        self.final_state().is_some_and(FloatState::is_accepting)
    }
}
