//! Automaton states.
//!
//! The recognizer has eight states. Each one names the part of a literal
//! that has just been consumed, so a state also tells what may follow.

use super::error::StateError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A node of the floating-point automaton.
///
/// Variants are declared in index order: `Start` is state 0 and
/// `ExponentDigits` is state 7. `Integer`, `Fraction` and `ExponentDigits`
/// are the accepting states.
///
/// # Example
///
/// ```rust
/// use floatdfa::core::FloatState;
///
/// assert_eq!(FloatState::Start.index(), 0);
/// assert_eq!(FloatState::try_from(4u8), Ok(FloatState::Fraction));
/// assert!(FloatState::Fraction.is_accepting());
/// assert!(!FloatState::Point.is_accepting());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum FloatState {
    /// Nothing consumed yet
    Start,
    /// A leading sign, waiting for the first integer digit
    Sign,
    /// One or more integer digits
    Integer,
    /// A decimal point, waiting for the first fractional digit
    Point,
    /// One or more fractional digits
    Fraction,
    /// The exponent marker `E`/`e`
    Exponent,
    /// The sign of the exponent
    ExponentSign,
    /// One or more exponent digits
    ExponentDigits,
}

impl FloatState {
    /// Number of states in the automaton.
    pub const COUNT: usize = 8;

    /// Every state, ordered by index.
    pub const ALL: [FloatState; Self::COUNT] = [
        Self::Start,
        Self::Sign,
        Self::Integer,
        Self::Point,
        Self::Fraction,
        Self::Exponent,
        Self::ExponentSign,
        Self::ExponentDigits,
    ];

    /// The state every scan begins in.
    pub const INITIAL: FloatState = Self::Start;

    /// Get the state's name for display/logging.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Sign => "Sign",
            Self::Integer => "Integer",
            Self::Point => "Point",
            Self::Fraction => "Fraction",
            Self::Exponent => "Exponent",
            Self::ExponentSign => "ExponentSign",
            Self::ExponentDigits => "ExponentDigits",
        }
    }

    /// Position of this state in the numbering `0..=7`.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Check if input may end in this state.
    ///
    /// True for states 2, 4 and 7 only.
    pub const fn is_accepting(self) -> bool {
        matches!(self, Self::Integer | Self::Fraction | Self::ExponentDigits)
    }

    /// Check if this is the initial state.
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::Start)
    }
}

impl TryFrom<u8> for FloatState {
    type Error = StateError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(StateError::OutOfRange(index))
    }
}

impl fmt::Display for FloatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
