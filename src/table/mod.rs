//! The transition table.
//!
//! All grammar knowledge lives in a [`TransitionTable`]: a fixed 8×4 grid
//! keyed by state and symbol class. `None` entries reject. Tables can be
//! exported and loaded again as JSON or bincode.

use crate::core::{FloatState, SymbolClass};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::TableError;

use FloatState::*;

type Row = [Option<FloatState>; SymbolClass::COUNT];

/// Total mapping from `(state, symbol class)` to the next state.
///
/// Rows are indexed by [`FloatState::index`], columns by
/// [`SymbolClass::column`]. A table never changes after construction.
///
/// # Example
///
/// ```rust
/// use floatdfa::core::{FloatState, SymbolClass};
/// use floatdfa::table::TransitionTable;
///
/// let table = TransitionTable::FLOATING_POINT;
///
/// assert_eq!(
///     table.next(FloatState::Start, SymbolClass::Point),
///     Some(FloatState::Point)
/// );
/// assert_eq!(table.next(FloatState::Sign, SymbolClass::Point), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TransitionTable {
    rows: [Row; FloatState::COUNT],
}

impl TransitionTable {
    /// Floating-point literals: `[+-]?digits[.digits]` or `.digits`,
    /// optionally followed by `(E|e)[+-]?digits`.
    pub const FLOATING_POINT: TransitionTable = TransitionTable::new([
        //   Sign               Digit                 Point        Exponent
        [Some(Sign), Some(Integer), Some(Point), None],
        [None, Some(Integer), None, None],
        [None, Some(Integer), Some(Point), Some(Exponent)],
        [None, Some(Fraction), None, None],
        [None, Some(Fraction), None, Some(Exponent)],
        [Some(ExponentSign), Some(ExponentDigits), None, None],
        [None, Some(ExponentDigits), None, None],
        [None, Some(ExponentDigits), None, None],
    ]);

    /// Build a table from explicit rows, one per state in index order.
    pub const fn new(rows: [Row; FloatState::COUNT]) -> Self {
        Self { rows }
    }

    /// Look up the successor of `state` on `class`.
    ///
    /// Returns `None` when the pair rejects. [`SymbolClass::Invalid`] has no
    /// column and always rejects.
    #[inline]
    pub const fn next(&self, state: FloatState, class: SymbolClass) -> Option<FloatState> {
        match class.column() {
            Some(column) => self.rows[state.index() as usize][column],
            None => None,
        }
    }

    /// Iterate every `(state, class, successor)` entry, row by row.
    pub fn entries(
        &self,
    ) -> impl Iterator<Item = (FloatState, SymbolClass, Option<FloatState>)> + '_ {
        FloatState::ALL.into_iter().flat_map(move |state| {
            SymbolClass::ALPHABET
                .into_iter()
                .map(move |class| (state, class, self.next(state, class)))
        })
    }

    /// Serialize the table to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, TableError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TableError::SerializationFailed(e.to_string()))
    }

    /// Load a table from JSON produced by [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let table: Self = serde_json::from_str(json)
            .map_err(|e| TableError::DeserializationFailed(e.to_string()))?;
        log::debug!("Loaded transition table from {} bytes of JSON", json.len());
        Ok(table)
    }

    /// Serialize the table to bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TableError> {
        bincode::serialize(self).map_err(|e| TableError::SerializationFailed(e.to_string()))
    }

    /// Load a table from bytes produced by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TableError> {
        let table: Self = bincode::deserialize(bytes)
            .map_err(|e| TableError::DeserializationFailed(e.to_string()))?;
        log::debug!("Loaded transition table from {} bytes of bincode", bytes.len());
        Ok(table)
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::FLOATING_POINT
    }
}
