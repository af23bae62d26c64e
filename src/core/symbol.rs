//! Alphabet encoding.
//!
//! Input characters are bucketed into symbol classes before the table is
//! consulted. Only four classes have table columns; everything else is
//! [`SymbolClass::Invalid`].

use serde::{Deserialize, Serialize};

/// The class an input character falls into.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum SymbolClass {
    /// `+` or `-`
    Sign,
    /// `0` through `9`
    Digit,
    /// `.`
    Point,
    /// `E` or `e`
    Exponent,
    /// Any character outside the alphabet
    Invalid,
}

impl SymbolClass {
    /// Number of classes that own a table column.
    pub const COUNT: usize = 4;

    /// The automaton alphabet in column order. `Invalid` is not part of it.
    pub const ALPHABET: [SymbolClass; Self::COUNT] =
        [Self::Sign, Self::Digit, Self::Point, Self::Exponent];

    /// Table column for this class, or `None` for `Invalid`.
    pub const fn column(self) -> Option<usize> {
        match self {
            Self::Sign => Some(0),
            Self::Digit => Some(1),
            Self::Point => Some(2),
            Self::Exponent => Some(3),
            Self::Invalid => None,
        }
    }

    pub const fn is_valid(self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

/// Classify a single character.
///
/// # Example
///
/// ```rust
/// use floatdfa::core::{classify, SymbolClass};
///
/// assert_eq!(classify('-'), SymbolClass::Sign);
/// assert_eq!(classify('7'), SymbolClass::Digit);
/// assert_eq!(classify('e'), SymbolClass::Exponent);
/// assert_eq!(classify(','), SymbolClass::Invalid);
/// ```
pub const fn classify(symbol: char) -> SymbolClass {
    match symbol {
        '+' | '-' => SymbolClass::Sign,
        '0'..='9' => SymbolClass::Digit,
        '.' => SymbolClass::Point,
        'E' | 'e' => SymbolClass::Exponent,
        _ => SymbolClass::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signs_classify_as_sign() {
        assert_eq!(classify('+'), SymbolClass::Sign);
        assert_eq!(classify('-'), SymbolClass::Sign);
    }

    #[test]
    fn every_ascii_digit_classifies_as_digit() {
        for c in '0'..='9' {
            assert_eq!(classify(c), SymbolClass::Digit, "{c}");
        }
    }

    #[test]
    fn point_and_exponent_markers() {
        assert_eq!(classify('.'), SymbolClass::Point);
        assert_eq!(classify('E'), SymbolClass::Exponent);
        assert_eq!(classify('e'), SymbolClass::Exponent);
    }

    #[test]
    fn characters_outside_the_alphabet_are_invalid() {
        for c in [',', ' ', 'n', 'x', 'D', '_', '\u{0663}', '\u{FF11}', '\0'] {
            assert_eq!(classify(c), SymbolClass::Invalid, "{c:?}");
        }
    }

    #[test]
    fn columns_follow_alphabet_order() {
        for (i, class) in SymbolClass::ALPHABET.iter().enumerate() {
            assert_eq!(class.column(), Some(i));
            assert!(class.is_valid());
        }
        assert_eq!(SymbolClass::Invalid.column(), None);
        assert!(!SymbolClass::Invalid.is_valid());
    }
}
