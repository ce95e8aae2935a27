use std::fmt;

use crate::error::{AlphabetError, Result};

/// Znak tekstowy kropki w kanonicznej reprezentacji.
pub const DOT_CHAR: char = '.';
/// Znak tekstowy kreski w kanonicznej reprezentacji.
pub const DASH_CHAR: char = '-';

/// Pojedynczy symbol alfabetu Morse'a.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    Dot,
    Dash,
}

impl Symbol {
    /// Oba symbole w kolejności używanej przy przechodzeniu drzewa (kropka pierwsza).
    pub const ALL: [Symbol; 2] = [Symbol::Dot, Symbol::Dash];

    /// Parsuje kanoniczny znak (`.` lub `-`).
    pub fn from_char(c: char) -> Result<Self> {
        match c {
            DOT_CHAR => Ok(Symbol::Dot),
            DASH_CHAR => Ok(Symbol::Dash),
            other => Err(AlphabetError::InvalidSymbol(other)),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::Dot => DOT_CHAR,
            Symbol::Dash => DASH_CHAR,
        }
    }

    /// Indeks krawędzi w węźle drzewa: 0 dla kropki, 1 dla kreski.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Symbol::Dot => 0,
            Symbol::Dash => 1,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
