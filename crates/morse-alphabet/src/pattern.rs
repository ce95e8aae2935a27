use std::fmt;
use std::str::FromStr;

use crate::error::{AlphabetError, Result};
use crate::symbol::Symbol;

/// Niepusta sekwencja symboli identyfikująca jedną literę.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MorsePattern {
    symbols: Vec<Symbol>,
}

impl MorsePattern {
    /// Tworzy wzorzec z sekwencji symboli. Pusta sekwencja to `EmptyPattern`.
    pub fn new(symbols: Vec<Symbol>) -> Result<Self> {
        if symbols.is_empty() {
            return Err(AlphabetError::EmptyPattern);
        }
        Ok(MorsePattern { symbols })
    }

    /// Dla stałych danych tabeli kanonicznej; wszystkie są niepuste.
    pub(crate) fn from_static(symbols: &[Symbol]) -> Self {
        debug_assert!(!symbols.is_empty());
        MorsePattern {
            symbols: symbols.to_vec(),
        }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Zawsze `false` dla poprawnie zbudowanego wzorca.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Renderuje wzorzec przy użyciu podanych znaków kropki i kreski.
    pub fn render(&self, dot: char, dash: char) -> String {
        self.symbols
            .iter()
            .map(|s| match s {
                Symbol::Dot => dot,
                Symbol::Dash => dash,
            })
            .collect()
    }
}

impl FromStr for MorsePattern {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self> {
        let symbols = s
            .chars()
            .map(Symbol::from_char)
            .collect::<Result<Vec<_>>>()?;
        MorsePattern::new(symbols)
    }
}

impl fmt::Display for MorsePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
