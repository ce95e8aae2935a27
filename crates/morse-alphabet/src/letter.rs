use std::fmt;

use crate::error::{AlphabetError, Result};

/// Liczba liter obsługiwanego alfabetu (A–Z).
pub const LETTER_COUNT: usize = 26;

/// Wielka litera łacińska A–Z.
///
/// Przechowywana jako bajt ASCII, więc `Letter` jest `Copy` i tania w porównaniach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Zwraca literę dla znaku `A`–`Z`. Małe litery nie są tu akceptowane;
    /// normalizacja wielkości liter należy do kodeka.
    pub fn new(c: char) -> Option<Self> {
        if c.is_ascii_uppercase() {
            Some(Letter(c as u8))
        } else {
            None
        }
    }

    pub(crate) const fn from_ascii(byte: u8) -> Self {
        Letter(byte)
    }

    /// Litera o podanym indeksie (0 → A, 25 → Z).
    pub fn from_index(index: usize) -> Option<Self> {
        if index < LETTER_COUNT {
            Some(Letter(b'A' + index as u8))
        } else {
            None
        }
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }

    pub fn index(self) -> usize {
        (self.0 - b'A') as usize
    }
}

impl TryFrom<char> for Letter {
    type Error = AlphabetError;

    fn try_from(c: char) -> Result<Self> {
        Letter::new(c).ok_or(AlphabetError::InvalidLetter(c))
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
