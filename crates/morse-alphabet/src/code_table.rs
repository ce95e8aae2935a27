use std::collections::btree_map::{self, BTreeMap};

use tracing::debug;

use crate::error::{AlphabetError, Result};
use crate::letter::{Letter, LETTER_COUNT};
use crate::pattern::MorsePattern;
use crate::symbol::Symbol::{self, Dash, Dot};

/// Kanoniczna tabela kodów A–Z.
///
/// ```text
/// A .-    B -...  C -.-.  D -..   E .     F ..-.  G --.
/// H ....  I ..    J .---  K -.-   L .-..  M --    N -.
/// O ---   P .--.  Q --.-  R .-.   S ...   T -     U ..-
/// V ...-  W .--   X -..-  Y -.--  Z --..
/// ```
const CANONICAL_CODES: [(Letter, &[Symbol]); LETTER_COUNT] = [
    (Letter::from_ascii(b'A'), &[Dot, Dash]),
    (Letter::from_ascii(b'B'), &[Dash, Dot, Dot, Dot]),
    (Letter::from_ascii(b'C'), &[Dash, Dot, Dash, Dot]),
    (Letter::from_ascii(b'D'), &[Dash, Dot, Dot]),
    (Letter::from_ascii(b'E'), &[Dot]),
    (Letter::from_ascii(b'F'), &[Dot, Dot, Dash, Dot]),
    (Letter::from_ascii(b'G'), &[Dash, Dash, Dot]),
    (Letter::from_ascii(b'H'), &[Dot, Dot, Dot, Dot]),
    (Letter::from_ascii(b'I'), &[Dot, Dot]),
    (Letter::from_ascii(b'J'), &[Dot, Dash, Dash, Dash]),
    (Letter::from_ascii(b'K'), &[Dash, Dot, Dash]),
    (Letter::from_ascii(b'L'), &[Dot, Dash, Dot, Dot]),
    (Letter::from_ascii(b'M'), &[Dash, Dash]),
    (Letter::from_ascii(b'N'), &[Dash, Dot]),
    (Letter::from_ascii(b'O'), &[Dash, Dash, Dash]),
    (Letter::from_ascii(b'P'), &[Dot, Dash, Dash, Dot]),
    (Letter::from_ascii(b'Q'), &[Dash, Dash, Dot, Dash]),
    (Letter::from_ascii(b'R'), &[Dot, Dash, Dot]),
    (Letter::from_ascii(b'S'), &[Dot, Dot, Dot]),
    (Letter::from_ascii(b'T'), &[Dash]),
    (Letter::from_ascii(b'U'), &[Dot, Dot, Dash]),
    (Letter::from_ascii(b'V'), &[Dot, Dot, Dot, Dash]),
    (Letter::from_ascii(b'W'), &[Dot, Dash, Dash]),
    (Letter::from_ascii(b'X'), &[Dash, Dot, Dot, Dash]),
    (Letter::from_ascii(b'Y'), &[Dash, Dot, Dash, Dash]),
    (Letter::from_ascii(b'Z'), &[Dash, Dash, Dot, Dot]),
];

/// Niezmienne odwzorowanie litera → wzorzec Morse'a.
///
/// Kolejność iteracji jest alfabetyczna, więc dwie tabele o tych samych
/// wpisach są nierozróżnialne (także w `Debug`). Tabela nie udostępnia
/// żadnych metod modyfikujących.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    entries: BTreeMap<Letter, MorsePattern>,
}

/// Zwraca kanoniczną, 26-elementową tabelę kodów.
pub fn build_table() -> CodeTable {
    let entries: BTreeMap<Letter, MorsePattern> = CANONICAL_CODES
        .iter()
        .map(|&(letter, symbols)| (letter, MorsePattern::from_static(symbols)))
        .collect();
    debug!(entries = entries.len(), "zbudowano kanoniczną tabelę kodów");
    CodeTable { entries }
}

impl CodeTable {
    /// Buduje tabelę z dowolnych wpisów. Odrzuca literę podaną dwukrotnie.
    ///
    /// Unikalność wzorców sprawdza dopiero `build_trie`.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Letter, MorsePattern)>,
    {
        let mut map = BTreeMap::new();
        for (letter, pattern) in entries {
            if map.insert(letter, pattern).is_some() {
                return Err(AlphabetError::DuplicateLetter(letter.as_char()));
            }
        }
        Ok(CodeTable { entries: map })
    }

    /// Wygodny wariant `from_entries` dla par tekstowych, np. `('A', ".-")`.
    pub fn parse_entries(entries: &[(char, &str)]) -> Result<Self> {
        let parsed = entries
            .iter()
            .map(|&(c, pattern)| Ok((Letter::try_from(c)?, pattern.parse::<MorsePattern>()?)))
            .collect::<Result<Vec<_>>>()?;
        Self::from_entries(parsed)
    }

    pub fn pattern_for(&self, letter: Letter) -> Option<&MorsePattern> {
        self.entries.get(&letter)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Letter, MorsePattern> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a CodeTable {
    type Item = (&'a Letter, &'a MorsePattern);
    type IntoIter = btree_map::Iter<'a, Letter, MorsePattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
