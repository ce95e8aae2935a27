// Raporty i diagnostyka tłumaczenia

use std::fmt;

use morse_alphabet::symbol::Symbol;

/// Rodzaj problemu znalezionego w pojedynczym tokenie Morse'a.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Znak w tokenie nie jest ani kropką, ani kreską; został pominięty.
    UnknownSymbol { ch: char, position: usize },
    /// Symbol poprawny, ale drzewo nie ma dla niego krawędzi; został pominięty.
    UnmatchedSymbol { symbol: Symbol, position: usize },
    /// Token zakończył się w węźle bez litery (także token bez symboli).
    IncompleteOrInvalidToken,
}

/// Problem w jednym tokenie wejścia dekodera.
///
/// `position` w `DiagnosticKind` liczy znaki od początku tokenu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Numer tokenu (puste fragmenty między separatorami nie są liczone).
    pub token_index: usize,
    pub token: String,
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "token #{} '{}': ", self.token_index, self.token)?;
        match &self.kind {
            DiagnosticKind::UnknownSymbol { ch, position } => {
                write!(f, "nieznany znak '{}' na pozycji {}", ch, position)
            }
            DiagnosticKind::UnmatchedSymbol { symbol, position } => {
                write!(f, "brak przejścia dla '{}' na pozycji {}", symbol, position)
            }
            DiagnosticKind::IncompleteOrInvalidToken => write!(f, "token nie wskazuje litery"),
        }
    }
}

/// Znak tekstu pominięty przez koder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedChar {
    /// Pozycja w znakach (nie bajtach) oryginalnego tekstu.
    pub index: usize,
    pub ch: char,
}

/// Wynik `encode_report`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodeReport {
    pub morse: String,
    pub skipped: Vec<SkippedChar>,
}

impl EncodeReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Wynik `decode_report`: tekst jak z `decode` plus diagnostyka.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodeReport {
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl DecodeReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
