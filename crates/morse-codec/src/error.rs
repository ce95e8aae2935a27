// Błędy specyficzne dla crate morse-codec

use thiserror::Error;

use morse_alphabet::error::AlphabetError;

use crate::diagnostics::Diagnostic;

/// Typ Result używany w tym crate.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Błędy konstrukcji kodeka, wczytywania konfiguracji i dekodowania ścisłego.
///
/// Zwykłe `encode`/`decode` nigdy nie zwracają błędu.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Błąd budowy tabeli kodów lub drzewa dekodującego (np. powtórzony wzorzec).
    #[error("Błąd alfabetu: {0}")]
    Alphabet(#[from] AlphabetError),

    /// Błąd wejścia/wyjścia przy odczycie konfiguracji.
    #[error("Błąd I/O: {0}")]
    Io(String),

    /// Nie znaleziono pliku konfiguracji kodeka.
    #[error("Nie znaleziono pliku konfiguracji: {0}")]
    ConfigNotFound(String),

    /// Nieprawidłowa wartość w konfiguracji.
    #[error("Nieprawidłowa wartość w konfiguracji: {0}")]
    InvalidConfigValue(String),

    /// Nieznany klucz z przestrzeni `morse.` w konfiguracji.
    #[error("Nieznany atrybut konfiguracji: {0}")]
    UnknownConfigAttribute(String),

    /// Dekodowanie ścisłe napotkało problemy. `partial` to wynik
    /// najlepszego wysiłku, taki sam jak z `decode`.
    #[error("Nieprawidłowy kod Morse'a: liczba problemów {}", .diagnostics.len())]
    MalformedMorse {
        partial: String,
        diagnostics: Vec<Diagnostic>,
    },
}

impl From<std::io::Error> for CodecError {
    fn from(err: std::io::Error) -> Self {
        CodecError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticKind;
    use std::io;

    #[test]
    fn test_codec_error_display() {
        let io_err: CodecError = io::Error::new(io::ErrorKind::NotFound, "brak pliku").into();
        assert_eq!(io_err.to_string(), "Błąd I/O: brak pliku");

        let alphabet_err: CodecError = AlphabetError::InvalidSymbol('x').into();
        assert_eq!(alphabet_err.to_string(), "Błąd alfabetu: Nieprawidłowy symbol Morse'a: 'x'");

        assert_eq!(
            CodecError::UnknownConfigAttribute("morse.foo".to_string()).to_string(),
            "Nieznany atrybut konfiguracji: morse.foo"
        );
    }

    #[test]
    fn test_malformed_morse_display_counts_diagnostics() {
        let err = CodecError::MalformedMorse {
            partial: "H".to_string(),
            diagnostics: vec![Diagnostic {
                token_index: 0,
                token: ".....".to_string(),
                kind: DiagnosticKind::IncompleteOrInvalidToken,
            }],
        };
        assert_eq!(err.to_string(), "Nieprawidłowy kod Morse'a: liczba problemów 1");
    }
}
