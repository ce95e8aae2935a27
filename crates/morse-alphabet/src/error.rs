use thiserror::Error;

/// Typ Result używany w tym crate.
pub type Result<T> = std::result::Result<T, AlphabetError>;

/// Błędy budowy alfabetu: wzorców, tabeli kodów i drzewa dekodującego.
///
/// Wszystkie warianty dotyczą etapu konstrukcji. Tłumaczenie (kodowanie
/// i dekodowanie) nigdy nie zwraca `AlphabetError`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// Znak, który nie jest ani kropką, ani kreską.
    #[error("Nieprawidłowy symbol Morse'a: '{0}'")]
    InvalidSymbol(char),

    /// Znak spoza zakresu liter A–Z.
    #[error("Nieprawidłowa litera: '{0}' (dozwolone A-Z)")]
    InvalidLetter(char),

    /// Pusty wzorzec nie może identyfikować litery (korzeń drzewa nie niesie litery).
    #[error("Wzorzec Morse'a nie może być pusty.")]
    EmptyPattern,

    /// Ta sama litera podana dwa razy przy budowie tabeli.
    #[error("Litera '{0}' występuje w tabeli więcej niż raz.")]
    DuplicateLetter(char),

    /// Dwie litery mają identyczny wzorzec; drzewa nie da się zbudować.
    #[error("Wzorzec '{pattern}' przypisany jest już literze '{existing}', nie można przypisać go literze '{duplicate}'")]
    DuplicatePattern {
        pattern: String,
        existing: char,
        duplicate: char,
    },
}
