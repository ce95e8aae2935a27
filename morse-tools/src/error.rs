// Błędy narzędzia CLI
use std::process;

use thiserror::Error;

use morse_codec::CodecError;

pub const EXIT_ERROR: i32 = 1;

pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Brak wejścia albo nieczytelny plik.
    #[error("{0}")]
    Input(String),

    #[error("Błąd I/O: {0}")]
    Io(#[from] std::io::Error),
}

/// Wypisuje błąd na stderr i kończy proces.
pub fn exit_with_error(err: CliError) -> ! {
    eprintln!("błąd: {}", err);
    if let CliError::Codec(CodecError::MalformedMorse { diagnostics, .. }) = &err {
        for diagnostic in diagnostics {
            eprintln!("  {}", diagnostic);
        }
    }
    process::exit(EXIT_ERROR)
}
