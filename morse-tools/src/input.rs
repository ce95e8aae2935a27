// Wybór i odczyt źródła danych wejściowych
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use crate::error::{CliError, CliResult};

/// Skąd pochodzą dane wejściowe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Inline(String),
    Stdin,
}

/// Priorytet: argument pozycyjny > `-f` > stdin (tylko gdy nie jest terminalem).
pub fn resolve_input(inline: Option<&str>, file: Option<&Path>) -> CliResult<InputSource> {
    if let Some(text) = inline {
        return Ok(InputSource::Inline(text.to_string()));
    }
    if let Some(path) = file {
        return Ok(InputSource::File(path.to_path_buf()));
    }
    if !io::stdin().is_terminal() {
        return Ok(InputSource::Stdin);
    }
    Err(CliError::Input(
        "Brak danych wejściowych: podaj argument, użyj -f lub przekaż dane przez stdin".to_string(),
    ))
}

/// Czyta całe wejście. Końcowe znaki nowej linii są obcinane.
pub fn read_input(source: &InputSource) -> CliResult<String> {
    let mut content = match source {
        InputSource::File(path) => std::fs::read_to_string(path)
            .map_err(|e| CliError::Input(format!("Nie można odczytać {}: {}", path.display(), e)))?,
        InputSource::Inline(text) => text.clone(),
        InputSource::Stdin => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let trimmed_len = content.trim_end_matches(['\r', '\n']).len();
    content.truncate(trimmed_len);
    Ok(content)
}
