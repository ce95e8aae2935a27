// Konfiguracja kodeka wczytywana z pliku właściwości (klucz = wartość).

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;
use std::str::FromStr;

use bitflags::bitflags;
use tracing::debug;

use crate::error::{CodecError, Result};

/// Separator liter w reprezentacji tekstowej; nie jest konfigurowalny.
pub const LETTER_SEPARATOR: char = ' ';

bitflags! {
    /// Rodzaje problemów zbierane przez `decode_report` i `decode_strict`.
    /// Zwykłe `decode` ignoruje te flagi.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DecodeFlags: u8 {
        /// Znaki w tokenie, które nie są kropką ani kreską.
        const UNKNOWN_SYMBOLS = 0b0000_0001;
        /// Symbole bez przejścia w drzewie.
        const UNMATCHED_SYMBOLS = 0b0000_0010;
        /// Tokeny kończące się w węźle bez litery.
        const INVALID_TOKENS = 0b0000_0100;

        const SYMBOLS = Self::UNKNOWN_SYMBOLS.bits() | Self::UNMATCHED_SYMBOLS.bits();
        const ALL = Self::SYMBOLS.bits() | Self::INVALID_TOKENS.bits();
    }
}

impl FromStr for DecodeFlags {
    type Err = CodecError;

    /// Akceptuje `NONE`, `ALL`, `SYMBOLS`, `TOKENS`, `UNKNOWN`, `UNMATCHED`
    /// oraz ich sumy rozdzielone `|` lub `,`.
    fn from_str(s: &str) -> Result<Self> {
        let mut flags = DecodeFlags::empty();
        for part in s.split(&['|', ','][..]) {
            flags |= match part.trim().to_uppercase().as_str() {
                "NONE" => DecodeFlags::empty(),
                "ALL" => DecodeFlags::ALL,
                "SYMBOLS" => DecodeFlags::SYMBOLS,
                "TOKENS" => DecodeFlags::INVALID_TOKENS,
                "UNKNOWN" => DecodeFlags::UNKNOWN_SYMBOLS,
                "UNMATCHED" => DecodeFlags::UNMATCHED_SYMBOLS,
                _ => {
                    return Err(CodecError::InvalidConfigValue(format!(
                        "Unknown decode report flag: {}",
                        s
                    )))
                }
            };
        }
        Ok(flags)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecAttribute {
    Dot,
    Dash,
    WordSeparator,
    Placeholder,
    DecodeReport,
}

impl CodecAttribute {
    pub const ALL: [CodecAttribute; 5] = [
        CodecAttribute::Dot,
        CodecAttribute::Dash,
        CodecAttribute::WordSeparator,
        CodecAttribute::Placeholder,
        CodecAttribute::DecodeReport,
    ];

    pub fn key_name(&self) -> &'static str {
        match self {
            CodecAttribute::Dot => "morse.symbol.dot",
            CodecAttribute::Dash => "morse.symbol.dash",
            CodecAttribute::WordSeparator => "morse.separator.word",
            CodecAttribute::Placeholder => "morse.decode.placeholder",
            CodecAttribute::DecodeReport => "morse.decode.report",
        }
    }

    pub fn from_key_name(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.key_name() == key)
    }
}

/// Opcje kodeka. Wartości domyślne dają kanoniczny format `.`/`-`/` / `.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecOptions {
    dot: char,
    dash: char,
    word_separator: char,
    placeholder: char,
    report: DecodeFlags,
}

impl Default for CodecOptions {
    fn default() -> Self {
        CodecOptions {
            dot: Self::DEFAULT_DOT,
            dash: Self::DEFAULT_DASH,
            word_separator: Self::DEFAULT_WORD_SEPARATOR,
            placeholder: Self::DEFAULT_PLACEHOLDER,
            report: DecodeFlags::ALL,
        }
    }
}

impl CodecOptions {
    pub const DEFAULT_DOT: char = '.';
    pub const DEFAULT_DASH: char = '-';
    pub const DEFAULT_WORD_SEPARATOR: char = '/';
    pub const DEFAULT_PLACEHOLDER: char = ' ';

    pub fn new() -> Self {
        CodecOptions::default()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        if !path_ref.exists() {
            return Err(CodecError::ConfigNotFound(path_ref.display().to_string()));
        }
        let file = File::open(path_ref).map_err(|e| {
            CodecError::Io(format!(
                "Failed to open codec config '{}': {}",
                path_ref.display(),
                e
            ))
        })?;
        let options = Self::from_reader(BufReader::new(file))?;
        debug!(path = %path_ref.display(), ?options, "wczytano konfigurację kodeka");
        Ok(options)
    }

    /// Parsuje linie `klucz = wartość`; puste linie i `#` są pomijane.
    /// Klucze spoza przestrzeni `morse.` są ignorowane.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut attributes = HashMap::new();
        for line_res in reader.lines() {
            let line = line_res.map_err(|e| CodecError::Io(format!("Error reading config line: {}", e)))?;
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            if let Some(eq_index) = line.find('=') {
                let key = line[..eq_index].trim();
                let value = parse_value(&line[eq_index + 1..]);
                match CodecAttribute::from_key_name(key) {
                    Some(attribute) => {
                        attributes.insert(attribute, value);
                    }
                    None if key.starts_with("morse.") => {
                        return Err(CodecError::UnknownConfigAttribute(key.to_string()));
                    }
                    None => {}
                }
            }
        }

        let mut options = CodecOptions::default();
        for (attribute, value) in attributes {
            options.set(attribute, &value)?;
        }
        options.validate()?;
        Ok(options)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_reader(BufReader::new(Cursor::new(bytes)))
    }

    /// Ustawia atrybut z wartości tekstowej (bez walidacji całości).
    pub fn set(&mut self, attribute: CodecAttribute, value: &str) -> Result<()> {
        match attribute {
            CodecAttribute::Dot => self.dot = single_char(attribute, value)?,
            CodecAttribute::Dash => self.dash = single_char(attribute, value)?,
            CodecAttribute::WordSeparator => self.word_separator = single_char(attribute, value)?,
            CodecAttribute::Placeholder => self.placeholder = single_char(attribute, value)?,
            CodecAttribute::DecodeReport => self.report = value.parse()?,
        }
        Ok(())
    }

    pub fn with_symbols(mut self, dot: char, dash: char) -> Self {
        self.dot = dot;
        self.dash = dash;
        self
    }

    pub fn with_word_separator(mut self, word_separator: char) -> Self {
        self.word_separator = word_separator;
        self
    }

    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn with_report(mut self, report: DecodeFlags) -> Self {
        self.report = report;
        self
    }

    /// Kropka, kreska i separator słów muszą być różne i nie mogą być białymi znakami.
    pub fn validate(&self) -> Result<()> {
        let symbols = [
            (CodecAttribute::Dot, self.dot),
            (CodecAttribute::Dash, self.dash),
            (CodecAttribute::WordSeparator, self.word_separator),
        ];
        for (attribute, c) in symbols {
            if c.is_whitespace() {
                return Err(CodecError::InvalidConfigValue(format!(
                    "{} must not be whitespace",
                    attribute.key_name()
                )));
            }
        }
        for (i, (first, a)) in symbols.iter().enumerate() {
            for (second, b) in &symbols[i + 1..] {
                if a == b {
                    return Err(CodecError::InvalidConfigValue(format!(
                        "{} and {} share the character '{}'",
                        first.key_name(),
                        second.key_name(),
                        a
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn dot(&self) -> char {
        self.dot
    }

    pub fn dash(&self) -> char {
        self.dash
    }

    pub fn word_separator(&self) -> char {
        self.word_separator
    }

    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    pub fn report(&self) -> DecodeFlags {
        self.report
    }
}

/// Wartość po `=` bez otaczających białych znaków. Jeśli po `=` są same
/// spacje (np. `morse.decode.placeholder =  `), wartością jest spacja.
fn parse_value(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() && !raw.is_empty() {
        " ".to_string()
    } else {
        trimmed.to_string()
    }
}

fn single_char(attribute: CodecAttribute, value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(CodecError::InvalidConfigValue(format!(
            "Invalid value for {}: '{}'. Expected a single character.",
            attribute.key_name(),
            value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_codec_attribute_key_names() {
        assert_eq!(CodecAttribute::Dot.key_name(), "morse.symbol.dot");
        assert_eq!(
            CodecAttribute::from_key_name("morse.separator.word"),
            Some(CodecAttribute::WordSeparator)
        );
        assert_eq!(CodecAttribute::from_key_name("fsa.dict.separator"), None);
    }

    #[test]
    fn test_defaults_are_canonical() {
        let options = CodecOptions::default();
        assert_eq!(options.dot(), '.');
        assert_eq!(options.dash(), '-');
        assert_eq!(options.word_separator(), '/');
        assert_eq!(options.placeholder(), ' ');
        assert_eq!(options.report(), DecodeFlags::ALL);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_from_file_basic() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "# Morse w stylu podkreśleń")?;
        writeln!(temp_file, "morse.symbol.dot = o")?;
        writeln!(temp_file, "morse.symbol.dash = _")?;
        writeln!(temp_file, "morse.separator.word = |")?;
        writeln!(temp_file, "morse.decode.placeholder = ?")?;
        writeln!(temp_file, "morse.decode.report = SYMBOLS")?;
        writeln!(temp_file, "other.tool.key = ignored")?;
        temp_file.flush()?;

        let options = CodecOptions::from_file(temp_file.path())?;
        assert_eq!(options.dot(), 'o');
        assert_eq!(options.dash(), '_');
        assert_eq!(options.word_separator(), '|');
        assert_eq!(options.placeholder(), '?');
        assert_eq!(options.report(), DecodeFlags::SYMBOLS);
        Ok(())
    }

    #[test]
    fn test_from_bytes_partial_keeps_defaults() -> Result<()> {
        let options = CodecOptions::from_bytes(b"morse.decode.placeholder = *\n")?;
        assert_eq!(options.placeholder(), '*');
        assert_eq!(options.dot(), CodecOptions::DEFAULT_DOT);
        assert_eq!(options.word_separator(), CodecOptions::DEFAULT_WORD_SEPARATOR);
        Ok(())
    }

    #[test]
    fn test_space_placeholder_value() -> Result<()> {
        let options = CodecOptions::from_bytes(b"morse.decode.placeholder =  \n")?;
        assert_eq!(options.placeholder(), ' ');
        Ok(())
    }

    #[test]
    fn test_from_file_missing() {
        let result = CodecOptions::from_file("hopefully_non_existent_codec_12345.info");
        assert_matches!(result, Err(CodecError::ConfigNotFound(_)));
    }

    #[test]
    fn test_invalid_values() {
        assert_matches!(
            CodecOptions::from_bytes(b"morse.symbol.dot = ..\n"),
            Err(CodecError::InvalidConfigValue(_))
        );
        assert_matches!(
            CodecOptions::from_bytes(b"morse.symbol.dash = .\n"),
            Err(CodecError::InvalidConfigValue(_))
        );
        assert_matches!(
            CodecOptions::from_bytes(b"morse.decode.report = SOMETIMES\n"),
            Err(CodecError::InvalidConfigValue(_))
        );
    }

    #[test]
    fn test_unknown_morse_attribute() {
        assert_matches!(
            CodecOptions::from_bytes(b"morse.symbol.dit = .\n"),
            Err(CodecError::UnknownConfigAttribute(ref key)) if key == "morse.symbol.dit"
        );
    }

    #[test]
    fn test_validate_rejects_whitespace_symbols() {
        let options = CodecOptions::new().with_word_separator(' ');
        assert_matches!(options.validate(), Err(CodecError::InvalidConfigValue(_)));
    }

    #[test]
    fn test_decode_flags_from_str() {
        assert_eq!("NONE".parse::<DecodeFlags>().unwrap(), DecodeFlags::empty());
        assert_eq!("all".parse::<DecodeFlags>().unwrap(), DecodeFlags::ALL);
        assert_eq!(
            "unknown | tokens".parse::<DecodeFlags>().unwrap(),
            DecodeFlags::UNKNOWN_SYMBOLS | DecodeFlags::INVALID_TOKENS
        );
        assert_eq!(
            "SYMBOLS,TOKENS".parse::<DecodeFlags>().unwrap(),
            DecodeFlags::ALL
        );
        assert_matches!("".parse::<DecodeFlags>(), Err(CodecError::InvalidConfigValue(_)));
    }
}
