// Dwukierunkowy kodek tekst <-> Morse

use std::sync::OnceLock;

use tracing::{debug, trace};

use morse_alphabet::code_table::{build_table, CodeTable};
use morse_alphabet::letter::{Letter, LETTER_COUNT};
use morse_alphabet::symbol::Symbol;
use morse_alphabet::traversal::TrieTraversal;
use morse_alphabet::trie::{build_trie, DecodeTrie};

use crate::codec_options::{CodecOptions, DecodeFlags, LETTER_SEPARATOR};
use crate::diagnostics::{DecodeReport, Diagnostic, DiagnosticKind, EncodeReport, SkippedChar};
use crate::error::{CodecError, Result};
use crate::translator_trait::Translator;

static CANONICAL: OnceLock<std::result::Result<MorseCodec, CodecError>> = OnceLock::new();

/// Kodek Morse'a: tabela kodów, drzewo dekodujące i opcje formatu.
///
/// Po konstrukcji niczego nie modyfikuje, więc jedną instancję można
/// współdzielić między wątkami (`&MorseCodec` albo `Arc<MorseCodec>`).
#[derive(Debug, Clone)]
pub struct MorseCodec {
    table: CodeTable,
    trie: DecodeTrie,
    options: CodecOptions,
    /// Wzorce wyrenderowane znakami z opcji, indeksowane `Letter::index()`.
    rendered: Vec<Option<String>>,
}

impl MorseCodec {
    /// Kodek dla kanonicznej tabeli A–Z i domyślnych opcji.
    pub fn new() -> Result<Self> {
        Self::from_table(build_table(), CodecOptions::default())
    }

    pub fn with_options(options: CodecOptions) -> Result<Self> {
        Self::from_table(build_table(), options)
    }

    /// Buduje kodek z dowolnej tabeli. Powtórzony wzorzec przerywa konstrukcję.
    pub fn from_table(table: CodeTable, options: CodecOptions) -> Result<Self> {
        options.validate()?;
        let trie = build_trie(&table)?;

        let mut rendered = vec![None; LETTER_COUNT];
        for (letter, pattern) in &table {
            rendered[letter.index()] = Some(pattern.render(options.dot(), options.dash()));
        }

        debug!(letters = table.len(), ?options, "utworzono kodek Morse'a");
        Ok(MorseCodec {
            table,
            trie,
            options,
            rendered,
        })
    }

    /// Współdzielona instancja kanoniczna, budowana raz przy pierwszym użyciu.
    pub fn canonical() -> Result<&'static MorseCodec> {
        CANONICAL
            .get_or_init(MorseCodec::new)
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    pub fn trie(&self) -> &DecodeTrie {
        &self.trie
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Tekst → Morse. Nieobsługiwane znaki są pomijane bez błędu.
    pub fn encode(&self, text: &str) -> String {
        self.encode_with(text, |_, _| {})
    }

    /// Jak `encode`, ale zwraca też listę pominiętych znaków.
    pub fn encode_report(&self, text: &str) -> EncodeReport {
        let mut skipped = Vec::new();
        let morse = self.encode_with(text, |index, ch| skipped.push(SkippedChar { index, ch }));
        EncodeReport { morse, skipped }
    }

    fn encode_with<F>(&self, text: &str, mut on_skip: F) -> String
    where
        F: FnMut(usize, char),
    {
        let mut morse = String::with_capacity(text.len() * 4);
        for (index, ch) in text.chars().enumerate() {
            for upper in ch.to_uppercase() {
                if let Some(pattern) = Letter::new(upper).and_then(|l| self.rendered[l.index()].as_deref()) {
                    morse.push_str(pattern);
                    morse.push(LETTER_SEPARATOR);
                } else if upper == ' ' {
                    morse.push(LETTER_SEPARATOR);
                    morse.push(self.options.word_separator());
                    morse.push(LETTER_SEPARATOR);
                } else {
                    trace!(index, ch = %ch, "pominięto znak bez kodu");
                    on_skip(index, ch);
                }
            }
        }
        morse
    }

    /// Morse → tekst. Zawsze się udaje; zły token psuje tylko swoją literę.
    pub fn decode(&self, morse: &str) -> String {
        self.decode_with(morse, DecodeFlags::empty(), &mut Vec::new())
    }

    /// Jak `decode`, plus diagnostyka rodzajów wybranych w `CodecOptions::report`.
    pub fn decode_report(&self, morse: &str) -> DecodeReport {
        let mut diagnostics = Vec::new();
        let text = self.decode_with(morse, self.options.report(), &mut diagnostics);
        DecodeReport { text, diagnostics }
    }

    /// Dekodowanie ścisłe: błąd `MalformedMorse` przy dowolnym problemie.
    ///
    /// Zbiera wszystkie rodzaje diagnostyki niezależnie od
    /// `CodecOptions::report`, które dotyczy tylko `decode_report`.
    pub fn decode_strict(&self, morse: &str) -> Result<String> {
        let mut diagnostics = Vec::new();
        let text = self.decode_with(morse, DecodeFlags::ALL, &mut diagnostics);
        if diagnostics.is_empty() {
            Ok(text)
        } else {
            Err(CodecError::MalformedMorse {
                partial: text,
                diagnostics,
            })
        }
    }

    fn decode_with(&self, morse: &str, flags: DecodeFlags, diagnostics: &mut Vec<Diagnostic>) -> String {
        let mut text = String::with_capacity(morse.len() / 2);
        // Puste fragmenty (np. dwie spacje przed "/" w wyjściu encode) nie są tokenami.
        let tokens = morse.trim().split(char::is_whitespace).filter(|t| !t.is_empty());
        for (token_index, token) in tokens.enumerate() {
            if self.is_word_separator(token) {
                text.push(' ');
            } else {
                text.push(self.decode_token(token_index, token, flags, diagnostics));
            }
        }
        text
    }

    fn is_word_separator(&self, token: &str) -> bool {
        let mut chars = token.chars();
        chars.next() == Some(self.options.word_separator()) && chars.next().is_none()
    }

    fn symbol_for(&self, ch: char) -> Option<Symbol> {
        if ch == self.options.dot() {
            Some(Symbol::Dot)
        } else if ch == self.options.dash() {
            Some(Symbol::Dash)
        } else {
            None
        }
    }

    /// Przechodzi drzewo dla jednego tokenu.
    ///
    /// Znak niebędący symbolem i symbol bez krawędzi są pomijane; węzeł bez
    /// litery daje znak zastępczy z opcji.
    fn decode_token(
        &self,
        token_index: usize,
        token: &str,
        flags: DecodeFlags,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> char {
        let mut report = |kind: DiagnosticKind, flag: DecodeFlags| {
            if flags.contains(flag) {
                diagnostics.push(Diagnostic {
                    token_index,
                    token: token.to_string(),
                    kind,
                });
            }
        };

        let mut symbols = Vec::with_capacity(token.len());
        let mut positions = Vec::with_capacity(token.len());
        for (position, ch) in token.chars().enumerate() {
            match self.symbol_for(ch) {
                Some(symbol) => {
                    symbols.push(symbol);
                    positions.push(position);
                }
                None => report(DiagnosticKind::UnknownSymbol { ch, position }, DecodeFlags::UNKNOWN_SYMBOLS),
            }
        }

        let walk = TrieTraversal::new(&self.trie).lenient_walk(symbols.iter().copied());
        for &i in &walk.unmatched {
            report(
                DiagnosticKind::UnmatchedSymbol { symbol: symbols[i], position: positions[i] },
                DecodeFlags::UNMATCHED_SYMBOLS,
            );
        }
        match walk.letter {
            Some(letter) => letter.as_char(),
            None => {
                trace!(token, "token bez litery, wstawiono znak zastępczy");
                report(DiagnosticKind::IncompleteOrInvalidToken, DecodeFlags::INVALID_TOKENS);
                self.options.placeholder()
            }
        }
    }
}

impl Translator for MorseCodec {
    fn encode(&self, text: &str) -> String {
        MorseCodec::encode(self, text)
    }

    fn decode(&self, morse: &str) -> String {
        MorseCodec::decode(self, morse)
    }
}
