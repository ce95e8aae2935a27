// Definicja argumentów wiersza poleceń
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "morse-cli", version, about = "Koder i dekoder alfabetu Morse'a")]
pub struct Cli {
    /// Plik z ustawieniami kodeka (klucze `morse.*`).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Pokazuje logi diagnostyczne (honoruje RUST_LOG).
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Wyłącza wszystkie logi.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Zamienia tekst na kod Morse'a.
    Encode {
        /// Tekst do zakodowania.
        text: Option<String>,

        /// Czyta tekst z pliku.
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Wypisuje pominięte znaki.
        #[arg(long)]
        report: bool,
    },

    /// Zamienia kod Morse'a na tekst.
    Decode {
        /// Kod Morse'a do zdekodowania.
        morse: Option<String>,

        /// Czyta kod z pliku.
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Kończy się błędem, jeśli wejście ma jakikolwiek problem (bez względu na `morse.decode.report`).
        #[arg(long, conflicts_with = "report")]
        strict: bool,

        /// Wypisuje diagnostykę tokenów.
        #[arg(long)]
        report: bool,
    },

    /// Wypisuje tabelę kodów.
    Table {
        /// Kolejność przejścia drzewa dekodującego zamiast alfabetycznej.
        #[arg(long)]
        trie: bool,
    },
}
