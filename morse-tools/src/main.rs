// Główny punkt wejścia dla narzędzia CLI
mod cli;
mod commands;
mod error;
mod input;

use clap::Parser;
use morse_codec::{CodecOptions, MorseCodec};
use tracing::debug;

use cli::{Cli, Commands};
use error::{exit_with_error, CliResult};
use input::{read_input, resolve_input};

fn init_tracing(cli: &Cli) {
    // --quiet: nic; --verbose: RUST_LOG albo debug; domyślnie tylko ostrzeżenia.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into())
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(cli) {
        Ok(output) => println!("{}", output),
        Err(err) => exit_with_error(err),
    }
}

fn run(cli: Cli) -> CliResult<String> {
    let custom;
    let codec = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "Wczytywanie ustawień kodeka");
            custom = MorseCodec::with_options(CodecOptions::from_file(path)?)?;
            &custom
        }
        None => MorseCodec::canonical()?,
    };

    match cli.command {
        Commands::Encode { text, file, report } => {
            let source = resolve_input(text.as_deref(), file.as_deref())?;
            commands::encode::run(codec, &read_input(&source)?, report)
        }
        Commands::Decode { morse, file, strict, report } => {
            let source = resolve_input(morse.as_deref(), file.as_deref())?;
            commands::decode::run(codec, &read_input(&source)?, strict, report)
        }
        Commands::Table { trie } => commands::table::run(codec, trie),
    }
}
