// Główny plik biblioteki morse-codec
pub mod error;
pub mod diagnostics;
pub mod codec_options;
pub mod translator_trait;
pub mod codec;

pub use codec::MorseCodec;
pub use codec_options::{CodecOptions, DecodeFlags};
pub use error::CodecError;
pub use translator_trait::{Direction, Translator};
