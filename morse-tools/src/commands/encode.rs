use morse_codec::MorseCodec;
use tracing::debug;

use crate::error::CliResult;

/// Koduje tekst. Z `report` dopisuje linie o pominiętych znakach.
pub fn run(codec: &MorseCodec, text: &str, report: bool) -> CliResult<String> {
    if !report {
        return Ok(codec.encode(text));
    }

    let result = codec.encode_report(text);
    debug!(skipped = result.skipped.len(), "Zakodowano z raportem");
    let mut output = result.morse;
    for skipped in &result.skipped {
        output.push_str(&format!("\n# pominięto '{}' na pozycji {}", skipped.ch, skipped.index));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use morse_codec::CodecOptions;

    #[test]
    fn test_encode_plain() {
        let codec = MorseCodec::canonical().unwrap();
        assert_eq!(run(codec, "Hello World", false).unwrap(), ".... . .-.. .-.. ---  / .-- --- .-. .-.. -.. ");
    }

    #[test]
    fn test_encode_report_lists_skipped() {
        let codec = MorseCodec::canonical().unwrap();
        assert_eq!(run(codec, "A1B", true).unwrap(), ".- -... \n# pominięto '1' na pozycji 1");
        assert_eq!(run(codec, "SOS", true).unwrap(), "... --- ... ");
    }

    #[test]
    fn test_encode_with_custom_symbols() {
        let codec = MorseCodec::with_options(CodecOptions::new().with_symbols('o', '_')).unwrap();
        assert_eq!(run(&codec, "sos", false).unwrap(), "ooo ___ ooo ");
    }
}
