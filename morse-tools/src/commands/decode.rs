use morse_codec::MorseCodec;
use tracing::debug;

use crate::error::CliResult;

/// Dekoduje kod Morse'a w jednym z trzech trybów.
pub fn run(codec: &MorseCodec, morse: &str, strict: bool, report: bool) -> CliResult<String> {
    if strict {
        return Ok(codec.decode_strict(morse)?);
    }
    if !report {
        return Ok(codec.decode(morse));
    }

    let result = codec.decode_report(morse);
    debug!(diagnostics = result.diagnostics.len(), "Zdekodowano z raportem");
    let mut output = result.text;
    for diagnostic in &result.diagnostics {
        output.push_str(&format!("\n# {}", diagnostic));
    }
    Ok(output)
}
