use morse_codec::MorseCodec;

use crate::error::CliResult;

/// Wypisuje pary `litera<TAB>wzorzec`, alfabetycznie albo w kolejności DFS drzewa.
pub fn run(codec: &MorseCodec, trie_order: bool) -> CliResult<String> {
    let options = codec.options();
    let (dot, dash) = (options.dot(), options.dash());

    let lines: Vec<String> = if trie_order {
        codec
            .trie()
            .patterns()
            .map(|(pattern, letter)| format!("{}\t{}", letter, pattern.render(dot, dash)))
            .collect()
    } else {
        codec
            .table()
            .iter()
            .map(|(letter, pattern)| format!("{}\t{}", letter, pattern.render(dot, dash)))
            .collect()
    };
    Ok(lines.join("\n"))
}
