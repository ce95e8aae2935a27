use std::fmt::Debug;

/// Kierunek tłumaczenia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    TextToMorse,
    MorseToText,
}

/// Trait reprezentujący tłumacza tekst <-> Morse.
///
/// Obie operacje są czyste i nie zgłaszają błędów; problemy z wejściem
/// degradują wynik lokalnie.
pub trait Translator: Debug + Send + Sync {
    fn encode(&self, text: &str) -> String;

    fn decode(&self, morse: &str) -> String;

    /// Wybiera kierunek i tłumaczy.
    fn translate(&self, direction: Direction, input: &str) -> String {
        match direction {
            Direction::TextToMorse => self.encode(input),
            Direction::MorseToText => self.decode(input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct EchoTranslator;

    impl Translator for EchoTranslator {
        fn encode(&self, text: &str) -> String {
            format!("enc:{}", text)
        }

        fn decode(&self, morse: &str) -> String {
            format!("dec:{}", morse)
        }
    }

    #[test]
    fn test_translate_dispatches_by_direction() {
        let translator = EchoTranslator;
        assert_eq!(translator.translate(Direction::TextToMorse, "a"), "enc:a");
        assert_eq!(translator.translate(Direction::MorseToText, ".-"), "dec:.-");
    }
}
