use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default cleanup for a word typed or pasted by the user
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // Unicode normalization (NFC) so umlauts arrive composed
        text = text.nfc().collect();

        // A dictionary lookup key is a single word or fixed phrase;
        // collapse any embedded line breaks
        text = text.replace(['\n', '\r'], " ").trim().to_string();

        text
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_normalizes() {
        let p = DefaultPreprocessor;
        assert_eq!(p.process("  Haus\n"), "Haus");
        // decomposed a + combining diaeresis becomes composed ä
        assert_eq!(p.process("Ba\u{0308}r"), "Bär");
    }

    #[test]
    fn empty_input_stays_empty() {
        let p = DefaultPreprocessor;
        assert_eq!(p.process("   "), "");
    }
}
