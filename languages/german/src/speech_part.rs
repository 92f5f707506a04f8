use once_cell::sync::Lazy;
use regex::Regex;
use wortkarte_core::types::SpeechPart;

// https://de.wiktionary.org/wiki/Hilfe:Wortart
static SPEECH_PART: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{Wortart\|([^|}]+)\|Deutsch\}\}").unwrap());

// Pluraletantum entries carry the "kein Singular" marker next to the
// Wortart template
static NO_SINGULAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{kSg\.\}\}").unwrap());

/// Part of speech from the first `{{Wortart|...|Deutsch}}` template.
///
/// Values outside the mapping table are left unclassified. A noun entry
/// with the no-singular marker anywhere in the text is a plural-only noun.
pub fn speech_part(wikitext: &str) -> Option<SpeechPart> {
    let captures = SPEECH_PART.captures(wikitext)?;

    let part = match captures.get(1)?.as_str() {
        "Substantiv" => SpeechPart::Noun,
        "Verb" => SpeechPart::Verb,
        "Adjektiv" => SpeechPart::Adjective,
        "Lokaladverb" => SpeechPart::Adverb,
        "Personalpronomen" => SpeechPart::Pronoun,
        "Junktion" | "Konjunktion" | "Subjunktion" => SpeechPart::Junction,
        "Numerale" => SpeechPart::Number,
        _ => return None,
    };

    if part == SpeechPart::Noun && NO_SINGULAR.is_match(wikitext) {
        return Some(SpeechPart::PluralOnly);
    }

    Some(part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_word_classes() {
        let cases = [
            ("{{Wortart|Substantiv|Deutsch}}", SpeechPart::Noun),
            ("{{Wortart|Verb|Deutsch}}", SpeechPart::Verb),
            ("{{Wortart|Adjektiv|Deutsch}}", SpeechPart::Adjective),
            ("{{Wortart|Lokaladverb|Deutsch}}", SpeechPart::Adverb),
            ("{{Wortart|Personalpronomen|Deutsch}}", SpeechPart::Pronoun),
            ("{{Wortart|Junktion|Deutsch}}", SpeechPart::Junction),
            ("{{Wortart|Konjunktion|Deutsch}}", SpeechPart::Junction),
            ("{{Wortart|Subjunktion|Deutsch}}", SpeechPart::Junction),
            ("{{Wortart|Numerale|Deutsch}}", SpeechPart::Number),
        ];

        for (markup, expected) in cases {
            assert_eq!(speech_part(markup), Some(expected), "markup: {markup}");
        }
    }

    #[test]
    fn unmapped_word_class_is_absent() {
        assert_eq!(speech_part("{{Wortart|Interjektion|Deutsch}}"), None);
    }

    #[test]
    fn no_template_is_absent() {
        assert_eq!(speech_part("just some prose, no templates"), None);
        assert_eq!(speech_part(""), None);
    }

    #[test]
    fn other_language_sections_do_not_match() {
        assert_eq!(speech_part("{{Wortart|Substantiv|Englisch}}"), None);
    }

    #[test]
    fn noun_with_no_singular_marker_is_plural_only() {
        let markup = "=== {{Wortart|Substantiv|Deutsch}}, {{kSg.}} ===";
        assert_eq!(speech_part(markup), Some(SpeechPart::PluralOnly));
    }

    #[test]
    fn no_singular_marker_only_affects_nouns() {
        let markup = "=== {{Wortart|Verb|Deutsch}} ===\n{{kSg.}}";
        assert_eq!(speech_part(markup), Some(SpeechPart::Verb));
    }
}
