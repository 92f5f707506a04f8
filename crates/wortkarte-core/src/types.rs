use serde::{Deserialize, Serialize};

/// Part of speech of a German dictionary entry.
///
/// Closed set: de.wiktionary uses many more `Wortart` values, but only
/// these are mapped; anything else stays unclassified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeechPart {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Number,
    Junction,
    /// Noun that only exists in plural form (Pluraletantum).
    PluralOnly,
}

impl SpeechPart {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeechPart::Noun => "NOUN",
            SpeechPart::Verb => "VERB",
            SpeechPart::Adjective => "ADJECTIVE",
            SpeechPart::Adverb => "ADVERB",
            SpeechPart::Pronoun => "PRONOUN",
            SpeechPart::Number => "NUMBER",
            SpeechPart::Junction => "JUNCTION",
            SpeechPart::PluralOnly => "PLURAL-ONLY",
        }
    }
}

/// Grammatical gender, meaningful for nouns only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Neutral,
}

impl Gender {
    /// Definite article for this gender.
    pub fn article(&self) -> &'static str {
        match self {
            Gender::Male => "der",
            Gender::Female => "die",
            Gender::Neutral => "das",
        }
    }
}

/// Resolved dictionary page for a word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub page_id: u64,
    pub full_url: String,
}

/// Everything extracted from one dictionary entry.
///
/// Every field except the word itself is optional; an absent field means
/// the markup pattern was not found, which is a normal outcome.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WordEntry {
    pub word: String,
    pub page_url: Option<String>,
    pub speech_part: Option<SpeechPart>,
    pub gender: Option<Gender>,
    pub plural: Option<String>,
    pub genitive: Option<String>,
    pub help_verb: Option<String>,
    pub prateritum: Option<String>,
    pub partizip2: Option<String>,
    pub ipa: Option<String>,
    pub audio_url: Option<String>,
    pub examples: Vec<String>,
    pub translation: Option<String>,
}

impl WordEntry {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ..Default::default()
        }
    }

    /// Whether the entry classifies as a noun (including plural-only ones).
    pub fn is_noun(&self) -> bool {
        matches!(
            self.speech_part,
            Some(SpeechPart::Noun) | Some(SpeechPart::PluralOnly)
        )
    }
}
