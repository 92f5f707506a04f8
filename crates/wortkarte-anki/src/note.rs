//! Note-field assembly: turns a [`WordEntry`] into the HTML fragments the
//! card fields expect.

use serde::{Deserialize, Serialize};
use wortkarte_core::types::{Gender, WordEntry};

// Article colors: blue der, pink die, green das.
const DER_COLOR: &str = "#2a74ff";
const DIE_COLOR: &str = "#fd6d85";
const DAS_COLOR: &str = "#00aa00";

const TAG_COLOR: &str = "#3d405b";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteField {
    pub name: String,
    pub value: String,
}

impl NoteField {
    fn new(name: &str, value: String) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }
}

/// Build the full field record for one entry.
///
/// Fields with nothing to show are emitted empty rather than omitted, so
/// the note model always receives the same shape. The audio field stays
/// empty here; AnkiConnect fills it from the attachment.
pub fn build_note(entry: &WordEntry) -> Vec<NoteField> {
    vec![
        NoteField::new("Word", word_html(entry)),
        NoteField::new("IPA", ipa_html(entry)),
        NoteField::new("Grammar", grammar_html(entry)),
        NoteField::new("Examples", examples_html(entry)),
        NoteField::new("Translation", entry.translation.clone().unwrap_or_default()),
        NoteField::new("Audio", String::new()),
    ]
}

fn article_span(gender: Gender) -> String {
    let color = match gender {
        Gender::Male => DER_COLOR,
        Gender::Female => DIE_COLOR,
        Gender::Neutral => DAS_COLOR,
    };

    format!(
        r#"<span style="color: {color}; font-weight: bold;">{}</span>&nbsp;"#,
        gender.article()
    )
}

fn word_html(entry: &WordEntry) -> String {
    let mut html = String::new();

    if let Some(gender) = entry.gender {
        html.push_str(&article_span(gender));
    }

    html.push_str(&format!("<b>{}</b>", entry.word));
    html
}

fn ipa_html(entry: &WordEntry) -> String {
    match &entry.ipa {
        Some(ipa) => format!("[{ipa}]"),
        None => String::new(),
    }
}

/// Speech-part tag plus whichever inflection forms the entry has.
fn grammar_html(entry: &WordEntry) -> String {
    let mut parts = Vec::new();

    if let Some(speech_part) = entry.speech_part {
        parts.push(format!(
            r#"<span style="color: {TAG_COLOR};"><b>{}</b></span>"#,
            speech_part.as_str()
        ));
    }

    if let Some(genitive) = &entry.genitive {
        parts.push(format!("Genitiv: {genitive}"));
    }
    if let Some(plural) = &entry.plural {
        parts.push(format!("Plural: {plural}"));
    }

    if let Some(prateritum) = &entry.prateritum {
        parts.push(format!("Präteritum: {prateritum}"));
    }
    if let Some(partizip2) = &entry.partizip2 {
        parts.push(format!("Partizip II: {partizip2}"));
    }
    if let Some(help_verb) = &entry.help_verb {
        parts.push(format!("Hilfsverb: {help_verb}"));
    }

    parts.join("<br>")
}

fn examples_html(entry: &WordEntry) -> String {
    entry.examples.join("<br>")
}
