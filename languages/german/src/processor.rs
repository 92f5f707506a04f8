use wortkarte_core::types::{SpeechPart, WordEntry};
use wortkarte_wiktionary::{Error, WiktionaryClient};

use crate::examples::examples;
use crate::inflection;
use crate::pronunciation::{audio_file, ipa};
use crate::speech_part::speech_part;

/// German lookup pipeline: resolve the page, fetch its wikitext, run the
/// field extractors, resolve the chosen audio file to a URL.
pub struct GermanProcessor {
    client: WiktionaryClient,
}

impl GermanProcessor {
    pub fn new(client: WiktionaryClient) -> Self {
        Self { client }
    }

    /// Look a word up on de.wiktionary.
    ///
    /// `Ok(None)` means the wiki has no entry for the word; in that case
    /// every downstream field is absent by construction. Extraction
    /// absences show up as empty fields on the returned entry, never as
    /// errors. Only a failed page resolution or wikitext fetch aborts.
    pub async fn lookup(&self, word: &str) -> Result<Option<WordEntry>, Error> {
        let Some(page) = self.client.find_word_page(word).await? else {
            tracing::info!(word, "no dictionary page");
            return Ok(None);
        };

        tracing::debug!(word, page_id = page.page_id, "resolved page");
        let wikitext = self.client.page_wikitext(page.page_id).await?;

        let mut entry = extract_entry(word, &wikitext);
        entry.page_url = Some(page.full_url);

        if let Some(file) = audio_file(&wikitext) {
            match self.client.file_url(&file).await {
                Ok(url) => entry.audio_url = url,
                Err(e) => {
                    // a dead audio link should not sink the whole lookup
                    tracing::warn!(file = %file, error = %e, "audio file resolution failed");
                }
            }
        }

        Ok(Some(entry))
    }
}

/// Run every field extractor over one wikitext blob. Pure: same blob in,
/// same entry out.
///
/// Gender and the noun forms are only populated for nouns (plural-only
/// ones included), the verb forms only for verbs.
pub fn extract_entry(word: &str, wikitext: &str) -> WordEntry {
    let mut entry = WordEntry::new(word);

    entry.speech_part = speech_part(wikitext);
    entry.ipa = ipa(wikitext);
    entry.examples = examples(wikitext);

    match entry.speech_part {
        Some(SpeechPart::Noun) | Some(SpeechPart::PluralOnly) => {
            entry.gender = inflection::gender(wikitext);
            entry.plural = inflection::plural(wikitext);
            entry.genitive = inflection::genitive(wikitext);
        }
        Some(SpeechPart::Verb) => {
            entry.help_verb = inflection::help_verb(wikitext);
            entry.prateritum = inflection::prateritum(wikitext);
            entry.partizip2 = inflection::partizip2(wikitext);
        }
        _ => {}
    }

    entry
}
