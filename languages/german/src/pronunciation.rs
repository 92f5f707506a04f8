//! IPA and audio extraction from the `{{Aussprache}}` section.

use once_cell::sync::Lazy;
use regex::Regex;

static IPA: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{Lautschrift\|([^}]*)\}\}").unwrap());

// Section templates sit at the start of a line, while the IPA and audio
// templates inside the section are on ':'-indented lines. The window
// therefore runs from {{Aussprache}} to the next line-initial template.
static PRONUNCIATION_WINDOW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{\{Aussprache\}\}(.*?)(?:\n\{\{|\z)").unwrap());

static AUDIO: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{Audio\|([^}]*)\}\}").unwrap());

/// First IPA transcription, verbatim.
pub fn ipa(wikitext: &str) -> Option<String> {
    IPA.captures(wikitext)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// One `{{Audio|file|...}}` occurrence inside the pronunciation window.
#[derive(Debug, PartialEq, Eq)]
struct AudioRef {
    file: String,
    /// `spr=` region tag (e.g. `at` for an Austrian recording).
    region: Option<String>,
}

fn audio_refs(window: &str) -> Vec<AudioRef> {
    AUDIO
        .captures_iter(window)
        .filter_map(|captures| {
            let mut args = captures.get(1)?.as_str().split('|');

            let file = args.next()?.trim().to_string();
            if file.is_empty() {
                return None;
            }

            let region = args
                .filter_map(|arg| arg.strip_prefix("spr="))
                .next()
                .map(str::to_string);

            Some(AudioRef { file, region })
        })
        .collect()
}

/// Audio filename to pass to the file resolver.
///
/// Only the pronunciation window is searched, so audio templates from
/// unrelated sections never leak in. The last untagged recording whose
/// name starts with "De-" is the full-form, standard-register one and
/// wins regardless of order; otherwise the first occurrence is taken.
pub fn audio_file(wikitext: &str) -> Option<String> {
    let window = PRONUNCIATION_WINDOW.captures(wikitext)?.get(1)?.as_str();
    let refs = audio_refs(window);

    for audio in refs.iter().rev() {
        if audio.region.is_none() && audio.file.starts_with("De-") {
            return Some(audio.file.clone());
        }
    }

    refs.first().map(|audio| audio.file.clone())
}
