//! Example sentences from the `{{Beispiele}}` section.

use once_cell::sync::Lazy;
use regex::Regex;

/// At most this many sentences end up on a card.
const MAX_EXAMPLES: usize = 5;

/// Sentences longer than this are useless on a flashcard.
const MAX_EXAMPLE_CHARS: usize = 150;

/// Editorial stub sentence seeded into empty example sections.
const PLACEHOLDER_PREFIX: &str = "::Anneliese";

static REF_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<ref[^>]*?>.*?</ref>|<ref[^>]*/>").unwrap());

static EXAMPLES_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{\{Beispiele\}\}(.*?)\{\{[^{]+\}\}").unwrap());

/// Leading sense-index annotation, e.g. `:[1]` or `:[2, 3]`.
static SENSE_INDEX: Lazy<Regex> = Lazy::new(|| Regex::new(r":\[[\w ,]+\]").unwrap());

static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"''(.*?)''").unwrap());

/// Cleaned example sentences, at most [`MAX_EXAMPLES`], in source order.
pub fn examples(wikitext: &str) -> Vec<String> {
    let wikitext = REF_TAG.replace_all(wikitext, "");

    let Some(captures) = EXAMPLES_BLOCK.captures(&wikitext) else {
        return Vec::new();
    };
    let block = captures.get(1).map(|m| m.as_str()).unwrap_or_default();

    split_at_line_colons(block)
        .into_iter()
        .filter_map(|chunk| clean_line(&chunk))
        .take(MAX_EXAMPLES)
        .collect()
}

/// Split into chunks anchored at line-initial `:`. Continuation lines stay
/// glued to the chunk they follow.
fn split_at_line_colons(block: &str) -> Vec<String> {
    let mut chunks: Vec<String> = Vec::new();

    for line in block.lines() {
        if line.starts_with(':') || chunks.is_empty() {
            chunks.push(line.to_string());
        } else if let Some(last) = chunks.last_mut() {
            last.push('\n');
            last.push_str(line);
        }
    }

    chunks
}

/// Cleanup pass for one candidate sentence. Idempotent: running it on its
/// own output changes nothing.
fn clean_line(line: &str) -> Option<String> {
    let line = SENSE_INDEX.replace_all(line, "");
    let line = line.trim_matches(|c: char| {
        c.is_whitespace() || matches!(c, '„' | '“' | '»' | '«' | '=')
    });

    if line.is_empty() || line.starts_with(PLACEHOLDER_PREFIX) {
        return None;
    }

    if line.chars().count() > MAX_EXAMPLE_CHARS {
        return None;
    }

    Some(EMPHASIS.replace_all(line, "<b>$1</b>").into_owned())
}
