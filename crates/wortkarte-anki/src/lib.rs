mod client;
mod note;

pub use client::{AnkiConnectClient, AudioAttachment};
pub use note::{NoteField, build_note};

use anyhow::Result;
use wortkarte_core::types::WordEntry;

/// Render a word entry into note fields and push it to Anki.
pub async fn add_card(
    client: &AnkiConnectClient,
    deck: &str,
    model: &str,
    entry: &WordEntry,
) -> Result<u64> {
    let fields = build_note(entry);
    let audio = entry
        .audio_url
        .as_ref()
        .map(|url| AudioAttachment::for_word(url.clone(), &entry.word));

    client.add_note(deck, model, &fields, audio).await
}
