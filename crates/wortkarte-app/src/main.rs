use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wortkarte_anki::AnkiConnectClient;
use wortkarte_config::Config;
use wortkarte_core::preprocess::{DefaultPreprocessor, Preprocessor};
use wortkarte_core::types::WordEntry;
use wortkarte_lang_german::{GermanProcessor, GermanTranslator};
use wortkarte_translator::Translator;
use wortkarte_wiktionary::WiktionaryClient;

/// Look up a German word on de.wiktionary and turn it into flashcard fields.
#[derive(Parser)]
#[command(name = "wortkarte", version, about)]
struct Args {
    /// Word to look up
    word: String,

    /// Print the entry as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Push the finished card to Anki via AnkiConnect
    #[arg(long)]
    anki: bool,

    /// Skip translation even if a key is configured
    #[arg(long)]
    no_translate: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = Config::from_env();

    let client = WiktionaryClient::new(
        config.network.api_url.clone(),
        Duration::from_secs(config.network.timeout_seconds),
        &config.network.user_agent,
    )?;
    let processor = GermanProcessor::new(client);

    let word = DefaultPreprocessor.process(&args.word);
    if word.is_empty() {
        anyhow::bail!("no word given");
    }

    let Some(mut entry) = processor.lookup(&word).await? else {
        println!("No de.wiktionary entry found for \"{word}\"");
        return Ok(());
    };

    if config.translator.enabled && !args.no_translate {
        entry.translation = translate(&config, &word).await;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
    } else {
        print_entry(&entry);
    }

    if args.anki || config.anki.enabled {
        push_to_anki(&config, &entry).await?;
    }

    Ok(())
}

/// A failed translation must not cost us the extracted entry; log it and
/// leave the field empty.
async fn translate(config: &Config, word: &str) -> Option<String> {
    let translator = GermanTranslator::new(
        config.translator.api_key.clone(),
        config.translator.api_url.clone(),
    );

    match translator
        .translate(
            word,
            config.translator.from_lang.clone(),
            config.translator.to_lang.clone(),
        )
        .await
    {
        Ok(translation) => Some(translation.text),
        Err(e) => {
            tracing::warn!(word, error = %e, "translation failed");
            None
        }
    }
}

async fn push_to_anki(config: &Config, entry: &WordEntry) -> Result<()> {
    let client = AnkiConnectClient::new(config.anki.url.clone());

    client
        .check_connection()
        .await
        .context("AnkiConnect is not reachable")?;

    let note_id =
        wortkarte_anki::add_card(&client, &config.anki.deck, &config.anki.model, entry).await?;

    tracing::info!(note_id, "card added to Anki");
    println!("Added card to deck \"{}\" (note {note_id})", config.anki.deck);

    Ok(())
}

fn print_entry(entry: &WordEntry) {
    let mut headline = String::new();
    if let Some(gender) = entry.gender {
        headline.push_str(gender.article());
        headline.push(' ');
    }
    headline.push_str(&entry.word);
    if let Some(ipa) = &entry.ipa {
        headline.push_str(&format!(" [{ipa}]"));
    }
    println!("{headline}");

    if let Some(speech_part) = entry.speech_part {
        println!("  {}", speech_part.as_str());
    }
    if let Some(genitive) = &entry.genitive {
        println!("  Genitiv: {genitive}");
    }
    if let Some(plural) = &entry.plural {
        println!("  Plural: {plural}");
    }
    if let Some(prateritum) = &entry.prateritum {
        println!("  Präteritum: {prateritum}");
    }
    if let Some(partizip2) = &entry.partizip2 {
        println!("  Partizip II: {partizip2}");
    }
    if let Some(help_verb) = &entry.help_verb {
        println!("  Hilfsverb: {help_verb}");
    }
    if let Some(translation) = &entry.translation {
        println!("  Übersetzung: {translation}");
    }
    if let Some(audio) = &entry.audio_url {
        println!("  Audio: {audio}");
    }
    for example in &entry.examples {
        println!("  - {example}");
    }
    if let Some(url) = &entry.page_url {
        println!("  {url}");
    }
}
