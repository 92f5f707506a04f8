pub mod examples;
pub mod inflection;
pub mod processor;
pub mod pronunciation;
pub mod speech_part;
pub mod translator;

pub use processor::{GermanProcessor, extract_entry};
pub use translator::GermanTranslator;

#[cfg(test)]
mod tests;
