use std::env;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AnkiConfig {
    /// Enable pushing finished cards to AnkiConnect
    pub enabled: bool,
    /// AnkiConnect URL
    pub url: String,
    /// Default deck name
    pub deck: String,
    /// Default model name
    pub model: String,
}

impl AnkiConfig {
    pub fn from_env() -> Self {
        let enabled = env::var("ANKI_ENABLED")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);
        let url =
            env::var("ANKICONNECT_URL").unwrap_or_else(|_| "http://localhost:8765".to_string());
        let deck = env::var("ANKI_DECK").unwrap_or_else(|_| "Deutsch".to_string());
        let model = env::var("ANKI_MODEL").unwrap_or_else(|_| "Basic".to_string());

        Self {
            enabled,
            url,
            deck,
            model,
        }
    }
}

impl Default for AnkiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url: "http://localhost:8765".to_string(),
            deck: "Deutsch".to_string(),
            model: "Basic".to_string(),
        }
    }
}
