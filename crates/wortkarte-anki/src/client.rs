use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::note::NoteField;

#[derive(Clone)]
pub struct AnkiConnectClient {
    base_url: String,
    client: reqwest::Client,
}

/// Pronunciation recording attached to a note; AnkiConnect downloads the
/// URL itself and stores the file in the target field.
#[derive(Debug, Clone, Serialize)]
pub struct AudioAttachment {
    pub url: String,
    pub filename: String,
    pub fields: Vec<String>,
}

impl AudioAttachment {
    pub fn for_word(url: String, word: &str) -> Self {
        // keep the original extension if the URL has one
        let extension = url
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.contains('/'))
            .unwrap_or("ogg");

        Self {
            filename: format!("wortkarte-{word}.{extension}"),
            url,
            fields: vec!["Audio".to_string()],
        }
    }
}

impl AnkiConnectClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Check if AnkiConnect is available
    pub async fn check_connection(&self) -> Result<u32> {
        let response: AnkiResponse<u32> = self.invoke("version", json!({})).await?;
        response.into_result()
    }

    /// Add a note with the given fields, optionally attaching audio
    pub async fn add_note(
        &self,
        deck: &str,
        model: &str,
        fields: &[NoteField],
        audio: Option<AudioAttachment>,
    ) -> Result<u64> {
        let field_map: serde_json::Map<String, serde_json::Value> = fields
            .iter()
            .map(|f| (f.name.clone(), f.value.clone().into()))
            .collect();

        let mut note = json!({
            "deckName": deck,
            "modelName": model,
            "fields": field_map,
            "tags": ["wortkarte"]
        });

        if let Some(audio) = audio {
            note["audio"] = json!([audio]);
        }

        let response: AnkiResponse<u64> = self.invoke("addNote", json!({ "note": note })).await?;
        response.into_result()
    }

    /// Invoke an AnkiConnect API action
    async fn invoke<T>(&self, action: &str, params: serde_json::Value) -> Result<AnkiResponse<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        let request = AnkiRequest {
            action: action.to_string(),
            version: 6,
            params,
        };

        let response = self
            .client
            .post(&self.base_url)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to AnkiConnect")?;

        response
            .json::<AnkiResponse<T>>()
            .await
            .context("Failed to parse AnkiConnect response")
    }
}

#[derive(Serialize)]
struct AnkiRequest {
    action: String,
    version: u32,
    params: serde_json::Value,
}

#[derive(Deserialize)]
struct AnkiResponse<T> {
    result: Option<T>,
    error: Option<String>,
}

impl<T> AnkiResponse<T> {
    fn into_result(self) -> Result<T> {
        if let Some(error) = self.error {
            anyhow::bail!("AnkiConnect error: {}", error);
        }

        self.result.context("AnkiConnect returned null result")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attachment_filename_keeps_extension() {
        let attachment = AudioAttachment::for_word(
            "https://upload.wikimedia.org/wikipedia/commons/3/33/De-Haus.ogg".to_string(),
            "Haus",
        );

        assert_eq!(attachment.filename, "wortkarte-Haus.ogg");
        assert_eq!(attachment.fields, ["Audio"]);
    }
}
