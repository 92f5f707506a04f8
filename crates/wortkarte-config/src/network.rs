use std::env;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://de.wiktionary.org/w/api.php".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("wortkarte/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NetworkConfig {
    /// MediaWiki API endpoint of the wiki to scrape
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Per-request timeout; the wiki never hangs intentionally but we
    /// refuse to block a lookup forever
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl NetworkConfig {
    pub fn from_env() -> Self {
        let api_url = env::var("WIKTIONARY_API_URL").unwrap_or_else(|_| default_api_url());

        let timeout_seconds = env::var("HTTP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        Self {
            api_url,
            timeout_seconds,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}
