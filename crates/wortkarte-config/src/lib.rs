use serde::{Deserialize, Serialize};

use self::anki::AnkiConfig;
use self::network::NetworkConfig;
use self::translator::TranslatorConfig;

pub mod anki;
pub mod network;
pub mod translator;

#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub translator: TranslatorConfig,
    pub anki: AnkiConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            network: NetworkConfig::from_env(),
            translator: TranslatorConfig::from_env(),
            anki: AnkiConfig::from_env(),
        }
    }
}
