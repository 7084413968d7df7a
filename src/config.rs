//! Configuration loading: defaults, then a TOML file, then `SITELOG_*`
//! environment variables, highest precedence last.

use std::path::{Path, PathBuf};

use anyhow::Context;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.toml";
const DATA_DIR_NAME: &str = "sitelog";
const STORE_FILE_NAME: &str = "projects.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the remote backend, e.g. `http://localhost:3001/api`.
    /// Unset disables upload, chat and summarization.
    pub api_base_url: Option<String>,
    /// ISO country codes restricting address suggestions.
    pub geocode_country_codes: String,
    /// Path of the JSON project store. Defaults to the platform data dir.
    pub store_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: None,
            geocode_country_codes: "se".to_string(),
            store_path: None,
        }
    }
}

impl Config {
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        let file = config_file
            .map(Path::to_path_buf)
            .or_else(default_config_path);
        if let Some(file) = file {
            figment = figment.merge(Toml::file(file));
        }
        figment
            .merge(Env::prefixed("SITELOG_"))
            .extract()
            .context("failed to load configuration")
    }

    /// Resolved location of the project store file.
    pub fn store_path(&self) -> PathBuf {
        self.store_path.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(DATA_DIR_NAME)
                .join(STORE_FILE_NAME)
        })
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(DATA_DIR_NAME).join(CONFIG_FILE_NAME))
}
