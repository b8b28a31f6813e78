use anyhow::bail;
use folio_shortcode::{builtin_processor, ShortcodeProcessor};
use folio_style::ListStyle;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

pub const DEFAULT_CONFIG_NAME: &str = "folio.config.json";

/// Folio configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// List style used when a command is not given one
    #[serde(default)]
    pub list_style: ListStyle,

    /// Nest new lists inside existing ones instead of replacing them
    #[serde(default)]
    pub increase_depth: bool,

    /// Shortcode tags to preprocess
    #[serde(default = "default_shortcodes")]
    pub shortcodes: Vec<String>,

    /// Placed between a list marker and the paragraph text
    #[serde(default = "default_marker_separator")]
    pub marker_separator: String,
}

fn default_shortcodes() -> Vec<String> {
    vec!["video".to_string()]
}

fn default_marker_separator() -> String {
    " ".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            debug!(path = %config_path.display(), "loading config");
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Processors for the configured shortcode tags
    pub fn processors(&self) -> anyhow::Result<Vec<ShortcodeProcessor>> {
        self.shortcodes
            .iter()
            .map(|tag| match builtin_processor(tag) {
                Some(processor) => Ok(processor),
                None => bail!("No shortcode processor for `{}`", tag),
            })
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            list_style: ListStyle::default(),
            increase_depth: false,
            shortcodes: default_shortcodes(),
            marker_separator: default_marker_separator(),
        }
    }
}
