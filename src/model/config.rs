use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Color names accepted in the `[colors]` config table
pub const COLOR_KEYS: &[&str] = &[
    "background",
    "text",
    "text_bright",
    "highlight",
    "dim",
    "not_started",
    "priority",
    "doing",
    "review",
    "done",
    "selection_bg",
    "selection_border",
];

/// Configuration from config.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to the list file. `~/` is expanded against `$HOME`.
    /// Default: `~/.todolist`
    #[serde(default = "default_list_file")]
    pub list_file: String,
    /// Draw Unicode state glyphs instead of ASCII
    #[serde(default)]
    pub unicode: bool,
    /// Insert a header row where the list crosses into a new ISO week
    #[serde(default = "default_true")]
    pub week_headers: bool,
    /// Theme color overrides, e.g. `doing = "#44DDFF"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            list_file: default_list_file(),
            unicode: false,
            week_headers: true,
            colors: HashMap::new(),
        }
    }
}

fn default_list_file() -> String {
    "~/.todolist".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// The list file with a leading `~/` replaced by the home directory
    pub fn list_path(&self) -> PathBuf {
        match self.list_file.strip_prefix("~/") {
            Some(rest) => home_dir().join(rest),
            None if self.list_file == "~" => home_dir(),
            None => PathBuf::from(&self.list_file),
        }
    }
}

/// Get the user's home directory
pub fn home_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}
