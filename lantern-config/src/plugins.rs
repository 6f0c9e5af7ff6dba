use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PluginsConfig {
    /// Folder that holds one data folder per plugin.
    pub folder: PathBuf,
}

impl Default for PluginsConfig {
    fn default() -> Self {
        Self {
            folder: PathBuf::from("plugins"),
        }
    }
}

impl PluginsConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.folder.as_os_str().is_empty() {
            return Err("plugins.folder must not be empty".to_string());
        }
        Ok(())
    }
}
