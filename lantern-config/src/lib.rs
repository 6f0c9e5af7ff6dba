use log::warn;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

pub mod logging;
pub mod plugins;

pub use logging::LoggingConfig;
pub use plugins::PluginsConfig;

const CONFIG_ROOT_FOLDER: &str = "config/";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't access configuration: {0}")]
    Io(#[from] io::Error),
    #[error("Couldn't parse config at {path:?}. Reason: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Couldn't serialize default config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Everything a host hands to the plugin API at startup.
///
/// The defaults are what a fresh install writes to disk.
#[derive(Deserialize, Serialize, Default, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ApiConfiguration {
    pub logging: LoggingConfig,
    pub plugins: PluginsConfig,
}

pub trait LoadConfiguration {
    fn load(exec_dir: &Path) -> Result<Self, ConfigError>
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        let config_dir = exec_dir.join(CONFIG_ROOT_FOLDER);
        if !config_dir.exists() {
            log::debug!("creating new config root folder");
            fs::create_dir(&config_dir)?;
        }
        let path = config_dir.join(Self::get_path());

        let config = if path.exists() {
            let file_content = fs::read_to_string(&path)?;
            toml::from_str(&file_content).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?
        } else {
            let content = Self::default();

            if let Err(err) = fs::write(&path, toml::to_string(&content)?) {
                warn!("Couldn't write default config to {:?}. Reason: {}", &path, err);
            }

            content
        };

        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    fn get_path() -> &'static Path;

    fn validate(&self) -> Result<(), String>;
}

impl LoadConfiguration for ApiConfiguration {
    fn get_path() -> &'static Path {
        Path::new("lantern.toml")
    }

    fn validate(&self) -> Result<(), String> {
        self.plugins.validate()
    }
}
