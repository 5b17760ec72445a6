use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use super::paths::AppPaths;
use super::settings::Settings;
use super::validation::{validate_settings, ConfigValidationError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error(transparent)]
    Invalid(#[from] ConfigValidationError),
}

#[derive(Clone)]
pub struct ConfigService {
    paths: Arc<AppPaths>,
}

impl ConfigService {
    pub fn new(paths: Arc<AppPaths>) -> Self {
        Self { paths }
    }

    pub fn config_path(&self) -> PathBuf {
        if let Ok(path) = env::var("WELLMATE_CONFIG_PATH") {
            return PathBuf::from(path);
        }

        let user_config = self.paths.user_data_dir.join("config.yml");
        if user_config.exists() {
            return user_config;
        }

        self.paths.project_root.join("config.yml")
    }

    /// Loads `config.yml`, applies `HOST`/`PORT` overrides and validates the
    /// result. A missing file yields the defaults.
    pub fn load_settings(&self) -> Result<Settings, ConfigError> {
        let path = self.config_path();
        let mut settings = load_yaml_file(&path)?;
        apply_env_overrides(&mut settings, |key| env::var(key).ok());
        validate_settings(&settings)?;
        Ok(settings)
    }
}

fn load_yaml_file(path: &Path) -> Result<Settings, ConfigError> {
    if !path.exists() {
        tracing::info!("No config file at {}; using defaults", path.display());
        return Ok(Settings::default());
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if contents.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_yaml::from_str::<Settings>(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn apply_env_overrides<F>(settings: &mut Settings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(host) = lookup("HOST").filter(|v| !v.trim().is_empty()) {
        settings.server.host = host.trim().to_string();
    }

    match lookup("PORT").map(|v| v.trim().parse::<u16>()) {
        Some(Ok(port)) => settings.server.port = port,
        Some(Err(err)) => tracing::warn!("Ignoring invalid PORT value: {}", err),
        None => {}
    }
}
