use thiserror::Error;

use super::settings::Settings;

#[derive(Debug, Error, PartialEq)]
#[error("invalid config value at {path}: {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

pub fn validate_settings(settings: &Settings) -> Result<(), ConfigValidationError> {
    validate_non_empty("server.host", &settings.server.host)?;
    if settings.server.port == 0 {
        return Err(invalid("server.port", "must be between 1 and 65535"));
    }

    validate_non_empty("vector_store.index_name", &settings.vector_store.index_name)?;
    validate_non_empty("vector_store.text_key", &settings.vector_store.text_key)?;
    validate_non_empty("vector_store.api_version", &settings.vector_store.api_version)?;
    validate_http_url("vector_store.controller_url", &settings.vector_store.controller_url)?;
    if let Some(host) = &settings.vector_store.host {
        validate_non_empty("vector_store.host", host)?;
    }

    validate_non_empty("embedding.model", &settings.embedding.model)?;
    validate_http_url("embedding.base_url", &settings.embedding.base_url)?;

    validate_non_empty("llm.model", &settings.llm.model)?;
    validate_http_url("llm.base_url", &settings.llm.base_url)?;

    validate_non_empty("ui.title", &settings.ui.title)?;
    Ok(())
}

fn validate_non_empty(path: &str, value: &str) -> Result<(), ConfigValidationError> {
    if value.trim().is_empty() {
        return Err(invalid(path, "must not be empty"));
    }
    Ok(())
}

fn validate_http_url(path: &str, value: &str) -> Result<(), ConfigValidationError> {
    validate_non_empty(path, value)?;
    let trimmed = value.trim();
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(invalid(path, "must start with http:// or https://"));
    }
    Ok(())
}

fn invalid(path: &str, message: &str) -> ConfigValidationError {
    ConfigValidationError {
        path: path.to_string(),
        message: message.to_string(),
    }
}
