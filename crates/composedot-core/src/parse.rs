//! Compose text and file loading.

use std::path::Path;

use serde_yaml_ng::Value;
use tracing::debug;

use crate::model::Configuration;
use crate::{Error, Result};

/// Parse compose YAML text into a [`Configuration`].
///
/// Unknown fields are ignored. A document with no content (empty, or only
/// comments) parses to an empty configuration. Anything else that is not a
/// mapping with the expected field shapes is a `ParseFailed` error carrying
/// the YAML location when the parser reports one.
pub fn parse_config(text: &str) -> Result<Configuration> {
    let config = match serde_yaml_ng::from_str::<Configuration>(text) {
        Ok(config) => config,
        Err(err) => {
            if matches!(serde_yaml_ng::from_str::<Value>(text), Ok(Value::Null)) {
                Configuration::default()
            } else {
                return Err(yaml_error(err));
            }
        }
    };

    debug!(
        services = config.services.len(),
        networks = config.networks.len(),
        volumes = config.volumes.len(),
        "parsed compose document"
    );
    Ok(config)
}

/// Read a compose file fully and parse it.
pub fn load_config(path: impl AsRef<Path>) -> Result<Configuration> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let bytes = std::fs::read(path).map_err(|err| {
        Error::from(err)
            .with_operation("config::load")
            .with_context("path", path_str.clone())
    })?;
    debug!(path = %path_str, bytes = bytes.len(), "read compose file");

    let text = String::from_utf8(bytes).map_err(|err| {
        Error::parse_failed("input is not valid UTF-8")
            .with_operation("config::load")
            .with_context("path", path_str.clone())
            .set_source(err)
    })?;

    parse_config(&text).map_err(|err| err.with_context("path", path_str))
}

fn yaml_error(err: serde_yaml_ng::Error) -> Error {
    let mut error = Error::parse_failed(err.to_string()).with_operation("config::parse");
    if let Some(location) = err.location() {
        error = error
            .with_context("line", location.line().to_string())
            .with_context("column", location.column().to_string());
    }
    error.set_source(err)
}
