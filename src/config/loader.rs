// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::model::{Definition, RawDefinitionFile};
use crate::errors::Result;

/// Load a definition file from a given path and return the raw
/// `RawDefinitionFile`.
///
/// This only performs TOML deserialization; it does **not** build or check
/// instances. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawDefinitionFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    load_from_str(&contents)
}

/// Parse definition TOML held in memory.
pub fn load_from_str(contents: &str) -> Result<RawDefinitionFile> {
    let raw: RawDefinitionFile = toml::from_str(contents)?;
    Ok(raw)
}

/// Load a definition file and build every instance in it.
///
/// - Reads TOML.
/// - Applies defaults for omitted facets.
/// - Checks snapshot times, preset names, hardware layout and name
///   uniqueness.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<Definition> {
    let path = path.as_ref();
    let raw = load_from_path(path)?;
    let definition = Definition::try_from(raw)?;
    info!(path = %path.display(), instances = definition.len(), "loaded definition");
    Ok(definition)
}

/// `Lightsail.toml` in the current working directory.
pub fn default_definition_path() -> PathBuf {
    PathBuf::from("Lightsail.toml")
}
