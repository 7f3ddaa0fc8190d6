// src/script/loader.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::script::model::ScriptFile;
use crate::script::validate::validate_script;

/// Load a timeline script from a given path and return the raw `ScriptFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (step fields, durations). Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ScriptFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading script file at {:?}", path))?;

    let script: ScriptFile = toml::from_str(&contents)
        .with_context(|| format!("parsing TOML script from {:?}", path))?;

    Ok(script)
}

/// Load a timeline script from path and run semantic validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for:
///   - at least one step,
///   - per-kind field requirements (`duration` vs `message`),
///   - non-negative wait durations.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ScriptFile> {
    let script = load_from_path(&path)?;
    validate_script(&script)?;
    Ok(script)
}
