//! Reading the input object from disk
//!
//! Three shapes are accepted: a flat `{ key: { data } }` object, a terminal
//! calendar save file with separate `days` and `weekdays` objects, and a
//! JavaScript file assigning either of those to a variable.

use crate::domain::EntryMap;
use crate::error::{CalprintError, Result};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

/// Oldest save file version that can be read
const MIN_SUPPORTED_VERSION: (u32, u32, u32) = (1, 0, 0);

fn js_assignment_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^\s*(?:let|var|const)\s+[A-Za-z_$][A-Za-z0-9_$]*\s*=").unwrap()
    })
}

#[derive(Debug, Deserialize)]
struct SaveFile {
    #[serde(default)]
    version: Option<String>,
    days: EntryMap,
    weekdays: EntryMap,
}

/// Load entries from a file
pub fn load_entries(path: &Path) -> Result<EntryMap> {
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CalprintError::InputNotFound(path.to_path_buf())
        } else {
            CalprintError::Io(e)
        }
    })?;

    let entries = parse_entries(&contents)?;
    debug!(path = %path.display(), entries = entries.len(), "loaded input");
    Ok(entries)
}

/// Parse entries from file contents, in document order
pub fn parse_entries(contents: &str) -> Result<EntryMap> {
    let json = strip_js_assignment(contents);
    let value: Value = serde_json::from_str(json)?;

    if !is_save_file(&value) {
        return Ok(serde_json::from_value(value)?);
    }

    let save: SaveFile = serde_json::from_value(value)?;
    if let Some(version) = &save.version {
        check_version(version)?;
    }

    let mut entries = save.days;
    entries.extend(save.weekdays);
    Ok(entries)
}

/// `{"days": {...}, "weekdays": {...}}` with neither being an entry itself
fn is_save_file(value: &Value) -> bool {
    let is_section = |name: &str| {
        value
            .get(name)
            .and_then(Value::as_object)
            .is_some_and(|section| !section.contains_key("data"))
    };
    is_section("days") && is_section("weekdays")
}

fn strip_js_assignment(contents: &str) -> &str {
    match js_assignment_regex().find(contents) {
        Some(m) => {
            let rest = contents[m.end()..].trim_end();
            rest.strip_suffix(';').unwrap_or(rest)
        }
        None => contents,
    }
}

fn check_version(version: &str) -> Result<()> {
    let parts: Vec<u32> = version
        .split('.')
        .map(|part| part.trim().parse::<u32>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| CalprintError::UnsupportedVersion(version.to_string()))?;

    let parsed = match parts.as_slice() {
        [major, minor, build] => (*major, *minor, *build),
        _ => return Err(CalprintError::UnsupportedVersion(version.to_string())),
    };

    if parsed < MIN_SUPPORTED_VERSION {
        return Err(CalprintError::UnsupportedVersion(version.to_string()));
    }
    Ok(())
}
