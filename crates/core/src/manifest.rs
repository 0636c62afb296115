//! `MANIFEST.in` completeness checking
//!
//! Data directories under a plugin's package dir (anything without Python
//! sources) must be grafted into the source distribution, or they silently
//! disappear from releases. This module computes the expected graft lines
//! and diffs them against the actual manifest.

use std::collections::BTreeSet;
use std::path::Path;

use crate::annotations;
use crate::types::PlugmatResult;

/// Directories under the package dir that never need manifest entries.
const IGNORED_DIRS: &[&str] = &["__pycache__", "client"];

/// Check whether the plugin's manifest is missing entries for any of its
/// data directories. Problems are reported as `::error::` annotations but
/// only flag the record; they never abort the run.
pub fn has_invalid_manifest(plugin_dir: &Path, pkg_dir: &Path) -> PlugmatResult<bool> {
    let data_dirs = data_dirs(pkg_dir)?;
    if data_dirs.is_empty() {
        return Ok(false);
    }

    let expected = expected_lines(pkg_dir, &data_dirs);
    let plugin_name = dir_name(plugin_dir);

    let manifest_file = plugin_dir.join("MANIFEST.in");
    if !manifest_file.is_file() {
        annotations::error(format!("{plugin_name} has no manifest"));
        for line in &expected {
            annotations::error(format!("manifest entry missing: {line}"));
        }
        return Ok(true);
    }

    let manifest_lines: BTreeSet<String> = std::fs::read_to_string(&manifest_file)?
        .lines()
        .map(str::to_string)
        .collect();
    let missing: Vec<&String> = expected.difference(&manifest_lines).collect();
    if missing.is_empty() {
        return Ok(false);
    }

    annotations::error(format!("{plugin_name} has incomplete manifest"));
    for line in missing {
        annotations::error(format!("manifest entry missing: {line}"));
    }
    Ok(true)
}

/// Subdirectories of the package dir that hold data only: not a cache or
/// client dir, and no `*.py` files directly inside.
fn data_dirs(pkg_dir: &Path) -> PlugmatResult<Vec<String>> {
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(pkg_dir)?.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = dir_name(&path);
        if IGNORED_DIRS.contains(&name.as_str()) {
            continue;
        }
        if !contains_python_sources(&path)? {
            dirs.push(name);
        }
    }
    dirs.sort();
    Ok(dirs)
}

fn expected_lines(pkg_dir: &Path, data_dirs: &[String]) -> BTreeSet<String> {
    let pkg_name = dir_name(pkg_dir);
    data_dirs
        .iter()
        .map(|dir| format!("graft {pkg_name}/{dir}"))
        .collect()
}

fn contains_python_sources(dir: &Path) -> PlugmatResult<bool> {
    for entry in std::fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("py") {
            return Ok(true);
        }
    }
    Ok(false)
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}
