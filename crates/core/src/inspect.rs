//! Plugin directory inspection
//!
//! Given a candidate plugin directory, these functions derive everything a
//! matrix record needs: the Python package directory, frontend asset
//! presence, translations, and dependencies on other plugins.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::setup_cfg::SetupCfg;
use crate::types::{PlugmatError, PlugmatResult};

/// Extracts the plugin name from an `indico-plugin-*` requirement,
/// dropping any version constraint.
static DEP_NAME: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^indico-plugin-([^>=<]+)").ok());

/// Bundler config files whose presence marks a plugin as shipping assets.
const ASSET_CONFIGS: &[&str] = &["webpack.config.js", "webpack-bundles.json"];

/// Locate the plugin's Python package directory.
///
/// A package directory is an `indico_*` subdirectory containing an
/// `__init__.py`. Exactly one must exist; `Ok(None)` is returned for
/// single-file plugins (a top-level `indico_*.py` module instead of a
/// package). Zero candidates without a single-file module, or more than one
/// candidate, are fatal.
pub fn package_dir(plugin_dir: &Path) -> PlugmatResult<Option<PathBuf>> {
    let pkg_glob = compile_glob("indico_*");
    let module_glob = compile_glob("indico_*.py");

    let mut candidates = Vec::new();
    let mut has_single_file_module = false;

    for entry in std::fs::read_dir(plugin_dir)?.flatten() {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if path.is_dir() {
            if pkg_glob.is_match(name) && path.join("__init__.py").is_file() {
                candidates.push(path);
            }
        } else if module_glob.is_match(name) {
            has_single_file_module = true;
        }
    }

    candidates.sort();
    match candidates.len() {
        1 => Ok(candidates.pop()),
        0 if has_single_file_module => Ok(None),
        0 => Err(PlugmatError::NoPackageDir(plugin_dir.to_path_buf())),
        _ => Err(PlugmatError::AmbiguousPackageDir(candidates)),
    }
}

/// Whether the plugin ships frontend assets.
pub fn has_assets(plugin_dir: &Path) -> bool {
    ASSET_CONFIGS
        .iter()
        .any(|name| plugin_dir.join(name).exists())
}

/// Whether the plugin ships translations (a `translations` directory under
/// the package directory). Single-file plugins never do.
pub fn has_i18n(plugin_dir: &Path) -> PlugmatResult<bool> {
    match package_dir(plugin_dir)? {
        Some(pkg_dir) => Ok(pkg_dir.join("translations").exists()),
        None => Ok(false),
    }
}

/// Names of other plugins this plugin depends on, extracted from the
/// `indico-plugin-*` entries of its declared install requirements. Dashes
/// in names are normalized to underscores to match package names.
pub fn plugin_deps(plugin_dir: &Path) -> PlugmatResult<Vec<String>> {
    let cfg = SetupCfg::read(plugin_dir)?;
    let Some(re) = DEP_NAME.as_ref() else {
        return Ok(Vec::new());
    };
    Ok(cfg
        .install_requires()
        .iter()
        .filter(|req| req.starts_with("indico-plugin-"))
        .filter_map(|req| re.captures(req))
        .map(|caps| caps[1].replace('-', "_"))
        .collect())
}

fn compile_glob(pattern: &str) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    if let Ok(glob) = Glob::new(pattern) {
        builder.add(glob);
    }
    builder.build().unwrap_or_default()
}
