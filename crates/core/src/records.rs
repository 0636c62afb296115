//! Record types emitted into the build matrix
//!
//! This module contains the one entity the tool produces: a [`PluginRecord`]
//! per discovered plugin, serialized into the `{"include": [...]}` matrix
//! structure understood by the CI runner.

use serde::Serialize;

/// One entry of the build matrix, describing a single plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginRecord {
    /// Canonical plugin name (directory name, or the package name with the
    /// `indico_` prefix stripped in single-plugin mode)
    pub plugin: String,
    /// Path of the plugin directory relative to the repository root; empty
    /// in single-plugin mode
    pub path: String,
    /// Whether the plugin should be installed by CI jobs (everything except
    /// the `_meta` plugin)
    pub install: bool,
    /// Whether the plugin ships frontend assets (webpack config present)
    pub assets: bool,
    /// Whether the plugin ships translations
    pub i18n: bool,
    /// Names of other plugins this one depends on
    pub deps: Vec<String>,
    /// Whether the manifest is missing entries for data directories
    pub invalid_manifest: bool,
    /// Whether this is a single-plugin repository
    pub single: bool,
}

#[derive(Serialize)]
struct Matrix<'a> {
    include: &'a [PluginRecord],
}

/// Render the matrix value for the CI output line: the JSON object when any
/// records exist, otherwise an empty string so downstream jobs can skip.
pub fn matrix_string(records: &[PluginRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }
    serde_json::to_string(&Matrix { include: records }).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> PluginRecord {
        PluginRecord {
            plugin: name.to_string(),
            path: name.to_string(),
            install: true,
            assets: false,
            i18n: false,
            deps: Vec::new(),
            invalid_manifest: false,
            single: false,
        }
    }

    #[test]
    fn empty_matrix_renders_as_empty_string() {
        assert_eq!(matrix_string(&[]), "");
    }

    #[test]
    fn matrix_wraps_records_under_include() {
        let rendered = matrix_string(&[record("foo")]);
        let value: serde_json::Value =
            serde_json::from_str(&rendered).expect("matrix should be valid JSON");
        assert_eq!(value["include"][0]["plugin"], "foo");
        assert_eq!(value["include"][0]["install"], true);
        assert_eq!(value["include"][0]["deps"], serde_json::json!([]));
    }

    #[test]
    fn record_serializes_all_fields() {
        let rendered = matrix_string(&[record("a")]);
        for field in [
            "plugin",
            "path",
            "install",
            "assets",
            "i18n",
            "deps",
            "invalid_manifest",
            "single",
        ] {
            assert!(
                rendered.contains(&format!("\"{}\"", field)),
                "serialized record should contain field '{}'",
                field
            );
        }
    }
}
