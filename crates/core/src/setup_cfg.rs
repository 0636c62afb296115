//! Minimal reader for setuptools `setup.cfg` files
//!
//! Only covers what plugin inspection needs: section headers, `key = value`
//! assignments and the indented continuation lines setuptools uses for
//! multi-line values such as `install_requires`.

use std::collections::HashMap;
use std::path::Path;

use crate::types::{PlugmatError, PlugmatResult};

/// Parsed `setup.cfg` contents, keyed by section and option name. Every
/// option value is a list: inline values contribute one entry, each indented
/// continuation line contributes another.
#[derive(Debug, Default)]
pub struct SetupCfg {
    sections: HashMap<String, HashMap<String, Vec<String>>>,
}

impl SetupCfg {
    /// Read and parse the `setup.cfg` inside the given plugin directory.
    pub fn read(plugin_dir: &Path) -> PlugmatResult<Self> {
        let path = plugin_dir.join("setup.cfg");
        let content = std::fs::read_to_string(&path).map_err(|e| PlugmatError::SetupCfg {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self::parse(&content))
    }

    /// Parse `setup.cfg` content.
    pub fn parse(content: &str) -> Self {
        let mut sections: HashMap<String, HashMap<String, Vec<String>>> = HashMap::new();
        let mut current_section = String::new();
        let mut current_key: Option<String> = None;

        for raw_line in content.lines() {
            let trimmed = raw_line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }

            if trimmed.starts_with('[') && trimmed.ends_with(']') {
                current_section = trimmed[1..trimmed.len() - 1].to_string();
                current_key = None;
                continue;
            }

            let indented = raw_line.starts_with(' ') || raw_line.starts_with('\t');
            if indented {
                // Continuation line of the previous option
                if let Some(key) = &current_key {
                    sections
                        .entry(current_section.clone())
                        .or_default()
                        .entry(key.clone())
                        .or_default()
                        .push(trimmed.to_string());
                }
                continue;
            }

            if let Some((key, value)) = trimmed.split_once('=') {
                let key = key.trim().to_string();
                let value = value.trim();
                let values = sections
                    .entry(current_section.clone())
                    .or_default()
                    .entry(key.clone())
                    .or_default();
                if !value.is_empty() {
                    values.push(value.to_string());
                }
                current_key = Some(key);
            }
        }

        Self { sections }
    }

    /// Values of an option, empty when the section or option is absent.
    pub fn values(&self, section: &str, option: &str) -> &[String] {
        self.sections
            .get(section)
            .and_then(|opts| opts.get(option))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Declared install requirements (`[options] install_requires`).
    pub fn install_requires(&self) -> &[String] {
        self.values("options", "install_requires")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_multiline_install_requires() {
        let cfg = SetupCfg::parse(
            "[metadata]\nname = indico-plugin-foo\n\n[options]\ninstall_requires =\n    indico>=3.2\n    indico-plugin-bar>=1.0\n",
        );
        assert_eq!(
            cfg.install_requires(),
            &["indico>=3.2".to_string(), "indico-plugin-bar>=1.0".to_string()]
        );
    }

    #[test]
    fn parses_inline_value() {
        let cfg = SetupCfg::parse("[options]\ninstall_requires = indico>=3.2\n");
        assert_eq!(cfg.install_requires(), &["indico>=3.2".to_string()]);
    }

    #[test]
    fn missing_option_yields_empty_slice() {
        let cfg = SetupCfg::parse("[metadata]\nname = indico-plugin-foo\n");
        assert!(cfg.install_requires().is_empty());
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let cfg = SetupCfg::parse(
            "# comment\n[options]\n; another\ninstall_requires =\n\n    indico>=3.2\n",
        );
        assert_eq!(cfg.install_requires(), &["indico>=3.2".to_string()]);
    }

    #[test]
    fn later_section_does_not_capture_continuations() {
        let cfg = SetupCfg::parse(
            "[options]\ninstall_requires =\n    indico>=3.2\n[options.extras_require]\ndev =\n    pytest\n",
        );
        assert_eq!(cfg.install_requires(), &["indico>=3.2".to_string()]);
        assert_eq!(
            cfg.values("options.extras_require", "dev"),
            &["pytest".to_string()]
        );
    }
}
