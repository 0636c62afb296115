//! High-level matrix generation interface
//!
//! This module provides the [`MatrixGenerator`] which serves as the primary
//! entry point for a run. It encapsulates repository-mode detection
//! (single-plugin vs multi-plugin layout), plugin discovery, pull-request
//! change filtering, and emission of the matrix output line.
//!
//! ## Example
//!
//! ```rust,no_run
//! use plugmat_core::generator::{GeneratorConfig, MatrixGenerator, TriggerEvent};
//! use std::path::PathBuf;
//!
//! # fn example() -> plugmat_core::types::PlugmatResult<()> {
//! let generator = MatrixGenerator::new(GeneratorConfig {
//!     repo_root: PathBuf::from("."),
//!     event: TriggerEvent::Push,
//!     repository: None,
//!     pr_number: None,
//!     output_path: Some(PathBuf::from("/tmp/output")),
//! });
//!
//! let records = generator.generate()?;
//! generator.write_matrix(&records)?;
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::annotations;
use crate::changes;
use crate::inspect;
use crate::manifest;
use crate::records::{matrix_string, PluginRecord};
use crate::types::{PlugmatError, PlugmatResult};

/// The CI event that triggered the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    PullRequest,
    WorkflowDispatch,
    /// `push` and anything else: the full plugin list goes into the matrix
    Push,
}

impl TriggerEvent {
    pub fn from_event_name(name: &str) -> Self {
        match name {
            "pull_request" => Self::PullRequest,
            "workflow_dispatch" => Self::WorkflowDispatch,
            _ => Self::Push,
        }
    }
}

/// Explicit configuration for a generator run; the core never reads the
/// process environment itself.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Root of the repository being scanned
    pub repo_root: PathBuf,
    /// Event that triggered the run
    pub event: TriggerEvent,
    /// `owner/name` repository identifier, required for pull-request runs
    pub repository: Option<String>,
    /// Pull-request number, required for pull-request runs
    pub pr_number: Option<String>,
    /// File the `matrix=` line is appended to
    pub output_path: Option<PathBuf>,
}

/// High-level generator that encapsulates the whole matrix pipeline
pub struct MatrixGenerator {
    config: GeneratorConfig,
}

impl MatrixGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Discover every plugin in the repository, without event handling or
    /// change filtering. Records are sorted by plugin name.
    pub fn discover(&self) -> PlugmatResult<Vec<PluginRecord>> {
        if self.is_single_plugin_repo() {
            return Ok(vec![self.plugin_record(&self.config.repo_root, true)?]);
        }

        let mut records = Vec::new();
        for entry in std::fs::read_dir(&self.config.repo_root)?.flatten() {
            let path = entry.path();
            if path.is_dir() && path.join("setup.cfg").is_file() {
                records.push(self.plugin_record(&path, false)?);
            }
        }
        records.sort_by(|a, b| a.plugin.cmp(&b.plugin));
        Ok(records)
    }

    /// Run the full pipeline: discovery, mode notices, and pull-request
    /// change filtering. Returns the final record list for the matrix.
    pub fn generate(&self) -> PlugmatResult<Vec<PluginRecord>> {
        let single = self.is_single_plugin_repo();
        let mut records = self.discover()?;

        if !single {
            match self.config.event {
                TriggerEvent::PullRequest => {
                    annotations::notice_titled(
                        "PR mode",
                        "Adding plugins touched in this PR to matrix",
                    );
                    let changed = changes::changed_dirs(
                        self.require("GITHUB_REPOSITORY", &self.config.repository)?,
                        self.require("PR_NUMBER", &self.config.pr_number)?,
                    )?;
                    records = filter_changed(records, &changed);
                }
                TriggerEvent::WorkflowDispatch => {
                    annotations::notice_titled("Manual mode", "Adding all plugins to matrix");
                }
                TriggerEvent::Push => {
                    annotations::notice_titled("Push mode", "Adding all plugins to matrix");
                }
            }
        }

        if records.is_empty() {
            annotations::notice("Empty matrix, no plugins found");
        } else {
            let names: Vec<&str> = records.iter().map(|r| r.plugin.as_str()).collect();
            annotations::notice_titled("Plugins added to matrix", names.join(", "));
        }

        Ok(records)
    }

    /// Append the `matrix=<json>` line to the output file.
    pub fn write_matrix(&self, records: &[PluginRecord]) -> PlugmatResult<()> {
        let path = self
            .config
            .output_path
            .as_ref()
            .ok_or_else(|| PlugmatError::Config("GITHUB_OUTPUT".to_string()))?;

        let mut file = std::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|_| PlugmatError::Output(path.clone()))?;
        writeln!(file, "matrix={}", matrix_string(records))
            .map_err(|_| PlugmatError::Output(path.clone()))?;
        Ok(())
    }

    fn is_single_plugin_repo(&self) -> bool {
        self.config.repo_root.join("setup.cfg").is_file()
    }

    /// Build the matrix record for one plugin directory.
    fn plugin_record(&self, plugin_dir: &Path, single: bool) -> PlugmatResult<PluginRecord> {
        let (name, meta) = if single {
            let pkg_dir = inspect::package_dir(plugin_dir)?
                .ok_or_else(|| PlugmatError::NoPackageDir(plugin_dir.to_path_buf()))?;
            (pkg_name(&pkg_dir), false)
        } else {
            let name = dir_name(plugin_dir);
            let meta = name == "_meta";
            (name, meta)
        };

        // The _meta plugin only aggregates the others; its contents are
        // never inspected.
        if meta {
            return Ok(PluginRecord {
                plugin: name.clone(),
                path: name,
                install: false,
                assets: false,
                i18n: false,
                deps: Vec::new(),
                invalid_manifest: false,
                single: false,
            });
        }

        let invalid_manifest = match inspect::package_dir(plugin_dir)? {
            Some(pkg_dir) => manifest::has_invalid_manifest(plugin_dir, &pkg_dir)?,
            None => false,
        };

        Ok(PluginRecord {
            plugin: name.clone(),
            path: if single { String::new() } else { name },
            install: true,
            assets: inspect::has_assets(plugin_dir),
            i18n: inspect::has_i18n(plugin_dir)?,
            deps: inspect::plugin_deps(plugin_dir)?,
            invalid_manifest,
            single,
        })
    }

    fn require<'a>(&self, name: &str, value: &'a Option<String>) -> PlugmatResult<&'a str> {
        value
            .as_deref()
            .ok_or_else(|| PlugmatError::Config(name.to_string()))
    }
}

/// Keep only the plugins whose directory was touched by the pull request.
pub fn filter_changed(
    records: Vec<PluginRecord>,
    changed_dirs: &BTreeSet<String>,
) -> Vec<PluginRecord> {
    records
        .into_iter()
        .filter(|record| changed_dirs.contains(&record.plugin))
        .collect()
}

fn pkg_name(pkg_dir: &Path) -> String {
    let name = dir_name(pkg_dir);
    name.strip_prefix("indico_").unwrap_or(&name).to_string()
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}
