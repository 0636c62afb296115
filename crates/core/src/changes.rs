//! Changed-files lookup for pull-request runs
//!
//! Queries the GitHub API through the `gh` CLI (which is preinstalled and
//! authenticated on Actions runners) and reduces the changed paths to the
//! set of touched top-level directories.

use std::collections::BTreeSet;
use std::process::Command;

use serde::Deserialize;

use crate::types::{PlugmatError, PlugmatResult};

/// One entry of the pull-request files listing.
#[derive(Debug, Deserialize)]
pub struct ChangedFile {
    pub filename: String,
}

/// Top-level directories touched by the given pull request. Any failure to
/// run `gh` or parse its output is fatal; there are no retries.
pub fn changed_dirs(repository: &str, pr_number: &str) -> PlugmatResult<BTreeSet<String>> {
    let output = Command::new("gh")
        .args(["api", &format!("repos/{repository}/pulls/{pr_number}/files")])
        .output()
        .map_err(|_| PlugmatError::ChangedFiles)?;

    if !output.status.success() {
        return Err(PlugmatError::ChangedFiles);
    }

    let files: Vec<ChangedFile> =
        serde_json::from_slice(&output.stdout).map_err(|_| PlugmatError::ChangedFiles)?;
    Ok(top_level_dirs(&files))
}

/// Extract the first path segment of every changed file that lives inside a
/// directory. Top-level files have no directory and are skipped.
pub fn top_level_dirs(files: &[ChangedFile]) -> BTreeSet<String> {
    files
        .iter()
        .filter_map(|file| {
            file.filename
                .contains('/')
                .then(|| file.filename.split('/').next().unwrap_or_default().to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(names: &[&str]) -> Vec<ChangedFile> {
        names
            .iter()
            .map(|n| ChangedFile {
                filename: n.to_string(),
            })
            .collect()
    }

    #[test]
    fn extracts_top_level_directories() {
        let dirs = top_level_dirs(&files(&["a/foo.py", "b/sub/bar.py", "a/other.py"]));
        assert_eq!(
            dirs,
            BTreeSet::from(["a".to_string(), "b".to_string()]),
            "each touched directory should appear once"
        );
    }

    #[test]
    fn top_level_files_are_skipped() {
        let dirs = top_level_dirs(&files(&["README.md", "a/foo.py"]));
        assert_eq!(dirs, BTreeSet::from(["a".to_string()]));
    }

    #[test]
    fn empty_listing_yields_empty_set() {
        assert!(top_level_dirs(&[]).is_empty());
    }

    #[test]
    fn response_shape_deserializes() {
        let parsed: Vec<ChangedFile> =
            serde_json::from_str(r#"[{"filename": "a/foo.py", "status": "modified"}]"#)
                .expect("extra fields should be ignored");
        assert_eq!(parsed[0].filename, "a/foo.py");
    }
}
