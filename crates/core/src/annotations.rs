//! GitHub Actions workflow commands
//!
//! Annotation lines printed to stdout are picked up by the Actions runner
//! and surfaced in the job log and PR checks.

use std::fmt::Display;

/// Emit an error annotation (`::error::...`).
pub fn error(message: impl Display) {
    println!("::error::{message}");
}

/// Emit a notice annotation (`::notice::...`).
pub fn notice(message: impl Display) {
    println!("::notice::{message}");
}

/// Emit a notice annotation with a title (`::notice title=...::...`).
pub fn notice_titled(title: &str, message: impl Display) {
    println!("::notice title={title}::{message}");
}
