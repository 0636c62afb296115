//! Plugmat Core Library
//!
//! This is the core library for plugmat, a CI build-matrix generator for
//! Indico plugin repositories. It discovers plugin sub-projects, inspects
//! their packaging metadata, and produces the matrix consumed by the CI
//! pipeline.
//!
//! ## Architecture
//!
//! The core library is organized into several modules:
//!
//! - [`generator`] - High-level matrix generation interface
//! - [`inspect`] - Per-plugin directory inspection
//! - [`manifest`] - `MANIFEST.in` completeness checking
//! - [`setup_cfg`] - Minimal `setup.cfg` reader
//! - [`changes`] - Changed-files lookup for pull-request runs
//! - [`records`] - The serializable matrix record type
//! - [`annotations`] - GitHub Actions workflow commands
//! - [`types`] - Common error types and type aliases
//!
//! ## Usage
//!
//! The primary entry point is the [`MatrixGenerator`]:
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
//!     output_path: None,
//! });
//! let records = generator.discover()?;
//! # Ok(())
//! # }
//! ```

pub mod annotations;
pub mod changes;
pub mod generator;
pub mod inspect;
pub mod manifest;
pub mod records;
pub mod setup_cfg;
pub mod types;

// Re-export the main types for easier usage
pub use generator::{GeneratorConfig, MatrixGenerator, TriggerEvent};
pub use records::PluginRecord;
pub use types::{PlugmatError, PlugmatResult};
