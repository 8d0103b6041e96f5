//! # Scaffold
//!
//! Lays out a new TypeScript project: directory, `package.json`, dependencies installed
//! through the configured package manager, an entry file, formatter/compiler/editor
//! configuration, and optionally a version-control repository and a coding challenge
//! template.
//!
//! The steps are plain functions over a [`ProjectConfig`]; [`Scaffolder`] runs them in
//! order and stops at the first failure. External tools are reached only through
//! [`mkts_kernel::process::ProcessRunner`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use mkts_domain::config::Settings;
//! use mkts_kernel::process::SystemRunner;
//! use mkts_scaffold::{ScaffoldOptions, Scaffolder};
//!
//! let settings = Settings::default();
//! let options = ScaffoldOptions::builder().name("demo").parent(".").git(true).build();
//! let project = Scaffolder::new(&settings, &SystemRunner).run(&options)?;
//! println!("created {}", project.destination().display());
//! # Ok::<(), mkts_scaffold::ScaffoldError>(())
//! ```

pub mod challenge;
pub mod configs;
mod error;
pub mod installer;
pub mod manifest;
mod options;
mod pipeline;
mod project;
pub mod source;
pub mod vcs;
mod writer;

pub use crate::error::{ScaffoldError, ScaffoldErrorExt};
pub use crate::options::ScaffoldOptions;
pub use crate::pipeline::Scaffolder;
pub use crate::project::ProjectConfig;
