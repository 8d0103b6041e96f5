//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it hosts settings loading and the process runner seam
//! through which every external tool (package manager, VCS) is invoked.
//!
//! ## Settings loading
//! ```rust,no_run
//! use mkts_kernel::config::load_settings;
//!
//! let settings = load_settings(None).expect("defaults always load");
//! assert!(!settings.vcs.program.is_empty());
//! ```
//!
//! ## Running external tools
//! ```rust,no_run
//! use mkts_kernel::process::{Invocation, ProcessRunner, SystemRunner};
//!
//! let init = Invocation::new("git", "/tmp/demo").arg("init");
//! SystemRunner.run(&init).expect("git init");
//! ```
pub mod config;
pub mod process;
