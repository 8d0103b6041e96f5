use crate::constants::IGNORED_PATHS;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Top-level scaffolder settings.
///
/// Every field falls back to its default, so an empty settings file (or none at all)
/// reproduces the stock `npm` + `git` behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub package_manager: PackageManagerConfig,
    /// Runtime dependencies, installed in declaration order.
    pub dependencies: Vec<String>,
    /// Development dependencies, installed after all runtime dependencies.
    pub dev_dependencies: Vec<String>,
    pub vcs: VcsConfig,
}

/// External package manager invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageManagerConfig {
    pub program: String,
    pub install_args: Vec<String>,
    pub save_flag: String,
    pub save_dev_flag: String,
}

/// External version-control tool invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VcsConfig {
    pub program: String,
    pub init_args: Vec<String>,
    /// Lines written to the ignore file.
    pub ignore: Vec<String>,
}

/// Whether a dependency is needed at runtime or only while developing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum DependencyKind {
    Runtime,
    Development,
}

impl DependencyKind {
    /// Installation order: every runtime dependency precedes every development one.
    pub const ORDER: [Self; 2] = [Self::Runtime, Self::Development];

    /// Package manager flag recording the dependency under the matching manifest section.
    #[must_use]
    pub fn save_flag(self, package_manager: &PackageManagerConfig) -> &str {
        match self {
            Self::Runtime => &package_manager.save_flag,
            Self::Development => &package_manager.save_dev_flag,
        }
    }
}

impl Settings {
    /// Dependencies of the given kind, in installation order.
    #[must_use]
    pub fn dependencies_of(&self, kind: DependencyKind) -> &[String] {
        match kind {
            DependencyKind::Runtime => &self.dependencies,
            DependencyKind::Development => &self.dev_dependencies,
        }
    }
}

// --- Default ---

impl Default for Settings {
    fn default() -> Self {
        Self {
            package_manager: PackageManagerConfig::default(),
            dependencies: vec!["typescript".to_owned()],
            dev_dependencies: vec!["prettier".to_owned(), "@types/node".to_owned()],
            vcs: VcsConfig::default(),
        }
    }
}

impl Default for PackageManagerConfig {
    fn default() -> Self {
        // npm ships as a batch script on Windows
        let program = if cfg!(windows) { "npm.cmd" } else { "npm" };
        Self {
            program: program.to_owned(),
            install_args: vec!["install".to_owned()],
            save_flag: "--save".to_owned(),
            save_dev_flag: "--save-dev".to_owned(),
        }
    }
}

impl Default for VcsConfig {
    fn default() -> Self {
        Self {
            program: "git".to_owned(),
            init_args: vec!["init".to_owned()],
            ignore: IGNORED_PATHS.iter().map(|&path| path.to_owned()).collect(),
        }
    }
}
