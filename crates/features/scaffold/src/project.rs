use crate::error::{ScaffoldError, ScaffoldErrorExt};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, instrument};

/// The name/destination pair threaded through every scaffolding step.
///
/// Only [`ProjectConfig::init`] constructs it, so holding one means the destination
/// directory was created by this run and did not exist before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    name: String,
    destination: PathBuf,
}

impl ProjectConfig {
    /// Creates `parent/name` and returns the configuration for it.
    ///
    /// Relative parents are resolved against the current working directory, so the
    /// stored destination is always absolute.
    ///
    /// # Errors
    /// * [`ScaffoldError::EmptyName`] if `name` is blank.
    /// * [`ScaffoldError::InvalidName`] if `name` is not a single folder name (absolute
    ///   paths, `..`, nested paths), so the project always lands directly under `parent`.
    /// * [`ScaffoldError::AlreadyExists`] if the destination exists; nothing is touched.
    /// * [`ScaffoldError::Io`] if the path cannot be resolved or the directory cannot be
    ///   created (e.g., the parent is missing).
    #[instrument(skip(parent), fields(parent = %parent.display()))]
    pub fn init(parent: &Path, name: &str) -> Result<Self, ScaffoldError> {
        if name.trim().is_empty() {
            return Err(ScaffoldError::EmptyName);
        }

        let folder = folder_name(name)?;
        let destination =
            std::path::absolute(parent.join(&folder)).context("Resolving project directory")?;

        if destination.try_exists().context("Checking project directory")? {
            debug!(path = %destination.display(), "Project directory already exists");
            return Err(ScaffoldError::AlreadyExists { path: destination });
        }

        match fs::create_dir(&destination) {
            Ok(()) => {},
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(ScaffoldError::AlreadyExists { path: destination });
            },
            Err(e) => {
                return Err(ScaffoldError::Io {
                    source: e,
                    context: Some(format!("Creating {}", destination.display()).into()),
                });
            },
        }

        info!(path = %destination.display(), "Created project directory");
        Ok(Self { name: folder, destination })
    }

    /// Package and folder name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute path of the project directory.
    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Joins `relative` onto the project directory.
    #[must_use]
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.destination.join(relative)
    }
}

fn folder_name(name: &str) -> Result<String, ScaffoldError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(folder)), None) => Ok(folder.to_string_lossy().into_owned()),
        _ => Err(ScaffoldError::InvalidName { name: name.to_owned() }),
    }
}
