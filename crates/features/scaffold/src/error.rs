use mkts_kernel::process::ProcessError;
use std::borrow::Cow;
use std::io;
use std::path::PathBuf;

/// Errors raised while scaffolding a project.
///
/// Every variant aborts the remaining pipeline; files written before the failure stay on disk.
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    /// The project name is blank.
    #[error("Project name cannot be empty")]
    EmptyName,

    /// The project name is not a plain folder name.
    #[error("Invalid project name '{name}': expected a single folder name")]
    InvalidName { name: String },

    /// The destination directory is already taken.
    #[error("{} already exists", .path.display())]
    AlreadyExists { path: PathBuf },

    /// Filesystem failure while creating directories or writing files.
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: io::Error, context: Option<Cow<'static, str>> },

    /// A generated document could not be serialized.
    #[error("Serialization error{}: {source}", format_context(.context))]
    Serialize { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// The package manager failed to install a dependency.
    #[error("Error installing {name}")]
    Install { name: String, source: ProcessError },

    /// The version-control tool failed to initialize the repository.
    #[error("Error initializing version control")]
    VcsInit { source: ProcessError },
}

pub trait ScaffoldErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ScaffoldError>;
}

impl<T> ScaffoldErrorExt<T> for Result<T, ScaffoldError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                ScaffoldError::Io { context: c, .. } | ScaffoldError::Serialize { context: c, .. } => {
                    *c = Some(context.into());
                },
                _ => {},
            }
            e
        })
    }
}

impl<T> ScaffoldErrorExt<T> for Result<T, io::Error> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ScaffoldError> {
        self.map_err(|source| ScaffoldError::Io { source, context: Some(context.into()) })
    }
}

impl<T> ScaffoldErrorExt<T> for Result<T, serde_json::Error> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ScaffoldError> {
        self.map_err(|source| ScaffoldError::Serialize { source, context: Some(context.into()) })
    }
}

impl From<io::Error> for ScaffoldError {
    #[inline]
    fn from(source: io::Error) -> Self {
        Self::Io { source, context: None }
    }
}

impl From<serde_json::Error> for ScaffoldError {
    #[inline]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
