use crate::error::ScaffoldError;
use crate::project::ProjectConfig;
use crate::writer::{create_dir, write_file};
use mkts_domain::constants::{ENTRY_FILE, SOURCE_DIR};
use std::path::Path;
use tracing::{info, instrument};

/// Default contents of the entry file.
pub const HELLO_WORLD: &str = "console.log('hello world')\n";

/// Creates the source directory with a hello-world entry file.
///
/// # Errors
/// Returns [`ScaffoldError::Io`] if the directory or file cannot be created.
#[instrument(skip_all)]
pub fn write_source(project: &ProjectConfig) -> Result<(), ScaffoldError> {
    let source_dir = project.path(SOURCE_DIR);
    create_dir(&source_dir)?;
    write_file(&source_dir.join(ENTRY_FILE), HELLO_WORLD)?;
    info!("Wrote {}", Path::new(SOURCE_DIR).join(ENTRY_FILE).display());
    Ok(())
}
