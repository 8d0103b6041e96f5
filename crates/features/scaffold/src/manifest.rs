use crate::error::ScaffoldError;
use crate::project::ProjectConfig;
use crate::writer::{to_json, write_file};
use mkts_domain::constants::MANIFEST_FILE;
use mkts_domain::documents::PackageManifest;
use tracing::{info, instrument};

/// Writes `package.json` with the project name, entry point, and scripts.
///
/// Dependency sections are left to the package manager, which records them on install.
///
/// # Errors
/// Returns [`ScaffoldError::Io`] if the file cannot be written.
#[instrument(skip_all, fields(name = project.name()))]
pub fn write_manifest(project: &ProjectConfig) -> Result<(), ScaffoldError> {
    let manifest = PackageManifest::new(project.name());
    write_file(&project.path(MANIFEST_FILE), to_json(&manifest)?)?;
    info!("Wrote {MANIFEST_FILE}");
    Ok(())
}
