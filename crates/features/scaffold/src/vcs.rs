use crate::configs::ignore_list;
use crate::error::ScaffoldError;
use crate::project::ProjectConfig;
use crate::writer::write_file;
use mkts_domain::config::VcsConfig;
use mkts_domain::constants::VCS_IGNORE_FILE;
use mkts_kernel::process::{Invocation, ProcessRunner};
use tracing::{debug, info, instrument};

/// Writes the ignore file, then runs the VCS init command inside the project.
///
/// # Errors
/// Returns [`ScaffoldError::Io`] if the ignore file cannot be written and
/// [`ScaffoldError::VcsInit`] if the VCS tool fails.
#[instrument(skip_all, fields(program = %vcs.program))]
pub fn init_repository<R: ProcessRunner + ?Sized>(
    runner: &R,
    vcs: &VcsConfig,
    project: &ProjectConfig,
) -> Result<(), ScaffoldError> {
    write_file(&project.path(VCS_IGNORE_FILE), ignore_list(&vcs.ignore))?;

    let invocation = Invocation::new(&vcs.program, project.destination()).args(&vcs.init_args);
    runner.run(&invocation).map_err(|source| {
        debug!(%source, "Repository initialization failed");
        ScaffoldError::VcsInit { source }
    })?;

    info!(command = %invocation, "Initialized repository");
    Ok(())
}
