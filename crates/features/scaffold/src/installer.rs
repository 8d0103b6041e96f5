use crate::error::ScaffoldError;
use mkts_domain::config::{DependencyKind, PackageManagerConfig, Settings};
use mkts_kernel::process::{Invocation, ProcessRunner};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Builds `<program> <install_args..> <save flag> <name>` to run inside `destination`.
#[must_use]
pub fn install_invocation(
    package_manager: &PackageManagerConfig,
    destination: &Path,
    name: &str,
    kind: DependencyKind,
) -> Invocation {
    Invocation::new(&package_manager.program, destination)
        .args(&package_manager.install_args)
        .arg(kind.save_flag(package_manager))
        .arg(name)
}

/// Installs a single dependency and waits for the package manager to exit.
///
/// # Errors
/// Returns [`ScaffoldError::Install`] naming the dependency if the package manager
/// cannot be started or exits unsuccessfully.
#[instrument(skip(runner, package_manager, destination))]
pub fn install_dependency<R: ProcessRunner + ?Sized>(
    runner: &R,
    package_manager: &PackageManagerConfig,
    destination: &Path,
    name: &str,
    kind: DependencyKind,
) -> Result<(), ScaffoldError> {
    let invocation = install_invocation(package_manager, destination, name, kind);
    info!(command = %invocation, "Installing {name}");

    runner.run(&invocation).map_err(|source| {
        debug!(dependency = name, %source, "Install failed");
        ScaffoldError::Install { name: name.to_owned(), source }
    })
}

/// Installs every runtime dependency, then every development dependency.
///
/// Installs run strictly one after another: concurrent package manager runs in the
/// same directory race on the lock file.
///
/// # Errors
/// Stops at the first failing install and returns its [`ScaffoldError::Install`].
pub fn install_all<R: ProcessRunner + ?Sized>(
    runner: &R,
    settings: &Settings,
    destination: &Path,
) -> Result<(), ScaffoldError> {
    for kind in DependencyKind::ORDER {
        for name in settings.dependencies_of(kind) {
            install_dependency(runner, &settings.package_manager, destination, name, kind)?;
        }
    }
    Ok(())
}
