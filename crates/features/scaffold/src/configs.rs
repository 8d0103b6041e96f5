//! Static tooling configuration: formatter, compiler, README, and editor launch files.

use crate::error::ScaffoldError;
use crate::project::ProjectConfig;
use crate::writer::{create_dir, to_json, write_file};
use mkts_domain::constants::{
    IGNORED_PATHS, LAUNCH_FILE, PRETTIER_CONFIG_FILE, PRETTIER_IGNORE_FILE, README_FILE,
    TSCONFIG_FILE, VSCODE_DIR,
};
use mkts_domain::documents::{LaunchConfig, PrettierConfig, TsConfig};
use tracing::{info, instrument};

/// Writes `.prettierrc.js` (a CommonJS module exporting the options) and the
/// `.prettierignore` referenced by the `format` script.
///
/// # Errors
/// Returns [`ScaffoldError::Io`] if either file cannot be written.
#[instrument(skip_all)]
pub fn write_prettier_config(project: &ProjectConfig) -> Result<(), ScaffoldError> {
    let mut module = b"module.exports = ".to_vec();
    module.extend(to_json(&PrettierConfig::default())?);
    write_file(&project.path(PRETTIER_CONFIG_FILE), module)?;

    write_file(&project.path(PRETTIER_IGNORE_FILE), ignore_list(IGNORED_PATHS))?;
    info!("Wrote {PRETTIER_CONFIG_FILE} and {PRETTIER_IGNORE_FILE}");
    Ok(())
}

/// Writes `tsconfig.json`; its `rootDir` is the directory the source scaffolder populates.
///
/// # Errors
/// Returns [`ScaffoldError::Io`] if the file cannot be written.
#[instrument(skip_all)]
pub fn write_tsconfig(project: &ProjectConfig) -> Result<(), ScaffoldError> {
    write_file(&project.path(TSCONFIG_FILE), to_json(&TsConfig::default())?)?;
    info!("Wrote {TSCONFIG_FILE}");
    Ok(())
}

/// # Errors
/// Returns [`ScaffoldError::Io`] if the file cannot be written.
#[instrument(skip_all)]
pub fn write_readme(project: &ProjectConfig) -> Result<(), ScaffoldError> {
    write_file(&project.path(README_FILE), format!("# {}\n", project.name()))?;
    info!("Wrote {README_FILE}");
    Ok(())
}

/// Writes `.vscode/launch.json` that runs the compiled entry point after a `tsc` build.
///
/// # Errors
/// Returns [`ScaffoldError::Io`] if the directory or file cannot be created.
#[instrument(skip_all)]
pub fn write_launch_config(project: &ProjectConfig) -> Result<(), ScaffoldError> {
    let vscode_dir = project.path(VSCODE_DIR);
    create_dir(&vscode_dir)?;
    write_file(&vscode_dir.join(LAUNCH_FILE), to_json(&LaunchConfig::default())?)?;
    info!("Wrote {VSCODE_DIR}/{LAUNCH_FILE}");
    Ok(())
}

/// One entry per line, newline terminated.
pub(crate) fn ignore_list<S: AsRef<str>>(entries: &[S]) -> String {
    entries.iter().fold(String::new(), |mut out, entry| {
        out.push_str(entry.as_ref());
        out.push('\n');
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    fn project() -> (TempDir, ProjectConfig) {
        let tmp = tempdir().expect("tempdir");
        let project = ProjectConfig::init(tmp.path(), "demo").expect("init");
        (tmp, project)
    }

    #[test]
    fn prettier_config_is_a_commonjs_module() {
        let (_tmp, project) = project();
        write_prettier_config(&project).expect("prettier");

        let module = fs::read_to_string(project.path(PRETTIER_CONFIG_FILE)).expect("read");
        let json = module.strip_prefix("module.exports = ").expect("module prefix");
        let options: PrettierConfig = serde_json::from_str(json).expect("parse");
        assert_eq!(options, PrettierConfig::default());

        let ignore = fs::read_to_string(project.path(PRETTIER_IGNORE_FILE)).expect("read");
        assert_eq!(ignore, "node_modules\ndist\n");
    }

    #[test]
    fn readme_has_project_heading() {
        let (_tmp, project) = project();
        write_readme(&project).expect("readme");
        assert_eq!(fs::read_to_string(project.path(README_FILE)).expect("read"), "# demo\n");
    }

    #[test]
    fn launch_config_lands_in_vscode_dir() {
        let (_tmp, project) = project();
        write_launch_config(&project).expect("launch");

        let raw = fs::read_to_string(project.path(VSCODE_DIR).join(LAUNCH_FILE)).expect("read");
        let launch: LaunchConfig = serde_json::from_str(&raw).expect("parse");
        assert_eq!(launch.configurations.len(), 1);
        assert_eq!(launch.configurations[0].name, "Launch Program");
    }

    #[test]
    fn ignore_list_terminates_every_line() {
        assert_eq!(ignore_list::<&str>(&[]), "");
        assert_eq!(ignore_list(&["a", "b"]), "a\nb\n");
    }
}
