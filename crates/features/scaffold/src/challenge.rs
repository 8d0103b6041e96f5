use crate::error::ScaffoldError;
use crate::project::ProjectConfig;
use crate::writer::{create_dir, write_file};
use mkts_domain::constants::{ENTRY_FILE, INPUT_FILE, SOURCE_DIR, TESTCASES_DIR};
use tracing::{info, instrument};

/// Entry file of a coding challenge: reads the test input next to the compiled output.
pub const CHALLENGE_TEMPLATE: &str = "import * as fs from 'fs'
import * as path from 'path'

const input = fs.readFileSync(path.join(__dirname, '..', 'testcases', 'input.txt')).toString()
";

/// Replaces the entry file with the challenge template and adds an empty test input.
///
/// Expects the source directory to exist already.
///
/// # Errors
/// Returns [`ScaffoldError::Io`] if a file or directory cannot be written.
#[instrument(skip_all)]
pub fn write_challenge(project: &ProjectConfig) -> Result<(), ScaffoldError> {
    write_file(&project.path(SOURCE_DIR).join(ENTRY_FILE), CHALLENGE_TEMPLATE)?;

    let testcases = project.path(TESTCASES_DIR);
    create_dir(&testcases)?;
    write_file(&testcases.join(INPUT_FILE), "")?;

    info!("Initialized coding challenge template");
    Ok(())
}
