use crate::challenge::write_challenge;
use crate::configs::{write_launch_config, write_prettier_config, write_readme, write_tsconfig};
use crate::error::ScaffoldError;
use crate::installer::install_all;
use crate::manifest::write_manifest;
use crate::options::ScaffoldOptions;
use crate::project::ProjectConfig;
use crate::source::write_source;
use crate::vcs::init_repository;
use mkts_domain::config::Settings;
use mkts_kernel::process::ProcessRunner;
use tracing::{info, instrument};

/// Runs the scaffolding steps in order against one settings set and process runner.
#[derive(Debug)]
pub struct Scaffolder<'a, R: ?Sized> {
    settings: &'a Settings,
    runner: &'a R,
}

impl<'a, R: ProcessRunner + ?Sized> Scaffolder<'a, R> {
    pub const fn new(settings: &'a Settings, runner: &'a R) -> Self {
        Self { settings, runner }
    }

    /// Scaffolds the project described by `options`.
    ///
    /// # Process
    /// 1. Create the project directory (refuses an existing one).
    /// 2. Write `package.json`.
    /// 3. Install runtime then development dependencies, one at a time (unless disabled).
    /// 4. Write `src/index.ts`.
    /// 5. Write formatter, compiler, README, and editor launch configuration.
    /// 6. Initialize version control when `options.git` is set.
    /// 7. Lay out the coding challenge when `options.challenge` is set.
    ///
    /// # Errors
    /// Returns the first step's [`ScaffoldError`]; later steps do not run and files
    /// already written are left in place.
    #[instrument(skip_all, fields(name = %options.name, git = options.git, challenge = options.challenge))]
    pub fn run(&self, options: &ScaffoldOptions) -> Result<ProjectConfig, ScaffoldError> {
        let project = ProjectConfig::init(&options.parent, &options.name)?;

        write_manifest(&project)?;

        if options.install {
            install_all(self.runner, self.settings, project.destination())?;
        } else {
            info!("Skipping dependency installation");
        }

        write_source(&project)?;
        write_prettier_config(&project)?;
        write_tsconfig(&project)?;
        write_readme(&project)?;
        write_launch_config(&project)?;

        if options.git {
            init_repository(self.runner, &self.settings.vcs, &project)?;
        }

        if options.challenge {
            write_challenge(&project)?;
        }

        info!(path = %project.destination().display(), "Project scaffolded");
        Ok(project)
    }
}
