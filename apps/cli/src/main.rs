#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stderr, clippy::print_stdout)]

mod args;

use crate::args::Cli;
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use mkts_kernel::config::load_settings;
use mkts_kernel::process::SystemRunner;
use mkts_logger::{LevelFilter, Logger, level_from_verbosity};
use mkts_scaffold::{ProjectConfig, ScaffoldOptions, Scaffolder};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(name) = cli.project_name() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let _logger = init_logger(&cli)?;

    let settings = load_settings(cli.config.as_deref())?;
    let parent = std::env::current_dir().context("Failed to resolve the working directory")?;

    let options = ScaffoldOptions::builder()
        .name(name)
        .parent(parent)
        .git(cli.git)
        .challenge(cli.cc)
        .install(!cli.no_install)
        .build();

    let project = Scaffolder::new(&settings, &SystemRunner).run(&options)?;

    print_next_steps(&project, &options, &settings.package_manager.program);
    Ok(())
}

fn init_logger(cli: &Cli) -> Result<Logger> {
    let level = level_from_verbosity(LevelFilter::INFO, cli.verbose, cli.quiet);
    let mut builder = Logger::builder(env!("CARGO_BIN_NAME")).console(true).level(level);
    if let Some(dir) = &cli.log_dir {
        builder = builder.path(dir);
        if cli.log_json {
            builder = builder.json();
        }
        if let Some(rotation) = cli.log_rotation {
            builder = builder.rotation(rotation.into());
        }
        if let Some(max) = cli.log_max_files {
            builder = builder.max_files(max);
        }
    }
    if let Some(filter) = &cli.log_filter {
        builder = builder.env_filter(filter);
    }
    Ok(builder.init()?)
}

fn print_next_steps(project: &ProjectConfig, options: &ScaffoldOptions, package_manager: &str) {
    println!("✅ Created project '{}' in {}", project.name(), project.destination().display());
    println!();
    println!("Next steps:");
    println!("  cd {}", project.name());
    if !options.install {
        println!("  {package_manager} install");
    }
    println!("  {package_manager} run build");
    println!("  {package_manager} start");
}
