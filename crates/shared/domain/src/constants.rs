//! File layout of a scaffolded project.

/// Directory holding the TypeScript sources; the compiler `rootDir`.
pub const SOURCE_DIR: &str = "src";
/// Directory the compiler emits into.
pub const OUTPUT_DIR: &str = "dist";
/// Entry file inside [`SOURCE_DIR`].
pub const ENTRY_FILE: &str = "index.ts";
/// Compiled entry point, relative to the project root.
pub const COMPILED_ENTRY: &str = "./dist/index.js";

pub const MANIFEST_FILE: &str = "package.json";
pub const MANIFEST_VERSION: &str = "0.1.0";
pub const TSCONFIG_FILE: &str = "tsconfig.json";
pub const PRETTIER_CONFIG_FILE: &str = ".prettierrc.js";
pub const PRETTIER_IGNORE_FILE: &str = ".prettierignore";
pub const README_FILE: &str = "README.md";
pub const VSCODE_DIR: &str = ".vscode";
pub const LAUNCH_FILE: &str = "launch.json";
pub const VCS_IGNORE_FILE: &str = ".gitignore";

/// Coding challenge input layout.
pub const TESTCASES_DIR: &str = "testcases";
pub const INPUT_FILE: &str = "input.txt";

/// Directories that never belong in version control or formatting runs.
pub const IGNORED_PATHS: &[&str] = &["node_modules", OUTPUT_DIR];
