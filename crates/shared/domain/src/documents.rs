//! Serde models of the configuration documents written into a new project.
//!
//! Field order matters: serializers emit fields in declaration order, which is the
//! order users see in the generated files.

use crate::constants::{COMPILED_ENTRY, MANIFEST_VERSION, OUTPUT_DIR, SOURCE_DIR};
use serde::{Deserialize, Serialize};

/// `package.json` of the generated project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub main: String,
    pub scripts: Scripts,
}

impl PackageManifest {
    /// Manifest for a fresh project; the package manager appends dependency sections later.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: MANIFEST_VERSION.to_owned(),
            main: COMPILED_ENTRY.to_owned(),
            scripts: Scripts::default(),
        }
    }
}

/// Named `npm run` scripts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scripts {
    pub watch: String,
    pub build: String,
    pub start: String,
    pub format: String,
}

impl Default for Scripts {
    fn default() -> Self {
        Self {
            watch: "tsc --watch".to_owned(),
            build: "tsc".to_owned(),
            start: format!("node {COMPILED_ENTRY}"),
            format: format!(
                "prettier --config .prettierrc.js --ignore-path .prettierignore --write ./{SOURCE_DIR}/**/*.{{ts,tsx,js,jsx,json}}"
            ),
        }
    }
}

/// `tsconfig.json` of the generated project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsConfig {
    pub compiler_options: CompilerOptions,
    pub include: Vec<String>,
    pub compile_on_save: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    pub lib: Vec<String>,
    pub target: String,
    pub module: String,
    pub module_resolution: String,
    pub strict: bool,
    pub root_dir: String,
    pub out_dir: String,
    pub declaration: bool,
    pub source_map: bool,
}

impl Default for TsConfig {
    fn default() -> Self {
        Self {
            compiler_options: CompilerOptions::default(),
            include: vec![format!("./{SOURCE_DIR}")],
            compile_on_save: true,
        }
    }
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            lib: vec!["esnext".to_owned()],
            target: "esnext".to_owned(),
            module: "CommonJS".to_owned(),
            module_resolution: "node".to_owned(),
            strict: true,
            root_dir: SOURCE_DIR.to_owned(),
            out_dir: OUTPUT_DIR.to_owned(),
            declaration: true,
            source_map: true,
        }
    }
}

/// Prettier options, exported from `.prettierrc.js`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct PrettierConfig {
    pub print_width: u16,
    pub use_tabs: bool,
    pub tab_width: u8,
    pub semi: bool,
    pub single_quote: bool,
    pub trailing_comma: String,
    pub bracket_spacing: bool,
    pub jsx_bracket_same_line: bool,
    pub arrow_parens: String,
}

impl Default for PrettierConfig {
    fn default() -> Self {
        Self {
            print_width: 120,
            use_tabs: true,
            tab_width: 4,
            semi: false,
            single_quote: false,
            trailing_comma: "all".to_owned(),
            bracket_spacing: true,
            jsx_bracket_same_line: false,
            arrow_parens: "always".to_owned(),
        }
    }
}

/// `.vscode/launch.json` debugging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchConfig {
    pub version: String,
    pub configurations: Vec<LaunchConfiguration>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchConfiguration {
    #[serde(rename = "type")]
    pub kind: String,
    pub request: String,
    pub name: String,
    pub skip_files: Vec<String>,
    pub program: String,
    pub pre_launch_task: String,
    pub out_files: Vec<String>,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self { version: "0.2.0".to_owned(), configurations: vec![LaunchConfiguration::default()] }
    }
}

impl Default for LaunchConfiguration {
    fn default() -> Self {
        Self {
            kind: "node".to_owned(),
            request: "launch".to_owned(),
            name: "Launch Program".to_owned(),
            skip_files: vec!["<node_internals>/**".to_owned()],
            program: format!("${{workspaceFolder}}/{OUTPUT_DIR}/index.js"),
            pre_launch_task: "tsc: build - tsconfig.json".to_owned(),
            out_files: vec![format!("${{workspaceFolder}}/{OUTPUT_DIR}/**/*.js")],
        }
    }
}
