use mkts_domain::constants::SOURCE_DIR;
use mkts_domain::documents::{LaunchConfig, PackageManifest, PrettierConfig, TsConfig};
use serde_json::Value;

#[test]
fn manifest_carries_name_and_scripts() {
    let manifest = serde_json::to_value(PackageManifest::new("demo")).expect("serialize");
    assert_eq!(manifest["name"], "demo");
    assert_eq!(manifest["version"], "0.1.0");
    assert_eq!(manifest["main"], "./dist/index.js");
    assert_eq!(manifest["scripts"]["watch"], "tsc --watch");
    assert_eq!(manifest["scripts"]["build"], "tsc");
    assert_eq!(manifest["scripts"]["start"], "node ./dist/index.js");
    assert_eq!(
        manifest["scripts"]["format"],
        "prettier --config .prettierrc.js --ignore-path .prettierignore --write ./src/**/*.{ts,tsx,js,jsx,json}"
    );
}

#[test]
fn manifest_fields_keep_declaration_order() {
    let text = serde_json::to_string(&PackageManifest::new("demo")).expect("serialize");
    let name = text.find("\"name\"").expect("name");
    let version = text.find("\"version\"").expect("version");
    let scripts = text.find("\"scripts\"").expect("scripts");
    assert!(name < version && version < scripts);
}

#[test]
fn tsconfig_points_at_source_dir() {
    let tsconfig = serde_json::to_value(TsConfig::default()).expect("serialize");
    assert_eq!(tsconfig["compilerOptions"]["rootDir"], SOURCE_DIR);
    assert_eq!(tsconfig["compilerOptions"]["outDir"], "dist");
    assert_eq!(tsconfig["compilerOptions"]["moduleResolution"], "node");
    assert_eq!(tsconfig["include"], serde_json::json!(["./src"]));
    assert_eq!(tsconfig["compileOnSave"], Value::Bool(true));
}

#[test]
fn prettier_uses_camel_case_keys() {
    let prettier = serde_json::to_value(PrettierConfig::default()).expect("serialize");
    assert_eq!(prettier["printWidth"], 120);
    assert_eq!(prettier["useTabs"], true);
    assert_eq!(prettier["trailingComma"], "all");
    assert_eq!(prettier["jsxBracketSameLine"], false);
}

#[test]
fn launch_config_targets_compiled_entry() {
    let launch = serde_json::to_value(LaunchConfig::default()).expect("serialize");
    let program = &launch["configurations"][0];
    assert_eq!(launch["version"], "0.2.0");
    assert_eq!(program["type"], "node");
    assert_eq!(program["program"], "${workspaceFolder}/dist/index.js");
    assert_eq!(program["preLaunchTask"], "tsc: build - tsconfig.json");
    assert_eq!(program["skipFiles"], serde_json::json!(["<node_internals>/**"]));
}
