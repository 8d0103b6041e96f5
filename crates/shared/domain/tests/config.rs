use mkts_domain::config::{DependencyKind, Settings, VcsConfig};
use serde_json::json;

#[test]
fn settings_defaults_are_sane() {
    let settings = Settings::default();
    assert_eq!(settings.dependencies, ["typescript"]);
    assert_eq!(settings.dev_dependencies, ["prettier", "@types/node"]);
    assert_eq!(settings.package_manager.install_args, ["install"]);
    assert_eq!(settings.vcs.program, "git");
    assert_eq!(settings.vcs.init_args, ["init"]);
    assert_eq!(VcsConfig::default().ignore, ["node_modules", "dist"]);
}

#[test]
fn dependency_kind_selects_flag_and_list() {
    let settings = Settings::default();
    assert_eq!(DependencyKind::Runtime.save_flag(&settings.package_manager), "--save");
    assert_eq!(DependencyKind::Development.save_flag(&settings.package_manager), "--save-dev");
    assert_eq!(settings.dependencies_of(DependencyKind::Development), ["prettier", "@types/node"]);
    assert_eq!(DependencyKind::ORDER, [DependencyKind::Runtime, DependencyKind::Development]);
    assert_eq!(DependencyKind::Development.to_string(), "development");
}

#[test]
fn partial_settings_keep_defaults() {
    let raw = json!({
        "package_manager": { "program": "pnpm", "install_args": ["add"] },
        "dev_dependencies": []
    });

    let settings: Settings = serde_json::from_value(raw).expect("settings deserialize");
    assert_eq!(settings.package_manager.program, "pnpm");
    assert_eq!(settings.package_manager.install_args, ["add"]);
    assert_eq!(settings.package_manager.save_dev_flag, "--save-dev");
    assert!(settings.dev_dependencies.is_empty());
    assert_eq!(settings.dependencies, ["typescript"]);
    assert_eq!(settings.vcs, VcsConfig::default());
}

#[test]
fn settings_deserialize_from_toml() {
    let raw = r#"
        dependencies = ["typescript", "zod"]

        [vcs]
        program = "jj"
        init_args = ["git", "init"]
    "#;

    let settings: Settings = toml::from_str(raw).expect("toml settings");
    assert_eq!(settings.dependencies, ["typescript", "zod"]);
    assert_eq!(settings.vcs.program, "jj");
    assert_eq!(settings.vcs.init_args, ["git", "init"]);
    assert_eq!(settings.vcs.ignore, ["node_modules", "dist"]);
}
