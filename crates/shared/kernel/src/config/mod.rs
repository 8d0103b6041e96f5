use config::{Config, Environment, File};
use mkts_domain::config::Settings;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

/// Prefix of environment overrides, e.g. `MKTS__PACKAGE_MANAGER__PROGRAM=pnpm`.
pub const ENV_PREFIX: &str = "MKTS";
const ENV_SEPARATOR: &str = "__";
/// Keys whose environment overrides are comma-separated lists.
const ENV_LIST_KEYS: &[&str] =
    &["dependencies", "dev_dependencies", "package_manager.install_args", "vcs.init_args", "vcs.ignore"];

/// Custom error type for settings loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

pub trait ConfigErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, config::ConfigError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// Loads the scaffolder [`Settings`] with a layered strategy:
/// 1. **Defaults**: every key missing from the other layers keeps its [`Settings::default`] value.
/// 2. **Settings File**: the file at `path`, when given. Its format follows the extension
///    (`.toml`, `.json`, `.yaml`, ...) and the file must exist.
/// 3. **Environment Overrides**: variables prefixed with `MKTS__`. Nested keys use double
///    underscores (`MKTS__VCS__PROGRAM` maps to `vcs.program`); list keys accept
///    comma-separated values (`MKTS__DEV_DEPENDENCIES=prettier,@types/node,eslint`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or malformed, or if the merged
/// values do not match [`Settings`].
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    load_layered(path, None)
}

/// `env` replaces the process environment when given; keys are full variable names.
fn load_layered<T>(
    path: Option<&Path>,
    env: Option<config::Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();

    if let Some(path) = path {
        info!("Loading settings from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    } else {
        debug!("No settings file given, using defaults and environment overrides");
    }

    let environment = ENV_LIST_KEYS.iter().fold(
        Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
            .list_separator(","),
        |environment, key| environment.with_list_parse_key(key),
    );

    let settings = builder
        .add_source(environment.source(env))
        .build()
        .context("Failed to build settings")?
        .try_deserialize::<T>()
        .context("Failed to deserialize settings")?;

    Ok(settings)
}
