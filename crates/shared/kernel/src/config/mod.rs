use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

/// Prefix for environment overrides (`MYMOVE__VALIDATION__UB_ALLOWANCE_MAX=2500`).
pub const ENV_PREFIX: &str = "MYMOVE";
const ENV_SEPARATOR: &str = "__";

/// Custom error type for config loading.
#[mymove_derive::mymove_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from an optional file plus `MYMOVE__*` environment overrides.
///
/// Layering:
/// 1. **Defaults**: whatever `T`'s `#[serde(default)]` provides.
/// 2. **File**: when `path` is given it must exist; format follows the extension.
/// 3. **Environment**: variables prefixed with `MYMOVE__`, nested with `__`
///    (e.g. `MYMOVE__SEARCH__MIN_QUERY_LENGTH=3` maps to `search.min_query_length`).
///
/// # Errors
/// Returns [`ConfigError::Config`] when the file is missing or malformed, or the merged
/// values do not match `T`.
///
/// # Example
/// ```rust,no_run
/// use mymove_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     level: String,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    build(path, environment(None))
}

/// Same as [`load_config`] but reads overrides from an explicit variable snapshot
/// instead of the process environment.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    vars: Map<String, String>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    build(path, environment(Some(vars)))
}

fn environment(vars: Option<Map<String, String>>) -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR).try_parsing(true).source(vars)
}

fn build<T>(path: Option<impl AsRef<Path>>, env: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();

    if let Some(path) = path {
        let path = path.as_ref();
        info!("Loading config from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    } else {
        debug!("No config file given, using defaults and environment overrides");
    }

    let config = builder
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
