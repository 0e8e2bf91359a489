//! # Logger
//!
//! Logging bootstrap shared by the intake binaries.
//! Configures console and rolling-file output on top of `tracing-subscriber`, with
//! non-blocking file I/O and `RUST_LOG`-style filtering.
//!
//! * Console output can be compact, pretty, or JSON ([`LogFormat`]).
//! * File output is enabled by [`LoggerBuilder::directory`]; files rotate and are pruned
//!   to [`LoggerBuilder::max_files`].
//! * [`LoggerBuilder::filter`] sets module directives (e.g. `"mymove_orders=debug"`);
//!   `RUST_LOG` is consulted only when no explicit filter is given.
//!
//! ## Example
//!
//! ```rust
//! use mymove_logger::{LevelFilter, LogFormat, Logger};
//!
//! let _logger = Logger::builder()
//!     .name("mymove-intake")
//!     .console_format(LogFormat::Compact)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Console rendering style. Console output goes to stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

#[derive(Debug)]
struct LoggerSettings {
    console: Option<LogFormat>,
    directory: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json_files: bool,
    filter: Option<String>,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            console: Some(LogFormat::Compact),
            directory: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json_files: false,
            filter: None,
        }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);
#[derive(Debug)]
pub struct NoFile;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}
impl Sealed for NoFile {}
impl Sealed for WithFile {}

/// Builder for the global tracing subscriber.
///
/// A name is mandatory before [`LoggerBuilder::init`] becomes available; file-only knobs
/// appear once a directory is set.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName, F: Sealed = NoFile> {
    settings: LoggerSettings,
    name: N,
    file: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<NoName, F> {
    /// Names the logger; also the prefix of rolling log files.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName, F> {
        LoggerBuilder { settings: self.settings, name: WithName(name.into()), file: PhantomData }
    }
}

impl LoggerBuilder<WithName, WithFile> {
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.settings.max_files = max;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.settings.rotation = rotation;
        self
    }

    /// Writes log files as JSON lines.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json_files(mut self, enabled: bool) -> Self {
        self.settings.json_files = enabled;
        self
    }
}

impl<F: Sealed> LoggerBuilder<WithName, F> {
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Explicit filter directives. Invalid directives fail [`LoggerBuilder::init`].
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn filter(mut self, directives: impl Into<String>) -> Self {
        self.settings.filter = Some(directives.into());
        self
    }

    /// Enables or disables console output.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = if enabled { Some(LogFormat::Compact) } else { None };
        self
    }

    /// Enables console output with the given format.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console_format(mut self, format: LogFormat) -> Self {
        self.settings.console = Some(format);
        self
    }

    /// Enables rolling file output into `directory`.
    pub fn directory(self, directory: impl Into<PathBuf>) -> LoggerBuilder<WithName, WithFile> {
        let mut settings = self.settings;
        settings.directory = Some(directory.into());
        LoggerBuilder { settings, name: self.name, file: PhantomData }
    }

    /// Installs the global subscriber.
    ///
    /// The returned [`Logger`] owns the file writer guard; keep it alive until shutdown.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`, a bad
    ///   filter, or when no output is enabled.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] when the log directory is unusable.
    /// * [`LoggerError::Subscriber`] when a global subscriber already exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let name = self.name.0;
        validate(&self.settings, &name)?;

        let filter = env_filter(&self.settings)?;
        let mut layers: Vec<BoxedLayer> = Vec::new();

        if let Some(format) = self.settings.console {
            layers.push(console_layer(format));
        }

        let guard = match &self.settings.directory {
            Some(directory) => {
                fs::create_dir_all(directory).context(format!(
                    "Failed to create log directory {}",
                    directory.display()
                ))?;

                let appender = RollingFileAppender::builder()
                    .rotation(self.settings.rotation.clone())
                    .filename_prefix(&name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(self.settings.max_files)
                    .build(directory)?;

                let (writer, guard) = tracing_appender::non_blocking(appender);
                let file_layer = layer().with_writer(writer).with_ansi(false);
                layers.push(if self.settings.json_files {
                    file_layer.json().boxed()
                } else {
                    file_layer.boxed()
                });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging output enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(layers).with(filter).try_init()?;
        tracing::debug!(logger = %name, "Logger initialized");

        Ok(Logger { guard })
    }
}

/// Handle to the installed logging system.
#[must_use = "Dropping this handle stops the background file writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`].
    ///
    /// ```rust
    /// use mymove_logger::{LevelFilter, Logger};
    ///
    /// let _logger = Logger::builder().name("replay").level(LevelFilter::WARN).init().unwrap();
    /// ```
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { settings: LoggerSettings::default(), name: NoName, file: PhantomData }
    }

    /// The file writer guard, present only when file output is enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

/// Parses a level name such as `"debug"` or `"off"`.
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for unknown level names.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    LevelFilter::from_str(level.trim()).map_err(|e| LoggerError::InvalidConfiguration {
        message: format!("Invalid log level '{level}': {e}").into(),
        context: None,
    })
}

fn console_layer(format: LogFormat) -> BoxedLayer {
    match format {
        LogFormat::Compact => layer().compact().with_writer(io::stderr).with_ansi(true).boxed(),
        LogFormat::Pretty => layer().pretty().with_writer(io::stderr).with_ansi(true).boxed(),
        LogFormat::Json => layer().json().with_writer(io::stderr).with_ansi(false).boxed(),
    }
}

fn validate(settings: &LoggerSettings, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if settings.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

fn env_filter(settings: &LoggerSettings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    settings.filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |directives| {
            builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid filter '{directives}': {e}").into(),
                context: None,
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder().name("test-app");
        assert_eq!(builder.settings.console, Some(LogFormat::Compact));
        assert_eq!(builder.settings.level, LevelFilter::INFO);
        assert!(builder.settings.directory.is_none());
        assert!(builder.settings.filter.is_none());
    }

    #[test]
    fn builder_records_file_settings() {
        let builder = Logger::builder()
            .name("test-app")
            .console(false)
            .filter("mymove_orders=debug")
            .directory("/tmp/mymove-logs")
            .max_files(3)
            .json_files(true)
            .level(LevelFilter::DEBUG);

        assert!(builder.settings.console.is_none());
        assert_eq!(builder.settings.max_files, 3);
        assert!(builder.settings.json_files);
        assert_eq!(builder.settings.filter.as_deref(), Some("mymove_orders=debug"));
        assert_eq!(builder.settings.level, LevelFilter::DEBUG);
    }

    #[test]
    #[serial]
    fn rejects_empty_name() {
        let err = Logger::builder().name("  ").init().expect_err("empty name");
        assert_eq!(err.kind(), "InvalidConfiguration");
    }

    #[test]
    #[serial]
    fn rejects_no_outputs() {
        let err = Logger::builder().name("silent").console(false).init().expect_err("no output");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn rejects_invalid_filter() {
        let err = Logger::builder().name("bad-filter").filter("mymove_orders=verbose").init().expect_err("filter");
        assert!(err.to_string().contains("Invalid filter"));
    }

    #[test]
    fn parses_level_names() {
        assert_eq!(parse_level("debug").ok(), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level(" WARN ").ok(), Some(LevelFilter::WARN));
        assert!(parse_level("loud").is_err());
    }
}
