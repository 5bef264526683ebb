use crate::error::{CliError, CliErrorExt};
use config::{Config, Environment, File};
use example_logger::{LevelFilter, Logger};
use serde::Deserialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Base name of the optional settings file looked up in the working directory.
pub const DEFAULT_CONFIG_NAME: &str = "example";
/// Prefix of environment overrides, e.g. `EXAMPLE__LOG__LEVEL=debug`.
pub const ENV_PREFIX: &str = "EXAMPLE";

/// Runtime settings of the example binary.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log: LogSettings,
}

/// Diagnostics written to standard error.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub enabled: bool,
    pub level: String,
    pub filter: Option<String>,
    pub json: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self { enabled: true, level: "warn".to_owned(), filter: None, json: false }
    }
}

impl Settings {
    /// Loads settings from an optional file overlaid with `EXAMPLE__` environment variables.
    ///
    /// The file may carry any extension `config` understands (`example.toml`,
    /// `example.json`, ...). A missing file is not an error; every field has a default.
    ///
    /// # Errors
    /// Returns [`CliError::Config`] when the file is malformed or a value has the wrong shape.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let effective_path =
            path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_NAME), Path::to_path_buf);

        Config::builder()
            .add_source(File::from(effective_path.as_path()).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true))
            .build()
            .context("Failed to build config")?
            .try_deserialize::<Self>()
            .context("Failed to deserialize config")
    }

    /// Same as [`Settings::load`], except a broken source is reported on `warn`
    /// and the defaults are used instead. Settings never stop a run.
    pub fn load_or_default<W: Write>(path: Option<&Path>, warn: &mut W) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            report(warn, &e, "using default settings");
            Self::default()
        })
    }
}

impl LogSettings {
    /// Parses the configured level.
    ///
    /// # Errors
    /// Returns [`CliError::InvalidSetting`] for anything `tracing` does not recognise.
    pub fn level_filter(&self) -> Result<LevelFilter, CliError> {
        self.level.trim().parse::<LevelFilter>().map_err(|e| CliError::InvalidSetting {
            message: format!("log.level '{}': {e}", self.level).into(),
            context: None,
        })
    }

    /// Installs the global subscriber unless logging is disabled.
    ///
    /// # Errors
    /// Returns [`CliError::InvalidSetting`] for a bad level and
    /// [`CliError::Logger`] when the subscriber cannot be installed.
    pub fn install(&self, name: &str) -> Result<Option<Logger>, CliError> {
        if !self.enabled {
            return Ok(None);
        }

        let mut builder = Logger::builder().name(name).level(self.level_filter()?).json(self.json);
        if let Some(filter) = &self.filter {
            builder = builder.env_filter(filter.as_str());
        }

        builder.init().context("Failed to install logger").map(Some)
    }

    /// Installs the subscriber, falling back to the default log settings when
    /// these cannot be applied. Failures are reported on `warn`.
    pub fn install_or_default<W: Write>(&self, name: &str, warn: &mut W) -> Option<Logger> {
        self.install(name).unwrap_or_else(|e| {
            report(warn, &e, "using default log settings");
            Self::default().install(name).unwrap_or_else(|e| {
                report(warn, &e, "logging disabled");
                None
            })
        })
    }
}

fn report<W: Write>(warn: &mut W, err: &CliError, fallback: &str) {
    // Nothing left to fall back to if the warning itself cannot be written.
    let _ = writeln!(warn, "warning: {err}; {fallback}");
}
