use std::borrow::Cow;

/// Errors surfaced by the example command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The command line does not match the registered options.
    #[error("Usage error{}: {source}", format_context(.context))]
    Usage { source: clap::Error, context: Option<Cow<'static, str>> },

    /// Layered configuration could not be built or deserialized.
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    /// A configuration value was read but is not acceptable.
    #[error("Invalid setting{}: {message}", format_context(.context))]
    InvalidSetting { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Logger error{}: {source}", format_context(.context))]
    Logger { source: example_logger::LoggerError, context: Option<Cow<'static, str>> },

    /// Writing program output failed (e.g., a closed pipe).
    #[error("Output error{}: {source}", format_context(.context))]
    Output { source: std::io::Error, context: Option<Cow<'static, str>> },
}

impl CliError {
    /// `true` when the error came from argument parsing.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::Usage { .. })
    }
}

/// Attaches context to any result whose error converts into [`CliError`].
pub trait CliErrorExt<T> {
    /// # Errors
    /// Returns the converted error with `context` attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, CliError>;
}

impl<T, E: Into<CliError>> CliErrorExt<T> for Result<T, E> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, CliError> {
        self.map_err(|e| {
            let mut e = e.into();
            match &mut e {
                CliError::Usage { context: c, .. }
                | CliError::Config { context: c, .. }
                | CliError::InvalidSetting { context: c, .. }
                | CliError::Logger { context: c, .. }
                | CliError::Output { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl From<clap::Error> for CliError {
    fn from(source: clap::Error) -> Self {
        Self::Usage { source, context: None }
    }
}

impl From<config::ConfigError> for CliError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

impl From<example_logger::LoggerError> for CliError {
    fn from(source: example_logger::LoggerError) -> Self {
        Self::Logger { source, context: None }
    }
}

impl From<std::io::Error> for CliError {
    fn from(source: std::io::Error) -> Self {
        Self::Output { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
