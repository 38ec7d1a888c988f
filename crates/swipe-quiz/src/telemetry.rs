use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

const RUST_LOG: &str = "RUST_LOG";
const QUIZ_LOG_LEVEL: &str = "QUIZ_LOG_LEVEL";

#[derive(Debug)]
pub enum TelemetryError {
    /// A log filter directive did not parse. `variable` names where it came
    /// from.
    EnvFilter {
        variable: &'static str,
        value: String,
        source: ParseError,
    },
    /// The quiz log subscriber could not be registered, usually because the
    /// process already has a global subscriber.
    Install(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::EnvFilter { variable, value, .. } => {
                write!(f, "invalid {} log filter '{}'", variable, value)
            }
            TelemetryError::Install(err) => {
                write!(f, "failed to install the swipe-quiz log subscriber: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::EnvFilter { source, .. } => Some(source),
            TelemetryError::Install(err) => Some(&**err),
        }
    }
}

fn parse_filter(variable: &'static str, value: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(value).map_err(|source| TelemetryError::EnvFilter {
        variable,
        value: value.to_string(),
        source,
    })
}

/// `RUST_LOG` wins over `QUIZ_LOG_LEVEL` when it is set and non-empty.
pub fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    match std::env::var(RUST_LOG) {
        Ok(value) if !value.trim().is_empty() => parse_filter(RUST_LOG, &value),
        _ => parse_filter(QUIZ_LOG_LEVEL, &config.log_level),
    }
}

/// Installs a compact subscriber on stderr so stdout stays free for command
/// output.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = build_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Install)
}
