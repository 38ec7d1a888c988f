use std::env;
use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

/// Distinguishes runtime behavior for different stages of deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Which engine drives a session. Chosen once, when the session is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineMode {
    #[default]
    Legacy,
    Pool,
}

impl EngineMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "legacy" | "phased" => Some(Self::Legacy),
            "pool" | "stem-pool" | "stem_pool" => Some(Self::Pool),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Pool => "pool",
        }
    }
}

impl fmt::Display for EngineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub engine: EngineConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("QUIZ_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let mode = match env::var("QUIZ_ENGINE") {
            Ok(raw) => EngineMode::parse(&raw).ok_or(ConfigError::InvalidEngine { value: raw })?,
            Err(_) => EngineMode::default(),
        };

        let seed = env::var("QUIZ_SEED")
            .ok()
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map_err(|source| ConfigError::InvalidSeed { source })
            })
            .transpose()?;

        let defaults = PoolTerminationConfig::default();
        let pool = PoolTerminationConfig {
            min_answers: read_count("QUIZ_POOL_MIN_ANSWERS", defaults.min_answers)?,
            max_answers: read_count("QUIZ_POOL_MAX_ANSWERS", defaults.max_answers)?,
            confidence_gap: read_gap("QUIZ_POOL_CONFIDENCE_GAP", defaults.confidence_gap)?,
        };
        pool.validate()?;

        let log_level = env::var("QUIZ_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            engine: EngineConfig { mode, seed, pool },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn read_count(variable: &'static str, default: u32) -> Result<u32, ConfigError> {
    match env::var(variable) {
        Ok(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|source| ConfigError::InvalidCount { variable, source }),
        Err(_) => Ok(default),
    }
}

fn read_gap(variable: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(variable) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|source| ConfigError::InvalidGap { variable, source }),
        Err(_) => Ok(default),
    }
}

/// Settings for constructing a quiz session.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub mode: EngineMode,
    /// Fixed seed for the random source; entropy when absent.
    pub seed: Option<u64>,
    pub pool: PoolTerminationConfig,
}

/// Stopping policy for the pool engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolTerminationConfig {
    /// Answers required before a confidence stop is considered.
    pub min_answers: u32,
    /// Hard cap on answered questions.
    pub max_answers: u32,
    /// Leader's margin over the runner-up that ends the quiz.
    pub confidence_gap: f64,
}

impl Default for PoolTerminationConfig {
    fn default() -> Self {
        Self {
            min_answers: 8,
            max_answers: 18,
            confidence_gap: 3.0,
        }
    }
}

impl PoolTerminationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_answers == 0 || self.min_answers > self.max_answers {
            return Err(ConfigError::InvalidPoolBounds {
                min_answers: self.min_answers,
                max_answers: self.max_answers,
            });
        }
        if !self.confidence_gap.is_finite() || self.confidence_gap <= 0.0 {
            return Err(ConfigError::NonPositiveGap {
                value: self.confidence_gap,
            });
        }
        Ok(())
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidEngine {
        value: String,
    },
    InvalidSeed {
        source: ParseIntError,
    },
    InvalidCount {
        variable: &'static str,
        source: ParseIntError,
    },
    InvalidGap {
        variable: &'static str,
        source: ParseFloatError,
    },
    InvalidPoolBounds {
        min_answers: u32,
        max_answers: u32,
    },
    NonPositiveGap {
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidEngine { value } => write!(
                f,
                "QUIZ_ENGINE must be 'legacy' or 'pool' (got '{}')",
                value
            ),
            ConfigError::InvalidSeed { .. } => write!(f, "QUIZ_SEED must be a valid u64"),
            ConfigError::InvalidCount { variable, .. } => {
                write!(f, "{} must be a non-negative integer", variable)
            }
            ConfigError::InvalidGap { variable, .. } => {
                write!(f, "{} must be a number", variable)
            }
            ConfigError::InvalidPoolBounds {
                min_answers,
                max_answers,
            } => write!(
                f,
                "QUIZ_POOL_MIN_ANSWERS ({}) must not exceed QUIZ_POOL_MAX_ANSWERS ({}), \
                 which must be at least 1",
                min_answers, max_answers
            ),
            ConfigError::NonPositiveGap { value } => write!(
                f,
                "QUIZ_POOL_CONFIDENCE_GAP must be a finite positive number (got {})",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidSeed { source } => Some(source),
            ConfigError::InvalidCount { source, .. } => Some(source),
            ConfigError::InvalidGap { source, .. } => Some(source),
            ConfigError::InvalidEngine { .. }
            | ConfigError::InvalidPoolBounds { .. }
            | ConfigError::NonPositiveGap { .. } => None,
        }
    }
}
