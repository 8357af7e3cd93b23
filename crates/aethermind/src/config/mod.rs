use std::env;
use std::fmt;
use url::Url;

const DEFAULT_SCORING_API_URL: &str = "http://127.0.0.1:8000/api";
const DEFAULT_SCORING_TIMEOUT_SECS: u64 = 30;

/// Distinguishes runtime behavior for different stages of the client.
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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub scoring: ScoringConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let base_url = ScoringConfig::parse_base_url(
            &env::var("SCORING_API_URL").unwrap_or_else(|_| DEFAULT_SCORING_API_URL.to_string()),
        )?;
        let timeout_secs = match env::var("SCORING_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout { value: raw })?,
            Err(_) => DEFAULT_SCORING_TIMEOUT_SECS,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            scoring: ScoringConfig {
                base_url,
                timeout_secs,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Location and limits of the external scoring service.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub base_url: Url,
    pub timeout_secs: u64,
}

impl ScoringConfig {
    pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
        let url = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidApiUrl {
            value: raw.to_string(),
            source,
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            _ => Err(ConfigError::UnsupportedScheme {
                value: raw.to_string(),
            }),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidApiUrl {
        value: String,
        source: url::ParseError,
    },
    UnsupportedScheme {
        value: String,
    },
    InvalidTimeout {
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidApiUrl { value, .. } => {
                write!(f, "SCORING_API_URL '{}' is not a valid URL", value)
            }
            ConfigError::UnsupportedScheme { value } => {
                write!(f, "SCORING_API_URL '{}' must use http or https", value)
            }
            ConfigError::InvalidTimeout { value } => write!(
                f,
                "SCORING_TIMEOUT_SECS '{}' must be a positive number of seconds",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidApiUrl { source, .. } => Some(source),
            ConfigError::UnsupportedScheme { .. } | ConfigError::InvalidTimeout { .. } => None,
        }
    }
}
