use std::{env, time::Duration};
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_REFRAME_ENDPOINT: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_REFRAME_MODEL: &str = "llama3.2:3b";
pub const DEFAULT_REFRAME_TIMEOUT_SECS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReframeConfig {
    pub endpoint: String,
    pub model: String,
    /// `None` waits for the endpoint indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ReframeConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_REFRAME_ENDPOINT.to_string(),
            model: DEFAULT_REFRAME_MODEL.to_string(),
            timeout: Some(Duration::from_secs(DEFAULT_REFRAME_TIMEOUT_SECS)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub reframe: ReframeConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT);

        let mut reframe = ReframeConfig::default();
        if let Some(endpoint) = lookup("REFRAME_ENDPOINT").filter(|value| !value.trim().is_empty()) {
            reframe.endpoint = endpoint.trim().to_string();
        }
        if let Some(model) = lookup("REFRAME_MODEL").filter(|value| !value.trim().is_empty()) {
            reframe.model = model.trim().to_string();
        }
        let timeout_secs = parse_or(
            "REFRAME_TIMEOUT_SECS",
            lookup("REFRAME_TIMEOUT_SECS"),
            DEFAULT_REFRAME_TIMEOUT_SECS,
        );
        reframe.timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));

        Self { port, reframe }
    }
}

fn parse_or<T: std::str::FromStr + Copy>(key: &str, value: Option<String>, default: T) -> T {
    match value {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("ignoring invalid {key}={raw:?}");
            default
        }),
    }
}
