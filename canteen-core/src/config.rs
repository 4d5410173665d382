use crate::code_input::DEFAULT_RESEND_COOLDOWN_SECS;

/// Core configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | CANTEEN_API_URL | http://localhost:5000/api | REST backend base URL |
/// | RESEND_COOLDOWN_SECS | 60 | Seconds before a verification code may be resent |
/// | LOG_LEVEL | info | Log level / filter directive |
/// | LOG_DIR | (unset) | Directory for daily rolling log files |
/// | REQUEST_TIMEOUT_SECS | 30 | HTTP request timeout |
///
/// # Example
///
/// ```ignore
/// CANTEEN_API_URL=https://canteen.example.edu/api LOG_LEVEL=debug cargo run
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Backend base URL, without trailing slash
    pub api_url: String,
    pub resend_cooldown_secs: u32,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub request_timeout_secs: u64,
}

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

impl CoreConfig {
    /// Load from environment variables, falling back to defaults for unset
    /// or unparsable values
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_url: get("CANTEEN_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.into()),
            resend_cooldown_secs: get("RESEND_COOLDOWN_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_RESEND_COOLDOWN_SECS),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: get("LOG_DIR").filter(|d| !d.is_empty()),
            request_timeout_secs: get("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
