use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Placeholder backend the dormant HTTP client points at unless overridden.
pub const DEFAULT_API_BASE_URL: &str = "https://blindly-curious-grackle.ngrok-free.app";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub api_base_url: String,
    /// File backing the local key-value store (session and token).
    pub state_path: PathBuf,
    /// Optional YAML catalog replacing the builtin sample data.
    pub catalog_path: Option<PathBuf>,
    pub request_timeout_secs: u64,
    /// Simulated round-trip before a selection is published.
    pub selection_latency_ms: u64,
    /// Simulated round-trip for login and signup.
    pub auth_latency_ms: u64,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
}
