/// Url used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "connectToDbUrl.com";
/// Filter used when `RUST_LOG` is not set. Keeps stdout of the demo free of log noise.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Runtime settings, read from the environment (and a `.env` file if one exists).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Url handed to the first `acquire` on the shared registry.
    pub database_url: String,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Loads `.env` (if present) and reads `DATABASE_URL` and `RUST_LOG`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
        }
    }
}
