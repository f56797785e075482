//! Runtime configuration loaded from environment variables.

/// Default upstream that returns a one-element JSON array with a random word.
pub const DEFAULT_RANDOM_WORD_URL: &str = "https://random-word-api.herokuapp.com/word";

/// Default upstream dictionary; the word is appended as the last path segment.
pub const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Default address the terminal client talks to.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Where the word provider fetches its data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Random word source (from WORDMARK_RANDOM_WORD_URL)
    pub random_word_url: String,
    /// Dictionary base URL (from WORDMARK_DICTIONARY_URL)
    pub dictionary_url: String,
}

impl ProviderConfig {
    pub fn from_env() -> Self {
        Self {
            random_word_url: std::env::var("WORDMARK_RANDOM_WORD_URL")
                .unwrap_or_else(|_| DEFAULT_RANDOM_WORD_URL.to_string()),
            dictionary_url: std::env::var("WORDMARK_DICTIONARY_URL")
                .unwrap_or_else(|_| DEFAULT_DICTIONARY_URL.to_string()),
        }
    }

    /// Point both upstreams at one base URL (for tests against a mock server).
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            random_word_url: format!("{}/word", base),
            dictionary_url: format!("{}/api/v2/entries/en", base),
        }
    }
}

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Production deployments mark the history cookie `Secure` (WORDMARK_ENV=production)
    pub production: bool,
    pub provider: ProviderConfig,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let production = std::env::var("WORDMARK_ENV")
            .map(|env| env.eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        Self {
            production,
            provider: ProviderConfig::from_env(),
        }
    }

    /// A development config with explicit upstreams.
    pub fn development(provider: ProviderConfig) -> Self {
        Self {
            production: false,
            provider,
        }
    }

    /// A production config with explicit upstreams.
    pub fn production(provider: ProviderConfig) -> Self {
        Self {
            production: true,
            provider,
        }
    }
}

/// Base URL for the terminal client (from WORDMARK_URL).
pub fn server_url_from_env() -> String {
    std::env::var("WORDMARK_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string())
}
