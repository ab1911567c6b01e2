use thiserror::Error;

/// Application-wide result type
pub type Result<T> = anyhow::Result<T>;

/// API-specific errors with typed variants for matching
#[derive(Error, Debug)]
#[allow(dead_code)]
pub enum ApiError {
    #[error("Trakt API error: {0}")]
    Trakt(String),

    #[error("Trakt authentication failed. Please check your access token.")]
    Auth,

    #[error("Rate limited by the Trakt API. Try again in a moment.")]
    RateLimited,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request timeout")]
    Timeout,
}

/// Configuration errors
#[derive(Error, Debug)]
#[allow(dead_code)]
pub enum ConfigError {
    #[error("Config file not found. Run 'trakr init' to set up.")]
    NotFound,

    #[error("Invalid config file: {0}")]
    Invalid(String),

    #[error("Trakt credentials are required. Run 'trakr init' to set up.")]
    MissingCredentials,

    #[error("Failed to save config: {0}")]
    SaveFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while parsing an episode range command
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RangeError {
    #[error("invalid number '{0}' in range command")]
    InvalidNumber(String),

    #[error("token '{0}' contains more than one range")]
    MultipleRanges(String),
}
