use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub trakt: TraktConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Create a new config with just the credentials, using defaults for
    /// everything else
    pub fn new(client_id: String, access_token: String, username: String) -> Self {
        Self {
            trakt: TraktConfig {
                client_id,
                access_token,
                username,
            },
            ui: UiConfig::default(),
        }
    }

    /// Check if the config has usable credentials
    pub fn has_credentials(&self) -> bool {
        !self.trakt.client_id.is_empty()
            && !self.trakt.access_token.is_empty()
            && !self.trakt.username.is_empty()
    }
}

/// Trakt API credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraktConfig {
    /// API application client ID
    pub client_id: String,

    /// OAuth access token
    pub access_token: String,

    /// Trakt username (watchlist lookups are per-user)
    pub username: String,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Colored output
    #[serde(default = "default_color")]
    pub color: bool,

    /// Default result limit for listings
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            limit: default_limit(),
        }
    }
}

fn default_color() -> bool {
    true
}

fn default_limit() -> u32 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = Config::new(
            "client".to_string(),
            "token".to_string(),
            "user".to_string(),
        );
        assert_eq!(config.trakt.client_id, "client");
        assert_eq!(config.trakt.access_token, "token");
        assert!(config.has_credentials());
    }

    #[test]
    fn test_config_empty_credentials() {
        let config = Config::new(String::new(), String::new(), String::new());
        assert!(!config.has_credentials());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::new(
            "my_client_id".to_string(),
            "my_token".to_string(),
            "me".to_string(),
        );
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("my_client_id"));
        assert!(toml_str.contains("my_token"));
    }

    #[test]
    fn test_config_deserialization_minimal() {
        let toml_str = r#"
[trakt]
client_id = "client"
access_token = "token"
username = "me"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.trakt.username, "me");
        assert!(config.ui.color);
        assert_eq!(config.ui.limit, 10);
    }

    #[test]
    fn test_config_deserialization_full() {
        let toml_str = r#"
[trakt]
client_id = "client"
access_token = "token"
username = "me"

[ui]
color = false
limit = 25
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(!config.ui.color);
        assert_eq!(config.ui.limit, 25);
    }
}
