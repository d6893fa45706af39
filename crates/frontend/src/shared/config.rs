use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Port of the backend on the page's host
    pub port: u16,
    /// Full origin of the backend ("https://api.example.com"); overrides host + port
    #[serde(default)]
    pub origin: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    /// Maximum number of toasts visible at once
    #[serde(default = "default_toast_limit")]
    pub toast_limit: usize,
    /// Milliseconds before a toast is dismissed automatically
    #[serde(default = "default_toast_timeout_ms")]
    pub toast_timeout_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_limit: default_toast_limit(),
            toast_timeout_ms: default_toast_timeout_ms(),
        }
    }
}

fn default_toast_limit() -> usize {
    3
}

fn default_toast_timeout_ms() -> u32 {
    4000
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000

[ui]
toast_limit = 3
toast_timeout_ms = 4000
"#;

/// Parse a configuration document
pub fn parse_config(contents: &str) -> Result<ClientConfig, toml::de::Error> {
    toml::from_str(contents)
}

static CLIENT_CONFIG: Lazy<ClientConfig> = Lazy::new(load_config);

/// Configuration parsed once per page load
pub fn client_config() -> &'static ClientConfig {
    &CLIENT_CONFIG
}

/// Load the embedded configuration.
///
/// The WASM bundle has no filesystem; deployments that need another backend
/// origin rebuild with a different `DEFAULT_CONFIG`.
pub fn load_config() -> ClientConfig {
    match parse_config(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Embedded config is invalid, using built-in values: {}", e);
            ClientConfig {
                api: ApiConfig {
                    port: 3000,
                    origin: None,
                },
                ui: UiConfig::default(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.api.origin, None);
        assert_eq!(config.ui.toast_limit, 3);
    }

    #[test]
    fn test_client_config_is_parsed_once() {
        let first = client_config();
        assert!(std::ptr::eq(first, client_config()));
        assert_eq!(first, &load_config());
    }

    #[test]
    fn test_origin_override_and_ui_defaults() {
        let config = parse_config(
            r#"
            [api]
            port = 8080
            origin = "https://api.loja.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.origin.as_deref(), Some("https://api.loja.com"));
        assert_eq!(config.ui, UiConfig::default());
    }
}
