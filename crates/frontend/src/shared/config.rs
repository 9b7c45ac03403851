use serde::Deserialize;

/// Lower and upper bound for the request timeout, in milliseconds
pub const MIN_TIMEOUT_MS: u32 = 1_000;
pub const MAX_TIMEOUT_MS: u32 = 120_000;

/// localStorage key holding an optional TOML override
const CONFIG_OVERRIDE_KEY: &str = "catalog_config";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub fetch: FetchConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Full backend origin; when absent the page host is used with `port`
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FetchConfig {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u32,
}

fn default_port() -> u16 {
    3000
}

fn default_timeout_ms() -> u32 {
    15_000
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000

[fetch]
timeout_ms = 15000
"#;

/// Parse a TOML config, clamping the timeout into its allowed range
pub fn parse_config(text: &str) -> anyhow::Result<ClientConfig> {
    let mut config: ClientConfig = toml::from_str(text)?;
    config.fetch.timeout_ms = config.fetch.timeout_ms.clamp(MIN_TIMEOUT_MS, MAX_TIMEOUT_MS);
    Ok(config)
}

/// Load configuration
///
/// Search order:
/// 1. TOML override stored in localStorage under `catalog_config`
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<ClientConfig> {
    if let Some(text) = read_override() {
        match parse_config(&text) {
            Ok(config) => {
                log::info!("Loaded config override from localStorage");
                return Ok(config);
            }
            Err(e) => log::warn!("Ignoring invalid config override: {}", e),
        }
    }

    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn read_override() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(CONFIG_OVERRIDE_KEY)
        .ok()?
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: None,
                port: default_port(),
            },
            fetch: FetchConfig {
                timeout_ms: default_timeout_ms(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.fetch.timeout_ms, 15_000);
    }

    #[test]
    fn test_override_with_base_url() {
        let config = parse_config(
            r#"
            [api]
            base_url = "https://pos.example.com/api"

            [fetch]
            timeout_ms = 20000
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("https://pos.example.com/api"));
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.fetch.timeout_ms, 20_000);
    }

    #[test]
    fn test_timeout_is_clamped() {
        let config = parse_config("[api]\n[fetch]\ntimeout_ms = 5\n").unwrap();
        assert_eq!(config.fetch.timeout_ms, MIN_TIMEOUT_MS);

        let config = parse_config("[api]\n[fetch]\ntimeout_ms = 600000\n").unwrap();
        assert_eq!(config.fetch.timeout_ms, MAX_TIMEOUT_MS);
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(parse_config("[fetch]\ntimeout_ms = \"soon\"\n").is_err());
    }
}
