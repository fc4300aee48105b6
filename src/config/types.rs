// Configuration type definitions

use serde::Deserialize;

use crate::theme::ThemeMode;

/// Backend server configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout_ms() -> u64 {
    30_000
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// AI suggestion configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Number of historical forms the backend analyzes per suggestion request
    #[serde(default = "default_max_history")]
    pub max_history: u32,
}

fn default_true() -> bool {
    true
}

fn default_max_history() -> u32 {
    3
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            enabled: true,
            max_history: default_max_history(),
        }
    }
}

/// Theme configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ThemeConfig {
    #[serde(default)]
    pub mode: ThemeMode,
}

/// Docx export configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ExportConfig {
    /// Directory downloads are written to; current directory when unset
    #[serde(default)]
    pub output_dir: Option<String>,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.base_url, "http://localhost:5000");
        assert_eq!(config.server.timeout_ms, 30_000);
        assert!(config.ai.enabled);
        assert_eq!(config.ai.max_history, 3);
        assert_eq!(config.theme.mode, ThemeMode::Light);
        assert!(config.export.output_dir.is_none());
    }

    #[test]
    fn test_parse_theme_mode() {
        let config: Config = toml::from_str("[theme]\nmode = \"dark\"").unwrap();
        assert_eq!(config.theme.mode, ThemeMode::Dark);
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[server]
base_url = "https://forms.internal"
timeout_ms = 5000

[ai]
enabled = false
max_history = 10

[export]
output_dir = "/tmp/docs"
"#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.server.base_url, "https://forms.internal");
        assert_eq!(config.server.timeout_ms, 5000);
        assert!(!config.ai.enabled);
        assert_eq!(config.ai.max_history, 10);
        assert_eq!(config.export.output_dir.as_deref(), Some("/tmp/docs"));
    }

    // For any TOML config file with missing optional sections or fields,
    // parsing should succeed and use default values for everything absent.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_server_section in prop::bool::ANY,
            include_base_url in prop::bool::ANY,
            include_ai_section in prop::bool::ANY,
        ) {
            let mut toml_content = String::new();
            if include_server_section {
                toml_content.push_str("[server]\n");
                if include_base_url {
                    toml_content.push_str("base_url = \"http://example.com\"\n");
                }
            }
            if include_ai_section {
                toml_content.push_str("[ai]\n");
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config with missing fields");

            let config = config.unwrap();
            if !include_server_section || !include_base_url {
                prop_assert_eq!(
                    config.server.base_url,
                    "http://localhost:5000",
                    "Missing base_url should use the default"
                );
            }
            prop_assert_eq!(config.server.timeout_ms, 30_000);
            prop_assert_eq!(config.ai.max_history, 3);
        }
    }

    // For any valid theme mode value, parsing should extract exactly that mode.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_theme_mode_parsing(mode in prop::sample::select(vec!["light", "dark"])) {
            let toml_content = format!("[theme]\nmode = \"{}\"\n", mode);
            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse valid theme mode: {}", mode);

            let expected = match mode {
                "light" => ThemeMode::Light,
                "dark" => ThemeMode::Dark,
                _ => unreachable!(),
            };
            prop_assert_eq!(config.unwrap().theme.mode, expected);
        }
    }
}
