use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ============================================================================
// Top-level config
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EmpathConfig {
    pub server: ServerConfig,
    /// Optional TOML file overriding the built-in keyword/response tables.
    pub lexicon_path: Option<PathBuf>,
}

impl EmpathConfig {
    /// Load config from a TOML file, falling back to defaults for missing
    /// fields. After loading, env var overrides are applied.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let mut config: EmpathConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML config")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Try to load from path; if the file doesn't exist, return defaults
    /// with env overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::info!("Config file not found or invalid ({}), using defaults", e);
                let mut cfg = Self::default();
                cfg.apply_env_overrides();
                cfg
            }
        }
    }

    /// Apply environment variable overrides on top of file-based config.
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("EMPATH_HOST") {
            self.server.host = v;
        }
        if let Ok(v) = std::env::var("EMPATH_PORT") {
            if let Ok(n) = v.parse() {
                self.server.port = n;
            }
        }
        if let Ok(v) = std::env::var("EMPATH_LEXICON") {
            self.lexicon_path = Some(PathBuf::from(v));
        }
    }
}

// ============================================================================
// Sub-configs
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = EmpathConfig::default();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8080);
        assert!(cfg.lexicon_path.is_none());
    }

    #[test]
    fn test_parse_minimal_toml() {
        let toml_str = r#"
[server]
port = 3000
"#;
        let cfg: EmpathConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.server.port, 3000);
        // Defaults for unspecified fields
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert!(cfg.lexicon_path.is_none());
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
lexicon_path = "lexicon.toml"

[server]
host = "0.0.0.0"
port = 9000
"#;
        let cfg: EmpathConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.lexicon_path, Some(PathBuf::from("lexicon.toml")));
    }

    #[test]
    fn test_env_overrides_and_defaults() {
        // Part 1: env overrides
        std::env::set_var("EMPATH_HOST", "0.0.0.0");
        std::env::set_var("EMPATH_PORT", "4242");

        let mut cfg = EmpathConfig::default();
        cfg.apply_env_overrides();

        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 4242);

        // Part 2: an unparseable port is ignored
        std::env::set_var("EMPATH_PORT", "not-a-port");
        let mut cfg = EmpathConfig::default();
        cfg.apply_env_overrides();
        assert_eq!(cfg.server.port, 8080);

        // Clean up env vars before testing defaults
        std::env::remove_var("EMPATH_HOST");
        std::env::remove_var("EMPATH_PORT");

        // Part 3: nonexistent path returns defaults (no env interference)
        let cfg = EmpathConfig::load_or_default("/nonexistent/path.toml");
        assert_eq!(cfg.server.host, "127.0.0.1");
    }
}
