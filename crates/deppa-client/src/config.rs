//! Client configuration: credentials, base URL, and transport options.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Transport settings applied to the underlying HTTP client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportOptions {
    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Connect timeout in seconds.
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,

    /// Overrides the default `deppa-client/<version>` user agent.
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Extra headers sent with every request.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// Proxy URL for all requests.
    #[serde(default)]
    pub proxy: Option<String>,

    /// Emit a debug event with the outgoing parameters (password redacted).
    #[serde(default)]
    pub log_parameters: bool,
}

fn default_timeout() -> u64 {
    30
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            connect_timeout_secs: None,
            user_agent: None,
            headers: BTreeMap::new(),
            proxy: None,
            log_parameters: false,
        }
    }
}

/// Connection settings for the evaluation service.
///
/// Deserialize only: the password never leaves the process through serde.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Base URL the endpoint paths are appended to.
    #[serde(rename = "url")]
    pub base_url: String,

    /// Username issued to the academic unit.
    #[serde(rename = "usuario")]
    pub username: String,

    /// Password issued to the academic unit.
    pub password: String,

    /// Code of the requesting academic unit.
    #[serde(rename = "codigo_unidad")]
    pub institution_code: i64,

    #[serde(default)]
    pub transport: TransportOptions,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"***")
            .field("institution_code", &self.institution_code)
            .field("transport", &self.transport)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        institution_code: i64,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            username: username.into(),
            password: password.into(),
            institution_code,
            transport: TransportOptions::default(),
        }
    }

    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `DEPPA_URL` | Service base URL |
    /// | `DEPPA_USUARIO` | Username |
    /// | `DEPPA_PASSWORD` | Password |
    /// | `DEPPA_CODIGO_UNIDAD` | Academic unit code |
    /// | `DEPPA_TIMEOUT` | Request timeout in seconds (default: 30) |
    /// | `DEPPA_LOG_PARAMETERS` | Log outgoing parameters (`1`/`true`) |
    pub fn from_env() -> ConfigResult<Self> {
        let institution_code = required_env("DEPPA_CODIGO_UNIDAD")?
            .trim()
            .parse::<i64>()
            .map_err(|e| ConfigError::Invalid {
                name: "DEPPA_CODIGO_UNIDAD",
                message: e.to_string(),
            })?;

        let timeout_secs = match std::env::var("DEPPA_TIMEOUT") {
            Ok(v) => v.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "DEPPA_TIMEOUT",
                message: format!("expected whole seconds, got {:?}", v),
            })?,
            Err(_) => default_timeout(),
        };

        let config = Self {
            base_url: required_env("DEPPA_URL")?,
            username: required_env("DEPPA_USUARIO")?,
            password: required_env("DEPPA_PASSWORD")?,
            institution_code,
            transport: TransportOptions {
                timeout_secs,
                log_parameters: std::env::var("DEPPA_LOG_PARAMETERS")
                    .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                    .unwrap_or(false),
                ..TransportOptions::default()
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Load config from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the config can be used to build a client.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Missing { name: "url" });
        }
        let parsed = url::Url::parse(&self.base_url).map_err(|e| ConfigError::Invalid {
            name: "url",
            message: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid {
                name: "url",
                message: format!("unsupported scheme: {}", parsed.scheme()),
            });
        }
        if self.username.is_empty() {
            return Err(ConfigError::Missing { name: "usuario" });
        }
        if self.transport.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "timeout_secs",
                message: "timeout must be at least one second".to_string(),
            });
        }
        Ok(())
    }

    /// Set the base URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.transport.timeout_secs = secs;
        self
    }

    /// Add a header sent with every request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.transport.headers.insert(name.into(), value.into());
        self
    }

    /// Enable or disable the outgoing-parameter debug dump.
    pub fn with_log_parameters(mut self, enabled: bool) -> Self {
        self.transport.log_parameters = enabled;
        self
    }

    /// Replace all transport options.
    pub fn with_transport(mut self, transport: TransportOptions) -> Self {
        self.transport = transport;
        self
    }
}

fn required_env(name: &'static str) -> ConfigResult<String> {
    match std::env::var(name) {
        Ok(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::Missing { name }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clear_env() {
        for var in [
            "DEPPA_URL",
            "DEPPA_USUARIO",
            "DEPPA_PASSWORD",
            "DEPPA_CODIGO_UNIDAD",
            "DEPPA_TIMEOUT",
            "DEPPA_LOG_PARAMETERS",
        ] {
            std::env::remove_var(var);
        }
    }

    fn set_required_env() {
        std::env::set_var("DEPPA_URL", "https://deppa.example.edu/ws");
        std::env::set_var("DEPPA_USUARIO", "ingenieria");
        std::env::set_var("DEPPA_PASSWORD", "s3cret");
        std::env::set_var("DEPPA_CODIGO_UNIDAD", "8");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        set_required_env();

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url, "https://deppa.example.edu/ws");
        assert_eq!(config.username, "ingenieria");
        assert_eq!(config.password, "s3cret");
        assert_eq!(config.institution_code, 8);
        assert_eq!(config.transport.timeout_secs, 30);
        assert!(!config.transport.log_parameters);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        set_required_env();
        std::env::set_var("DEPPA_TIMEOUT", "5");
        std::env::set_var("DEPPA_LOG_PARAMETERS", "TRUE");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.transport.timeout_secs, 5);
        assert!(config.transport.log_parameters);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_password() {
        clear_env();
        set_required_env();
        std::env::remove_var("DEPPA_PASSWORD");

        let err = ClientConfig::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Missing {
                name: "DEPPA_PASSWORD"
            }
        ));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_non_numeric_unit() {
        clear_env();
        set_required_env();
        std::env::set_var("DEPPA_CODIGO_UNIDAD", "ocho");

        let err = ClientConfig::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "DEPPA_CODIGO_UNIDAD",
                ..
            }
        ));
        clear_env();
    }

    #[test]
    fn test_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "url: https://deppa.example.edu/ws\nusuario: ingenieria\npassword: s3cret\ncodigo_unidad: 8\ntransport:\n  timeout_secs: 12\n  headers:\n    X-Unidad: ingenieria\n"
        )
        .unwrap();

        let config = ClientConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.institution_code, 8);
        assert_eq!(config.transport.timeout_secs, 12);
        assert_eq!(
            config.transport.headers.get("X-Unidad").map(String::as_str),
            Some("ingenieria")
        );
        assert!(config.transport.proxy.is_none());
    }

    #[test]
    fn test_yaml_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClientConfig::from_yaml_file(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_yaml_file_wrong_shape() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "url: https://deppa.example.edu/ws\nusuario: [1, 2]").unwrap();

        let err = ClientConfig::from_yaml_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        let config = ClientConfig::new("", "u", "p", 1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Missing { name: "url" })
        ));

        let config = ClientConfig::new("not a url", "u", "p", 1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { name: "url", .. })
        ));

        let config = ClientConfig::new("ftp://deppa.example.edu", "u", "p", 1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { name: "url", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = ClientConfig::new("https://deppa.example.edu", "u", "p", 1).with_timeout_secs(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                name: "timeout_secs",
                ..
            })
        ));
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = ClientConfig::new("https://deppa.example.edu", "u", "hunter2", 1);
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("***"));
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::new("https://a.example.edu", "u", "p", 3)
            .with_url("https://b.example.edu")
            .with_timeout_secs(9)
            .with_header("X-Trace", "1")
            .with_log_parameters(true);

        assert_eq!(config.base_url, "https://b.example.edu");
        assert_eq!(config.transport.timeout_secs, 9);
        assert_eq!(config.transport.headers.len(), 1);
        assert!(config.transport.log_parameters);
    }
}
