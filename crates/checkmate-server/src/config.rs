use checkmate_core::validator::DEFAULT_PROGRAM;
use checkmate_core::SchemaValidator;

/// Errors raised while reading the server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid CHECKMATE_PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("invalid CHECKMATE_VALIDATOR_TIMEOUT_SECS {value:?}: {source}")]
    InvalidTimeout {
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("CHECKMATE_VALIDATOR is empty")]
    EmptyValidator,
}

/// Server settings, read from `CHECKMATE_*` environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub validator: SchemaValidator,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, falling back to defaults for
    /// unset variables.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a variable is set to an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("CHECKMATE_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match lookup("CHECKMATE_PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => 8080,
        };

        let command = lookup("CHECKMATE_VALIDATOR").unwrap_or_else(|| DEFAULT_PROGRAM.to_string());
        let validator =
            SchemaValidator::from_command_line(&command).ok_or(ConfigError::EmptyValidator)?;

        let validator = match lookup("CHECKMATE_VALIDATOR_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) => validator.with_timeout_secs(secs),
                Err(source) => return Err(ConfigError::InvalidTimeout { value, source }),
            },
            None => validator,
        };

        Ok(Self {
            host,
            port,
            validator,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use checkmate_core::validator::DEFAULT_TIMEOUT;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.addr(), "127.0.0.1:8080");
        assert_eq!(cfg.validator.program(), "check-jsonschema");
        assert_eq!(cfg.validator.timeout(), Some(DEFAULT_TIMEOUT));
    }

    #[test]
    fn overrides() {
        let cfg = config(&[
            ("CHECKMATE_HOST", "0.0.0.0"),
            ("CHECKMATE_PORT", "9000"),
            ("CHECKMATE_VALIDATOR", "uvx check-jsonschema"),
            ("CHECKMATE_VALIDATOR_TIMEOUT_SECS", "5"),
        ])
        .unwrap();
        assert_eq!(cfg.addr(), "0.0.0.0:9000");
        assert_eq!(cfg.validator.program(), "uvx");
        assert_eq!(cfg.validator.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn zero_timeout_is_unbounded() {
        let cfg = config(&[("CHECKMATE_VALIDATOR_TIMEOUT_SECS", "0")]).unwrap();
        assert_eq!(cfg.validator.timeout(), None);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            config(&[("CHECKMATE_PORT", "http")]),
            Err(ConfigError::InvalidPort { .. })
        ));
        assert!(matches!(
            config(&[("CHECKMATE_VALIDATOR_TIMEOUT_SECS", "-1")]),
            Err(ConfigError::InvalidTimeout { .. })
        ));
        assert!(matches!(
            config(&[("CHECKMATE_VALIDATOR", "  ")]),
            Err(ConfigError::EmptyValidator)
        ));
    }
}
