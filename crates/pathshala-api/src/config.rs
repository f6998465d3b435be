use serde::Deserialize;

/// Deployment environment, drives log format and HSTS
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Service configuration, read from `PATHSHALA_*` environment variables
#[derive(Clone, Debug, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub env: Environment,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Comma-separated list of origins allowed by CORS
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,
}

const ENV_PREFIX: &str = "PATHSHALA_";

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

fn default_allowed_origins() -> String {
    "http://localhost:3000".to_string()
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed(ENV_PREFIX).from_env()
    }

    /// Build a config from explicit `(name, value)` pairs, names including the prefix
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX).from_iter(vars)
    }

    pub fn parsed_allowed_origins(&self) -> Vec<String> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_vars(Vec::new()).unwrap();
        assert_eq!(config.env, Environment::Development);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.parsed_allowed_origins(), ["http://localhost:3000"]);
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_vars(vars(&[
            ("PATHSHALA_ENV", "production"),
            ("PATHSHALA_PORT", "8080"),
            (
                "PATHSHALA_ALLOWED_ORIGINS",
                "https://pathshala.example, ,https://admin.pathshala.example",
            ),
        ]))
        .unwrap();

        assert!(config.env.is_production());
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.parsed_allowed_origins(),
            ["https://pathshala.example", "https://admin.pathshala.example"]
        );
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(ApiConfig::from_vars(vars(&[("PATHSHALA_PORT", "not-a-port")])).is_err());
    }
}
