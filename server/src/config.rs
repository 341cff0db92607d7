use crate::cli::ServeArgs;
use minijinja::Environment;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config file. Error: {0}")]
    ParseError(#[from] serde_yaml::Error),
    #[error("Failed to read template in config. Error: {0}")]
    ReadError(#[from] minijinja::Error),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StorageConfig {
    pub data_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("database/prompts.json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

fn replace_env_vars(content: String) -> Result<String, ConfigError> {
    let env = Environment::new();
    let template = env.template_from_str(&content)?;
    let parameters = template.undeclared_variables(false);

    let mut variables = HashMap::new();
    parameters.iter().for_each(|k| {
        if let Ok(v) = std::env::var(k) {
            variables.insert(k, v);
        };
    });

    Ok(template.render(variables)?)
}

impl Config {
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(config_path) {
            Ok(content) => {
                let content = replace_env_vars(content)?;
                Ok(serde_yaml::from_str(&content)?)
            }
            Err(_e) => Ok(Self::default()),
        }
    }

    /// `PORT` follows the original deployment convention; CLI flags still win.
    pub fn apply_env_overrides(mut self) -> Self {
        if let Ok(port) = std::env::var("PORT") {
            match port.parse() {
                Ok(port) => self.http.port = port,
                Err(_) => tracing::warn!("Ignoring non-numeric PORT value: {port}"),
            }
        }
        self
    }

    pub fn apply_cli_overrides(mut self, args: &ServeArgs) -> Self {
        if let Some(host) = &args.host {
            self.http.host = host.clone();
        }
        if let Some(port) = args.port {
            self.http.port = port;
        }
        if let Some(cors) = &args.cors_origins {
            self.http.cors_allowed_origins =
                cors.split(',').map(|s| s.trim().to_string()).collect();
        }
        if let Some(data_file) = &args.data_file {
            self.storage.data_file = data_file.clone();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_config_file_is_missing() {
        let config = Config::load("does-not-exist.yaml").unwrap();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 3000);
        assert_eq!(config.http.cors_allowed_origins, vec!["*".to_string()]);
        assert_eq!(config.storage.data_file, PathBuf::from("database/prompts.json"));
    }

    #[test]
    fn test_cli_overrides_win() {
        let args = ServeArgs {
            host: Some("127.0.0.1".to_string()),
            port: Some(8080),
            cors_origins: Some("http://localhost:5173, https://example.com".to_string()),
            data_file: Some(PathBuf::from("/tmp/prompts.json")),
        };

        let config = Config::default().apply_cli_overrides(&args);

        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 8080);
        assert_eq!(
            config.http.cors_allowed_origins,
            vec![
                "http://localhost:5173".to_string(),
                "https://example.com".to_string()
            ]
        );
        assert_eq!(config.storage.data_file, PathBuf::from("/tmp/prompts.json"));
    }
}
