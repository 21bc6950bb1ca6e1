use serde::Deserialize;
use std::path::Path;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Address the server binds to (overridable via BIND_ADDR)
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Largest accepted upload body in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_max_upload_bytes() -> usize {
    8 * 1024 * 1024 // 8 MiB
}

impl AppConfig {
    /// Load configuration from a YAML file, falling back to defaults on any
    /// read or parse failure.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!(
                        config = %path.display(),
                        bind_addr = %config.bind_addr,
                        max_upload_bytes = config.max_upload_bytes,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Effective bind address: BIND_ADDR overrides the config file.
    pub fn effective_bind_addr(&self) -> String {
        std::env::var("BIND_ADDR").unwrap_or_else(|_| self.bind_addr.clone())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}
