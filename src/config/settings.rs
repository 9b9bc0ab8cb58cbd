use std::env;
use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub templates: TemplateConfig,
    #[serde(default)]
    pub overlay: OverlayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the content backend service
    pub endpoint: String,
    /// Request timeout in seconds
    #[serde(default = "default_backend_timeout")]
    pub timeout: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplateConfig {
    /// Directory holding `<name>.html` template sources
    #[serde(default = "default_templates_dir")]
    pub dir: PathBuf,
    /// Ordered list of template names to compose; must include `page`
    pub names: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverlayConfig {
    /// Path prefixes this adapter is authorized to serve
    #[serde(default = "default_overlay_paths")]
    pub paths: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_backend_timeout() -> u64 {
    30 // seconds
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from("templates")
}

fn default_overlay_paths() -> Vec<String> {
    vec!["/overlays".to_string()]
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Start with default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("backend.timeout", 30)?
            .set_default("templates.dir", "templates")?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables
            // SERVER_HOST, SERVER_PORT, BACKEND_ENDPOINT, TEMPLATES_NAMES, etc.
            .add_source(
                Environment::default()
                    .separator("_")
                    .try_parsing(true)
                    .list_separator(","),
            );

        builder.build()?.try_deserialize()
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            paths: default_overlay_paths(),
        }
    }
}
