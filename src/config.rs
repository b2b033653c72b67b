use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub github: GitHubSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub recent: RecentSettings,
    #[serde(default)]
    pub cors: CorsSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

#[derive(Debug, Clone, Deserialize)]
pub struct GitHubSettings {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// How many recently updated repositories to fetch per profile
    #[serde(default = "default_recent_repos")]
    pub recent_repos: u8,
}

impl Default for GitHubSettings {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            token: None,
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            recent_repos: default_recent_repos(),
        }
    }
}

impl GitHubSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_api_base() -> String { "https://api.github.com".to_string() }
fn default_timeout_secs() -> u64 { 15 }
fn default_user_agent() -> String { concat!("gitmatch/", env!("CARGO_PKG_VERSION")).to_string() }
fn default_recent_repos() -> u8 { 2 }

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
    #[serde(default = "default_max_entries")]
    pub max_entries: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            max_entries: default_max_entries(),
        }
    }
}

fn default_ttl_secs() -> u64 { 86_400 }
fn default_max_entries() -> u64 { 1000 }

#[derive(Debug, Clone, Deserialize)]
pub struct RecentSettings {
    #[serde(default = "default_recent_capacity")]
    pub capacity: usize,
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,
}

impl Default for RecentSettings {
    fn default() -> Self {
        Self {
            capacity: default_recent_capacity(),
            list_limit: default_list_limit(),
        }
    }
}

fn default_recent_capacity() -> usize { 50 }
fn default_list_limit() -> usize { 3 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsSettings {
    /// Empty means any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with GITMATCH__)
    /// 5. GITHUB_TOKEN for the API token
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., GITMATCH__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        apply_env_overrides(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        apply_env_overrides(settings)?.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("GITMATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("cors.allowed_origins")
}

/// The conventional GITHUB_TOKEN variable wins over any configured token
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    let token = std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());

    match token {
        Some(token) => Config::builder()
            .add_source(settings)
            .set_override("github.token", token)?
            .build(),
        None => Ok(settings),
    }
}
