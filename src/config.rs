//! Configuration for phishwatch

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration for the scanner service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Scoring and gating configuration
    #[serde(default)]
    pub scan: ScanConfig,
    /// HTTP fetch configuration
    #[serde(default)]
    pub fetch: FetchConfig,
    /// HTTP API server configuration
    #[serde(default)]
    pub http: HttpConfig,
    /// Path to the whitelist CSV (must contain a `domain` column)
    #[serde(default = "default_whitelist_path")]
    pub whitelist_path: PathBuf,
}

fn default_whitelist_path() -> PathBuf {
    PathBuf::from("whitelist.csv")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan: ScanConfig::default(),
            fetch: FetchConfig::default(),
            http: HttpConfig::default(),
            whitelist_path: default_whitelist_path(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration fields.
    ///
    /// Collects all validation errors and reports them together so the user
    /// can fix everything in one pass.
    pub fn validate(&self) -> Result<()> {
        let mut errors: Vec<String> = Vec::new();

        if self.scan.lexical_threshold > 100 {
            errors.push("lexical_threshold must be between 0 and 100".to_string());
        }
        if self.scan.max_concurrent_evaluations == 0 {
            errors.push("max_concurrent_evaluations must be positive".to_string());
        }
        if self.scan.max_concurrent_evaluations > 64 {
            errors.push("max_concurrent_evaluations must be <= 64".to_string());
        }

        if self.fetch.page_timeout_secs == 0 {
            errors.push("page_timeout_secs must be positive".to_string());
        }
        if self.fetch.image_timeout_secs == 0 {
            errors.push("image_timeout_secs must be positive".to_string());
        }
        if self.fetch.max_image_bytes == 0 {
            errors.push("max_image_bytes must be positive".to_string());
        }

        if let Some(port_str) = self.http.listen_addr.rsplit(':').next() {
            match port_str.parse::<u32>() {
                Ok(port) if port == 0 || port > 65535 => {
                    errors.push(format!(
                        "HTTP listen port must be between 1 and 65535, got {}",
                        port
                    ));
                }
                Ok(_) => {}
                Err(_) => errors.push(format!(
                    "Invalid HTTP listen address '{}'",
                    self.http.listen_addr
                )),
            }
        }

        if self.whitelist_path.as_os_str().is_empty() {
            errors.push("whitelist_path must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            anyhow::bail!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            );
        }
    }
}

/// Scoring and gating configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Minimum lexical ratio for a (parent, child) pair to be evaluated
    #[serde(default = "default_lexical_threshold")]
    pub lexical_threshold: u32,
    /// Bounded worker pool size for concurrent pair evaluations
    #[serde(default = "default_max_concurrent_evaluations")]
    pub max_concurrent_evaluations: usize,
}

fn default_lexical_threshold() -> u32 {
    70
}

fn default_max_concurrent_evaluations() -> usize {
    16
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            lexical_threshold: default_lexical_threshold(),
            max_concurrent_evaluations: default_max_concurrent_evaluations(),
        }
    }
}

/// HTTP fetch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Page fetch timeout (seconds)
    #[serde(default = "default_page_timeout_secs")]
    pub page_timeout_secs: u64,
    /// Favicon image fetch timeout (seconds)
    #[serde(default = "default_image_timeout_secs")]
    pub image_timeout_secs: u64,
    /// Connection timeout (seconds)
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Maximum redirects to follow
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
    /// Maximum favicon image size (bytes)
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: usize,
    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_page_timeout_secs() -> u64 {
    10
}

fn default_image_timeout_secs() -> u64 {
    10
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_max_redirects() -> usize {
    10
}

fn default_max_image_bytes() -> usize {
    2 * 1024 * 1024 // 2 MB
}

fn default_user_agent() -> String {
    "PhishwatchScanner/0.1 (+https://github.com/phishwatch)".to_string()
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            page_timeout_secs: default_page_timeout_secs(),
            image_timeout_secs: default_image_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            max_redirects: default_max_redirects(),
            max_image_bytes: default_max_image_bytes(),
            user_agent: default_user_agent(),
        }
    }
}

/// HTTP API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Listen address for the HTTP server (e.g., "0.0.0.0:8080")
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Enable CORS (the scanner is typically driven from a browser UI)
    #[serde(default = "default_cors_enabled")]
    pub cors_enabled: bool,
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_cors_enabled() -> bool {
    true
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            cors_enabled: default_cors_enabled(),
        }
    }
}
