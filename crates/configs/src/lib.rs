use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

pub const DEFAULT_GITHUB_API_BASE: &str = "https://api.github.com";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub github: GithubConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubConfig {
    /// Repository shown on the site, in `owner/name` form.
    #[serde(default)]
    pub repo: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self { repo: String::new(), token: None, api_base: default_api_base() }
    }
}

fn default_api_base() -> String {
    DEFAULT_GITHUB_API_BASE.to_string()
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        // github settings may come entirely from the environment
        self.github.normalize_from_env();
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if let Some(w) = self.worker_threads {
            if w == 0 { self.worker_threads = Some(4); }
        } else {
            self.worker_threads = Some(4);
        }
        Ok(())
    }
}

impl GithubConfig {
    /// Environment variables win over the TOML file so deployments can keep
    /// the token out of the config.
    pub fn normalize_from_env(&mut self) {
        if let Ok(repo) = std::env::var("GITHUB_REPO") {
            if !repo.trim().is_empty() {
                self.repo = repo;
            }
        }
        if self.token.is_none() {
            if let Ok(token) = std::env::var("GITHUB_TOKEN") {
                if !token.is_empty() {
                    self.token = Some(token);
                }
            }
        }
        if let Ok(base) = std::env::var("GITHUB_API_BASE") {
            if !base.trim().is_empty() {
                self.api_base = base;
            }
        }
        self.repo = self.repo.trim().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 3000

            [github]
            repo = "acme/site"
            "#,
        )
        .expect("parse");
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.github.repo, "acme/site");
        assert_eq!(cfg.github.api_base, DEFAULT_GITHUB_API_BASE);
        assert!(cfg.github.token.is_none());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let mut cfg: AppConfig = toml::from_str("").expect("parse");
        assert_eq!(cfg.server.port, 8080);
        assert!(cfg.github.repo.is_empty());
        cfg.server.normalize().expect("normalize");
        assert_eq!(cfg.server.worker_threads, Some(4));
    }

    #[test]
    fn zero_port_is_rejected() {
        let mut cfg: AppConfig = toml::from_str("[server]\nhost = \"x\"\nport = 0\n").expect("parse");
        assert!(cfg.server.normalize().is_err());
    }
}
