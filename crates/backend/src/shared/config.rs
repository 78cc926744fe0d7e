use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Directory served as the static site.
    pub root: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Catalog files tried in order; relative paths resolve against the site root.
    pub candidates: Vec<String>,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[site]
root = "site"

[catalog]
candidates = ["assets/data/projects.json", "data/projects.json"]
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.catalog.candidates.is_empty() {
        anyhow::bail!("[catalog] candidates must name at least one file");
    }
    Ok(config)
}

impl Config {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server.host, self.server.port)
    }

    /// Site root; relative paths resolve against the executable directory
    /// when it exists there, otherwise against the working directory.
    pub fn site_root(&self) -> PathBuf {
        let root = Path::new(&self.site.root);
        if root.is_absolute() {
            return root.to_path_buf();
        }

        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let resolved = exe_dir.join(root);
                if resolved.exists() {
                    return resolved;
                }
            }
        }

        root.to_path_buf()
    }

    /// Catalog candidates as filesystem paths, in configured order.
    pub fn catalog_paths(&self, site_root: &Path) -> Vec<String> {
        self.catalog
            .candidates
            .iter()
            .map(|candidate| {
                let path = Path::new(candidate);
                let resolved = if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    site_root.join(path)
                };
                resolved.to_string_lossy().into_owned()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.site.root, "site");
        assert_eq!(
            config.catalog.candidates,
            vec!["assets/data/projects.json", "data/projects.json"]
        );
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_empty_candidates_rejected() {
        let contents = r#"
[server]
host = "127.0.0.1"
port = 8080

[site]
root = "public"

[catalog]
candidates = []
"#;
        assert!(parse_config(contents).is_err());
    }

    #[test]
    fn test_catalog_paths_resolve_against_site_root() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        config.catalog.candidates = vec!["assets/p.json".into(), "/srv/p.json".into()];
        let paths = config.catalog_paths(Path::new("/var/www"));
        assert_eq!(paths, vec!["/var/www/assets/p.json", "/srv/p.json"]);
    }
}
