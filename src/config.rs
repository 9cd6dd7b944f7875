use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub procfs: ProcfsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

fn default_port() -> u16 {
    8080
}

fn default_host() -> String {
    "0.0.0.0".into()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProcfsConfig {
    /// Directory holding `stat`, `interrupts` and `meminfo` (a bind-mounted host /proc in containers).
    #[serde(default = "default_procfs_root")]
    pub root: String,
}

impl Default for ProcfsConfig {
    fn default() -> Self {
        Self {
            root: default_procfs_root(),
        }
    }
}

fn default_procfs_root() -> String {
    "/proc".into()
}

impl AppConfig {
    /// Loads `CONFIG_FILE` (default `config.toml`); built-in defaults when the file does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        match std::fs::read_to_string(&path) {
            Ok(s) => Self::load_from_str(&s),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("{} not found, using defaults", path);
                Ok(Self::default())
            }
            Err(e) => Err(anyhow::anyhow!("reading {}: {}", path, e)),
        }
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.server.host.is_empty(),
            "server.host must be non-empty"
        );
        anyhow::ensure!(
            !self.procfs.root.is_empty(),
            "procfs.root must be non-empty"
        );
        Ok(())
    }
}
