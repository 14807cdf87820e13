use anyhow::{Context, Result};
use owl_authz::UnknownFilterPolicy;
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
pub const DEFAULT_USER_HEADER: &str = "x-owl-user";

// Console configuration sourced from environment variables.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub bind_addr: SocketAddr,
    pub snapshot_path: Option<PathBuf>,
    pub unknown_filter: UnknownFilterPolicy,
    pub user_header: String,
}

#[derive(Debug, Deserialize)]
struct ConsoleConfigOverride {
    bind_addr: Option<String>,
    snapshot_path: Option<PathBuf>,
    unknown_filter: Option<UnknownFilterPolicy>,
    user_header: Option<String>,
}

impl ConsoleConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = std::env::var("OWL_CONSOLE_BIND")
            .unwrap_or_else(|_| DEFAULT_BIND.to_string())
            .parse()
            .with_context(|| "parse OWL_CONSOLE_BIND")?;
        let snapshot_path = std::env::var("OWL_CONSOLE_SNAPSHOT").ok().map(PathBuf::from);
        let unknown_filter = match std::env::var("OWL_CONSOLE_UNKNOWN_FILTER") {
            Ok(value) => value
                .parse::<UnknownFilterPolicy>()
                .map_err(anyhow::Error::msg)
                .with_context(|| "parse OWL_CONSOLE_UNKNOWN_FILTER")?,
            Err(_) => UnknownFilterPolicy::default(),
        };
        let user_header = std::env::var("OWL_CONSOLE_USER_HEADER")
            .unwrap_or_else(|_| DEFAULT_USER_HEADER.to_string());
        Ok(Self {
            bind_addr,
            snapshot_path,
            unknown_filter,
            user_header: user_header.to_ascii_lowercase(),
        })
    }

    pub fn from_env_or_yaml() -> Result<Self> {
        let mut config = Self::from_env()?;
        if let Ok(path) = std::env::var("OWL_CONSOLE_CONFIG") {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("read OWL_CONSOLE_CONFIG: {path}"))?;
            config.apply_yaml(&contents)?;
        }
        Ok(config)
    }

    /// Layer a YAML override on top of the current values.
    pub fn apply_yaml(&mut self, contents: &str) -> Result<()> {
        let override_cfg: ConsoleConfigOverride =
            serde_yaml::from_str(contents).with_context(|| "parse console config yaml")?;
        if let Some(value) = override_cfg.bind_addr {
            self.bind_addr = value.parse().with_context(|| "parse bind_addr")?;
        }
        if let Some(value) = override_cfg.snapshot_path {
            self.snapshot_path = Some(value);
        }
        if let Some(value) = override_cfg.unknown_filter {
            self.unknown_filter = value;
        }
        if let Some(value) = override_cfg.user_header {
            self.user_header = value.to_ascii_lowercase();
        }
        Ok(())
    }
}
