//! Gateway configuration loaded from `gateway.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

/// Gateway configuration (TOML).
///
/// Intended to be edited by humans. Missing fields default to the values
/// the original deployment shipped with.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GatewayConfig {
    /// Origin that redirect targets are built on for non-local traffic.
    ///
    /// The shipped default deliberately points deployed traffic back at a
    /// local development server, matching the system this gateway replaces.
    /// It is kept injectable here so it can be corrected without touching
    /// dispatch logic.
    pub remote_origin: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            remote_origin: "http://localhost:3002".to_string(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.remote_origin.trim().is_empty() {
            return Err(anyhow!("remote_origin must be non-empty"));
        }
        if !self.remote_origin.starts_with("http://")
            && !self.remote_origin.starts_with("https://")
        {
            return Err(anyhow!("remote_origin must start with http:// or https://"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `GatewayConfig::default()`.
pub fn load_config(path: &Path) -> Result<GatewayConfig> {
    if !path.exists() {
        let cfg = GatewayConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: GatewayConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
