// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Pesowise", "pesowise"));

/// Connection settings for the hosted store. Everything is per-user: reads
/// and writes are always scoped to `user_id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub service_url: String,
    pub api_key: String,
    pub user_id: String,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.service_url.is_empty() {
            anyhow::bail!("service_url is not set; run 'pesowise config set --service-url <URL>'");
        }
        if self.api_key.is_empty() {
            anyhow::bail!("api_key is not set; run 'pesowise config set --api-key <KEY>'");
        }
        if self.user_id.is_empty() {
            anyhow::bail!("user_id is not set; run 'pesowise config set --user-id <ID>'");
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    let dir = proj.config_dir();
    fs::create_dir_all(dir).context("Failed to create config dir")?;
    Ok(dir.join("config.json"))
}

pub fn load() -> Result<Config> {
    load_from(&config_path()?)
}

pub fn save(cfg: &Config) -> Result<()> {
    save_to(cfg, &config_path()?)
}

pub fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read config at {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Parse config at {}", path.display()))
}

pub fn save_to(cfg: &Config, path: &Path) -> Result<()> {
    let raw = serde_json::to_string_pretty(cfg)?;
    fs::write(path, raw).with_context(|| format!("Write config at {}", path.display()))?;
    Ok(())
}
