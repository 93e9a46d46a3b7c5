//! Configuration loading and representation.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Context;

/// Environment variable overriding the snapshot directory.
pub const DATA_DIR_ENV: &str = "STOCKROOM_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding one JSON file per snapshot key.
    pub data_dir: PathBuf,
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// `STOCKROOM_DATA_DIR` if set, else `{app_data_dir}/stockroom`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::resolve(std::env::var_os(DATA_DIR_ENV))
    }

    fn resolve(override_dir: Option<OsString>) -> anyhow::Result<Self> {
        match override_dir {
            Some(dir) if !dir.is_empty() => Ok(Self::new(dir)),
            _ => Ok(Self::new(default_data_dir()?)),
        }
    }
}

fn default_data_dir() -> anyhow::Result<PathBuf> {
    let mut dir = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .context(
            "failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share",
        )?;

    dir.push("stockroom");
    Ok(dir)
}
