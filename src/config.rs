use std::{
    fs::File,
    io::{ErrorKind, Read},
    net::SocketAddr,
    path::{Path, PathBuf},
};

use color_eyre::{Result, eyre::Context};
use serde::Deserialize;

pub const CONFIG_FILE: &str = "csvplot.toml";

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Directory holding the page, the wasm bundle and the data file
    pub site_dir: PathBuf,
    pub data_path: PathBuf,
    pub bind_address: SocketAddr,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            site_dir: PathBuf::from("site"),
            data_path: PathBuf::from("site/data_d3.csv"),
            bind_address: SocketAddr::from(([127, 0, 0, 1], 3030)),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let mut config_text = String::new();

        File::open(path)
            .and_then(|mut f| f.read_to_string(&mut config_text))
            .wrap_err_with(|| format!("Cannot read config file at {:?}", path))?;

        toml::from_str(&config_text).wrap_err("Malformed config file")
    }

    /// Like [`AppConfig::load`], but a missing file means defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match std::fs::metadata(path) {
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            _ => Self::load(path),
        }
    }
}
