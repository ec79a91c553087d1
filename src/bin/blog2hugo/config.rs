use std::env;
use std::path::PathBuf;

use spdlog::info;

use blog2hugo::config::{read_config, Config};

use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()));
    let cur_dir = env::current_dir().ok();
    let cfg_dir = dirs::config_dir().map(|dir| dir.join("blog2hugo"));

    [exe_dir, cur_dir, cfg_dir]
        .into_iter()
        .flatten()
        .map(|dir| dir.join(CFG_FILE_NAME))
        .find(|path| path.exists())
}

/// An explicit path must exist. Without one, the first file found is used, or the defaults.
pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config, String> {
    let config_path = match cfg_path.or_else(get_config_path) {
        Some(path) => path,
        None => {
            info!("No {} found. Using defaults", CFG_FILE_NAME);
            return Ok(Config::default());
        }
    };

    info!("Reading config from {}", config_path.display());
    let mut config = match read_config(&config_path) {
        Ok(config) => config,
        Err(e) => return Err(e.to_string()),
    };

    if let Some(ref mut log) = config.log {
        if log.location.is_none() {
            log.location = dirs::cache_dir().map(|dir| dir.join("blog2hugo").join("log").join("blog2hugo.log"));
        }
        if let Some(ref location) = log.location {
            info!("Log enabled. Files will be written in {}", location.display());
        }
    }

    Ok(config)
}
