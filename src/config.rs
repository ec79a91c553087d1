use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs, io};

use clap::ValueEnum;
use serde::Deserialize;

use crate::pacing::DEFAULT_DELAY;
use crate::pipeline::DEFAULT_EXTENSION;

const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Deserialize, ValueEnum, Copy, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Groq,
    Ollama,
}

#[derive(Deserialize, Default)]
pub struct Rewrite {
    pub provider: Option<Provider>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub max_tokens: Option<u32>,
    pub timeout_secs: Option<u64>,
}

#[derive(Deserialize, Default)]
pub struct Output {
    pub extension: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct Pacing {
    pub delay_secs: Option<u64>,
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub rewrite: Rewrite,
    #[serde(default)]
    pub output: Output,
    #[serde(default)]
    pub pacing: Pacing,
    pub log: Option<Log>,
}

impl Config {
    pub fn provider(&self) -> Provider {
        self.rewrite.provider.unwrap_or_default()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.rewrite.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub fn delay(&self) -> Duration {
        self.pacing.delay_secs.map(Duration::from_secs).unwrap_or(DEFAULT_DELAY)
    }

    pub fn extension(&self) -> &str {
        self.output.extension.as_deref().unwrap_or(DEFAULT_EXTENSION)
    }
}

fn parse_path(path: PathBuf) -> PathBuf {
    if !path.starts_with("${exe_dir}") {
        return path;
    }

    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    match (exe_dir, path.strip_prefix("${exe_dir}")) {
        (Some(exe_dir), Ok(rest)) => exe_dir.join(rest),
        _ => path,
    }
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    if let Some(ref mut log) = cfg.log {
        log.location = log.location.take().map(parse_path);
    }

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}
