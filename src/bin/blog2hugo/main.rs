use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use spdlog::{info, warn};

use blog2hugo::config::{Config, Provider};
use blog2hugo::logger::configure_logger;
use blog2hugo::pacing::FixedDelay;
use blog2hugo::pipeline::{migrate, MigrateOptions};
use blog2hugo::rewrite::ollama::OLLAMA_BASE_URL;
use blog2hugo::rewrite::{GroqClient, OllamaClient, Rewriter};

use crate::config::open_config;

mod config;

const CFG_FILE_NAME: &str = "blog2hugo.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Blogger export file (Atom XML)
    export_file: PathBuf,

    /// Directory where the posts are written. Created if missing
    target_dir: PathBuf,

    /// Additional metadata line to set in every front matter, e.g. 'series = "old blog"'
    #[arg(short, long)]
    extra: Option<String>,

    /// Config path
    #[arg(short, long)]
    config_path: Option<PathBuf>,

    /// Service used to rewrite the posts. Overrides the config file
    #[arg(short, long, value_enum)]
    provider: Option<Provider>,

    /// Seconds to wait after each written post. Overrides the config file
    #[arg(short, long)]
    delay_secs: Option<u64>,
}

fn ollama_base_url(config: &Config) -> String {
    if let Some(ref base_url) = config.rewrite.base_url {
        return base_url.clone();
    }

    match env::var("OLLAMA_HOST") {
        Ok(host) if host.starts_with("http://") || host.starts_with("https://") => host,
        Ok(host) if !host.is_empty() => format!("http://{}", host),
        _ => OLLAMA_BASE_URL.to_string(),
    }
}

fn build_rewriter(config: &Config, provider: Provider) -> Result<Box<dyn Rewriter>> {
    let rewrite = &config.rewrite;

    match provider {
        Provider::Groq => {
            let key = env::var("GROQ_API_KEY").context("GROQ_API_KEY is not set")?;
            let mut client = GroqClient::new(&key, config.timeout()).context("Error creating Groq client")?;
            if let Some(ref base_url) = rewrite.base_url {
                client = client.with_base_url(base_url);
            }
            if let Some(ref model) = rewrite.model {
                client = client.with_model(model);
            }
            if let Some(max_tokens) = rewrite.max_tokens {
                client = client.with_max_tokens(max_tokens);
            }
            Ok(Box::new(client))
        }
        Provider::Ollama => {
            let mut client = OllamaClient::new(&ollama_base_url(config), config.timeout())
                .context("Error creating Ollama client")?;
            if let Some(ref model) = rewrite.model {
                client = client.with_model(model);
            }
            Ok(Box::new(client))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = open_config(args.config_path).map_err(|err| anyhow!("{}\nPlease run blog2hugo --help", err))?;

    if let Some(ref log) = config.log {
        if let Err(err) = configure_logger(log) {
            warn!("Error creating logger sinks. Using console instead. Desc={}", err);
        }
    }

    let provider = args.provider.unwrap_or_else(|| config.provider());
    let delay = args.delay_secs.map(Duration::from_secs).unwrap_or_else(|| config.delay());
    let rewriter = build_rewriter(&config, provider)?;

    info!("Migrating {} into {} using {:?}", args.export_file.display(), args.target_dir.display(), provider);

    let options = MigrateOptions {
        out_dir: args.target_dir,
        extension: config.extension().to_string(),
        extra: args.extra.filter(|extra| !extra.is_empty()),
    };
    migrate(&args.export_file, options, rewriter.as_ref(), &FixedDelay(delay)).await?;

    Ok(())
}
