use std::path::PathBuf;

use clap::Parser;
use taskwise_core::api::AppConfig;

#[derive(Parser, Debug, Default)]
#[command(
    name = "taskwise",
    version,
    about = "Prioritize and schedule to-do tasks through a chat-completion API"
)]
pub struct Args {
    /// Config file; defaults to ~/.taskwise/config.toml, then ./config.toml.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(long)]
    pub port: Option<u16>,

    /// Directory of static assets served for non-API paths.
    #[arg(long)]
    pub static_dir: Option<String>,

    /// Model identifier sent with every completion request.
    #[arg(long)]
    pub model: Option<String>,

    /// EnvFilter directive, e.g. "debug" or "taskwise_core=trace".
    #[arg(long)]
    pub log_level: Option<String>,

    /// Disable the CORS layer.
    #[arg(long)]
    pub no_cors: bool,
}

impl Args {
    /// Command-line flags take precedence over file and environment values.
    pub fn apply_to(&self, cfg: &mut AppConfig) {
        if let Some(host) = &self.host {
            cfg.http_server.host = host.clone();
        }
        if let Some(port) = self.port {
            cfg.http_server.port = port;
        }
        if let Some(dir) = &self.static_dir {
            cfg.http_server.static_dir = dir.clone();
        }
        if let Some(model) = &self.model {
            cfg.completion.model = model.clone();
        }
        if let Some(level) = &self.log_level {
            cfg.logging.level = level.clone();
        }
        if self.no_cors {
            cfg.http_server.cors = false;
        }
    }
}
