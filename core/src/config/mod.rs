mod loader;
mod types;

pub use loader::{
    apply_env_overrides, get_taskwise_data_dir, load, load_default, load_from_path, resolve_config,
    ENV_API_KEY, ENV_BASE_URL, ENV_MODEL, ENV_OPENROUTER_API_KEY, ENV_PORT,
};
pub use types::{
    AnalyzeConfig, AppConfig, CompletionConfig, HttpServerConfig, LoggingConfig, ScheduleConfig,
};
