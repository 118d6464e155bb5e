//! HTTP服务器状态管理

use chrono::{DateTime, Utc};
use std::sync::Arc;
use taskwise_core::api::{AppConfig, CompletionPlugin};

/// 应用状态（在所有handlers间共享，只读）
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub completion: Arc<dyn CompletionPlugin>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: AppConfig, completion: Arc<dyn CompletionPlugin>) -> Self {
        Self {
            config: Arc::new(config),
            completion,
            started_at: Utc::now(),
        }
    }

    pub fn uptime_seconds(&self) -> f64 {
        (Utc::now() - self.started_at).num_milliseconds() as f64 / 1000.0
    }
}
