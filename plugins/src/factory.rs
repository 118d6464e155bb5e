use std::sync::Arc;

use anyhow::Result;

use taskwise_core::api::{AppConfig, CompletionPlugin};

use crate::completion::HttpCompletionClient;

pub fn build_completion(cfg: &AppConfig) -> Result<Arc<dyn CompletionPlugin>> {
    let client = HttpCompletionClient::from_config(&cfg.completion)?;
    tracing::info!(
        endpoint = %client.endpoint(),
        model = %cfg.completion.model,
        timeout_ms = ?cfg.completion.timeout_ms,
        "completion client ready"
    );
    Ok(Arc::new(client))
}
