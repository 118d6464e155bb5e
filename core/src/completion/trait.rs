use async_trait::async_trait;
use serde_json::Value;

use super::types::CompletionRequest;
use crate::error::CompletionError;

/// One round trip to a chat-completion API.
///
/// Implementations perform exactly one request per call and return the
/// decoded response body untouched; callers pick the reply text out with
/// [`super::reply_content`].
#[async_trait]
pub trait CompletionPlugin: Send + Sync {
    fn name(&self) -> &str;
    async fn complete(&self, request: CompletionRequest) -> Result<Value, CompletionError>;
}
