pub mod r#trait;
mod types;

pub use r#trait::CompletionPlugin;
pub use types::{reply_content, ChatMessage, ChatRole, CompletionRequest};
