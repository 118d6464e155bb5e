//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `taskwise_core::api` instead of reaching into internal modules.

pub use crate::completion::{
    reply_content, ChatMessage, ChatRole, CompletionPlugin, CompletionRequest,
};
pub use crate::config::{
    load, load_default, load_from_path, resolve_config, AnalyzeConfig, AppConfig, CompletionConfig, HttpServerConfig,
    LoggingConfig, ScheduleConfig,
};
pub use crate::engine::{analyze_tasks, generate_schedule, EMPTY_REPLY_FALLBACK, NO_TASKS_REPLY};
pub use crate::error::{
    AnalyzeError, AssignmentError, CliError, CompletionError, NormalizeError, TransportErrorKind,
};
pub use crate::model::{tasks_from_body, validate_assignments, Assignment, Priority, Task};
pub use crate::normalize::{extract_json_object, normalize_assignments, unwrap_code_fence};
pub use crate::prompt::{priority_prompt, render_task_lines, schedule_prompt};
