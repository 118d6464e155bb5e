//! Prompt → completion → normalization pipelines behind each endpoint.

mod analyze;
mod schedule;

pub use analyze::analyze_tasks;
pub use schedule::{generate_schedule, EMPTY_REPLY_FALLBACK, NO_TASKS_REPLY};
