//! Prompt construction for the priority and schedule requests.

mod listing;
mod templates;

pub use listing::{eligible_tasks, render_task_line, render_task_lines};
pub use templates::{
    priority_prompt, schedule_prompt, DEFAULT_SCHEDULE_START, PRIORITY_SYSTEM_MESSAGE,
    SCHEDULE_SYSTEM_MESSAGE,
};
