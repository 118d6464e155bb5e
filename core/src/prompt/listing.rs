use crate::model::Task;

const UNSPECIFIED_PRIORITY: &str = "Not Specified";

/// Open tasks, in caller order.
pub fn eligible_tasks(tasks: &[Task]) -> Vec<&Task> {
    tasks.iter().filter(|t| !t.completed).collect()
}

/// `"<n>. [<Priority> Priority] <text>[ (Due: <deadline>)]"`, `n` 1-based.
pub fn render_task_line(position: usize, task: &Task) -> String {
    let priority = task
        .priority
        .as_deref()
        .map(capitalize_first)
        .unwrap_or_else(|| UNSPECIFIED_PRIORITY.to_string());

    let mut line = format!("{position}. [{priority} Priority] {}", task.text);
    if let Some(deadline) = task.deadline.as_deref() {
        line.push_str(&format!(" (Due: {deadline})"));
    }
    line
}

/// Filters out completed tasks and numbers the rest.
pub fn render_task_lines(tasks: &[Task]) -> Vec<String> {
    eligible_tasks(tasks)
        .into_iter()
        .enumerate()
        .map(|(idx, task)| render_task_line(idx + 1, task))
        .collect()
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
