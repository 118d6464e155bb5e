use chrono::NaiveDate;

pub const PRIORITY_SYSTEM_MESSAGE: &str = "You organize to-do tasks by priority and urgency.";

pub const SCHEDULE_SYSTEM_MESSAGE: &str = "You are a helpful assistant that organizes to-do tasks based on their stated priority and importance.";

pub const DEFAULT_SCHEDULE_START: &str = "8 am";

const PRIORITY_FORMAT_EXAMPLES: &str = r#"Example 1:
{
  "assignments": [
    { "text": "first task text", "priority": "high" },
    { "text": "second task text", "priority": "medium" }
  ]
}
Example 2:
{
  "assignments": [
    { "text": "Finish report", "priority": "high" },
    { "text": "Grocery shopping", "priority": "low" },
    { "text": "Basketball practice", "priority": "medium" }
  ]
}"#;

/// Priority-assignment prompt. `today` anchors due-date urgency.
pub fn priority_prompt(task_lines: &[String], today: NaiveDate) -> String {
    format!(
        "You are an expert task-prioritization assistant. Here are my uncompleted tasks \
(with user-set priority and optional due date):
{listing}

Respond ONLY with a single valid JSON object in this exact format \
(no extra characters before or after, NO markdown, NO backticks):
{examples}

Instructions:
- For every task, output exactly one of: \"high\", \"medium\", or \"low\". Never output \"\" or omit the field.
- If a task has a due date (Due: YYYY-MM-DD), assume today is {today} and treat earlier dates as more urgent.
- Do NOT wrap the task text in extra symbols or markdown.
- Do NOT add extra comments.
- Do NOT merge or split tasks: one assignment object per input task.",
        listing = task_lines.join("\n"),
        examples = PRIORITY_FORMAT_EXAMPLES,
        today = today.format("%Y-%m-%d"),
    )
}

/// Free-text daily plan prompt starting at `start_time` (e.g. "8 am").
pub fn schedule_prompt(task_lines: &[String], start_time: &str) -> String {
    format!(
        "You are a manager helping the user generate a daily schedule starting from {start_time}. \
These are my current uncompleted tasks, each labeled with a user specified priority:

{listing}

Please generate a schedule for me.
Instructions:
- Generate the schedule using logic to make the most efficient and productive schedule for the user to complete all their tasks.",
        listing = task_lines.join("\n"),
    )
}
