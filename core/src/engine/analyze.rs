use chrono::NaiveDate;
use serde_json::Value;

use crate::completion::{reply_content, CompletionPlugin, CompletionRequest};
use crate::config::AppConfig;
use crate::error::{AnalyzeError, NormalizeError};
use crate::model::{validate_assignments, Task};
use crate::normalize::normalize_assignments;
use crate::prompt::{priority_prompt, render_task_lines, PRIORITY_SYSTEM_MESSAGE};

/// Ask the model for a priority per open task.
///
/// Returns an empty list without touching the network when every task is
/// completed. Entries pass through as the model wrote them unless
/// `analyze.strict_assignments` is on.
#[tracing::instrument(name = "engine.analyze", skip_all, fields(tasks = tasks.len()))]
pub async fn analyze_tasks(
    client: &dyn CompletionPlugin,
    cfg: &AppConfig,
    tasks: &[Task],
    today: NaiveDate,
) -> Result<Vec<Value>, AnalyzeError> {
    let lines = render_task_lines(tasks);
    if lines.is_empty() {
        tracing::debug!("no open tasks, skipping completion call");
        return Ok(Vec::new());
    }

    let request = CompletionRequest::new(
        cfg.completion.model.clone(),
        PRIORITY_SYSTEM_MESSAGE,
        priority_prompt(&lines, today),
    );
    let body = client.complete(request).await.inspect_err(|e| {
        tracing::error!(client = client.name(), error = %e, "analyze completion failed");
    })?;
    tracing::debug!(raw = %body, "completion raw response");

    let assignments = normalize_assignments(reply_content(&body)).inspect_err(log_normalize_failure)?;

    if !cfg.analyze.strict_assignments {
        return Ok(assignments);
    }

    let validated = validate_assignments(&assignments).inspect_err(|e| {
        tracing::error!(error = %e, "assignment validation failed");
    })?;
    Ok(validated
        .into_iter()
        .map(|a| serde_json::json!({ "text": a.text, "priority": a.priority.as_str() }))
        .collect())
}

fn log_normalize_failure(err: &NormalizeError) {
    match err {
        NormalizeError::NoJsonFound { content } => {
            tracing::error!(content = %content, "no JSON object found in completion reply")
        }
        NormalizeError::InvalidJson { candidate, source } => {
            tracing::error!(candidate = %candidate, error = %source, "completion reply JSON failed to parse")
        }
        NormalizeError::MissingAssignments => {
            tracing::error!("completion reply has no assignments array")
        }
    }
}
