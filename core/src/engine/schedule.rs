use crate::completion::{reply_content, CompletionPlugin, CompletionRequest};
use crate::config::AppConfig;
use crate::error::CompletionError;
use crate::model::Task;
use crate::prompt::{render_task_lines, schedule_prompt, SCHEDULE_SYSTEM_MESSAGE};

pub const NO_TASKS_REPLY: &str = "No tasks to generate schedule.";

/// Returned when the completion succeeds but carries no message content.
pub const EMPTY_REPLY_FALLBACK: &str = "No response from completion API.";

/// Free-text daily plan for the open tasks. The reply is returned as-is.
#[tracing::instrument(name = "engine.schedule", skip_all, fields(tasks = tasks.len()))]
pub async fn generate_schedule(
    client: &dyn CompletionPlugin,
    cfg: &AppConfig,
    tasks: &[Task],
) -> Result<String, CompletionError> {
    let lines = render_task_lines(tasks);
    if lines.is_empty() {
        tracing::debug!("no open tasks, skipping completion call");
        return Ok(NO_TASKS_REPLY.to_string());
    }

    let prompt = schedule_prompt(&lines, &cfg.schedule.start_time);
    tracing::debug!(prompt = %prompt, "schedule prompt");

    let request = CompletionRequest::new(
        cfg.completion.model.clone(),
        SCHEDULE_SYSTEM_MESSAGE,
        prompt,
    );
    let body = client.complete(request).await.inspect_err(|e| {
        tracing::error!(client = client.name(), error = %e, "schedule completion failed");
    })?;
    tracing::debug!(raw = %body, "completion raw response");

    let reply = reply_content(&body);
    if reply.is_empty() {
        return Ok(EMPTY_REPLY_FALLBACK.to_string());
    }
    Ok(reply.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::StubCompletion;
    use serde_json::json;

    #[tokio::test]
    async fn test_empty_short_circuits() {
        let stub = StubCompletion::replying("unused");
        let reply = generate_schedule(&stub, &AppConfig::default(), &[])
            .await
            .unwrap();
        assert_eq!(reply, NO_TASKS_REPLY);
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_reply_is_raw_text() {
        let text = "8:00 - Finish report\n```json\n{\"not\":\"parsed\"}\n```";
        let stub = StubCompletion::replying(text);
        let mut cfg = AppConfig::default();
        cfg.schedule.start_time = "9 am".into();
        let reply = generate_schedule(&stub, &cfg, &[Task::new("Finish report")])
            .await
            .unwrap();
        assert_eq!(reply, text);

        let calls = stub.calls.lock().unwrap();
        assert_eq!(calls[0].messages[0].content, SCHEDULE_SYSTEM_MESSAGE);
        assert!(calls[0].messages[1].content.contains("starting from 9 am"));
        assert!(calls[0].messages[1]
            .content
            .contains("1. [Not Specified Priority] Finish report"));
    }

    #[tokio::test]
    async fn test_missing_content_falls_back() {
        let stub = StubCompletion::with_body(json!({"error": "nope"}));
        let reply = generate_schedule(&stub, &AppConfig::default(), &[Task::new("x")])
            .await
            .unwrap();
        assert_eq!(reply, EMPTY_REPLY_FALLBACK);
    }

    #[tokio::test]
    async fn test_upstream_failure() {
        let stub = StubCompletion::failing(500);
        let err = generate_schedule(&stub, &AppConfig::default(), &[Task::new("x")])
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
    }
}
