use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A caller-owned to-do item. Lives for a single request.
///
/// Decoding is lenient on purpose: browsers post whatever their local
/// storage holds, so `completed` follows JSON truthiness and blank
/// `priority`/`deadline` values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: String,

    #[serde(default, deserialize_with = "truthy")]
    pub completed: bool,

    #[serde(
        default,
        deserialize_with = "non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority: Option<String>,

    #[serde(
        default,
        deserialize_with = "non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub deadline: Option<String>,
}

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }

    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }
}

/// Reads `tasks` from a request body. Anything other than an array yields
/// an empty list; array entries that are not objects are skipped.
pub fn tasks_from_body(body: &Value) -> Vec<Task> {
    let Some(items) = body.get("tasks").and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(idx, item)| {
            if !item.is_object() {
                tracing::warn!(index = idx, "skipping non-object task entry");
                return None;
            }
            match Task::deserialize(item) {
                Ok(task) => Some(task),
                Err(e) => {
                    tracing::warn!(index = idx, error = %e, "skipping undecodable task entry");
                    None
                }
            }
        })
        .collect()
}

fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn truthy<'de, D>(d: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(is_truthy(&Value::deserialize(d)?))
}

fn lenient_text<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

fn non_blank<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    })
}
