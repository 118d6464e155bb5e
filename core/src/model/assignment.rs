use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AssignmentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(format!("unknown priority: {other}")),
        }
    }
}

/// Task text paired with a model-assigned priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub text: String,
    pub priority: Priority,
}

impl Assignment {
    fn from_value(index: usize, value: &Value) -> Result<Self, AssignmentError> {
        let obj = value
            .as_object()
            .ok_or(AssignmentError::NotAnObject { index })?;

        let text = obj
            .get("text")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(AssignmentError::MissingText { index })?;

        let raw_priority = obj.get("priority");
        let priority = raw_priority
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<Priority>().ok())
            .ok_or_else(|| AssignmentError::InvalidPriority {
                index,
                value: raw_priority
                    .map(|v| match v {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .unwrap_or_default(),
            })?;

        Ok(Self {
            text: text.to_string(),
            priority,
        })
    }
}

/// Strict check: every entry is an object with non-empty `text` and a
/// `priority` in {high, medium, low}. Priorities are canonicalized to
/// lowercase.
pub fn validate_assignments(raw: &[Value]) -> Result<Vec<Assignment>, AssignmentError> {
    raw.iter()
        .enumerate()
        .map(|(idx, v)| Assignment::from_value(idx, v))
        .collect()
}
