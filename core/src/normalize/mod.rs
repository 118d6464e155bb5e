//! Pulls the assignment list out of a free-text model reply.
//!
//! Models are told to answer with bare JSON but routinely wrap it in code
//! fences, prepend a sentence, or use `assignment` instead of
//! `assignments`. [`normalize_assignments`] tolerates all of that and
//! returns a tagged error for everything else.

mod extract;
mod fence;

use serde_json::Value;

use crate::error::NormalizeError;

pub use extract::extract_json_object;
pub use fence::unwrap_code_fence;

const ASSIGNMENTS_KEY: &str = "assignments";
const LEGACY_ASSIGNMENT_KEY: &str = "assignment";

/// Reply text → raw assignment entries (not validated per field).
pub fn normalize_assignments(raw: &str) -> Result<Vec<Value>, NormalizeError> {
    let content = unwrap_code_fence(raw.trim());

    let candidate = extract_json_object(content).ok_or_else(|| NormalizeError::NoJsonFound {
        content: content.to_string(),
    })?;

    let mut parsed: Value =
        serde_json::from_str(candidate).map_err(|source| NormalizeError::InvalidJson {
            candidate: candidate.to_string(),
            source,
        })?;

    canonicalize_keys(&mut parsed);

    match parsed.get_mut(ASSIGNMENTS_KEY).map(Value::take) {
        Some(Value::Array(items)) => Ok(items),
        _ => Err(NormalizeError::MissingAssignments),
    }
}

fn canonicalize_keys(parsed: &mut Value) {
    let Some(obj) = parsed.as_object_mut() else {
        return;
    };
    let has_plural = obj.get(ASSIGNMENTS_KEY).is_some_and(is_truthy);
    let has_legacy = obj.get(LEGACY_ASSIGNMENT_KEY).is_some_and(is_truthy);
    if has_plural || !has_legacy {
        return;
    }
    if let Some(legacy) = obj.remove(LEGACY_ASSIGNMENT_KEY) {
        obj.insert(ASSIGNMENTS_KEY.to_string(), legacy);
    }
}

/// `null`, `false`, `0` and `""` count as absent; arrays and objects are
/// present even when empty.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const PLAIN: &str = r#"{"assignments":[{"text":"A","priority":"high"},{"text":"B","priority":"low"}]}"#;

    fn expected() -> Vec<Value> {
        vec![
            json!({"text": "A", "priority": "high"}),
            json!({"text": "B", "priority": "low"}),
        ]
    }

    #[test]
    fn test_plain_json() {
        assert_eq!(normalize_assignments(PLAIN).unwrap(), expected());
    }

    #[test]
    fn test_fenced_json_matches_plain() {
        let tagged = format!("```json\n{PLAIN}\n```");
        let untagged = format!("```\n{PLAIN}\n```");
        let upper = format!("Sure!\n```JSON\n{PLAIN}\n```\nDone.");
        assert_eq!(normalize_assignments(&tagged).unwrap(), expected());
        assert_eq!(normalize_assignments(&untagged).unwrap(), expected());
        assert_eq!(normalize_assignments(&upper).unwrap(), expected());
    }

    #[test]
    fn test_surrounding_prose() {
        let raw = format!("Here are your priorities:\n{PLAIN}\nLet me know if that helps {{:");
        assert_eq!(normalize_assignments(&raw).unwrap(), expected());
    }

    #[test]
    fn test_legacy_singular_key() {
        let raw = r#"{"assignment":[{"text":"A","priority":"medium"}]}"#;
        assert_eq!(
            normalize_assignments(raw).unwrap(),
            vec![json!({"text": "A", "priority": "medium"})]
        );
    }

    #[test]
    fn test_plural_key_wins_over_singular() {
        let raw = r#"{"assignment":[{"text":"old","priority":"low"}],"assignments":[]}"#;
        assert!(normalize_assignments(raw).unwrap().is_empty());
    }

    #[test]
    fn test_falsy_plural_yields_to_singular() {
        let entry = json!({"text": "A", "priority": "high"});
        for plural in ["false", "null", "0", "\"\""] {
            let raw = format!(r#"{{"assignments":{plural},"assignment":[{entry}]}}"#);
            assert_eq!(
                normalize_assignments(&raw).unwrap(),
                vec![entry.clone()],
                "plural = {plural}"
            );
        }
    }

    #[test]
    fn test_falsy_singular_is_not_renamed() {
        assert!(matches!(
            normalize_assignments(r#"{"assignment":false}"#),
            Err(NormalizeError::MissingAssignments)
        ));
    }

    #[test]
    fn test_no_json() {
        let err = normalize_assignments("I cannot help with that.").unwrap_err();
        match err {
            NormalizeError::NoJsonFound { content } => {
                assert_eq!(content, "I cannot help with that.")
            }
            other => panic!("expected NoJsonFound, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_reply() {
        assert!(matches!(
            normalize_assignments("   "),
            Err(NormalizeError::NoJsonFound { .. })
        ));
    }

    #[test]
    fn test_unbalanced_braces() {
        let raw = r#"{"assignments":[{"text":"A","priority":"high"}"#;
        assert!(matches!(
            normalize_assignments(raw),
            Err(NormalizeError::NoJsonFound { .. })
        ));
    }

    #[test]
    fn test_invalid_json_surfaces_candidate() {
        let raw = "prefix {assignments: [text: A]} suffix";
        match normalize_assignments(raw).unwrap_err() {
            NormalizeError::InvalidJson { candidate, .. } => {
                assert_eq!(candidate, "{assignments: [text: A]}")
            }
            other => panic!("expected InvalidJson, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_assignments() {
        assert!(matches!(
            normalize_assignments(r#"{"tasks":[]}"#),
            Err(NormalizeError::MissingAssignments)
        ));
        assert!(matches!(
            normalize_assignments(r#"{"assignments":{"text":"A"}}"#),
            Err(NormalizeError::MissingAssignments)
        ));
        assert!(matches!(
            normalize_assignments(r#"{"assignments":null}"#),
            Err(NormalizeError::MissingAssignments)
        ));
    }

    #[test]
    fn test_entries_pass_through_unvalidated() {
        let raw = r#"{"assignments":[{"text":"A","priority":"urgent"},7]}"#;
        assert_eq!(
            normalize_assignments(raw).unwrap(),
            vec![json!({"text": "A", "priority": "urgent"}), json!(7)]
        );
    }
}
