use std::sync::OnceLock;

use regex::Regex;

static FENCE_REGEX: OnceLock<Regex> = OnceLock::new();

fn fence_regex() -> &'static Regex {
    FENCE_REGEX
        .get_or_init(|| Regex::new(r"(?is)```(?:json)?\s*(.*?)\s*```").expect("FENCE_REGEX is valid"))
}

/// Inner content of the first fenced block, or `text` unchanged when there
/// is none. The optional `json` tag is matched case-insensitively.
pub fn unwrap_code_fence(text: &str) -> &str {
    fence_regex()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_tagged_fence() {
        assert_eq!(unwrap_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn test_untagged_fence() {
        assert_eq!(unwrap_code_fence("```\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn test_fence_with_preamble() {
        assert_eq!(
            unwrap_code_fence("here is the json ```Json {\"a\":1} ``` bye"),
            "{\"a\":1}"
        );
    }

    #[test]
    fn test_first_fence_only() {
        assert_eq!(
            unwrap_code_fence("```json\n{\"a\":1}\n```\n```json\n{\"b\":2}\n```"),
            "{\"a\":1}"
        );
    }

    #[test]
    fn test_no_fence() {
        let text = "{\"key\":\"val\"}";
        assert_eq!(unwrap_code_fence(text), text);
    }

    #[test]
    fn test_unterminated_fence_is_left_alone() {
        let text = "```json\n{\"a\":1}";
        assert_eq!(unwrap_code_fence(text), text);
    }
}
