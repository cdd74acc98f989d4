//! Best-effort recovery of a JSON candidate from raw model text.

use serde_json::Value;

/// Attempts to pull a single JSON value out of raw model output.
///
/// Strategies, stopping at the first success:
///
/// 1. Strict parse of the trimmed full text.
/// 2. The greedy span from the first `{` to the last `}`, strict-parsed.
///
/// The greedy span is a heuristic, not a parser: when multiple JSON-like
/// objects appear in surrounding prose it can capture too much and the parse
/// of the combined span fails. That limitation is covered by tests rather
/// than tightened here.
///
/// Returns `None` when no strategy produces a parseable candidate.
#[must_use]
pub fn recover_candidate(raw: &str) -> Option<Value> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(value) = serde_json::from_str(trimmed) {
        return Some(value);
    }

    // Braces are ASCII, so the byte indices are always char boundaries.
    let start = trimmed.find('{')?;
    let end = trimmed.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&trimmed[start..=end]).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strict_parse_wins() {
        let raw = r#"{"app_name":"X","entities":[],"roles":[]}"#;
        let value = recover_candidate(raw).unwrap();
        assert_eq!(value["app_name"], json!("X"));
    }

    #[test]
    fn brace_span_recovers_embedded_object() {
        let raw = r#"here is your app: {"app_name":"X","entities":[],"roles":[]}"#;
        let value = recover_candidate(raw).unwrap();
        assert_eq!(
            value,
            json!({"app_name": "X", "entities": [], "roles": []})
        );
    }

    #[test]
    fn code_fence_is_handled_by_the_brace_span() {
        let raw = "```json\n{\"app_name\":\"X\",\"entities\":[],\"roles\":[]}\n```";
        let value = recover_candidate(raw).unwrap();
        assert_eq!(value["app_name"], json!("X"));
    }

    #[test]
    fn no_braces_yields_none() {
        assert_eq!(recover_candidate("I could not find an app here."), None);
        assert_eq!(recover_candidate(""), None);
        assert_eq!(recover_candidate("   \n  "), None);
    }

    #[test]
    fn reversed_braces_yield_none() {
        assert_eq!(recover_candidate("} nothing to see {"), None);
    }

    #[test]
    fn greedy_span_over_two_objects_fails_to_parse() {
        // Known limitation: the span covers both objects and is not valid JSON.
        let raw = r#"first {"a": 1} and second {"b": 2}"#;
        assert_eq!(recover_candidate(raw), None);
    }

    #[test]
    fn multibyte_text_around_the_object_is_safe() {
        let raw = "voilà — {\"app_name\":\"Café\",\"entities\":[],\"roles\":[]} — fin";
        let value = recover_candidate(raw).unwrap();
        assert_eq!(value["app_name"], json!("Café"));
    }
}
