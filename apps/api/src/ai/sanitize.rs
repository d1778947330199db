//! Response sanitization — recovers the JSON payload from raw model output.
//!
//! Generation endpoints routinely wrap valid JSON in explanatory prose or
//! markdown fences despite instructions. That is an expected condition, not
//! an exceptional one, so the pipeline always passes raw output through here
//! before parsing.

use serde::de::DeserializeOwned;

/// Extracts the JSON span from raw model output.
///
/// 1. Strip leading/trailing code-fence delimiters.
/// 2. Trim whitespace.
/// 3. If prose remains around the payload, truncate to the span from the
///    first `{`/`[` to the last matching `}`/`]`.
///
/// Idempotent: already-clean JSON passes through unchanged.
pub fn extract_json(raw: &str) -> &str {
    let text = strip_fences(raw.trim()).trim();

    let Some(start) = text.find(['{', '[']) else {
        return text;
    };
    let closer = if text.as_bytes()[start] == b'{' {
        '}'
    } else {
        ']'
    };
    match text.rfind(closer) {
        Some(end) if end > start => &text[start..=end],
        _ => &text[start..],
    }
}

/// Sanitizes raw model output and parses it as `T`.
pub fn parse_sanitized<T: DeserializeOwned>(raw: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(extract_json(raw))
}

/// Strips ```json ... ``` or ``` ... ``` delimiters wrapping the text.
fn strip_fences(text: &str) -> &str {
    let stripped = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match stripped {
        Some(inner) => inner
            .trim_start()
            .strip_suffix("```")
            .unwrap_or_else(|| inner.trim_start()),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const CLEAN: &str = r#"{"role": "Engineer", "median": 95000}"#;

    #[test]
    fn test_clean_json_passes_through() {
        assert_eq!(extract_json(CLEAN), CLEAN);
    }

    #[test]
    fn test_fenced_json_is_unwrapped() {
        let fenced = format!("```json\n{CLEAN}\n```");
        assert_eq!(extract_json(&fenced), CLEAN);
    }

    #[test]
    fn test_fence_without_language_tag() {
        let fenced = format!("```\n{CLEAN}\n```");
        assert_eq!(extract_json(&fenced), CLEAN);
    }

    #[test]
    fn test_leading_prose_is_truncated() {
        let wrapped = format!("Here is the JSON you asked for:\n{CLEAN}");
        assert_eq!(extract_json(&wrapped), CLEAN);
    }

    #[test]
    fn test_prose_and_fences_combined() {
        let wrapped = format!("Here is the JSON:\n```json\n{CLEAN}\n```\nLet me know!");
        assert_eq!(extract_json(&wrapped), CLEAN);
    }

    #[test]
    fn test_array_payloads_are_extracted() {
        let wrapped = "Sure thing:\n[1, 2, 3]\nanything else?";
        assert_eq!(extract_json(wrapped), "[1, 2, 3]");
    }

    /// Sanitization must be idempotent: a clean payload and the same payload
    /// wrapped in fences and prose parse to the same value.
    #[test]
    fn test_sanitization_is_idempotent() {
        let clean: Value = parse_sanitized(CLEAN).unwrap();
        let wrapped = format!("Of course! Here you go:\n```json\n{CLEAN}\n```");
        let unwrapped: Value = parse_sanitized(&wrapped).unwrap();
        let twice: Value = parse_sanitized(extract_json(&wrapped)).unwrap();
        assert_eq!(clean, unwrapped);
        assert_eq!(clean, twice);
    }

    #[test]
    fn test_non_json_text_fails_to_parse() {
        let result: Result<Value, _> = parse_sanitized("I cannot help with that request.");
        assert!(result.is_err());
    }

    #[test]
    fn test_unterminated_payload_fails_to_parse() {
        let result: Result<Value, _> = parse_sanitized(r#"{"role": "Engineer""#);
        assert!(result.is_err());
    }
}
